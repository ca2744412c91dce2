//! Word list conversion utilities

use crate::core::Target;

/// Convert an embedded string slice to `Target` values
///
/// Entries that are not valid targets are skipped.
///
/// # Examples
/// ```
/// use hangman_tui::wordlists::loader::targets_from_slice;
/// use hangman_tui::wordlists::WORDS;
///
/// let targets = targets_from_slice(WORDS);
/// assert_eq!(targets.len(), WORDS.len());
/// ```
#[must_use]
pub fn targets_from_slice(slice: &[&str]) -> Vec<Target> {
    slice.iter().filter_map(|&s| Target::new(s).ok()).collect()
}
