//! The word list rounds draw their targets from

use super::WORDS;
use super::loader::targets_from_slice;
use crate::core::{Picker, Target};

/// A non-empty list of targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    targets: Vec<Target>,
}

/// Error returned when building a `WordList` from no targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWordList;

impl std::fmt::Display for EmptyWordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word list must contain at least one target")
    }
}

impl std::error::Error for EmptyWordList {}

impl WordList {
    /// Create a word list from targets
    ///
    /// # Errors
    /// Returns `EmptyWordList` if `targets` is empty.
    pub fn new(targets: Vec<Target>) -> Result<Self, EmptyWordList> {
        if targets.is_empty() {
            return Err(EmptyWordList);
        }
        Ok(Self { targets })
    }

    /// The word list compiled into the binary
    ///
    /// # Panics
    /// Will not panic - `build.rs` rejects an empty list and the embedded
    /// words are checked to be valid targets.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(targets_from_slice(WORDS)).expect("embedded word list is non-empty")
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Choose a target using the given picker
    ///
    /// Out-of-range picks wrap around the list.
    pub fn choose<P: Picker + ?Sized>(&self, picker: &mut P) -> &Target {
        let index = picker.pick(self.targets.len()) % self.targets.len();
        &self.targets[index]
    }
}
