//! Hangman target representation
//!
//! A Target stores the hidden word along with the set of letters that must be
//! guessed to solve it.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The hidden word of a round
///
/// Holds uppercase letters, ASCII punctuation and spaces. Only the letters
/// have to be guessed; everything else is always shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    letters: FxHashSet<Letter>,
}

/// Error type for invalid targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    Empty,
    NoLetters,
    InvalidCharacter(char),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Target must not be empty"),
            Self::NoLetters => write!(f, "Target must contain at least one letter"),
            Self::InvalidCharacter(c) => write!(f, "Target contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for TargetError {}

impl Target {
    /// Create a new Target from a string
    ///
    /// Lowercase letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `TargetError` if:
    /// - The text is empty
    /// - A character is not an ASCII letter, ASCII punctuation or a space
    /// - The text contains no letters at all
    ///
    /// # Examples
    /// ```
    /// use hangman_tui::core::Target;
    ///
    /// let target = Target::new("react").unwrap();
    /// assert_eq!(target.text(), "REACT");
    ///
    /// assert!(Target::new("").is_err());
    /// assert!(Target::new("r3act").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, TargetError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(TargetError::Empty);
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| !(c.is_ascii_uppercase() || c.is_ascii_punctuation() || c == ' '))
        {
            return Err(TargetError::InvalidCharacter(bad));
        }

        let letters: FxHashSet<Letter> = text.chars().filter_map(|c| Letter::new(c).ok()).collect();
        if letters.is_empty() {
            return Err(TargetError::NoLetters);
        }

        Ok(Self { text, letters })
    }

    /// Get the target as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The unique letters that must be guessed
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &FxHashSet<Letter> {
        &self.letters
    }

    /// Check if the target contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Letters in order of first appearance, without duplicates
    pub fn letters_in_order(&self) -> impl Iterator<Item = Letter> + '_ {
        let mut seen = FxHashSet::default();
        self.text
            .chars()
            .filter_map(|c| Letter::new(c).ok())
            .filter(move |&letter| seen.insert(letter))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
