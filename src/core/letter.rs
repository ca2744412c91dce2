//! Guessable letters
//!
//! A `Letter` is always a single uppercase ASCII letter, so the round engine
//! never sees malformed guesses.

use std::fmt;

/// A single uppercase letter `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NotAscii(char),
    NotUppercase(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAscii(c) => write!(f, "'{c}' is not an ASCII letter"),
            Self::NotUppercase(c) => write!(f, "'{c}' is not an uppercase letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Every letter in alphabetical order
    pub const ALPHABET: [Self; 26] = {
        let mut letters = [Self(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Self(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    /// Create a letter from an uppercase character
    ///
    /// # Errors
    /// Returns `LetterError` if `c` is not in `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman_tui::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('q').is_err());
    /// assert!(Letter::new('!').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if !c.is_ascii_alphabetic() {
            return Err(LetterError::NotAscii(c));
        }
        if !c.is_ascii_uppercase() {
            return Err(LetterError::NotUppercase(c));
        }
        Ok(Self(c as u8))
    }

    /// Normalize user input to a letter
    ///
    /// Accepts either case; returns `None` for anything else.
    #[must_use]
    pub fn from_input(c: char) -> Option<Self> {
        Self::new(c.to_ascii_uppercase()).ok()
    }

    /// Parse a whole input string that must be exactly one letter
    #[must_use]
    pub fn from_str_input(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_input(c),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_creation_valid() {
        let letter = Letter::new('A').unwrap();
        assert_eq!(letter.as_char(), 'A');
        assert_eq!(letter.index(), 0);
        assert_eq!(Letter::new('Z').unwrap().index(), 25);
    }

    #[test]
    fn letter_creation_rejects_lowercase() {
        assert_eq!(Letter::new('a'), Err(LetterError::NotUppercase('a')));
    }

    #[test]
    fn letter_creation_rejects_non_letters() {
        assert_eq!(Letter::new('1'), Err(LetterError::NotAscii('1')));
        assert_eq!(Letter::new('-'), Err(LetterError::NotAscii('-')));
        assert_eq!(Letter::new('É'), Err(LetterError::NotAscii('É')));
    }

    #[test]
    fn from_input_normalizes_case() {
        assert_eq!(Letter::from_input('k'), Letter::new('K').ok());
        assert_eq!(Letter::from_input('K'), Letter::new('K').ok());
        assert_eq!(Letter::from_input(' '), None);
        assert_eq!(Letter::from_input('é'), None);
    }

    #[test]
    fn from_str_input_requires_single_letter() {
        assert_eq!(Letter::from_str_input("e"), Letter::new('E').ok());
        assert_eq!(Letter::from_str_input(""), None);
        assert_eq!(Letter::from_str_input("ab"), None);
        assert_eq!(Letter::from_str_input("7"), None);
    }

    #[test]
    fn alphabet_is_ordered() {
        let text: String = Letter::ALPHABET.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn display_shows_char() {
        assert_eq!(Letter::new('M').unwrap().to_string(), "M");
    }
}
