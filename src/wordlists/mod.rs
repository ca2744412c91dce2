//! Word list for Hangman rounds
//!
//! Provides the fixed word list compiled into the binary for zero-cost access.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::{EmptyWordList, WordList};
