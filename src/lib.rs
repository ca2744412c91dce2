//! Hangman
//!
//! Terminal Hangman: guess the hidden word one letter at a time before the
//! gallows is complete. Play in a full-screen TUI with mouse and keyboard, or
//! in a simple line-based mode.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_tui::core::{Letter, Outcome, Round, Target};
//!
//! let round = Round::new(Target::new("vite").unwrap());
//! let round = round.guess(Letter::new('Q').unwrap());
//! assert_eq!(round.attempts_left(), 5);
//!
//! let round = round.give_up();
//! assert_eq!(round.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
