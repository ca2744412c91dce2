//! Terminal output formatting
//!
//! Display utilities shared by the TUI and the simple CLI mode.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{write_outcome, write_round, write_statistics};
