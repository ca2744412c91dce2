//! Command implementations

pub mod simple;

pub use simple::{Command, parse_command, run_simple, run_simple_with};
