//! Interactive TUI interface
//!
//! Full-screen Hangman with a clickable on-screen keyboard.

pub mod app;
pub mod hit_map;
pub mod input;
pub mod rendering;
mod session;

pub use app::{App, Message, MessageStyle, run_tui};
pub use hit_map::{Control, HitMap};
pub use session::TerminalSession;
