//! Core domain types
//!
//! Letters, targets and the round state machine.

mod letter;
mod picker;
mod round;
mod stats;
mod target;

pub use letter::{Letter, LetterError};
pub use picker::{Picker, RandomPicker, ScriptedPicker};
pub use round::{Cell, MAX_WRONG, Outcome, Round};
pub use stats::Statistics;
pub use target::{Target, TargetError};
