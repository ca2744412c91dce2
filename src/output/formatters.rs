//! Formatting utilities for round state

use crate::core::{Letter, Round};

/// Placeholder shown when no wrong guesses have been made
pub const NO_WRONG_GUESSES: &str = "—";

/// Format the target as space-separated cells, e.g. `_ A _ _ _`
#[must_use]
pub fn masked_word(round: &Round) -> String {
    let symbols: Vec<String> = round.cells().iter().map(|c| c.symbol().to_string()).collect();
    symbols.join(" ")
}

/// Format wrong guesses as `Q, W, X`, or the placeholder when there are none
#[must_use]
pub fn wrong_letters(round: &Round) -> String {
    let letters: Vec<String> = round.wrong_letters().map(|l| l.to_string()).collect();
    if letters.is_empty() {
        NO_WRONG_GUESSES.to_string()
    } else {
        letters.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters of the alphabet not yet guessed in this round
#[must_use]
pub fn available_letters(round: &Round) -> String {
    Letter::ALPHABET
        .iter()
        .filter(|&&letter| !round.is_guessed(letter))
        .map(|letter| letter.as_char())
        .collect()
}
