//! Gallows illustration
//!
//! Seven stages of ASCII art, one per wrong-guess count from 0 to
//! `MAX_WRONG`. Each stage adds one body part to the previous one.

use crate::core::MAX_WRONG;

/// Number of distinct stages
pub const STAGES: usize = MAX_WRONG + 1;

const FRAME: [&str; 7] = [
    "  +---+  ",
    "  |   |  ",
    "      |  ",
    "      |  ",
    "      |  ",
    "      |  ",
    "=========",
];

/// (row, column, glyph) in drawing order: head, body, arms, legs
const PARTS: [(usize, usize, char); MAX_WRONG] = [
    (2, 2, 'O'),
    (3, 2, '|'),
    (3, 1, '/'),
    (3, 3, '\\'),
    (4, 1, '/'),
    (4, 3, '\\'),
];

/// Render the gallows for a wrong-guess count
///
/// Counts above `MAX_WRONG` draw the full figure.
///
/// # Examples
/// ```
/// use hangman_tui::output::gallows::gallows;
///
/// let full = gallows(6);
/// assert_eq!(full[2].trim_end(), "  O   |");
/// ```
#[must_use]
pub fn gallows(wrong: usize) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = FRAME.iter().map(|row| row.chars().collect()).collect();

    for &(row, col, glyph) in PARTS.iter().take(wrong.min(MAX_WRONG)) {
        rows[row][col] = glyph;
    }

    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}
