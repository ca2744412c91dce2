//! Text rendering of rounds for the simple CLI mode

use super::formatters::{available_letters, create_progress_bar, masked_word, wrong_letters};
use super::gallows::gallows;
use crate::core::{MAX_WRONG, Outcome, Round, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write the gallows, word and guess summary for a round
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_round<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    for row in gallows(round.wrong_count()) {
        writeln!(out, "   {}", row.bright_black())?;
    }
    writeln!(out)?;
    writeln!(out, "   Word:           {}", masked_word(round).bright_yellow().bold())?;
    writeln!(out, "   Wrong guesses:  {}", wrong_letters(round).red())?;

    let left = round.attempts_left();
    writeln!(
        out,
        "   Attempts left:  {} {left}",
        create_progress_bar(left, MAX_WRONG, MAX_WRONG * 2).green()
    )?;
    if round.outcome() == Outcome::Playing {
        writeln!(out, "   Available:      {}", available_letters(round).cyan())?;
    }
    Ok(())
}

/// Write the end-of-round banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let banner = match round.outcome() {
        Outcome::Playing => return Ok(()),
        Outcome::Won => "🎉 You won!".bright_green().bold(),
        Outcome::Lost => "☠  You lost!".bright_red().bold(),
    };
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {banner}")?;
    writeln!(out, " The word was: {}", round.target().text().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "Type 'new' to play again or 'quit' to exit.")
}

/// Write the session summary
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Session:".bright_cyan().bold())?;
    writeln!(out, "   Games played:  {}", stats.total_games)?;
    writeln!(out, "   Won:           {}", stats.games_won.to_string().green())?;
    writeln!(out, "   Lost:          {}", stats.games_lost.to_string().red())?;
    writeln!(out, "   Win rate:      {:.0}%", stats.win_rate())
}
