//! Simple interactive CLI mode
//!
//! Text-based Hangman without the TUI. Reads one command per line.

use crate::core::{Letter, Picker, Round, Statistics};
use crate::output::{write_outcome, write_round, write_statistics};
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(Letter),
    NewGame,
    GiveUp,
    Quit,
}

/// Parse a line of input
///
/// A single letter (either case) is a guess; `new`, `giveup` and
/// `quit`/`exit` are commands. Anything else is `None`.
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if let Some(letter) = Letter::from_str_input(input) {
        return Some(Command::Guess(letter));
    }
    match input.to_ascii_lowercase().as_str() {
        "new" => Some(Command::NewGame),
        "giveup" | "give up" => Some(Command::GiveUp),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(words: &WordList, picker: &mut dyn Picker) -> io::Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(stdin.lock(), stdout.lock(), words, picker)
}

/// Run the simple mode over any input and output
///
/// Ends on `quit` or end of input and returns the session statistics.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    words: &WordList,
    picker: &mut dyn Picker,
) -> io::Result<Statistics> {
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║          Hangman - Simple Mode           ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time.")?;
    writeln!(out, "Commands: 'new' for a new word, 'giveup' to reveal, 'quit' to exit")?;

    let mut stats = Statistics::default();
    let mut round = Round::start(words, picker);
    debug!(target_word = %round.target(), "Simple mode round");
    write_round(&mut out, &round)?;

    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(
                out,
                "{}",
                "Enter a single letter, 'new', 'giveup' or 'quit'.".red()
            )?;
            continue;
        };

        let was_over = round.outcome().is_over();
        match command {
            Command::Quit => break,
            Command::NewGame => {
                round = Round::start(words, picker);
                debug!(target_word = %round.target(), "Simple mode round");
                writeln!(out, "\n🔄 New game started!")?;
                write_round(&mut out, &round)?;
                continue;
            }
            Command::GiveUp | Command::Guess(_) if was_over => {
                writeln!(out, "{}", "The round is over. Type 'new' or 'quit'.".yellow())?;
                continue;
            }
            Command::Guess(letter) if round.is_guessed(letter) => {
                writeln!(out, "{}", format!("You already guessed {letter}.").yellow())?;
                continue;
            }
            Command::Guess(letter) => round = round.guess(letter),
            Command::GiveUp => round = round.give_up(),
        }

        write_round(&mut out, &round)?;
        let outcome = round.outcome();
        if outcome.is_over() {
            stats.record(outcome);
            info!(?outcome, target_word = %round.target(), "Round finished");
            write_outcome(&mut out, &round)?;
        }
    }

    write_statistics(&mut out, &stats)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedPicker;

    /// Word list order: REACT, VITE, JAVASCRIPT, PROGRAMMING, HANGMAN, ...
    fn run(script: Vec<usize>, input: &str) -> (Statistics, String) {
        colored::control::set_override(false);
        let mut picker = ScriptedPicker::new(script);
        let mut out = Vec::new();
        let stats = run_simple_with(
            input.as_bytes(),
            &mut out,
            &WordList::embedded(),
            &mut picker,
        )
        .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn parse_letters_and_commands() {
        assert_eq!(parse_command("a\n"), Some(Command::Guess(letter('A'))));
        assert_eq!(parse_command(" Z "), Some(Command::Guess(letter('Z'))));
        assert_eq!(parse_command("new"), Some(Command::NewGame));
        assert_eq!(parse_command("GiveUp"), Some(Command::GiveUp));
        assert_eq!(parse_command("give up"), Some(Command::GiveUp));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(parse_command("ab"), None);
        assert_eq!(parse_command("3"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn winning_session() {
        let (stats, text) = run(vec![4], "h\na\nn\ng\nm\nquit\n");
        assert_eq!(stats.games_won, 1);
        assert!(text.contains("H A N G M A N"));
        assert!(text.contains("You won!"));
        assert!(text.contains("The word was: HANGMAN"));
    }

    #[test]
    fn losing_session_reveals_word() {
        let (stats, text) = run(vec![1], "q\nw\nx\ny\nz\nb\n");
        assert_eq!(stats.games_lost, 1);
        assert!(text.contains("You lost!"));
        assert!(text.contains("V I T E"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (stats, text) = run(vec![0], "e\n");
        assert_eq!(stats.total_games, 0);
        assert!(text.contains("_ E _ _ _"));
        assert!(text.contains("Games played:  0"));
    }

    #[test]
    fn invalid_and_repeated_input() {
        let (_, text) = run(vec![0], "12\nq\nq\n");
        assert!(text.contains("Enter a single letter"));
        assert!(text.contains("You already guessed Q."));
    }

    #[test]
    fn guesses_rejected_after_round_ends() {
        let (stats, text) = run(vec![1], "giveup\na\ngiveup\nquit\n");
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.total_games, 1);
        assert!(text.contains("The round is over."));
    }

    #[test]
    fn new_game_after_loss() {
        let (stats, text) = run(vec![1, 0], "q\nw\nx\ny\nz\nb\nnew\nr\nquit\n");
        assert_eq!(stats.games_lost, 1);
        assert!(text.contains("New game started!"));
        assert!(text.contains("R _ _ _ _"));
    }
}
