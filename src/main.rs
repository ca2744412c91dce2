//! Hangman - CLI
//!
//! Hangman with TUI and simple CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_tui::{
    commands::run_simple,
    core::{Picker, RandomPicker, Statistics},
    interactive::{App, run_tui},
    wordlists::WordList,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// File that receives log output (level set with RUST_LOG)
    #[arg(short, long, global = true, default_value = "hangman.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - mouse and keyboard)
    Play,

    /// Simple CLI mode (one command per line, no TUI)
    Simple,
}

/// Send tracing output to a file so it never draws over the TUI
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn make_picker(seed: Option<u64>) -> Box<dyn Picker> {
    match seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::from_os_rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let words = WordList::embedded();
    info!(words = words.len(), seed = ?cli.seed, "Starting Hangman");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let picker = make_picker(cli.seed);

    let stats = match command {
        Commands::Play => run_play_command(words, picker)?,
        Commands::Simple => run_simple_command(&words, picker)?,
    };

    info!(
        games = stats.total_games,
        won = stats.games_won,
        lost = stats.games_lost,
        "Session finished"
    );
    Ok(())
}

fn run_play_command(words: WordList, picker: Box<dyn Picker>) -> Result<Statistics> {
    let app = App::new(words, picker);
    run_tui(app)
}

fn run_simple_command(words: &WordList, mut picker: Box<dyn Picker>) -> Result<Statistics> {
    run_simple(words, picker.as_mut()).context("Simple mode failed")
}
