//! TUI application state and logic

use super::hit_map::{Control, HitMap};
use super::input::{KeyAction, control_from_mouse, map_key};
use super::rendering;
use super::session::TerminalSession;
use crate::core::{Letter, Outcome, Picker, Round, Statistics};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use ratatui::Terminal;
use tracing::{debug, error, info};

/// Messages kept in the messages panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub round: Round,
    pub words: WordList,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub hit_map: HitMap,
    picker: Box<dyn Picker>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(words: WordList, mut picker: Box<dyn Picker>) -> Self {
        let round = Round::start(&words, picker.as_mut());
        debug!(target_word = %round.target(), "Initial round");

        Self {
            round,
            words,
            messages: vec![
                Message {
                    text: "Welcome! Guess the word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter or click a key on the keyboard.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            hit_map: HitMap::default(),
            picker,
        }
    }

    /// `true` while the end-of-round overlay is shown
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.round.outcome().is_over()
    }

    pub fn new_game(&mut self) {
        self.round = Round::start(&self.words, self.picker.as_mut());
        debug!(target_word = %self.round.target(), "New round");
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn guess(&mut self, letter: Letter) {
        if !self.round.can_guess(letter) {
            return;
        }

        self.transition(|round| round.guess(letter));

        let hit = self.round.target().has_letter(letter);
        debug!(%letter, hit, wrong = self.round.wrong_count(), "Guess");

        if self.round.outcome() == Outcome::Playing {
            if hit {
                self.add_message(&format!("Yes! {letter} is in the word."), MessageStyle::Success);
            } else {
                self.add_message(
                    &format!(
                        "No {letter} in the word. {} attempts left.",
                        self.round.attempts_left()
                    ),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn give_up(&mut self) {
        if self.round.outcome().is_over() {
            return;
        }
        self.transition(Round::give_up);
    }

    /// Run whatever a clicked or shortcut control stands for
    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Key(letter) => self.guess(letter),
            Control::NewGame | Control::PlayAgain => self.new_game(),
            Control::GiveUp => self.give_up(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(&key, self.overlay_open()) {
            Some(KeyAction::Guess(letter)) => self.guess(letter),
            Some(KeyAction::Activate(control)) => self.activate(control),
            Some(KeyAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(control) = control_from_mouse(&mouse, &self.hit_map) {
            debug!(?control, "Click");
            self.activate(control);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Replace the round and react to it ending
    fn transition(&mut self, step: impl FnOnce(Round) -> Round) {
        let was_over = self.round.outcome().is_over();
        self.round = step(self.round.clone());

        let outcome = self.round.outcome();
        if !was_over && outcome.is_over() {
            self.stats.record(outcome);
            info!(?outcome, target_word = %self.round.target(), "Round finished");
            let word = self.round.target().text().to_string();
            match outcome {
                Outcome::Won => self.add_message(
                    &format!("🎉 You won! The word was {word}."),
                    MessageStyle::Success,
                ),
                Outcome::Lost => self.add_message(
                    &format!("☠ You lost! The word was {word}."),
                    MessageStyle::Error,
                ),
                Outcome::Playing => {}
            }
        }
    }
}

/// Run the TUI application
///
/// Terminal modes and mouse capture are held by a `TerminalSession` and
/// released when it drops, on success and on error alike.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    info!("Starting Hangman TUI");
    let mut session = TerminalSession::enter()?;

    let res = run_app(session.terminal_mut(), app);
    drop(session);

    match &res {
        Ok(stats) => info!(
            games = stats.total_games,
            won = stats.games_won,
            "Hangman TUI closed"
        ),
        Err(err) => error!(error = ?err, "Game loop error"),
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = rendering::ui(f, &app))?;
        app.hit_map = hits;

        app.handle_event(event::read()?);

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
