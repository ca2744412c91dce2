//! Round state machine
//!
//! A `Round` is a plain value. Every transition consumes the old round and
//! returns the new one, so front ends own exactly one round at a time and
//! tests need no rendering harness.

use super::{Letter, Picker, Target};
use crate::wordlists::WordList;

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG: usize = 6;

/// Classification of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl Outcome {
    /// `true` once the round has reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// How one character of the target is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A letter not guessed yet
    Hidden,
    /// A guessed letter
    Revealed(Letter),
    /// Punctuation or space, always shown
    Literal(char),
}

impl Cell {
    /// Character shown for this cell
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '_',
            Self::Revealed(letter) => letter.as_char(),
            Self::Literal(c) => c,
        }
    }
}

/// One play-through from word selection to a terminal outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Target,
    guessed: Vec<Letter>,
    outcome: Outcome,
}

impl Round {
    /// Start a round over a known target
    #[must_use]
    pub const fn new(target: Target) -> Self {
        Self {
            target,
            guessed: Vec::new(),
            outcome: Outcome::Playing,
        }
    }

    /// Start a round over a target chosen from `words`
    ///
    /// # Examples
    /// ```
    /// use hangman_tui::core::{Outcome, Round, ScriptedPicker};
    /// use hangman_tui::wordlists::WordList;
    ///
    /// let mut picker = ScriptedPicker::new(vec![1]);
    /// let round = Round::start(&WordList::embedded(), &mut picker);
    /// assert_eq!(round.target().text(), "VITE");
    /// assert_eq!(round.outcome(), Outcome::Playing);
    /// ```
    #[must_use]
    pub fn start<P: Picker + ?Sized>(words: &WordList, picker: &mut P) -> Self {
        Self::new(words.choose(picker).clone())
    }

    /// Guess a letter
    ///
    /// Repeated letters and guesses after the round ended leave the round
    /// unchanged. Reaching the wrong-guess limit loses the round and reveals
    /// the whole target.
    ///
    /// # Examples
    /// ```
    /// use hangman_tui::core::{Letter, Outcome, Round, Target};
    ///
    /// let round = Round::new(Target::new("VITE").unwrap());
    /// let round = "VITE"
    ///     .chars()
    ///     .filter_map(Letter::from_input)
    ///     .fold(round, Round::guess);
    /// assert_eq!(round.outcome(), Outcome::Won);
    /// ```
    #[must_use]
    pub fn guess(mut self, letter: Letter) -> Self {
        if self.outcome.is_over() || self.is_guessed(letter) {
            return self;
        }

        self.guessed.push(letter);

        if self.wrong_count() >= MAX_WRONG {
            self.outcome = Outcome::Lost;
            return self.reveal();
        }

        if self.is_solved() {
            self.outcome = Outcome::Won;
        }

        self
    }

    /// Add every target letter to the guessed set without changing the outcome
    #[must_use]
    pub fn reveal(mut self) -> Self {
        for letter in self.target.letters_in_order() {
            if !self.guessed.contains(&letter) {
                self.guessed.push(letter);
            }
        }
        self
    }

    /// Reveal the target and declare the round won
    ///
    /// Giving up counts as a win. A round that is already over is returned
    /// unchanged.
    #[must_use]
    pub fn give_up(self) -> Self {
        if self.outcome.is_over() {
            return self;
        }
        let mut round = self.reveal();
        round.outcome = Outcome::Won;
        round
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Guessed letters in the order they were added
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters that are not in the target, in guess order
    pub fn wrong_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|&letter| !self.target.has_letter(letter))
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.wrong_letters().count()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_WRONG.saturating_sub(self.wrong_count())
    }

    /// Whether every letter of the target has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.target
            .letters()
            .iter()
            .all(|&letter| self.is_guessed(letter))
    }

    /// Whether guessing `letter` would change the round
    #[must_use]
    pub fn can_guess(&self, letter: Letter) -> bool {
        !self.outcome.is_over() && !self.is_guessed(letter)
    }

    /// Display cells, one per target character
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.target
            .text()
            .chars()
            .map(|c| match Letter::new(c) {
                Ok(letter) if self.is_guessed(letter) => Cell::Revealed(letter),
                Ok(_) => Cell::Hidden,
                Err(_) => Cell::Literal(c),
            })
            .collect()
    }
}
