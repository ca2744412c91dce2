//! Target selection
//!
//! Rounds pick their target through the `Picker` trait so that tests can
//! replace randomness with a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of "pick one of N" choices
pub trait Picker {
    /// Return an index in `0..len`
    ///
    /// `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniformly random picker
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Seed from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of picks for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Picker that cycles through a fixed list of indices
///
/// Each index is reduced modulo `len`. An empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    next: usize,
}

impl ScriptedPicker {
    #[must_use]
    pub const fn new(script: Vec<usize>) -> Self {
        Self { script, next: 0 }
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.next % self.script.len()];
        self.next += 1;
        index % len
    }
}
