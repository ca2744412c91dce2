//! Session statistics
//!
//! Kept in memory only; a new session starts from zero.

use super::Outcome;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
}

impl Statistics {
    /// Count a finished round; `Playing` is ignored
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Playing => return,
            Outcome::Won => self.games_won += 1,
            Outcome::Lost => self.games_lost += 1,
        }
        self.total_games += 1;
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_outcomes() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won);
        stats.record(Outcome::Lost);
        stats.record(Outcome::Won);
        stats.record(Outcome::Playing);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.games_lost, 1);
    }

    #[test]
    fn win_rate_handles_no_games() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn win_rate_percentage() {
        let stats = Statistics {
            total_games: 4,
            games_won: 3,
            games_lost: 1,
        };
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
