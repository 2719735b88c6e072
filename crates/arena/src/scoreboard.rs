//! Batch scoreboard keyed by stable policy identity.

use game_core::{Outcome, Seat};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "scoreboard_tests.rs"]
mod scoreboard_tests;

/// Running tally of a batch, keyed by which supplied policy won rather than
/// by seat, so seat alternation never corrupts the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
}

impl Scoreboard {
    /// Fold one finished match into the tally.
    ///
    /// `a_played_first` is the seat assignment the match ran under; a win
    /// by some seat credits whichever policy occupied it. Draws never flip.
    pub fn record(&mut self, outcome: Outcome, a_played_first: bool) {
        match outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::WonBy(seat) => {
                if (seat == Seat::First) == a_played_first {
                    self.wins_a += 1;
                } else {
                    self.wins_b += 1;
                }
            }
        }
    }

    pub fn total_matches(&self) -> u32 {
        self.wins_a + self.wins_b + self.draws
    }

    /// Score for policy A counting draws as half a point, `0.5` before any
    /// matches have been played.
    pub fn score_a(&self) -> f64 {
        let total = self.total_matches();
        if total == 0 {
            return 0.5;
        }
        (self.wins_a as f64 + 0.5 * self.draws as f64) / total as f64
    }

    /// Fraction of decisive matches won by policy A, `0.5` when there were
    /// none. This is the quantity an acceptance rule typically thresholds.
    pub fn win_ratio_a(&self) -> f64 {
        let decisive = self.wins_a + self.wins_b;
        if decisive == 0 {
            return 0.5;
        }
        self.wins_a as f64 / decisive as f64
    }
}
