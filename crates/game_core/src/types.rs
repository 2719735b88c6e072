//! Seats and game outcomes.

use std::fmt;

/// One of the two alternating roles a policy occupies for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::First => write!(f, "first"),
            Seat::Second => write!(f, "second"),
        }
    }
}

/// End-of-game result. Exactly three logical values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    WonBy(Seat),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WonBy(seat) => write!(f, "won by the {seat} seat"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Terminal signal for a position: still running, or finished with one of
/// the three canonical outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over(Outcome),
}
