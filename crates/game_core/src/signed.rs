//! Adapter for rule sets that report game end as a signed numeric signal.
//!
//! One family of rule sets reports `0` while the game runs, `+1`/`-1` for a
//! win/loss relative to the queried seat, and a tiny nonzero marker for a
//! draw. Decoding happens once, here, so the match loop only ever sees the
//! canonical tri-state form.

use crate::error::MatchError;
use crate::types::{GameStatus, Outcome, Seat};

#[cfg(test)]
#[path = "signed_tests.rs"]
mod signed_tests;

/// Canonical draw marker for rule sets emitting the signed convention.
pub const DRAW_SIGNAL: f32 = 1e-4;

/// Largest magnitude still read as a draw marker.
pub const DRAW_SIGNAL_MAX: f32 = 1e-3;

/// Decode a signed "ended" signal computed relative to `reference`.
///
/// Any value other than `0`, `+/-1`, or a draw marker is a contract
/// violation, not a fourth outcome class.
pub fn decode_ended(value: f32, reference: Seat) -> Result<GameStatus, MatchError> {
    if value == 0.0 {
        Ok(GameStatus::InProgress)
    } else if value == 1.0 {
        Ok(GameStatus::Over(Outcome::WonBy(reference)))
    } else if value == -1.0 {
        Ok(GameStatus::Over(Outcome::WonBy(reference.other())))
    } else if value.abs() <= DRAW_SIGNAL_MAX {
        Ok(GameStatus::Over(Outcome::Draw))
    } else {
        Err(MatchError::ContractViolation(format!(
            "terminal signal {value} is not 0, +/-1, or a draw marker"
        )))
    }
}
