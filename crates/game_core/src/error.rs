//! Fatal match-level errors.

use thiserror::Error;

use crate::types::Seat;

/// Unrecoverable faults raised while driving a match.
///
/// Both variants mean a policy or rule set broke its contract; the batch
/// they occur in is abandoned rather than patched around.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A policy proposed an action outside the legal set for the current
    /// position. Never retried or silently corrected.
    #[error("{seat} seat policy proposed illegal action {action}")]
    IllegalAction { seat: Seat, action: String },

    /// A rule set produced a terminal signal outside the three canonical
    /// outcomes, or otherwise failed to behave like a game.
    #[error("game contract violation: {0}")]
    ContractViolation(String),
}
