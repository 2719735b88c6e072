//! Abstract game and policy contracts for the arena.
//!
//! This crate defines the minimal interface a turn-based rule set must
//! satisfy (`Game`) and the opaque callable the arena queries for moves
//! (`Policy`). It owns no match state and no game rules of its own.

pub mod error;
pub mod signed;
pub mod types;

pub use error::MatchError;
pub use types::*;

use std::fmt::Debug;

// =============================================================================
// Game trait — implemented by every rule set the arena can arbitrate
// =============================================================================

/// The contract a concrete turn-based game must provide.
///
/// The arena never inspects positions; it only threads them through these
/// operations. A position carries no "player to move" tag; the current
/// seat travels alongside it through the match loop.
pub trait Game {
    /// Opaque snapshot of game state. Cloned when a policy wants lookahead.
    type Position: Clone;
    /// A single move. `Debug` so illegal actions can be reported.
    type Action: Copy + PartialEq + Debug;

    /// Starting state of a fresh game. Any size parameters are fixed when
    /// the rule-set value is constructed.
    fn initial_position(&self) -> Self::Position;

    /// The position rewritten from `seat`'s perspective, so a policy can
    /// always reason as if it occupied the first seat. Pure: equal inputs
    /// give equal results.
    fn canonical_view(&self, position: &Self::Position, seat: Seat) -> Self::Position;

    /// All actions valid in the given (canonical) position. Actions outside
    /// this set must never reach `apply_action`.
    fn legal_actions(&self, view: &Self::Position) -> Vec<Self::Action>;

    /// Advance the game one ply. Returns the next position and the seat to
    /// move next. Rejects actions outside the legal set; the arena checks
    /// membership first, so an error here means a broken rule set.
    fn apply_action(
        &self,
        position: &Self::Position,
        seat: Seat,
        action: Self::Action,
    ) -> Result<(Self::Position, Seat), MatchError>;

    /// Whether the game has ended and, if so, the result.
    ///
    /// `reference` orients rule sets that can only answer from one seat's
    /// point of view (see [`signed::decode_ended`]); the returned outcome
    /// always names the winning seat directly. Fallible so convention
    /// adapters can reject terminal signals outside the three canonical
    /// outcomes instead of inventing a fourth.
    fn status(&self, position: &Self::Position, reference: Seat) -> Result<GameStatus, MatchError>;

    /// Human-readable rendering for verbose match display.
    fn render(&self, position: &Self::Position) -> String;
}

/// An opaque player: canonical view in, action out.
///
/// Anything from a tree search to a stdin prompt fits behind this. Closures
/// implement it directly, so quick experiments need no wrapper type.
pub trait Policy<G: Game> {
    fn choose_action(&mut self, view: &G::Position) -> G::Action;
}

impl<G: Game, F: FnMut(&G::Position) -> G::Action> Policy<G> for F {
    fn choose_action(&mut self, view: &G::Position) -> G::Action {
        self(view)
    }
}
