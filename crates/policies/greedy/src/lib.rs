//! Greedy baseline policy.
//!
//! One ply of lookahead on the canonical view: if some action ends the game
//! in an immediate win it is taken, otherwise the first legal action is.
//! Fully deterministic, which makes it the anchor for reproducibility
//! checks.

use game_core::{Game, GameStatus, Outcome, Policy, Seat};


/// Takes an immediately winning action when one exists, else the first
/// legal one.
#[derive(Debug, Clone, Copy)]
pub struct GreedyPolicy<'g, G> {
    game: &'g G,
}

impl<'g, G: Game> GreedyPolicy<'g, G> {
    pub fn new(game: &'g G) -> Self {
        Self { game }
    }

    fn wins_immediately(&self, view: &G::Position, action: G::Action) -> bool {
        // In a canonical view this policy occupies the first seat.
        let Ok((next, _)) = self.game.apply_action(view, Seat::First, action) else {
            return false;
        };
        matches!(
            self.game.status(&next, Seat::First),
            Ok(GameStatus::Over(Outcome::WonBy(Seat::First)))
        )
    }
}

impl<'g, G: Game> Policy<G> for GreedyPolicy<'g, G> {
    fn choose_action(&mut self, view: &G::Position) -> G::Action {
        let actions = self.game.legal_actions(view);
        let fallback = *actions
            .first()
            .expect("greedy policy asked to move in a finished game");
        actions
            .into_iter()
            .find(|&action| self.wins_immediately(view, action))
            .unwrap_or(fallback)
    }
}
