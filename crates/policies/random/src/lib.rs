//! Random-action baseline policy.
//!
//! Picks uniformly from the legal actions of the rule set it was built
//! against. Useful for:
//! - Smoke-testing a new rule set before anything smarter exists
//! - Baseline comparisons (any real policy should easily beat this)

use game_core::{Game, Policy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// Plays a random legal action.
#[derive(Debug, Clone)]
pub struct RandomPolicy<'g, G> {
    game: &'g G,
    rng: StdRng,
}

impl<'g, G: Game> RandomPolicy<'g, G> {
    /// Entropy-seeded policy.
    pub fn new(game: &'g G) -> Self {
        Self {
            game,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible policy for tests and repeatable evaluations.
    pub fn seeded(game: &'g G, seed: u64) -> Self {
        Self {
            game,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<'g, G: Game> Policy<G> for RandomPolicy<'g, G> {
    fn choose_action(&mut self, view: &G::Position) -> G::Action {
        let actions = self.game.legal_actions(view);
        *actions
            .choose(&mut self.rng)
            .expect("random policy asked to move in a finished game")
    }
}
