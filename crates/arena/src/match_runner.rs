//! Single-match driver.

use game_core::{Game, GameStatus, MatchError, Outcome, Policy, Seat};
use tracing::{debug, trace};

/// Drives one match between two seated policies to completion.
///
/// Borrowed out of an [`Arena`](crate::Arena) per match; holds nothing
/// beyond the rule set and the display hookup.
pub struct MatchRunner<'a, G: Game> {
    game: &'a G,
    display: Option<&'a dyn Fn(&G::Position)>,
    verbose: bool,
    max_plies: Option<u32>,
}

impl<'a, G: Game> MatchRunner<'a, G> {
    pub fn new(game: &'a G) -> Self {
        Self {
            game,
            display: None,
            verbose: false,
            max_plies: None,
        }
    }

    /// External display collaborator for verbose mode. Without one, verbose
    /// mode falls back to the rule set's own rendering on stdout.
    pub fn with_display(mut self, display: &'a dyn Fn(&G::Position)) -> Self {
        self.display = Some(display);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fail the match as a contract violation once this many plies have
    /// been played without reaching a terminal position.
    pub fn max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Play one match to completion.
    ///
    /// The returned outcome names the winning seat of this match:
    /// `WonBy(First)` means whoever sat first won. The caller remaps seats
    /// to policy identities.
    pub fn run(
        &self,
        first: &mut dyn Policy<G>,
        second: &mut dyn Policy<G>,
    ) -> Result<Outcome, MatchError> {
        let mut position = self.game.initial_position();
        let mut seat = Seat::First;
        let mut turn: u32 = 0;

        loop {
            if let GameStatus::Over(outcome) = self.game.status(&position, Seat::First)? {
                if self.verbose {
                    println!("game over: turn {turn}, {outcome}");
                    self.emit(&position);
                }
                debug!(turns = turn, %outcome, "match finished");
                return Ok(outcome);
            }

            turn += 1;
            if let Some(limit) = self.max_plies {
                if turn > limit {
                    return Err(MatchError::ContractViolation(format!(
                        "game still in progress after {limit} plies"
                    )));
                }
            }

            if self.verbose {
                println!("turn {turn}: {seat} seat to move");
                self.emit(&position);
            }

            let view = self.game.canonical_view(&position, seat);
            let policy: &mut dyn Policy<G> = match seat {
                Seat::First => &mut *first,
                Seat::Second => &mut *second,
            };
            let action = policy.choose_action(&view);
            trace!(turn, %seat, action = ?action, "action chosen");

            if !self.game.legal_actions(&view).contains(&action) {
                return Err(MatchError::IllegalAction {
                    seat,
                    action: format!("{action:?}"),
                });
            }

            let (next_position, next_seat) = self.game.apply_action(&position, seat, action)?;
            position = next_position;
            seat = next_seat;
        }
    }

    fn emit(&self, position: &G::Position) {
        match self.display {
            Some(display) => display(position),
            None => print!("{}", self.game.render(position)),
        }
    }
}
