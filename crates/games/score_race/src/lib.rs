//! Fixed-ply banking duel.
//!
//! Each turn the mover banks one to three points; once the ply budget runs
//! out the higher bank wins and equal banks draw. The rules internally
//! report game end as a signed numeric signal, which `status` feeds through
//! the convention decoder, the same shape a ported score-based rule set
//! would take.
//!
//! With an odd ply budget the first seat moves once more than the second,
//! so two equally-greedy policies produce a deterministic win for whoever
//! sits first. The batch tests lean on that.

use game_core::signed::{self, DRAW_SIGNAL};
use game_core::{Game, GameStatus, MatchError, Seat};

#[cfg(test)]
mod lib_tests;

/// Snapshot of the duel: remaining plies and both banks, in absolute
/// orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Race {
    pub plies_left: u8,
    pub first_points: u16,
    pub second_points: u16,
}

/// Banking duel rules; the ply budget is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRace {
    plies: u8,
}

impl ScoreRace {
    pub fn new(plies: u8) -> Self {
        Self { plies }
    }

    /// Raw end-of-game signal in the signed convention, relative to
    /// `reference`.
    fn ended_signal(&self, position: &Race, reference: Seat) -> f32 {
        if position.plies_left > 0 {
            return 0.0;
        }
        let (own, other) = match reference {
            Seat::First => (position.first_points, position.second_points),
            Seat::Second => (position.second_points, position.first_points),
        };
        if own > other {
            1.0
        } else if own < other {
            -1.0
        } else {
            DRAW_SIGNAL
        }
    }
}

impl Default for ScoreRace {
    fn default() -> Self {
        Self::new(9)
    }
}

impl Game for ScoreRace {
    type Position = Race;
    type Action = usize;

    fn initial_position(&self) -> Race {
        Race {
            plies_left: self.plies,
            first_points: 0,
            second_points: 0,
        }
    }

    fn canonical_view(&self, position: &Race, seat: Seat) -> Race {
        match seat {
            Seat::First => *position,
            Seat::Second => Race {
                plies_left: position.plies_left,
                first_points: position.second_points,
                second_points: position.first_points,
            },
        }
    }

    fn legal_actions(&self, view: &Race) -> Vec<usize> {
        if view.plies_left == 0 {
            Vec::new()
        } else {
            vec![1, 2, 3]
        }
    }

    fn apply_action(
        &self,
        position: &Race,
        seat: Seat,
        action: usize,
    ) -> Result<(Race, Seat), MatchError> {
        if position.plies_left == 0 || !(1..=3).contains(&action) {
            return Err(MatchError::IllegalAction {
                seat,
                action: format!("{action}"),
            });
        }
        let mut next = *position;
        next.plies_left -= 1;
        match seat {
            Seat::First => next.first_points += action as u16,
            Seat::Second => next.second_points += action as u16,
        }
        Ok((next, seat.other()))
    }

    fn status(&self, position: &Race, reference: Seat) -> Result<GameStatus, MatchError> {
        signed::decode_ended(self.ended_signal(position, reference), reference)
    }

    fn render(&self, position: &Race) -> String {
        format!(
            "plies left {:>2} | first {:>3} | second {:>3}\n",
            position.plies_left, position.first_points, position.second_points
        )
    }
}
