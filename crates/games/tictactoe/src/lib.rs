//! Tictactoe rule set.
//!
//! The smallest real game the arena can arbitrate: a 3x3 board with `+1`
//! marks for the first seat and `-1` for the second. Game end is reported
//! with the tri-state status directly, no convention adapter involved.

use game_core::{Game, GameStatus, MatchError, Outcome, Seat};


const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Board snapshot. Cells hold `+1` (first seat), `-1` (second seat) or `0`.
/// Orientation is absolute; whose turn it is travels with the match loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub cells: [i8; 9],
}

/// 3x3 tictactoe.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn new() -> Self {
        Self
    }
}

fn mark(seat: Seat) -> i8 {
    match seat {
        Seat::First => 1,
        Seat::Second => -1,
    }
}

impl Game for TicTacToe {
    type Position = Board;
    type Action = usize;

    fn initial_position(&self) -> Board {
        Board { cells: [0; 9] }
    }

    fn canonical_view(&self, position: &Board, seat: Seat) -> Board {
        match seat {
            Seat::First => *position,
            Seat::Second => {
                let mut cells = position.cells;
                for cell in &mut cells {
                    *cell = -*cell;
                }
                Board { cells }
            }
        }
    }

    fn legal_actions(&self, view: &Board) -> Vec<usize> {
        (0..9).filter(|&i| view.cells[i] == 0).collect()
    }

    fn apply_action(
        &self,
        position: &Board,
        seat: Seat,
        action: usize,
    ) -> Result<(Board, Seat), MatchError> {
        if action >= 9 || position.cells[action] != 0 {
            return Err(MatchError::IllegalAction {
                seat,
                action: format!("{action}"),
            });
        }
        let mut next = *position;
        next.cells[action] = mark(seat);
        Ok((next, seat.other()))
    }

    fn status(&self, position: &Board, _reference: Seat) -> Result<GameStatus, MatchError> {
        for line in LINES {
            let sum: i8 = line.iter().map(|&i| position.cells[i]).sum();
            if sum == 3 {
                return Ok(GameStatus::Over(Outcome::WonBy(Seat::First)));
            }
            if sum == -3 {
                return Ok(GameStatus::Over(Outcome::WonBy(Seat::Second)));
            }
        }
        if position.cells.iter().all(|&cell| cell != 0) {
            return Ok(GameStatus::Over(Outcome::Draw));
        }
        Ok(GameStatus::InProgress)
    }

    fn render(&self, position: &Board) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                out.push(match position.cells[row * 3 + col] {
                    1 => 'X',
                    -1 => 'O',
                    _ => '.',
                });
                if col < 2 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}
