use game_core::Outcome;

use super::*;

#[test]
fn initial_position_carries_the_ply_budget() {
    let game = ScoreRace::new(5);
    let pos = game.initial_position();

    assert_eq!(pos.plies_left, 5);
    assert_eq!(game.status(&pos, Seat::First).unwrap(), GameStatus::InProgress);
}

#[test]
fn banks_accumulate_for_the_mover_and_seats_alternate() {
    let game = ScoreRace::new(3);
    let pos = game.initial_position();

    let (pos, seat) = game.apply_action(&pos, Seat::First, 3).unwrap();
    assert_eq!((pos.first_points, pos.second_points), (3, 0));
    assert_eq!(seat, Seat::Second);

    let (pos, seat) = game.apply_action(&pos, Seat::Second, 2).unwrap();
    assert_eq!((pos.first_points, pos.second_points), (3, 2));
    assert_eq!(seat, Seat::First);
}

#[test]
fn higher_bank_wins_once_plies_run_out() {
    let game = ScoreRace::new(2);
    let pos = Race {
        plies_left: 0,
        first_points: 5,
        second_points: 3,
    };

    // The winning seat is absolute, whatever reference the caller uses.
    assert_eq!(
        game.status(&pos, Seat::First).unwrap(),
        GameStatus::Over(Outcome::WonBy(Seat::First))
    );
    assert_eq!(
        game.status(&pos, Seat::Second).unwrap(),
        GameStatus::Over(Outcome::WonBy(Seat::First))
    );
}

#[test]
fn equal_banks_draw() {
    let game = ScoreRace::new(2);
    let pos = Race {
        plies_left: 0,
        first_points: 4,
        second_points: 4,
    };

    assert_eq!(game.status(&pos, Seat::First).unwrap(), GameStatus::Over(Outcome::Draw));
}

#[test]
fn canonical_view_swaps_banks_for_the_second_seat() {
    let game = ScoreRace::new(4);
    let pos = Race {
        plies_left: 2,
        first_points: 6,
        second_points: 1,
    };

    let view = game.canonical_view(&pos, Seat::Second);
    assert_eq!((view.first_points, view.second_points), (1, 6));
    assert_eq!(game.canonical_view(&pos, Seat::First), pos);
}

#[test]
fn out_of_range_takes_are_rejected() {
    let game = ScoreRace::new(3);
    let pos = game.initial_position();

    for action in [0usize, 4, 100] {
        let result = game.apply_action(&pos, Seat::First, action);
        assert!(matches!(result, Err(MatchError::IllegalAction { .. })));
    }
}

#[test]
fn no_actions_remain_after_the_budget_is_spent() {
    let game = ScoreRace::new(1);
    let pos = game.initial_position();

    let (pos, _) = game.apply_action(&pos, Seat::First, 1).unwrap();
    assert!(game.legal_actions(&pos).is_empty());
}
