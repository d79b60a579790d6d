//! Swap interpretation tests

use match3::core::{Board, Swapper};
use match3::types::{Direction, Position, Swipe, SWIPE_THRESHOLD};

fn full_board() -> Board {
    Board::from_rows(&[
        vec![Some(0), Some(1), Some(2)],
        vec![Some(1), Some(2), Some(0)],
        vec![Some(2), Some(0), Some(1)],
    ])
}

#[test]
fn test_threshold_is_exclusive() {
    let board = full_board();
    let s = Swapper::new(SWIPE_THRESHOLD);
    let at = Position::new(1, 1);

    assert!(s.attempt_swap(&board, Swipe::new(at, 0.5, 0.0)).is_none());
    assert!(s.attempt_swap(&board, Swipe::new(at, 0.51, 0.0)).is_some());
}

#[test]
fn test_dominant_axis_and_ties() {
    let board = full_board();
    let s = Swapper::new(SWIPE_THRESHOLD);
    let at = Position::new(1, 1);

    let cases = [
        ((1.0, 0.3), Direction::Right),
        ((-1.0, 0.3), Direction::Left),
        ((0.3, 1.0), Direction::Up),
        ((0.3, -1.0), Direction::Down),
        // equal magnitudes go horizontal
        ((0.8, 0.8), Direction::Right),
        ((-0.8, -0.8), Direction::Left),
    ];
    for ((dx, dy), dir) in cases {
        let intent = s.attempt_swap(&board, Swipe::new(at, dx, dy)).unwrap();
        assert_eq!(intent.b, at.step(dir), "swipe ({}, {})", dx, dy);
    }
}

#[test]
fn test_commit_swaps_pieces_once() {
    let mut board = full_board();
    let s = Swapper::new(SWIPE_THRESHOLD);
    let a = board.get(0, 0);
    let b = board.get(0, 1);

    let intent = s.attempt_swap(&board, Swipe::new(Position::new(0, 0), 0.0, 1.0)).unwrap();
    assert_eq!(board.get(0, 0), a, "attempt must not touch the board");

    s.commit(&mut board, intent);
    assert_eq!(board.get(0, 0), b);
    assert_eq!(board.get(0, 1), a);

    // committing the same intent again swaps back
    s.commit(&mut board, intent);
    assert_eq!(board.get(0, 0), a);
}
