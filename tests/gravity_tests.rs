//! Gravity tests - staged compaction and commit

use match3::core::{gravity, Board};
use match3::types::Position;

#[test]
fn test_full_board_has_no_moves() {
    let b = Board::from_rows(&[vec![Some(0), Some(1)], vec![Some(2), Some(3)]]);
    assert!(gravity::resolve(&b).is_empty());
}

#[test]
fn test_resolve_does_not_mutate() {
    let b = Board::from_rows(&[vec![Some(0)], vec![None], vec![Some(1)], vec![None]]);
    let before = b.clone();
    let moves = gravity::resolve(&b);
    assert_eq!(moves.len(), 2);
    assert_eq!(b, before);
}

#[test]
fn test_each_piece_drops_by_empties_below() {
    // column, top first: A . B . . C .
    let b = Board::from_rows(&[
        vec![Some(0)],
        vec![None],
        vec![Some(1)],
        vec![None],
        vec![None],
        vec![Some(2)],
        vec![None],
    ]);
    let moves = gravity::resolve(&b);
    let drops: Vec<(i32, i32)> = moves.iter().map(|m| (m.from.y, m.to.y)).collect();
    // C at y=1 drops 1, B at y=4 drops 3, A at y=6 drops 4
    assert_eq!(drops, vec![(1, 0), (4, 1), (6, 2)]);
}

#[test]
fn test_commit_then_empties_are_on_top() {
    let mut b = Board::from_rows(&[
        vec![Some(0), None, Some(1)],
        vec![None, Some(2), None],
        vec![Some(3), None, None],
    ]);
    let moves = gravity::resolve(&b);
    gravity::commit(&mut b, &moves);

    assert!(gravity::resolve(&b).is_empty());
    let empties = gravity::empty_slots(&b);
    assert_eq!(empties.len(), 5);
    for pos in empties {
        for y in pos.y..b.height() as i32 {
            assert!(b.get(pos.x, y).is_empty(), "piece above empty slot at {:?}", pos);
        }
    }
    assert_eq!(b.at(Position::new(0, 0)).kind().map(|k| k.index()), Some(3));
    assert_eq!(b.at(Position::new(0, 1)).kind().map(|k| k.index()), Some(0));
    assert_eq!(b.at(Position::new(2, 0)).kind().map(|k| k.index()), Some(1));
}
