//! Gravity - compacts each column toward the bottom row
//!
//! [`resolve`] only stages moves; the board is untouched until [`commit`]
//! runs once the view reports the fall animations have settled.

use crate::board::Board;
use crate::types::{PendingMove, Position, Slot};

/// Stage the moves that compact every column downward
///
/// Each column is scanned bottom to top with a read and a write cursor
/// (the same two-pointer walk a line clear uses). A piece with `k` empty
/// slots below it gets one move `y -> y - k`; pieces already resting keep
/// their slot and get no move. Relative order inside a column is preserved,
/// so no source is ever assigned two destinations.
pub fn resolve(board: &Board) -> Vec<PendingMove> {
    let mut moves = Vec::new();
    for x in 0..board.width() as i32 {
        let mut write_y = 0;
        for read_y in 0..board.height() as i32 {
            let Some(handle) = board.get(x, read_y).handle() else {
                continue;
            };
            if read_y != write_y {
                moves.push(PendingMove {
                    handle,
                    from: Position::new(x, read_y),
                    to: Position::new(x, write_y),
                });
            }
            write_y += 1;
        }
    }
    moves
}

/// Apply staged moves to the board
///
/// All sources are lifted before any destination is written, so the order
/// of `moves` does not matter.
pub fn commit(board: &mut Board, moves: &[PendingMove]) {
    let lifted: Vec<(Position, Slot)> = moves
        .iter()
        .map(|m| {
            let slot = board.take(m.from);
            debug_assert_eq!(slot.handle(), Some(m.handle), "stale fall move");
            (m.to, slot)
        })
        .collect();
    for (to, slot) in lifted {
        board.put(to, slot);
    }
}

/// Every empty slot, row-major from the bottom row
///
/// After [`commit`] every empty slot sits above its column's pieces.
pub fn empty_slots(board: &Board) -> Vec<Position> {
    board.positions().filter(|&p| board.at(p).is_empty()).collect()
}
