//! Swapper - turns a swipe into a two-cell exchange
//!
//! A swipe only becomes a swap when it clears the threshold, its origin
//! holds a piece and the neighbour in the swipe direction does too.
//! Anything else is ignored without error. The swapper keeps no intent of
//! its own; the turn state carries it until the swap animation settles.

use tracing::trace;

use crate::board::Board;
use crate::types::{Swipe, SwapIntent};

#[derive(Debug, Clone, Copy)]
pub struct Swapper {
    threshold: f32,
}

impl Swapper {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Validate `swipe` and return the swap it describes
    ///
    /// Returns `None` when the swipe is too short or the origin or target
    /// slot is out of bounds or empty. The board is not touched.
    pub fn attempt_swap(&self, board: &Board, swipe: Swipe) -> Option<SwapIntent> {
        let Some(dir) = swipe.direction(self.threshold) else {
            trace!(dx = swipe.dx, dy = swipe.dy, "swipe below threshold");
            return None;
        };
        let a = swipe.origin;
        let b = a.step(dir);
        if !board.contains(a) || !board.contains(b) {
            trace!(x = a.x, y = a.y, dir = dir.as_str(), "swipe leaves the board");
            return None;
        }
        if board.at(a).is_empty() || board.at(b).is_empty() {
            trace!(x = a.x, y = a.y, dir = dir.as_str(), "swipe against empty slot");
            return None;
        }
        Some(SwapIntent { a, b })
    }

    /// Exchange the two cells of `intent` on the board
    pub fn commit(&self, board: &mut Board, intent: SwapIntent) {
        board.swap(intent.a, intent.b);
        trace!(ax = intent.a.x, ay = intent.a.y, bx = intent.b.x, by = intent.b.y, "swap committed");
    }
}
