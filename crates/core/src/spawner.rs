//! Spawner - creates pieces from the seeded palette
//!
//! The spawner owns the PRNG and the handle counter. It never touches the
//! board: callers place the returned piece themselves.

use tracing::{trace, warn};

use crate::rng::PieceRng;
use crate::types::{PendingMove, Piece, PieceHandle, PieceType, Position};

#[derive(Debug, Clone)]
pub struct Spawner {
    palette_size: u8,
    rng: PieceRng,
    /// Monotonic id for created pieces
    next_handle: u32,
}

impl Spawner {
    /// `palette_size` must be non-zero (checked by config validation)
    pub fn new(palette_size: u8, seed: u64) -> Self {
        debug_assert!(palette_size > 0);
        Self {
            palette_size,
            rng: PieceRng::new(seed),
            next_handle: 0,
        }
    }

    /// Reinitialize the PRNG
    pub fn set_seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of pieces created so far
    pub fn created(&self) -> u32 {
        self.next_handle
    }

    fn issue(&mut self, kind: PieceType) -> Piece {
        let handle = PieceHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        Piece::new(kind, handle)
    }

    /// Create a piece of uniformly random type for `at`
    pub fn create_at(&mut self, at: Position) -> Piece {
        let kind = PieceType(self.rng.next_index(self.palette_size));
        let piece = self.issue(kind);
        trace!(x = at.x, y = at.y, kind = kind.0, "spawn");
        piece
    }

    /// Create a random piece whose type differs from `excluded`
    ///
    /// A single-type palette has no alternative and returns that type.
    pub fn create_excluding(&mut self, at: Position, excluded: PieceType) -> Piece {
        let kind = PieceType(self.rng.next_index_excluding(self.palette_size, excluded.0));
        let piece = self.issue(kind);
        trace!(x = at.x, y = at.y, kind = kind.0, "respawn");
        piece
    }

    /// Create a piece of an explicit palette index
    ///
    /// Logs and returns `None` when `index` is outside the palette.
    pub fn create_with_type(&mut self, at: Position, index: i64) -> Option<Piece> {
        if index < 0 || index >= i64::from(self.palette_size) {
            warn!(
                x = at.x,
                y = at.y,
                index,
                palette = self.palette_size,
                "piece type is out of range"
            );
            return None;
        }
        Some(self.issue(PieceType(index as u8)))
    }

    /// Create a random piece for `at` and stage its drop from `(at.x, start_y)`
    pub fn create_and_stage_drop(&mut self, at: Position, start_y: i32) -> (Piece, PendingMove) {
        let piece = self.create_at(at);
        let drop = PendingMove {
            handle: piece.handle,
            from: Position::new(at.x, start_y),
            to: at,
        };
        (piece, drop)
    }
}
