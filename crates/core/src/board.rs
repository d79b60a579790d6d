//! Board module - owns the grid of piece slots
//!
//! The board is a W x H grid where each slot is empty or holds a piece.
//! Storage is a flat row-major vector (`y * width + x`).
//! Coordinates are bottom-up: `y = 0` is the bottom row.
//!
//! Callers derive coordinates from the board dimensions, so indexing outside
//! the grid is a programming error and panics; use [`Board::in_bounds`] to
//! pre-validate anything computed from user input.

use crate::types::{Piece, PieceHandle, PieceType, Position, Slot};

/// The match-3 grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of slots, row-major order (y * width + x)
    slots: Vec<Slot>,
}

impl Board {
    /// Create an empty board
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; configuration validation rejects
    /// those before a board is ever built.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            slots: vec![Slot::Empty; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "board access out of bounds: ({}, {}) on {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * self.width + (x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether (x, y) lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.x, pos.y)
    }

    /// Get the slot at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Slot {
        self.slots[self.index(x, y)]
    }

    /// Set the slot at (x, y)
    pub fn set(&mut self, x: i32, y: i32, slot: Slot) {
        let idx = self.index(x, y);
        self.slots[idx] = slot;
    }

    pub fn at(&self, pos: Position) -> Slot {
        self.get(pos.x, pos.y)
    }

    pub fn put(&mut self, pos: Position, slot: Slot) {
        self.set(pos.x, pos.y, slot);
    }

    /// Place a piece at `pos`
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.put(pos, Slot::Occupied(piece));
    }

    /// Empty the slot at `pos`, returning what was there
    pub fn take(&mut self, pos: Position) -> Slot {
        let idx = self.index(pos.x, pos.y);
        std::mem::take(&mut self.slots[idx])
    }

    /// Exchange the contents of two slots
    pub fn swap(&mut self, a: Position, b: Position) {
        let ia = self.index(a.x, a.y);
        let ib = self.index(b.x, b.y);
        self.slots.swap(ia, ib);
    }

    /// Check whether every slot holds a piece
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_occupied)
    }

    /// Number of empty slots
    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_empty()).count()
    }

    /// All positions in row-major order, bottom row first
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let w = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..w).map(move |x| Position::new(x, y)))
    }

    /// Handles of every piece currently on the board, row-major
    pub fn handles(&self) -> impl Iterator<Item = PieceHandle> + '_ {
        self.slots.iter().filter_map(Slot::handle)
    }

    /// Find where a piece currently sits
    pub fn find(&self, handle: PieceHandle) -> Option<Position> {
        let idx = self.slots.iter().position(|s| s.handle() == Some(handle))?;
        Some(Position::new(
            (idx % self.width) as i32,
            (idx / self.width) as i32,
        ))
    }

    /// Get a reference to the internal slot array
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
    }

    /// Build a board from palette indices given top row first (display order)
    ///
    /// Handles are assigned `0, 1, 2, ...` in row-major order from the bottom row.
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Option<u8>>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == width),
            "rows must all have the same length"
        );
        let mut board = Self::new(width, height);
        let mut next = 0u32;
        for (r, row) in rows.iter().enumerate() {
            let y = (height - 1 - r) as i32;
            for (x, kind) in row.iter().enumerate() {
                if let Some(kind) = kind {
                    let idx = board.index(x as i32, y);
                    board.slots[idx] =
                        Slot::Occupied(Piece::new(PieceType(*kind), PieceHandle(0)));
                }
            }
        }
        for slot in &mut board.slots {
            if let Slot::Occupied(piece) = slot {
                piece.handle = PieceHandle(next);
                next += 1;
            }
        }
        board
    }

    /// Palette indices row by row, bottom row first (`None` for empty slots)
    pub fn kind_rows(&self) -> Vec<Vec<Option<u8>>> {
        self.slots
            .chunks(self.width)
            .map(|row| row.iter().map(|s| s.kind().map(|k| k.index())).collect())
            .collect()
    }
}
