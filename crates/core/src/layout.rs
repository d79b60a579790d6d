//! Layout module - fixed initial boards from comma-separated text
//!
//! One text row per board row, topmost displayed row first. Row `r` of `R`
//! lands on board row `R - 1 - r`. Values index the palette; an index outside
//! the palette is logged and leaves that cell unset, which the state machine
//! refuses to start from.

use tracing::warn;

use crate::error::LayoutError;
use crate::types::{PieceType, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    /// Row-major, bottom row first
    cells: Vec<Option<PieceType>>,
}

impl Layout {
    /// Parse layout text against a palette of `palette_size` types
    pub fn parse(text: &str, palette_size: u8) -> Result<Self, LayoutError> {
        let mut rows: Vec<Vec<Option<PieceType>>> = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for (col, raw) in line.split(',').enumerate() {
                let raw = raw.trim();
                let value: i64 = raw.parse().map_err(|_| LayoutError::InvalidValue {
                    line: line_no + 1,
                    column: col + 1,
                    value: raw.to_string(),
                })?;
                if value < 0 || value >= i64::from(palette_size) {
                    warn!(
                        line = line_no + 1,
                        column = col + 1,
                        value,
                        palette = palette_size,
                        "layout piece type is out of range"
                    );
                    row.push(None);
                } else {
                    row.push(Some(PieceType(value as u8)));
                }
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LayoutError::RaggedRow {
                        row: rows.len() + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }

        // Text is top row first, the board is bottom-up.
        let cells = rows.into_iter().rev().flatten().collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Type at a board position (bottom-up), `None` if unset
    pub fn kind_at(&self, pos: Position) -> Option<PieceType> {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height {
            return None;
        }
        self.cells[pos.y as usize * self.width + pos.x as usize]
    }

    /// Number of cells left unset by out-of-range values
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Check the layout covers a `width` x `height` board exactly
    pub fn check_size(&self, width: usize, height: usize) -> Result<(), LayoutError> {
        if self.width != width || self.height != height {
            return Err(LayoutError::DimensionMismatch {
                width,
                height,
                found_width: self.width,
                found_height: self.height,
            });
        }
        Ok(())
    }
}
