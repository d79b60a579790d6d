//! Serializable view of a running game
//!
//! Rows are stored top row first so a snapshot prints the way the board is
//! displayed. `board_hash` is FNV-1a over the cell bytes in that order, with
//! `0` for an empty slot and `kind + 1` otherwise.

use serde::Serialize;

use crate::scoring::TurnStats;
use crate::types::TurnPhase;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

/// FNV-1a 64-bit over `bytes`
pub fn fnv1a64(bytes: impl IntoIterator<Item = u8>) -> u64 {
    let mut h = FNV_OFFSET;
    for b in bytes {
        h ^= u64::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Hash of display-ordered rows
pub fn board_hash(rows: &[Vec<Option<u8>>]) -> u64 {
    fnv1a64(
        rows.iter()
            .flat_map(|row| row.iter().map(|c| c.map_or(0, |k| k.wrapping_add(1)))),
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Piece type per cell, top row first
    pub rows: Vec<Vec<Option<u8>>>,
    pub board_hash: u64,
    pub phase: TurnPhase,
    pub seed: u64,
    pub tick: u64,
    pub turns: u32,
    pub score: u32,
    /// Stats of the last completed turn
    pub last_turn: Option<TurnStats>,
}

impl GameSnapshot {
    /// Reset to an empty snapshot, keeping allocations
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.rows.clear();
        self.board_hash = 0;
        self.phase = TurnPhase::WaitingForInput;
        self.seed = 0;
        self.tick = 0;
        self.turns = 0;
        self.score = 0;
        self.last_turn = None;
    }

    /// Recompute `board_hash` from `rows`
    pub fn rehash(&mut self) {
        self.board_hash = board_hash(&self.rows);
    }

    /// Render rows as text, one letter per type and `.` for empty
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            for cell in row {
                out.push(match cell {
                    Some(k) if *k < 26 => char::from(b'A' + k),
                    Some(_) => '#',
                    None => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}
