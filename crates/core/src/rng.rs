//! RNG module - seeded piece-type generation
//!
//! Wraps a seedable PRNG so that equal seeds always produce equal boards
//! and equal refills. The spawner owns the only instance; nothing else
//! advances it.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for palette indices
#[derive(Debug, Clone)]
pub struct PieceRng {
    seed: u64,
    rng: StdRng,
}

impl PieceRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restart the sequence from `seed`
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// The seed this sequence started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, n)`
    ///
    /// `n` must be non-zero.
    pub fn next_index(&mut self, n: u8) -> u8 {
        self.rng.gen_range(0..n)
    }

    /// Uniform value in `[0, n)` other than `excluded`
    ///
    /// Falls back to a plain draw when the range has no other value.
    pub fn next_index_excluding(&mut self, n: u8, excluded: u8) -> u8 {
        if n < 2 || excluded >= n {
            return self.next_index(n);
        }
        let v = self.rng.gen_range(0..n - 1);
        if v >= excluded {
            v + 1
        } else {
            v
        }
    }
}

/// Seed derived from the wall clock, for production variety
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
