//! Config module - construction-time parameters
//!
//! Everything the rules core needs to know up front: dimensions, palette
//! size, how to seed the spawner and the few tuning knobs of the turn cycle.
//! Deserializable so a host can keep it in a JSON file; missing fields fall
//! back to the defaults in [`crate::types`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rng::time_seed;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_PALETTE_SIZE, DEFAULT_WIDTH, FIX_INITIAL_MATCHES_CAP,
    MAX_PALETTE_SIZE, MIN_PALETTE_SIZE, SWIPE_THRESHOLD,
};

/// How the spawner's PRNG is seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeedMode {
    /// Reproducible boards (tests, debugging, replays)
    Fixed(u64),
    /// Wall-clock seed
    #[default]
    Time,
}

impl SeedMode {
    pub fn resolve(&self) -> u64 {
        match self {
            SeedMode::Fixed(seed) => *seed,
            SeedMode::Time => time_seed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub palette_size: u8,
    pub seed: SeedMode,
    /// Iteration cap for FixInitialMatches
    pub fix_initial_cap: u32,
    /// Minimum dominant-axis swipe, in cells
    pub swipe_threshold: f32,
    /// Ticks a waiting phase may poll the view before advancing anyway.
    /// `None` waits forever.
    pub settle_timeout_ticks: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: SeedMode::Time,
            fix_initial_cap: FIX_INITIAL_MATCHES_CAP,
            swipe_threshold: SWIPE_THRESHOLD,
            settle_timeout_ticks: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: SeedMode::Fixed(seed),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_palette(mut self, palette_size: u8) -> Self {
        self.palette_size = palette_size;
        self
    }

    pub fn with_settle_timeout(mut self, ticks: u32) -> Self {
        self.settle_timeout_ticks = Some(ticks);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette_size == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        if self.palette_size < MIN_PALETTE_SIZE {
            return Err(ConfigError::PaletteTooSmall {
                size: self.palette_size,
                min: MIN_PALETTE_SIZE,
            });
        }
        if self.palette_size > MAX_PALETTE_SIZE {
            return Err(ConfigError::PaletteTooLarge {
                size: self.palette_size,
                max: MAX_PALETTE_SIZE,
            });
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        if self.fix_initial_cap == 0 {
            return Err(ConfigError::ZeroFixCap);
        }
        Ok(())
    }
}
