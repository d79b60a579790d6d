use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    NonPositiveDimensions { width: usize, height: usize },
    #[error("piece palette is empty")]
    EmptyPalette,
    #[error("piece palette of {size} is below the minimum of {min}")]
    PaletteTooSmall { size: u8, min: u8 },
    #[error("piece palette of {size} exceeds the maximum of {max}")]
    PaletteTooLarge { size: u8, max: u8 },
    #[error("swipe threshold must be a positive number (got {0})")]
    InvalidSwipeThreshold(f32),
    #[error("initial match fix cap must be at least 1")]
    ZeroFixCap,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("invalid value {value:?} at line {line}, column {column}")]
    InvalidValue {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout is {found_width}x{found_height}, board is {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("layout left {unset} slot(s) without a valid piece type")]
    IncompleteLayout { unset: usize },
}
