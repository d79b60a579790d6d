//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used by the rules core, the
//! simulation binary and any view layer driving the board. None of them
//! carry behaviour beyond small conversions, so they can be shared freely.
//!
//! # Coordinates
//!
//! Boards use a bottom-up convention:
//!
//! - **x**: column, `0` is the leftmost column
//! - **y**: row, `0` is the bottom row; gravity moves pieces toward `y = 0`
//! - **up**: `+y`, matching a swipe vector whose `dy` is positive
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 8 | Board columns |
//! | `DEFAULT_HEIGHT` | 8 | Board rows |
//! | `DEFAULT_PALETTE_SIZE` | 5 | Distinct piece types |
//! | `MIN_PALETTE_SIZE` | 2 | Lower bound on piece types |
//! | `MAX_PALETTE_SIZE` | 32 | Upper bound on piece types |
//! | `SWIPE_THRESHOLD` | 0.5 | Minimum dominant-axis swipe, in cells |
//! | `FIX_INITIAL_MATCHES_CAP` | 64 | Iteration cap when breaking initial matches |
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Direction, Position, ShapeType, Swipe};
//!
//! let from = Position::new(2, 3);
//! assert_eq!(from.step(Direction::Up), Position::new(2, 4));
//!
//! // Ties on magnitude resolve horizontally.
//! assert_eq!(Swipe::new(from, 1.0, 1.0).direction(0.5), Some(Direction::Right));
//! assert_eq!(Swipe::new(from, 0.2, -0.4).direction(0.5), None);
//!
//! assert_eq!(ShapeType::from_str("t5"), Some(ShapeType::TShape5));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 8;

/// Default number of distinct piece types
pub const DEFAULT_PALETTE_SIZE: u8 = 5;

/// Smallest palette the core accepts; one type matches on every refill
pub const MIN_PALETTE_SIZE: u8 = 2;

/// Largest palette the core accepts
pub const MAX_PALETTE_SIZE: u8 = 32;

/// Minimum dominant-axis swipe magnitude (board cells) that counts as a swap
pub const SWIPE_THRESHOLD: f32 = 0.5;

/// Iteration cap for breaking up matches on a freshly generated board
pub const FIX_INITIAL_MATCHES_CAP: u32 = 64;

/// Shortest straight run that forms a match
pub const MIN_MATCH_LEN: usize = 3;


/// A board coordinate (bottom-up)
///
/// Signed so that neighbour arithmetic can step off the board; the board
/// itself rejects anything outside `[0, W) x [0, H)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a raw offset
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring position in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}

/// The four cardinal swap directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Unit offset for this direction (`Up` is `+y`)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// A swipe gesture already converted into board-cell units
///
/// `origin` is the cell the gesture started on, `(dx, dy)` the drag vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swipe {
    pub origin: Position,
    pub dx: f32,
    pub dy: f32,
}

impl Swipe {
    pub fn new(origin: Position, dx: f32, dy: f32) -> Self {
        Self { origin, dx, dy }
    }

    /// Resolve the swipe into a cardinal direction
    ///
    /// Returns `None` unless the dominant axis exceeds `threshold`.
    /// Equal magnitudes resolve to the horizontal axis.
    pub fn direction(&self, threshold: f32) -> Option<Direction> {
        let ax = self.dx.abs();
        let ay = self.dy.abs();
        if ax.max(ay) <= threshold {
            return None;
        }
        if ax >= ay {
            Some(if self.dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if self.dy > 0.0 {
                Direction::Up
            } else {
                Direction::Down
            })
        }
    }
}

/// A piece type: an index into the configured palette
///
/// Only equality matters to the rules; the view decides what a type looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceType(pub u8);

impl PieceType {
    pub fn index(&self) -> u8 {
        self.0
    }
}

/// Opaque identifier for a live piece, handed to the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceHandle(pub u32);

/// A piece occupying a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub handle: PieceHandle,
}

impl Piece {
    pub fn new(kind: PieceType, handle: PieceHandle) -> Self {
        Self { kind, handle }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(piece) => Some(*piece),
        }
    }

    pub fn kind(&self) -> Option<PieceType> {
        self.piece().map(|p| p.kind)
    }

    pub fn handle(&self) -> Option<PieceHandle> {
        self.piece().map(|p| p.handle)
    }
}

/// Geometry classification of a detected cluster
///
/// - **Line3 / Line4 / Line5**: straight runs (runs longer than 5, and any
///   cluster over five cells, are `Line5`)
/// - **Square2x2**: a 2x2 block
/// - **TShape5**: a horizontal and vertical run crossing away from at least one end (T or plus)
/// - **LShape5**: a horizontal and vertical run sharing an end cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeType {
    None,
    Line3,
    Line4,
    Square2x2,
    Line5,
    TShape5,
    LShape5,
}

impl ShapeType {
    pub const ALL: [ShapeType; 7] = [
        ShapeType::None,
        ShapeType::Line3,
        ShapeType::Line4,
        ShapeType::Square2x2,
        ShapeType::Line5,
        ShapeType::TShape5,
        ShapeType::LShape5,
    ];

    /// Parse shape from its short name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(ShapeType::None),
            "line3" => Some(ShapeType::Line3),
            "line4" => Some(ShapeType::Line4),
            "square" => Some(ShapeType::Square2x2),
            "line5" => Some(ShapeType::Line5),
            "t5" => Some(ShapeType::TShape5),
            "l5" => Some(ShapeType::LShape5),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::None => "none",
            ShapeType::Line3 => "line3",
            ShapeType::Line4 => "line4",
            ShapeType::Square2x2 => "square",
            ShapeType::Line5 => "line5",
            ShapeType::TShape5 => "t5",
            ShapeType::LShape5 => "l5",
        }
    }
}

/// Identifier grouping the cells of one detected cluster within a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterId(pub u32);

/// One matched cell as reported to scoring and the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedPiece {
    pub position: Position,
    pub shape: ShapeType,
    pub cluster: ClusterId,
}

/// A staged move: a piece travelling from one position to another
///
/// Used for falling pieces and for spawned pieces dropping in from above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingMove {
    pub handle: PieceHandle,
    pub from: Position,
    pub to: Position,
}

/// Two cells staged to exchange contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapIntent {
    pub a: Position,
    pub b: Position,
}

/// Fade direction requested from the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fade {
    In,
    Out,
}

/// Turn state names, for logging and snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnPhase {
    #[default]
    WaitingForInput,
    SwapAnimating,
    Matching,
    DeleteFading,
    Falling,
    FallingAnimating,
    Creating,
    CreatingAnimating,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::WaitingForInput => "waitingForInput",
            TurnPhase::SwapAnimating => "swapAnimating",
            TurnPhase::Matching => "matching",
            TurnPhase::DeleteFading => "deleteFading",
            TurnPhase::Falling => "falling",
            TurnPhase::FallingAnimating => "fallingAnimating",
            TurnPhase::Creating => "creating",
            TurnPhase::CreatingAnimating => "creatingAnimating",
        }
    }
}
