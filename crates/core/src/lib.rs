//! Core rules module - pure, deterministic, and testable
//!
//! This crate holds every match-3 rule: detection, gravity, spawning, swaps
//! and the tick-driven cascade that ties them together. It has **no
//! dependencies** on rendering, timing or input capture, which makes it:
//!
//! - **Deterministic**: the same seed and swipes produce the same game
//! - **Testable**: every rule is a plain function or a small struct
//! - **Portable**: any view that can move and fade pieces by handle can drive it
//!
//! # Module Structure
//!
//! - [`board`]: W x H grid of slots with bounds-checked access
//! - [`matcher`]: run and square detection, clustering and shape classification
//! - [`gravity`]: staged downward compaction
//! - [`spawner`]: seeded piece creation and drop-in staging
//! - [`swapper`]: swipe interpretation and swap commit
//! - [`turn`]: the state machine driving a turn from swipe to stable board
//! - [`view`]: view and input collaborator traits plus headless views
//! - [`layout`]: fixed initial boards from comma-separated text
//! - [`scoring`]: shape points and cascade chain bonus
//! - [`snapshot`]: serializable board and turn summary
//! - [`config`] / [`error`]: construction-time settings and their failures
//!
//! # Example
//!
//! ```
//! use match3_core::{GameConfig, InstantView, NoInput, TurnStateMachine};
//! use match3_core::types::{Position, Swipe, TurnPhase};
//!
//! let mut game = TurnStateMachine::new(GameConfig::seeded(12345)).unwrap();
//! let mut view = InstantView::new();
//!
//! // A fresh board never starts with a match.
//! assert!(!match3_core::has_matches(game.board()));
//!
//! let mut input = Some(Swipe::new(Position::new(3, 3), 1.0, 0.0));
//! assert_eq!(game.tick(&mut view, &mut input), TurnPhase::SwapAnimating);
//!
//! // Run the cascade out.
//! while !game.is_waiting() {
//!     game.tick(&mut view, &mut NoInput);
//! }
//! assert!(game.board().is_full());
//! assert_eq!(game.turns(), 1);
//! ```

pub use match3_types as types;

pub mod board;
pub mod config;
pub mod error;
pub mod gravity;
pub mod layout;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod spawner;
pub mod swapper;
pub mod turn;
pub mod view;

pub use board::Board;
pub use config::{GameConfig, SeedMode};
pub use error::{ConfigError, GameError, LayoutError};
pub use layout::Layout;
pub use matcher::{classify, find_matches, has_matches, Cluster, MatchSet};
pub use rng::PieceRng;
pub use scoring::{score_pass, shape_points, ScoreResult, TurnStats};
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
pub use swapper::Swapper;
pub use turn::{TurnState, TurnStateMachine};
pub use view::{InstantView, NoInput, PieceView, SwipeSource, TimedView, ViewEvent};
