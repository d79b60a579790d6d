//! Match-3 rules core (workspace facade crate).
//!
//! Re-exports the member crates under `match3::{core, types}` so tests,
//! benches and the `match3-sim` binary share one import path.

pub use match3_core as core;
pub use match3_types as types;
