//! Scoring module - points per cleared cluster and cascade chains
//!
//! Each cluster scores a fixed amount by shape. Every detection pass inside
//! one turn raises the chain index, and a pass's points are multiplied by it:
//! the pass right after a swap is chain 1, the first cascade is chain 2, and
//! so on.

use crate::matcher::MatchSet;
use crate::types::ShapeType;

/// Base points for one cluster of `shape`
pub fn shape_points(shape: ShapeType) -> u32 {
    match shape {
        ShapeType::None => 0,
        ShapeType::Line3 => 50,
        ShapeType::Line4 => 100,
        ShapeType::Square2x2 => 120,
        ShapeType::LShape5 => 160,
        ShapeType::TShape5 => 180,
        ShapeType::Line5 => 200,
    }
}

/// Score for a single detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Sum of shape points, before the chain multiplier
    pub base: u32,
    /// 1-based chain index the pass was scored at
    pub chain: u32,
    pub total: u32,
}

/// Score one pass of clusters at chain index `chain`
///
/// A chain of 0 is treated as 1.
pub fn score_pass(matches: &MatchSet, chain: u32) -> ScoreResult {
    let chain = chain.max(1);
    let base = matches
        .clusters()
        .iter()
        .map(|c| shape_points(c.shape))
        .fold(0u32, u32::saturating_add);
    ScoreResult {
        base,
        chain,
        total: base.saturating_mul(chain),
    }
}

/// Per-turn cascade statistics
///
/// A turn opens when a swap is committed and closes when a detection pass
/// comes back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnStats {
    /// Number of passes that found matches
    pub chain: u32,
    pub cleared: u32,
    pub clusters: u32,
    /// Clusters seen per shape, indexed like [`ShapeType::ALL`]
    pub by_shape: [u32; 7],
    pub score: u32,
}

impl TurnStats {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold one detection pass into the turn and return its score
    pub fn record_pass(&mut self, matches: &MatchSet) -> ScoreResult {
        self.chain += 1;
        let result = score_pass(matches, self.chain);
        self.cleared += matches.cell_count() as u32;
        self.clusters += matches.len() as u32;
        for (i, shape) in ShapeType::ALL.iter().enumerate() {
            self.by_shape[i] += matches.count_shape(*shape) as u32;
        }
        self.score = self.score.saturating_add(result.total);
        result
    }

    pub fn shape_count(&self, shape: ShapeType) -> u32 {
        ShapeType::ALL
            .iter()
            .position(|s| *s == shape)
            .map_or(0, |i| self.by_shape[i])
    }

    /// True for a swap that produced no match
    pub fn is_dry(&self) -> bool {
        self.chain == 0
    }
}
