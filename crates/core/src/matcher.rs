//! Match detection - finds and classifies matched clusters
//!
//! A pass works in three steps:
//!
//! 1. **Units**: every maximal horizontal or vertical run of at least
//!    [`MIN_MATCH_LEN`] same-type pieces is a match unit, and so is every 2x2
//!    same-type block that has a cell outside all runs. Runs are bounded by the
//!    board edges and broken by empty slots.
//! 2. **Group**: units that share a cell are joined with a union-find. Units
//!    that only sit next to each other stay apart. Clusters are ordered by
//!    their lowest row-major cell index, bottom row first, so ids are stable
//!    for a given board.
//! 3. **Classify**: each group is tagged with a [`ShapeType`] from its
//!    geometry (see [`classify`]).
//!
//! A cell matched both horizontally and vertically belongs to exactly one
//! cluster, the T/L shape that joins both runs.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{ClusterId, MatchedPiece, PieceType, Position, ShapeType, MIN_MATCH_LEN};

/// Units covering one cell: a row run, a column run and four 2x2 blocks
const MAX_UNITS_PER_CELL: usize = 6;

/// Cells in the largest T or L shape
const SHAPE5_CELLS: usize = 5;

/// One detected match event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub id: ClusterId,
    pub shape: ShapeType,
    pub kind: PieceType,
    /// Member cells, row-major from the bottom row
    pub cells: Vec<Position>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lowest member in row-major order
    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }
}

/// The result of one detection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    clusters: Vec<Cluster>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Total matched cells
    pub fn cell_count(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Every matched cell, tagged with its cluster
    pub fn pieces(&self) -> impl Iterator<Item = MatchedPiece> + '_ {
        self.clusters.iter().flat_map(|c| {
            c.cells.iter().map(move |&position| MatchedPiece {
                position,
                shape: c.shape,
                cluster: c.id,
            })
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.clusters.iter().flat_map(|c| c.cells.iter().copied())
    }

    /// Whether `pos` is part of any cluster
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().any(|p| p == pos)
    }

    /// Number of clusters with the given shape
    pub fn count_shape(&self, shape: ShapeType) -> usize {
        self.clusters.iter().filter(|c| c.shape == shape).count()
    }
}

/// Run a full detection pass over `board`
pub fn find_matches(board: &Board) -> MatchSet {
    let w = board.width();
    let h = board.height();
    let kinds: Vec<Option<PieceType>> = board.slots().iter().map(|s| s.kind()).collect();
    let units = match_units(&kinds, w, h);
    if units.is_empty() {
        return MatchSet::default();
    }

    let mut covering: Vec<ArrayVec<usize, MAX_UNITS_PER_CELL>> = vec![ArrayVec::new(); w * h];
    for (unit, cells) in units.iter().enumerate() {
        for &idx in cells {
            covering[idx].push(unit);
        }
    }

    let mut parent: Vec<usize> = (0..units.len()).collect();
    for here in &covering {
        if let Some((&first, rest)) = here.split_first() {
            for &other in rest {
                union(&mut parent, first, other);
            }
        }
    }

    // Ascending scan keeps each group sorted and free of duplicates
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); units.len()];
    for (idx, here) in covering.iter().enumerate() {
        if let Some(&unit) = here.first() {
            let root = find(&mut parent, unit);
            groups[root].push(idx);
        }
    }
    groups.retain(|g| !g.is_empty());
    groups.sort_unstable_by_key(|g| g[0]);

    let mut clusters = Vec::with_capacity(groups.len());
    for members in groups {
        let Some(kind) = kinds[members[0]] else {
            continue;
        };
        let cells: Vec<Position> = members
            .iter()
            .map(|&i| Position::new((i % w) as i32, (i / w) as i32))
            .collect();
        let shape = classify(&cells);
        clusters.push(Cluster {
            id: ClusterId(clusters.len() as u32),
            shape,
            kind,
            cells,
        });
    }

    MatchSet { clusters }
}

/// Whether the board has any match at all
pub fn has_matches(board: &Board) -> bool {
    let kinds: Vec<Option<PieceType>> = board.slots().iter().map(|s| s.kind()).collect();
    !match_units(&kinds, board.width(), board.height()).is_empty()
}

/// Every run and 2x2 block that matches on its own, as flat cell indices
fn match_units(kinds: &[Option<PieceType>], w: usize, h: usize) -> Vec<Vec<usize>> {
    let mut units = Vec::new();

    // Rows
    for y in 0..h {
        push_runs(kinds, &mut units, (0..w).map(|x| y * w + x));
    }
    // Columns
    for x in 0..w {
        push_runs(kinds, &mut units, (0..h).map(|y| y * w + x));
    }

    let mut in_run = vec![false; w * h];
    for unit in &units {
        for &i in unit {
            in_run[i] = true;
        }
    }

    // 2x2 blocks; boards narrower or shorter than 2 have none. A block made
    // only of run cells adds nothing and would join stacked runs.
    for y in 0..h.saturating_sub(1) {
        for x in 0..w.saturating_sub(1) {
            let quad = [y * w + x, y * w + x + 1, (y + 1) * w + x, (y + 1) * w + x + 1];
            let Some(kind) = kinds[quad[0]] else {
                continue;
            };
            if quad[1..].iter().all(|&i| kinds[i] == Some(kind)) && !quad.iter().all(|&i| in_run[i]) {
                units.push(quad.to_vec());
            }
        }
    }

    units
}

/// Push maximal runs of length >= MIN_MATCH_LEN along one line of indices
fn push_runs(
    kinds: &[Option<PieceType>],
    units: &mut Vec<Vec<usize>>,
    line: impl Iterator<Item = usize>,
) {
    let line: Vec<usize> = line.collect();
    let len = line.len();

    let mut start = 0;
    while start < len {
        let Some(kind) = kinds[line[start]] else {
            start += 1;
            continue;
        };
        let mut end = start + 1;
        while end < len && kinds[line[end]] == Some(kind) {
            end += 1;
        }
        if end - start >= MIN_MATCH_LEN {
            units.push(line[start..end].to_vec());
        }
        start = end;
    }
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[ra.max(rb)] = ra.min(rb);
    }
}

/// A straight run of cells inside one component
#[derive(Debug, Clone, Copy)]
struct Run {
    start: Position,
    len: i32,
}

/// Classify a connected component of matched cells
///
/// First rule that applies:
///
/// - more than five cells, or a straight run of 5 or more → `Line5`
/// - a horizontal and a vertical run of 3+ that cross → `LShape5` when the
///   shared cell ends both runs, `TShape5` otherwise (T or plus)
/// - a run of 4 → `Line4`
/// - a 2x2 block → `Square2x2`
/// - otherwise → `Line3`
pub fn classify(cells: &[Position]) -> ShapeType {
    if cells.is_empty() {
        return ShapeType::None;
    }
    if cells.len() > SHAPE5_CELLS {
        return ShapeType::Line5;
    }
    let set: HashSet<Position> = cells.iter().copied().collect();
    let rows = runs(&set, 1, 0);
    let cols = runs(&set, 0, 1);

    let longest = rows.iter().chain(cols.iter()).map(|r| r.len).max().unwrap_or(1);
    if longest >= 5 {
        return ShapeType::Line5;
    }

    let min = MIN_MATCH_LEN as i32;
    let mut cross = None;
    for r in rows.iter().filter(|r| r.len >= min) {
        for c in cols.iter().filter(|c| c.len >= min) {
            let x = c.start.x;
            let y = r.start.y;
            let hits_row = x >= r.start.x && x < r.start.x + r.len;
            let hits_col = y >= c.start.y && y < c.start.y + c.len;
            if !(hits_row && hits_col) {
                continue;
            }
            let row_end = x == r.start.x || x == r.start.x + r.len - 1;
            let col_end = y == c.start.y || y == c.start.y + c.len - 1;
            if row_end && col_end {
                cross.get_or_insert(ShapeType::LShape5);
            } else {
                cross = Some(ShapeType::TShape5);
            }
        }
    }
    if let Some(shape) = cross {
        return shape;
    }

    if longest == 4 {
        return ShapeType::Line4;
    }

    let has_square = cells.iter().any(|p| {
        set.contains(&p.offset(1, 0))
            && set.contains(&p.offset(0, 1))
            && set.contains(&p.offset(1, 1))
    });
    if has_square {
        return ShapeType::Square2x2;
    }

    ShapeType::Line3
}

/// Maximal straight runs along (dx, dy) within `set`
fn runs(set: &HashSet<Position>, dx: i32, dy: i32) -> Vec<Run> {
    let mut out = Vec::new();
    for &p in set {
        if set.contains(&p.offset(-dx, -dy)) {
            continue;
        }
        let mut len = 1;
        while set.contains(&p.offset(dx * len, dy * len)) {
            len += 1;
        }
        out.push(Run { start: p, len });
    }
    out
}
