//! The tile tree: recursive quadrant partitioning of a point-index set.
//!
//! A [`Tile`] owns a rectangular region of coordinate space. Leaves carry
//! the point indices claimed by their inner rectangle plus a boundary
//! fallback set; internal tiles carry four children quartering the inner
//! rectangle at the midpoints, and keep only the fallback set for points no
//! descendant claimed. Tiles never copy point data; they reference points
//! by position in the per-operator point vector.

use crate::config::TileConfig;
use crate::geometry::{AxisRange, Bound};
use covgrid_types::CoveragePoint;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Position of a point in the per-operator point vector.
pub type PointIndex = u32;

/// Candidate indices gathered from one leaf.
///
/// The inline capacity covers leaves built with default-scale thresholds;
/// candidate sets from larger `max_inner` / `max_outer` parameters spill
/// to the heap.
pub type CandidateSet = SmallVec<[PointIndex; 32]>;

/// Child order inside an internal tile.
///
/// Top is the low-y half: a coordinate descends to the bottom row only when
/// it is strictly greater than the y midpoint.
pub const CHILD_TOP_LEFT: usize = 0;
pub const CHILD_TOP_RIGHT: usize = 1;
pub const CHILD_BOTTOM_LEFT: usize = 2;
pub const CHILD_BOTTOM_RIGHT: usize = 3;

/// A node of the tile tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Horizontal (longitude) dimension.
    pub x: AxisRange,
    /// Vertical (latitude) dimension.
    pub y: AxisRange,
    /// Boundary fallback points: inside the outer rectangle but claimed
    /// neither by this tile's inner rectangle nor by any descendant.
    /// Stored sorted ascending.
    pub outer_set: Vec<PointIndex>,
    /// Leaf point set or four children.
    pub content: TileContent,
}

/// What a tile holds: its own inner point set, or four sub-tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileContent {
    /// Terminal tile owning the points of its inner rectangle, sorted
    /// ascending.
    Leaf { inner_set: Vec<PointIndex> },
    /// Subdivided tile; children quarter the inner rectangle and are
    /// ordered top-left, top-right, bottom-left, bottom-right.
    Grid { children: Box<[Tile; 4]> },
}

impl Tile {
    /// Build a tile tree over `candidates` for the given extents.
    ///
    /// `candidates` are positions into `points`; the slice itself is only
    /// read. Extents must satisfy `max > min` on both axes; the dataset
    /// builder enforces this before calling here. The build is
    /// deterministic: the same input and parameters always produce a
    /// structurally identical tree.
    pub fn build(
        extent_x: (f64, f64),
        extent_y: (f64, f64),
        candidates: FxHashSet<PointIndex>,
        points: &[CoveragePoint],
        config: &TileConfig,
    ) -> Self {
        build_tile(
            extent_x,
            extent_y,
            candidates,
            points,
            config,
            config.force_split_inner,
            config.force_split_outer,
        )
    }

    /// The exact region this tile is responsible for.
    pub fn inner_bound(&self) -> Bound {
        Bound::new(
            self.x.inner_min,
            self.y.inner_min,
            self.x.inner_max,
            self.y.inner_max,
        )
    }

    /// The padded region used to catch boundary-adjacent points.
    pub fn outer_bound(&self) -> Bound {
        Bound::new(
            self.x.outer_min,
            self.y.outer_min,
            self.x.outer_max,
            self.y.outer_max,
        )
    }

    /// True if this tile carries no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, TileContent::Leaf { .. })
    }

    /// Descend to the leaf tile containing `coords`.
    ///
    /// Returns `None` when the coordinate falls outside this tile's inner
    /// rectangle; at the root this is the "outside mapped area" outcome.
    /// Child choice follows the midpoints: strictly greater than `x.mid`
    /// goes right, strictly greater than `y.mid` goes to the bottom row.
    pub fn locate(&self, coords: (f64, f64)) -> Option<&Tile> {
        if !self.inner_bound().contains(coords) {
            return None;
        }

        match &self.content {
            TileContent::Leaf { .. } => Some(self),
            TileContent::Grid { children } => {
                let col = usize::from(coords.0 > self.x.mid);
                let row = usize::from(coords.1 > self.y.mid);
                children[row * 2 + col].locate(coords)
            }
        }
    }

    /// Candidate indices for a nearest-point scan at this tile: the outer
    /// set followed by the leaf inner set, each in ascending index order.
    ///
    /// The iteration order is part of the query contract: the nearest scan
    /// keeps the first minimal candidate it sees, so ties resolve to the
    /// earliest position in this order.
    pub fn candidate_set(&self) -> CandidateSet {
        let mut candidates = CandidateSet::new();
        candidates.extend_from_slice(&self.outer_set);
        if let TileContent::Leaf { inner_set } = &self.content {
            candidates.extend_from_slice(inner_set);
        }
        candidates
    }

    /// Number of tiles in this subtree, the root included.
    pub fn tile_count(&self) -> usize {
        match &self.content {
            TileContent::Leaf { .. } => 1,
            TileContent::Grid { children } => {
                1 + children.iter().map(Tile::tile_count).sum::<usize>()
            }
        }
    }

    /// Depth of this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.content {
            TileContent::Leaf { .. } => 1,
            TileContent::Grid { children } => {
                1 + children.iter().map(Tile::depth).max().unwrap_or(0)
            }
        }
    }

    /// Collect every index claimed by this subtree: all outer sets plus all
    /// leaf inner sets.
    pub(crate) fn collect_claims(&self, claims: &mut FxHashSet<PointIndex>) {
        claims.extend(self.outer_set.iter().copied());
        match &self.content {
            TileContent::Leaf { inner_set } => claims.extend(inner_set.iter().copied()),
            TileContent::Grid { children } => {
                for child in children.iter() {
                    child.collect_claims(claims);
                }
            }
        }
    }
}

/// One recursion level of the build.
///
/// `force_inner` / `force_outer` count down the remaining forced-split
/// levels for the respective containment filter; while a countdown is
/// active, that filter is skipped and the full carried set passes through.
fn build_tile(
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
    candidates: FxHashSet<PointIndex>,
    points: &[CoveragePoint],
    config: &TileConfig,
    force_inner: u32,
    force_outer: u32,
) -> Tile {
    let x = AxisRange::from_extent(x_min, x_max, config.padding_factor);
    let y = AxisRange::from_extent(y_min, y_max, config.padding_factor);

    let mut force_divide = false;
    let mut next_force_inner = force_inner;
    let mut next_force_outer = force_outer;

    let mut inner_set = FxHashSet::default();
    let mut outer_set;
    if force_inner > 0 {
        next_force_inner -= 1;
        force_divide = true;
        outer_set = candidates;
    } else {
        let bound = Bound::new(x.inner_min, y.inner_min, x.inner_max, y.inner_max);
        outer_set = FxHashSet::default();
        for index in candidates {
            let coords = points[index as usize].coords.to_tuple();
            if bound.contains(coords) {
                inner_set.insert(index);
            } else {
                outer_set.insert(index);
            }
        }
    }

    if force_outer > 0 {
        next_force_outer -= 1;
        force_divide = true;
    } else {
        let bound = Bound::new(x.outer_min, y.outer_min, x.outer_max, y.outer_max);
        // Points outside even the padded rectangle belong elsewhere in the
        // tree and are dropped from this subtree's responsibility.
        outer_set.retain(|&index| bound.contains(points[index as usize].coords.to_tuple()));
    }

    let total = inner_set.len() + outer_set.len();
    let within_thresholds =
        inner_set.len() <= config.max_inner && outer_set.len() <= config.max_outer;

    if (within_thresholds && !force_divide) || total <= config.min_set {
        return Tile {
            x,
            y,
            outer_set: sorted_indices(outer_set),
            content: TileContent::Leaf {
                inner_set: sorted_indices(inner_set),
            },
        };
    }

    let pool: FxHashSet<PointIndex> = inner_set.union(&outer_set).copied().collect();

    let quadrants = [
        ((x.inner_min, x.mid), (y.inner_min, y.mid)), // top-left
        ((x.mid, x.inner_max), (y.inner_min, y.mid)), // top-right
        ((x.inner_min, x.mid), (y.mid, y.inner_max)), // bottom-left
        ((x.mid, x.inner_max), (y.mid, y.inner_max)), // bottom-right
    ];

    let children = Box::new(quadrants.map(|(extent_x, extent_y)| {
        build_tile(
            extent_x,
            extent_y,
            pool.clone(),
            points,
            config,
            next_force_inner,
            next_force_outer,
        )
    }));

    // Whatever no descendant claimed stays here as a fallback.
    let mut claimed = FxHashSet::default();
    for child in children.iter() {
        child.collect_claims(&mut claimed);
    }
    let fallback: FxHashSet<PointIndex> = pool.difference(&claimed).copied().collect();

    Tile {
        x,
        y,
        outer_set: sorted_indices(fallback),
        content: TileContent::Grid { children },
    }
}

fn sorted_indices(set: FxHashSet<PointIndex>) -> Vec<PointIndex> {
    let mut indices: Vec<PointIndex> = set.into_iter().collect();
    indices.sort_unstable();
    indices
}
