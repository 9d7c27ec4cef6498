//! Nearest-candidate resolution for located tiles.
//!
//! The tile tree narrows a query down to a bounded candidate set; this
//! module resolves the single nearest sample with a linear scan. Distances
//! are planar Euclidean in degree space, not geodesic.

use crate::tile::PointIndex;
use covgrid_types::CoveragePoint;
use geo::{Distance, Euclidean, Point};

/// Planar degree-space distance between a stored point and a query point.
#[inline]
pub fn degree_distance(point: &CoveragePoint, target: Point<f64>) -> f64 {
    Euclidean.distance(point.coords.to_point(), target)
}

/// Find the candidate nearest to `target`.
///
/// Linear scan over `candidates` with a strict `<` comparison, so the first
/// minimal candidate in iteration order wins ties. Combined with the
/// leaf candidate order (outer set, then inner set, ascending indices) this
/// makes tie-breaking deterministic. Returns `None` for an empty candidate
/// set, which is the "no coverage data in this area" outcome.
pub fn nearest<I>(candidates: I, points: &[CoveragePoint], target: Point<f64>) -> Option<PointIndex>
where
    I: IntoIterator<Item = PointIndex>,
{
    let mut selected = None;
    let mut best = f64::INFINITY;
    for index in candidates {
        let distance = degree_distance(&points[index as usize], target);
        if distance < best {
            selected = Some(index);
            best = distance;
        }
    }
    selected
}
