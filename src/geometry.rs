//! Geometric primitives for the tile tree.
//!
//! Two building blocks live here: [`AxisRange`], the five-value description
//! of one dimension of a tile, and [`Bound`], the half-open rectangle used
//! for every containment decision in the index.

use serde::{Deserialize, Serialize};

/// Default outer padding as a multiple of the inner interval width.
pub const DEFAULT_PADDING_FACTOR: f64 = 1.5;

/// One dimension (x or y) of a tile.
///
/// The inner interval `[inner_min, inner_max]` is the tile's exact assigned
/// region; the outer interval pads it on both sides by a fixed multiple of
/// the inner width so boundary-adjacent points are not missed at query time.
/// `mid` is the inner midpoint used as the split coordinate for children.
///
/// Invariant: `outer_min <= inner_min < mid < inner_max <= outer_max`.
///
/// Serialized field names (`o_min`, `i_min`, ...) match the persisted
/// operator documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Low edge of the padded interval.
    #[serde(rename = "o_min")]
    pub outer_min: f64,
    /// High edge of the padded interval.
    #[serde(rename = "o_max")]
    pub outer_max: f64,
    /// Low edge of the assigned interval.
    #[serde(rename = "i_min")]
    pub inner_min: f64,
    /// High edge of the assigned interval.
    #[serde(rename = "i_max")]
    pub inner_max: f64,
    /// Midpoint of the assigned interval, the split coordinate for children.
    pub mid: f64,
}

impl AxisRange {
    /// Build an axis range from a raw extent.
    ///
    /// The inner interval is exactly `[min, max]`; the outer interval extends
    /// it by `padding_factor * (max - min)` on each side. Callers must pass
    /// `max > min`; a degenerate extent is a contract violation checked by
    /// the dataset builder, not here.
    ///
    /// # Examples
    ///
    /// ```
    /// use covgrid::geometry::AxisRange;
    ///
    /// let range = AxisRange::from_extent(0.0, 1.0, 1.5);
    /// assert_eq!(range.outer_min, -1.5);
    /// assert_eq!(range.outer_max, 2.5);
    /// assert_eq!(range.mid, 0.5);
    /// ```
    pub fn from_extent(min: f64, max: f64, padding_factor: f64) -> Self {
        let padding = padding_factor * (max - min);
        Self {
            outer_min: min - padding,
            outer_max: max + padding,
            inner_min: min,
            inner_max: max,
            mid: (min + max) / 2.0,
        }
    }

    /// Width of the inner interval.
    pub fn inner_width(&self) -> f64 {
        self.inner_max - self.inner_min
    }
}

/// A half-open 2D test region.
///
/// A coordinate belongs to the bound iff it is *strictly greater* than the
/// low edge and *less than or equal to* the high edge on both axes. The
/// asymmetry guarantees that a point exactly on the shared edge of two
/// adjacent sibling tiles is claimed by exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    /// Exclusive low x edge.
    pub x: f64,
    /// Exclusive low y edge.
    pub y: f64,
    /// Inclusive high x edge.
    pub x_end: f64,
    /// Inclusive high y edge.
    pub y_end: f64,
}

impl Bound {
    /// Create a bound from its two corners.
    pub fn new(x: f64, y: f64, x_end: f64, y_end: f64) -> Self {
        Self { x, y, x_end, y_end }
    }

    /// Half-open containment test: low edges exclusive, high edges inclusive.
    #[inline]
    pub fn contains(&self, (cx, cy): (f64, f64)) -> bool {
        cx > self.x && cx <= self.x_end && cy > self.y && cy <= self.y_end
    }
}
