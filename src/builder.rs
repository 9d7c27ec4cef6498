//! Dataset builder: accumulate points, validate, build the tile tree once.
//!
//! The builder is the construction boundary of the crate: everything a
//! dataset needs (points, extents, tree parameters) is checked here, so
//! queries against the built value can never fail.

use crate::config::TileConfig;
use crate::dataset::Dataset;
use crate::error::{CovGridError, Result};
use crate::tile::{PointIndex, Tile};
use covgrid_types::{CoverageFlags, CoveragePoint, Coords, DatasetMetadata};
use rustc_hash::FxHashSet;

/// Margin subtracted from a derived extent's low edges.
///
/// The rectangle containment rule is exclusive on the low edge, so a point
/// sitting exactly at the minimum coordinate would otherwise fall outside
/// the root tile.
const EXTENT_MARGIN: f64 = 1e-4;

/// Builder for one operator's [`Dataset`].
///
/// Points are collected in insertion order and sorted by longitude before
/// the build, so the same point set always yields the same index order (and
/// therefore the same nearest-sample tie-breaking) regardless of how it was
/// assembled.
///
/// # Examples
///
/// ```
/// use covgrid::{DatasetBuilder, TileConfig};
/// use covgrid_types::{Coords, CoverageFlags};
///
/// let dataset = DatasetBuilder::new(TileConfig::default())
///     .add(Coords::new(2.35, 48.85), CoverageFlags::new(true, true, true))
///     .add(Coords::new(-1.55, 47.22), CoverageFlags::new(true, true, false))
///     .add(Coords::new(5.37, 43.30), CoverageFlags::new(true, false, false))
///     .build()?;
/// assert_eq!(dataset.len(), 3);
/// # Ok::<(), covgrid::CovGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    config: TileConfig,
    points: Vec<CoveragePoint>,
    extent: Option<((f64, f64), (f64, f64))>,
}

impl DatasetBuilder {
    /// Create a builder with the given tree parameters.
    pub fn new(config: TileConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            extent: None,
        }
    }

    /// Add one coverage point.
    pub fn add(mut self, coords: Coords, flags: CoverageFlags) -> Self {
        self.points.push(CoveragePoint::new(coords, flags));
        self
    }

    /// Add one already-assembled point.
    pub fn add_point(mut self, point: CoveragePoint) -> Self {
        self.points.push(point);
        self
    }

    /// Add many points at once.
    pub fn extend<I: IntoIterator<Item = CoveragePoint>>(mut self, points: I) -> Self {
        self.points.extend(points);
        self
    }

    /// Override the root extent as `((x_min, x_max), (y_min, y_max))`.
    ///
    /// Without this, the extent is derived from the point set itself, with
    /// a small margin below the minimum coordinates. An explicit extent is
    /// required when the points alone cannot define one (for example a
    /// dataset with a single point, whose derived width would be zero).
    pub fn extent(mut self, extent_x: (f64, f64), extent_y: (f64, f64)) -> Self {
        self.extent = Some((extent_x, extent_y));
        self
    }

    /// Validate everything and build the dataset.
    ///
    /// Contract violations (empty point set, `min_set` exceeding the
    /// dataset size, non-positive extent widths, invalid parameters) are
    /// reported here and never deferred to query time.
    pub fn build(self) -> Result<Dataset> {
        self.config.validate()?;

        if self.points.is_empty() {
            return Err(CovGridError::EmptyDataset);
        }

        if self.config.min_set > self.points.len() {
            return Err(CovGridError::InvalidConfig(format!(
                "min_set ({}) exceeds the dataset size ({})",
                self.config.min_set,
                self.points.len()
            )));
        }

        let mut points = self.points;
        points.sort_unstable_by(|a, b| a.coords.longitude.total_cmp(&b.coords.longitude));

        let mut metadata = DatasetMetadata::default();
        for point in &points {
            metadata.record(point.coords.longitude, point.coords.latitude);
        }

        let (extent_x, extent_y) = match self.extent {
            Some(extent) => extent,
            None => (
                (
                    metadata.longitude.minimal - EXTENT_MARGIN,
                    metadata.longitude.maximal,
                ),
                (
                    metadata.latitude.minimal - EXTENT_MARGIN,
                    metadata.latitude.maximal,
                ),
            ),
        };

        for (axis, (min, max)) in [("x", extent_x), ("y", extent_y)] {
            if !(min.is_finite() && max.is_finite()) {
                return Err(CovGridError::InvalidExtent(format!(
                    "{axis} extent [{min}, {max}] is not finite"
                )));
            }
            if max <= min {
                return Err(CovGridError::InvalidExtent(format!(
                    "{axis} extent [{min}, {max}] has non-positive width"
                )));
            }
        }

        let candidates: FxHashSet<PointIndex> = (0..points.len() as PointIndex).collect();
        let map = Tile::build(extent_x, extent_y, candidates, &points, &self.config);

        log::debug!(
            "built tile tree over {} points: {} tiles, depth {}",
            points.len(),
            map.tile_count(),
            map.depth()
        );

        Ok(Dataset {
            metadata,
            results: points,
            map,
        })
    }
}
