//! Per-operator dataset: points, metadata and the tile tree.

use crate::query::nearest;
use crate::tile::Tile;
use covgrid_types::{CoverageFlags, CoveragePoint, DatasetMetadata};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a coverage query.
///
/// All three cases are valid terminal outcomes, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageResult {
    /// The nearest known sample's per-generation flags.
    Coverage(CoverageFlags),
    /// The coordinate falls outside the operator's mapped area.
    OutsideArea,
    /// The located tile has no candidate samples at all.
    NoDataNearby,
}

impl fmt::Display for CoverageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageResult::Coverage(flags) => write!(
                f,
                "2G: {}, 3G: {}, 4G: {}",
                flags.has_2g, flags.has_3g, flags.has_4g
            ),
            CoverageResult::OutsideArea => write!(f, "Coordinate outside of geographic limit"),
            CoverageResult::NoDataNearby => write!(f, "No coverage data in this area"),
        }
    }
}

/// One operator's coverage data: the ordered point vector, its coordinate
/// range metadata and the tile tree built over it.
///
/// Created once by [`crate::DatasetBuilder`] (or loaded from a persisted
/// document) and read-only thereafter; queries take `&self` and the type is
/// plain owned data, so it can be shared freely across threads.
///
/// Serialized field names (`metadata` / `results` / `map`) match the
/// persisted operator documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Coordinate ranges and point count.
    pub metadata: DatasetMetadata,
    /// The ordered point vector all tile indices refer to.
    pub results: Vec<CoveragePoint>,
    /// Root tile of the index.
    pub map: Tile,
}

impl Dataset {
    /// Answer a coverage query for one coordinate.
    ///
    /// Locates the leaf tile containing the coordinate, gathers the leaf's
    /// bounded candidate set and resolves the nearest sample. Never fails:
    /// every outcome is a [`CoverageResult`] value.
    ///
    /// # Examples
    ///
    /// ```
    /// use covgrid::{CoverageResult, DatasetBuilder, TileConfig};
    /// use covgrid_types::{Coords, CoverageFlags};
    /// use geo::Point;
    ///
    /// let dataset = DatasetBuilder::new(TileConfig::default().with_min_set(1))
    ///     .extent((0.0, 1.0), (0.0, 1.0))
    ///     .add(Coords::new(0.5, 0.5), CoverageFlags::new(true, true, false))
    ///     .build()?;
    ///
    /// match dataset.query(Point::new(0.5, 0.5)) {
    ///     CoverageResult::Coverage(flags) => assert!(flags.has_2g),
    ///     other => panic!("unexpected outcome: {other}"),
    /// }
    /// assert_eq!(dataset.query(Point::new(5.0, 5.0)), CoverageResult::OutsideArea);
    /// # Ok::<(), covgrid::CovGridError>(())
    /// ```
    pub fn query(&self, coordinate: Point<f64>) -> CoverageResult {
        let coords = (coordinate.x(), coordinate.y());
        let Some(leaf) = self.map.locate(coords) else {
            return CoverageResult::OutsideArea;
        };

        match nearest(leaf.candidate_set(), &self.results, coordinate) {
            Some(index) => CoverageResult::Coverage(self.results[index as usize].flags()),
            None => CoverageResult::NoDataNearby,
        }
    }

    /// Number of points in the dataset.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if the dataset holds no points.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The stored points, in index order.
    pub fn points(&self) -> &[CoveragePoint] {
        &self.results
    }

    /// Root tile of the index.
    pub fn root(&self) -> &Tile {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DatasetBuilder;
    use crate::config::TileConfig;
    use covgrid_types::Coords;

    fn small_dataset() -> Dataset {
        let mut builder = DatasetBuilder::new(
            TileConfig::default()
                .with_max_inner(2)
                .with_max_outer(2)
                .with_min_set(1),
        )
        .extent((0.0, 1.0), (0.0, 1.0));
        for (longitude, latitude, has_4g) in [
            (0.1, 0.1, true),
            (0.12, 0.11, false),
            (0.13, 0.09, true),
            (0.11, 0.12, false),
            (0.09, 0.1, true),
        ] {
            builder = builder.add(
                Coords::new(longitude, latitude),
                CoverageFlags::new(true, true, has_4g),
            );
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_query_returns_nearest_flags() {
        let dataset = small_dataset();
        match dataset.query(Point::new(0.1, 0.1)) {
            CoverageResult::Coverage(flags) => {
                assert!(flags.has_2g);
                assert!(flags.has_3g);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_query_outside_mapped_area() {
        let dataset = small_dataset();
        assert_eq!(
            dataset.query(Point::new(2.0, 2.0)),
            CoverageResult::OutsideArea
        );
        assert_eq!(
            dataset.query(Point::new(-0.5, 0.5)),
            CoverageResult::OutsideArea
        );
    }

    #[test]
    fn test_query_no_data_nearby() {
        // All points cluster near one corner; the tree subdivides and some
        // far-corner leaf ends up with no candidates at all.
        let dataset = small_dataset();
        assert!(!dataset.map.is_leaf());
        assert_eq!(
            dataset.query(Point::new(0.99, 0.99)),
            CoverageResult::NoDataNearby
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CoverageResult::OutsideArea.to_string(),
            "Coordinate outside of geographic limit"
        );
        assert_eq!(
            CoverageResult::NoDataNearby.to_string(),
            "No coverage data in this area"
        );
    }
}
