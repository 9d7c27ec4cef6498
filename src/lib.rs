//! Tile-tree spatial index for mobile network coverage lookups.
//!
//! Millions of sampled coverage points per operator are indexed offline
//! into a recursive quadrant partitioning ("tile tree"); the serving
//! process loads the result read-only and answers point queries by
//! descending to the leaf tile containing the coordinate and resolving the
//! nearest sample among a bounded candidate set.
//!
//! ```rust
//! use covgrid::{CoverageResult, CoverageStore, DatasetBuilder, TileConfig};
//! use covgrid_types::{Coords, CoverageFlags};
//! use geo::Point;
//!
//! let dataset = DatasetBuilder::new(TileConfig::default())
//!     .add(Coords::new(2.3522, 48.8566), CoverageFlags::new(true, true, true))
//!     .add(Coords::new(-1.5536, 47.2184), CoverageFlags::new(true, true, false))
//!     .add(Coords::new(5.3698, 43.2965), CoverageFlags::new(true, false, false))
//!     .build()?;
//!
//! let mut store = CoverageStore::new();
//! store.insert("Orange", dataset);
//!
//! match store.query("Orange", Point::new(2.35, 48.85))? {
//!     CoverageResult::Coverage(flags) => assert!(flags.has_2g),
//!     other => panic!("unexpected outcome: {other}"),
//! }
//! # Ok::<(), covgrid::CovGridError>(())
//! ```

pub mod builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod persistence;
pub mod query;
pub mod store;
pub mod tile;

pub use builder::DatasetBuilder;
pub use config::TileConfig;
pub use dataset::{CoverageResult, Dataset};
pub use error::{CovGridError, Result};
pub use geometry::{AxisRange, Bound, DEFAULT_PADDING_FACTOR};
pub use query::nearest;
pub use store::CoverageStore;
pub use tile::{PointIndex, Tile, TileContent};

pub use covgrid_types::{Coords, CoverageFlags, CoveragePoint, DatasetMetadata, MinMax};

pub use geo::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{CovGridError, Result};

    pub use crate::{CoverageResult, CoverageStore, Dataset, DatasetBuilder, TileConfig};

    pub use crate::{Coords, CoverageFlags, CoveragePoint};

    pub use geo::Point;
}
