//! # covgrid-types
//!
//! Core data types for the covgrid coverage index.
//!
//! This crate provides the serializable value types shared between the index
//! builder and the serving process:
//!
//! - **Point types**: `Coords`, `CoverageFlags`, `CoveragePoint`
//! - **Extent types**: `MinMax`, `DatasetMetadata`
//!
//! All types are serializable with Serde and keep the field names of the
//! persisted operator documents (`long`/`lat`, `2G`/`3G`/`4G`, `min`/`max`).
//!
//! ## Examples
//!
//! ```rust
//! use covgrid_types::{Coords, CoverageFlags, CoveragePoint};
//!
//! let point = CoveragePoint::new(
//!     Coords::new(2.3522, 48.8566),
//!     CoverageFlags::new(true, true, false),
//! );
//! assert!(point.flags().has_3g);
//! ```

pub mod extent;
pub mod point;

pub use extent::{DatasetMetadata, MinMax};
pub use point::{Coords, CoverageFlags, CoveragePoint};
