use geo::Point;
use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in floating-point degrees.
///
/// Serializes with the short field names used by the persisted operator
/// documents (`long` / `lat`).
///
/// # Examples
///
/// ```
/// use covgrid_types::Coords;
///
/// let paris = Coords::new(2.3522, 48.8566);
/// assert_eq!(paris.longitude, 2.3522);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// Longitude in degrees.
    #[serde(rename = "long")]
    pub longitude: f64,
    /// Latitude in degrees.
    #[serde(rename = "lat")]
    pub latitude: f64,
}

impl Coords {
    /// Create a new coordinate pair.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Get the coordinates as an `(x, y)` tuple.
    pub fn to_tuple(self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

impl From<Point<f64>> for Coords {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<Coords> for Point<f64> {
    fn from(coords: Coords) -> Self {
        coords.to_point()
    }
}

/// Per-generation coverage availability at a location.
///
/// One boolean per technology generation, serialized with the document
/// field names `2G`, `3G` and `4G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageFlags {
    /// 2G (GSM) coverage.
    #[serde(rename = "2G")]
    pub has_2g: bool,
    /// 3G (UMTS) coverage.
    #[serde(rename = "3G")]
    pub has_3g: bool,
    /// 4G (LTE) coverage.
    #[serde(rename = "4G")]
    pub has_4g: bool,
}

impl CoverageFlags {
    /// Create a new set of coverage flags.
    pub fn new(has_2g: bool, has_3g: bool, has_4g: bool) -> Self {
        Self {
            has_2g,
            has_3g,
            has_4g,
        }
    }

    /// True if no generation is available at this location.
    pub fn is_empty(&self) -> bool {
        !(self.has_2g || self.has_3g || self.has_4g)
    }
}

/// A sampled coverage measurement: a coordinate plus per-generation flags.
///
/// Points are immutable once ingested; the index references them only by
/// position in the per-operator point vector. The generation flags sit
/// directly on the point record so the serialized shape matches the
/// persisted documents (`{"coords": {...}, "2G": ..., "3G": ..., "4G": ...}`).
///
/// # Examples
///
/// ```
/// use covgrid_types::{Coords, CoverageFlags, CoveragePoint};
///
/// let point = CoveragePoint::new(
///     Coords::new(-1.5536, 47.2184),
///     CoverageFlags::new(true, true, true),
/// );
/// assert_eq!(point.coords().latitude, 47.2184);
/// assert!(point.flags().has_4g);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoveragePoint {
    /// The sampled location.
    pub coords: Coords,
    /// 2G (GSM) coverage.
    #[serde(rename = "2G")]
    pub has_2g: bool,
    /// 3G (UMTS) coverage.
    #[serde(rename = "3G")]
    pub has_3g: bool,
    /// 4G (LTE) coverage.
    #[serde(rename = "4G")]
    pub has_4g: bool,
}

impl CoveragePoint {
    /// Create a new coverage point.
    pub fn new(coords: Coords, flags: CoverageFlags) -> Self {
        Self {
            coords,
            has_2g: flags.has_2g,
            has_3g: flags.has_3g,
            has_4g: flags.has_4g,
        }
    }

    /// Get the sampled location.
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Get the coverage flags as a standalone value.
    pub fn flags(&self) -> CoverageFlags {
        CoverageFlags::new(self.has_2g, self.has_3g, self.has_4g)
    }
}
