use serde::{Deserialize, Serialize};

/// A closed value range along one dimension.
///
/// Serializes with the document field names `min` / `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    #[serde(rename = "min")]
    pub minimal: f64,
    #[serde(rename = "max")]
    pub maximal: f64,
}

impl MinMax {
    /// Create a new range.
    pub fn new(minimal: f64, maximal: f64) -> Self {
        Self { minimal, maximal }
    }

    /// A range that any observed value will tighten.
    pub fn empty() -> Self {
        Self {
            minimal: f64::INFINITY,
            maximal: f64::NEG_INFINITY,
        }
    }

    /// Widen the range to include `value`.
    pub fn expand(&mut self, value: f64) {
        self.minimal = self.minimal.min(value);
        self.maximal = self.maximal.max(value);
    }

    /// Width of the range, negative while empty.
    pub fn width(&self) -> f64 {
        self.maximal - self.minimal
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::empty()
    }
}

/// Coordinate-range metadata for one operator's dataset.
///
/// Serializes with the document field names `long` / `lat` / `num`.
///
/// # Examples
///
/// ```
/// use covgrid_types::DatasetMetadata;
///
/// let mut metadata = DatasetMetadata::default();
/// metadata.record(2.35, 48.85);
/// metadata.record(-1.55, 47.22);
/// assert_eq!(metadata.num, 2);
/// assert_eq!(metadata.longitude.minimal, -1.55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Observed longitude range in degrees.
    #[serde(rename = "long")]
    pub longitude: MinMax,
    /// Observed latitude range in degrees.
    #[serde(rename = "lat")]
    pub latitude: MinMax,
    /// Number of points in the dataset.
    pub num: usize,
}

impl DatasetMetadata {
    /// Fold one observed coordinate into the metadata.
    pub fn record(&mut self, longitude: f64, latitude: f64) {
        self.longitude.expand(longitude);
        self.latitude.expand(latitude);
        self.num += 1;
    }
}
