//! Construction parameters for the tile tree.

use crate::error::{CovGridError, Result};
use crate::geometry::DEFAULT_PADDING_FACTOR;
use serde::{Deserialize, Serialize};

/// Tunable parameters for one tile-tree build.
///
/// The thresholds steer the leaf/subdivide decision at every recursion
/// level; the forced-split countdowns make the top levels of the tree
/// subdivide unconditionally so a skewed point distribution cannot produce
/// a degenerate shallow tree.
///
/// Easily loadable from JSON:
///
/// ```rust
/// use covgrid::TileConfig;
///
/// let json = r#"{
///     "max_inner": 50,
///     "max_outer": 150,
///     "min_set": 10,
///     "force_split_inner": 1,
///     "force_split_outer": 2
/// }"#;
/// let config: TileConfig = serde_json::from_str(json).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileConfig {
    /// A tile holding more than this many inner points subdivides.
    #[serde(default = "TileConfig::default_max_inner")]
    pub max_inner: usize,

    /// A tile holding more than this many outer (boundary fallback) points
    /// subdivides.
    #[serde(default = "TileConfig::default_max_outer")]
    pub max_outer: usize,

    /// A tile whose combined inner+outer set is at most this size stays a
    /// leaf regardless of the thresholds above.
    #[serde(default = "TileConfig::default_min_set")]
    pub min_set: usize,

    /// Number of top recursion levels that skip inner-bound filtering and
    /// subdivide unconditionally.
    #[serde(default)]
    pub force_split_inner: u32,

    /// Number of top recursion levels that skip outer-bound filtering and
    /// subdivide unconditionally.
    #[serde(default)]
    pub force_split_outer: u32,

    /// Outer padding on each side of a tile, as a multiple of the inner
    /// interval width.
    #[serde(default = "TileConfig::default_padding_factor")]
    pub padding_factor: f64,
}

impl TileConfig {
    const fn default_max_inner() -> usize {
        6
    }

    const fn default_max_outer() -> usize {
        20
    }

    const fn default_min_set() -> usize {
        3
    }

    const fn default_padding_factor() -> f64 {
        DEFAULT_PADDING_FACTOR
    }

    /// Set the inner-set subdivision threshold.
    pub fn with_max_inner(mut self, max_inner: usize) -> Self {
        self.max_inner = max_inner;
        self
    }

    /// Set the outer-set subdivision threshold.
    pub fn with_max_outer(mut self, max_outer: usize) -> Self {
        self.max_outer = max_outer;
        self
    }

    /// Set the minimum combined set size below which a tile stays a leaf.
    pub fn with_min_set(mut self, min_set: usize) -> Self {
        self.min_set = min_set;
        self
    }

    /// Set the forced-split countdowns for the top levels of the tree.
    pub fn with_forced_splits(mut self, inner: u32, outer: u32) -> Self {
        self.force_split_inner = inner;
        self.force_split_outer = outer;
        self
    }

    /// Set the outer padding factor.
    pub fn with_padding_factor(mut self, padding_factor: f64) -> Self {
        self.padding_factor = padding_factor;
        self
    }

    /// Validate parameter values.
    ///
    /// Called by the dataset builder before any tree construction; invalid
    /// parameters are reported up front and never tolerated silently.
    pub fn validate(&self) -> Result<()> {
        if self.min_set == 0 {
            return Err(CovGridError::InvalidConfig(
                "min_set must be greater than zero".into(),
            ));
        }

        if !self.padding_factor.is_finite() || self.padding_factor <= 0.0 {
            return Err(CovGridError::InvalidConfig(format!(
                "padding factor must be finite and positive, got {}",
                self.padding_factor
            )));
        }

        Ok(())
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            max_inner: Self::default_max_inner(),
            max_outer: Self::default_max_outer(),
            min_set: Self::default_min_set(),
            force_split_inner: 0,
            force_split_outer: 0,
            padding_factor: Self::default_padding_factor(),
        }
    }
}
