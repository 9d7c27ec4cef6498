//! Multi-operator container: datasets looked up by operator name.

use crate::dataset::{CoverageResult, Dataset};
use crate::error::{CovGridError, Result};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A read-only collection of per-operator datasets.
///
/// Keyed by operator name; ordered so that iteration, serialization and
/// [`CoverageStore::query_all`] output are deterministic. After loading,
/// the store is only read, so it can be shared across query threads behind an
/// `Arc` without locking.
///
/// # Examples
///
/// ```
/// use covgrid::{CoverageStore, DatasetBuilder, TileConfig};
/// use covgrid_types::{Coords, CoverageFlags};
/// use geo::Point;
///
/// let dataset = DatasetBuilder::new(TileConfig::default().with_min_set(1))
///     .extent((0.0, 1.0), (0.0, 1.0))
///     .add(Coords::new(0.5, 0.5), CoverageFlags::new(true, true, false))
///     .build()?;
///
/// let mut store = CoverageStore::new();
/// store.insert("Orange", dataset);
///
/// let result = store.query("Orange", Point::new(0.5, 0.5))?;
/// assert!(store.query("Unknown", Point::new(0.5, 0.5)).is_err());
/// # Ok::<(), covgrid::CovGridError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageStore {
    operators: BTreeMap<String, Dataset>,
}

impl CoverageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset under an operator name, replacing any previous
    /// dataset for that name.
    pub fn insert(&mut self, operator: impl Into<String>, dataset: Dataset) {
        self.operators.insert(operator.into(), dataset);
    }

    /// Look up one operator's dataset.
    pub fn get(&self, operator: &str) -> Option<&Dataset> {
        self.operators.get(operator)
    }

    /// Operator names in sorted order.
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Iterate over `(operator, dataset)` pairs in sorted operator order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dataset)> {
        self.operators
            .iter()
            .map(|(name, dataset)| (name.as_str(), dataset))
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// True if no operator is registered.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Answer a coverage query against one operator's dataset.
    ///
    /// Fails only for an unknown operator name; every geographic outcome is
    /// a [`CoverageResult`] value.
    pub fn query(&self, operator: &str, coordinate: Point<f64>) -> Result<CoverageResult> {
        let dataset = self
            .operators
            .get(operator)
            .ok_or_else(|| CovGridError::UnknownOperator(operator.to_string()))?;
        Ok(dataset.query(coordinate))
    }

    /// Answer a coverage query against every registered operator, in
    /// sorted operator order.
    pub fn query_all(&self, coordinate: Point<f64>) -> Vec<(&str, CoverageResult)> {
        self.operators
            .iter()
            .map(|(name, dataset)| (name.as_str(), dataset.query(coordinate)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DatasetBuilder;
    use crate::config::TileConfig;
    use covgrid_types::{CoverageFlags, Coords};

    fn dataset(longitude: f64, has_4g: bool) -> Dataset {
        DatasetBuilder::new(TileConfig::default().with_min_set(1))
            .extent((0.0, 10.0), (0.0, 10.0))
            .add(Coords::new(longitude, 5.0), CoverageFlags::new(true, true, has_4g))
            .add(Coords::new(longitude + 0.5, 5.5), CoverageFlags::new(true, false, has_4g))
            .build()
            .unwrap()
    }

    #[test]
    fn test_query_by_operator_name() {
        let mut store = CoverageStore::new();
        store.insert("Orange", dataset(2.0, true));
        store.insert("SFR", dataset(7.0, false));

        match store.query("Orange", Point::new(2.0, 5.0)).unwrap() {
            CoverageResult::Coverage(flags) => assert!(flags.has_4g),
            other => panic!("unexpected outcome: {other:?}"),
        }
        match store.query("SFR", Point::new(7.0, 5.0)).unwrap() {
            CoverageResult::Coverage(flags) => assert!(!flags.has_4g),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_operator() {
        let store = CoverageStore::new();
        let err = store.query("Free", Point::new(0.0, 0.0));
        assert!(matches!(err, Err(CovGridError::UnknownOperator(name)) if name == "Free"));
    }

    #[test]
    fn test_query_all_sorted_order() {
        let mut store = CoverageStore::new();
        store.insert("SFR", dataset(2.0, true));
        store.insert("Bouygue", dataset(2.0, true));
        store.insert("Orange", dataset(2.0, true));

        let results = store.query_all(Point::new(2.0, 5.0));
        let names: Vec<&str> = results.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Bouygue", "Orange", "SFR"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = CoverageStore::new();
        store.insert("Orange", dataset(2.0, false));
        store.insert("Orange", dataset(2.0, true));
        assert_eq!(store.len(), 1);

        match store.query("Orange", Point::new(2.0, 5.0)).unwrap() {
            CoverageResult::Coverage(flags) => assert!(flags.has_4g),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
