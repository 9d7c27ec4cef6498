//! Persisted dataset documents.
//!
//! A store serializes to one JSON document holding every operator's
//! dataset: metadata, the ordered point list and the tile tree, with the
//! field names defined by the individual types. The format round-trips
//! losslessly, so a reloaded store answers every query identically to the
//! one that was saved.
//!
//! With the `snapshot` feature (default), a compact bincode encoding of the
//! same structure is available for faster startup.

use crate::error::Result;
use crate::store::CoverageStore;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

impl CoverageStore {
    /// Write the store as a JSON document.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;

        log::info!(
            "saved coverage store with {} operator(s) to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a store from a JSON document.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let store: CoverageStore = serde_json::from_reader(reader)?;

        for (operator, dataset) in store.iter() {
            log::info!(
                "loaded operator {operator}: {} points, {} tiles",
                dataset.len(),
                dataset.root().tile_count()
            );
        }
        Ok(store)
    }

    /// Write the store as a compact binary snapshot.
    #[cfg(feature = "snapshot")]
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;

        log::info!(
            "saved coverage snapshot with {} operator(s) to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a store from a binary snapshot.
    #[cfg(feature = "snapshot")]
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let store: CoverageStore = bincode::deserialize_from(reader)?;

        log::info!(
            "loaded coverage snapshot with {} operator(s) from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::DatasetBuilder;
    use crate::config::TileConfig;
    use crate::store::CoverageStore;
    use covgrid_types::{CoverageFlags, Coords};
    use geo::Point;
    use tempfile::NamedTempFile;

    fn sample_store() -> CoverageStore {
        let mut store = CoverageStore::new();
        for (operator, offset) in [("Orange", 0.0), ("SFR", 0.3)] {
            let mut builder = DatasetBuilder::new(
                TileConfig::default()
                    .with_max_inner(2)
                    .with_max_outer(3)
                    .with_min_set(1),
            )
            .extent((0.0, 2.0), (0.0, 2.0));
            for i in 0..8 {
                builder = builder.add(
                    Coords::new(0.2 + offset + (i % 4) as f64 * 0.3, 0.2 + (i / 4) as f64 * 0.7),
                    CoverageFlags::new(true, i % 2 == 0, i % 3 == 0),
                );
            }
            store.insert(operator, builder.build().unwrap());
        }
        store
    }

    #[test]
    fn test_json_round_trip_identical_store() {
        let store = sample_store();
        let file = NamedTempFile::new().unwrap();

        store.save_json(file.path()).unwrap();
        let reloaded = CoverageStore::load_json(file.path()).unwrap();

        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_json_round_trip_identical_queries() {
        let store = sample_store();
        let file = NamedTempFile::new().unwrap();
        store.save_json(file.path()).unwrap();
        let reloaded = CoverageStore::load_json(file.path()).unwrap();

        for x in [-0.5, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0] {
            for y in [-0.5, 0.2, 0.9, 1.99, 2.5] {
                let coordinate = Point::new(x, y);
                assert_eq!(
                    store.query_all(coordinate),
                    reloaded.query_all(coordinate),
                    "diverging answer at ({x}, {y})"
                );
            }
        }
    }

    #[cfg(feature = "snapshot")]
    #[test]
    fn test_snapshot_round_trip() {
        let store = sample_store();
        let file = NamedTempFile::new().unwrap();

        store.save_snapshot(file.path()).unwrap();
        let reloaded = CoverageStore::load_snapshot(file.path()).unwrap();

        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_json_preserves_coordinate_bits() {
        // Coordinates produced by arithmetic often have no shortest decimal
        // form (0.2 + 3.0 * 0.3 is one ulp below 1.1); a reload must
        // reproduce every f64 bit for bit, not just to the nearest short
        // decimal.
        let tricky: f64 = 0.2 + 3.0 * 0.3;
        assert_ne!(tricky.to_bits(), 1.1f64.to_bits());

        let mut store = CoverageStore::new();
        let dataset = DatasetBuilder::new(TileConfig::default().with_min_set(1))
            .extent((0.0, 2.0), (0.0, 2.0))
            .add(Coords::new(tricky, 0.7), CoverageFlags::new(true, false, true))
            .add(Coords::new(0.4, 1.3), CoverageFlags::new(true, true, false))
            .build()
            .unwrap();
        store.insert("Orange", dataset);

        let file = NamedTempFile::new().unwrap();
        store.save_json(file.path()).unwrap();
        let reloaded = CoverageStore::load_json(file.path()).unwrap();

        let maximal = reloaded.get("Orange").unwrap().metadata.longitude.maximal;
        assert_eq!(maximal.to_bits(), tricky.to_bits());
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let missing = std::env::temp_dir().join("covgrid_no_such_store.json");
        assert!(CoverageStore::load_json(missing).is_err());
    }
}
