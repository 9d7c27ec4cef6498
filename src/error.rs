//! Error types for covgrid.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CovGridError>;

/// Errors produced by index construction, operator lookup and persistence.
///
/// Query outcomes such as "outside mapped area" are *not* errors; they are
/// values of [`crate::CoverageResult`]. A well-formed query against a built
/// tree never fails.
#[derive(Error, Debug)]
pub enum CovGridError {
    /// The extent handed to the builder cannot host a tile tree.
    #[error("invalid extent: {0}")]
    InvalidExtent(String),

    /// Construction parameters are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The builder was asked to index an empty point set.
    #[error("cannot build an index over an empty point set")]
    EmptyDataset,

    /// No dataset is registered under the requested operator name.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// I/O failure while persisting or loading a dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure on a persisted document.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Binary snapshot (de)serialization failure.
    #[cfg(feature = "snapshot")]
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}
