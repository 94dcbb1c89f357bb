//! Error types for fact snapshots
//!
//! Only whole-snapshot problems surface as errors. A single malformed row is
//! dropped with a warning instead.

use std::path::PathBuf;

/// Errors while loading a fact snapshot
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// IO error reading the snapshot file
    #[error("io error reading {path}: {source}")]
    Io {
        /// Snapshot file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot text is not valid JSON
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an object keyed by table name
    #[error("snapshot must be a json object keyed by table name, got {0}")]
    NotAnObject(&'static str),

    /// A table entry is not an array of rows
    #[error("table '{table}' must be a json array, got {found}")]
    TableNotArray {
        /// Table name as written in the snapshot
        table: String,
        /// JSON type found instead
        found: &'static str,
    },
}

impl FactError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for fact operations
pub type FactResult<T> = Result<T, FactError>;
