//! Error types for document regeneration

use crate::state::DocumentPhase;
use std::path::PathBuf;

/// Errors while regenerating the document
#[derive(Debug, thiserror::Error)]
pub enum RegenError {
    /// IO error on the document or its temporary sibling
    #[error("io error on {path}: {source}")]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Planned action would break the document lifecycle
    #[error("illegal document transition: {from} -> {to}")]
    IllegalTransition {
        /// Phase before the action
        from: DocumentPhase,
        /// Phase the action would produce
        to: DocumentPhase,
    },
}

impl RegenError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for regeneration operations
pub type RegenResult<T> = Result<T, RegenError>;
