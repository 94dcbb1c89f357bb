//! Regeneration configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the architecture document
pub const DEFAULT_DOCUMENT_PATH: &str = ".context/calm-architecture.json";

/// Where the document lives and how long to drive it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegenConfig {
    /// Document path, relative to the store root
    pub path: PathBuf,
    /// Upper bound on cycles in [`run_until_stable`](crate::Regenerator::run_until_stable)
    pub max_cycles: usize,
}

impl RegenConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With document path
    #[inline]
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// With cycle bound
    #[inline]
    #[must_use]
    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            max_cycles: 4,
        }
    }
}
