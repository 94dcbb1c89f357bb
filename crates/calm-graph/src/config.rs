//! Synthesis configuration

use crate::document::CALM_SCHEMA;
use serde::{Deserialize, Serialize};

/// Knobs for graph synthesis
///
/// All fields have defaults, so a partial TOML table is enough:
///
/// ```toml
/// [synthesis]
/// default_port = 9090
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Schema URI stamped on the document
    pub schema: String,
    /// Service protocol when no server configuration is known
    pub default_protocol: String,
    /// Service port when no server configuration is known
    pub default_port: u16,
    /// Endpoints listed in a synthesized service description
    pub endpoint_summary_limit: usize,
}

impl SynthesisConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default protocol
    #[inline]
    #[must_use]
    pub fn with_default_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.default_protocol = protocol.into();
        self
    }

    /// With default port
    #[inline]
    #[must_use]
    pub fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    /// With endpoint summary limit
    #[inline]
    #[must_use]
    pub fn with_endpoint_summary_limit(mut self, limit: usize) -> Self {
        self.endpoint_summary_limit = limit;
        self
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            schema: CALM_SCHEMA.to_string(),
            default_protocol: "HTTP".to_string(),
            default_port: 8080,
            endpoint_summary_limit: 5,
        }
    }
}
