//! Settings file
//!
//! An optional TOML file overlays the library defaults:
//!
//! ```toml
//! [synthesis]
//! default_protocol = "HTTPS"
//! default_port = 8443
//!
//! [regen]
//! path = "docs/calm.json"
//! max_cycles = 3
//! ```

use anyhow::{Context, Result};
use calm_graph::SynthesisConfig;
use calm_regen::RegenConfig;
use serde::Deserialize;
use std::path::Path;

/// Combined configuration of both stages
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) synthesis: SynthesisConfig,
    pub(crate) regen: RegenConfig,
}

impl Settings {
    /// Load from a TOML file, or defaults when no file is given
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_tables_overlay_defaults() {
        let settings = Settings::parse(
            r#"
            [synthesis]
            default_port = 9090

            [regen]
            path = "docs/calm.json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.synthesis.default_port, 9090);
        assert_eq!(settings.synthesis.default_protocol, "HTTP");
        assert_eq!(settings.regen.path, Path::new("docs/calm.json"));
        assert_eq!(settings.regen.max_cycles, RegenConfig::default().max_cycles);
    }

    #[test]
    fn unreadable_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("calm.toml");
        let err = Settings::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("calm.toml"));
    }

    #[test]
    fn bad_types_rejected() {
        assert!(Settings::parse("[synthesis]\ndefault_port = \"x\"").is_err());
    }
}
