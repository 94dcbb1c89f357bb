//! Synthesis entry points
//!
//! [`synthesize`] is pure: the same snapshot always yields the same document,
//! and [`render`] of that document is byte-identical across calls. That
//! property is what lets regeneration skip unchanged writes.

use crate::builder::GraphBuilder;
use crate::config::SynthesisConfig;
use crate::document::Document;
use crate::error::SynthesisResult;
use calm_facts::FactTables;

/// Build the architecture document for a snapshot
///
/// Returns `None` when the snapshot has no endpoints, database connections,
/// external calls or messaging connections; data assets, security and
/// server settings alone do not make an architecture.
#[must_use]
pub fn synthesize(facts: &FactTables, config: &SynthesisConfig) -> Option<Document> {
    if !facts.has_architectural_facts() {
        tracing::debug!(rows = facts.total_rows(), "no architectural facts, nothing to synthesize");
        return None;
    }
    Some(GraphBuilder::new(facts, config).run())
}

/// Pretty-print a document as JSON
///
/// # Errors
/// Returns error if serialization fails
pub fn render(document: &Document) -> SynthesisResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Synthesize and render in one step
///
/// A render failure is logged and reported as "no document" so callers never
/// see a partial text.
#[must_use]
pub fn synthesize_json(facts: &FactTables, config: &SynthesisConfig) -> Option<String> {
    let document = synthesize(facts, config)?;
    match render(&document) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!(error = %e, "failed to render architecture document");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calm_facts::{DataAsset, SecurityConfiguration, ServerConfiguration, ServiceEndpoint};

    #[test]
    fn empty_snapshot_has_no_document() {
        assert!(synthesize(&FactTables::new(), &SynthesisConfig::default()).is_none());
    }

    #[test]
    fn ambient_tables_alone_have_no_document() {
        let facts = FactTables::new()
            .with_rows(vec![DataAsset::new("Order", "Entity")])
            .with_rows(vec![SecurityConfiguration::cors(Some("*"))])
            .with_rows(vec![ServerConfiguration::new(8080, false)]);
        assert!(synthesize_json(&facts, &SynthesisConfig::default()).is_none());
    }

    #[test]
    fn render_is_pretty_and_ordered() {
        let facts = FactTables::new().with_rows(vec![ServiceEndpoint::new(
            "a.PingController",
            "GET",
            "/ping",
            "Spring",
        )]);
        let text = synthesize_json(&facts, &SynthesisConfig::default()).unwrap();

        assert!(text.starts_with("{\n  \"nodes\": ["));
        let nodes = text.find("\"nodes\"").unwrap();
        let relationships = text.find("\"relationships\": []").unwrap();
        let schema = text.find("\"$schema\"").unwrap();
        assert!(nodes < relationships && relationships < schema);
        assert!(!text.contains("null"));
    }
}
