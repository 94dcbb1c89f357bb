//! Error types for graph synthesis
//!
//! Building the graph itself never fails; bad rows are skipped and unowned
//! facts lose only their relationship. What remains is rendering.

/// Errors while producing the document text
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// Document could not be serialized
    #[error("failed to serialize architecture document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;
