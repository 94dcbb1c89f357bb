//! Document lifecycle
//!
//! ```text
//! Absent ──► Placeholder ──► Populated ◄─┐
//!                 │               └──────┘
//!                 └──► Deleted
//! ```

use crate::error::{RegenError, RegenResult};
use std::fmt;

/// Payload reserving the document path until there is something to write
pub const PLACEHOLDER: &str = "{}";

/// Phase of the managed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentPhase {
    /// Nothing at the path
    Absent,
    /// Placeholder payload or blank content
    Placeholder,
    /// A real document
    Populated,
    /// Placeholder removed for lack of facts
    Deleted,
}

impl DocumentPhase {
    /// Phase implied by the content currently at the path
    ///
    /// Never yields [`Deleted`](Self::Deleted); a deleted document reads as
    /// absent.
    #[must_use]
    pub fn classify(content: Option<&str>) -> Self {
        match content {
            None => Self::Absent,
            Some(text) if is_placeholder(text) => Self::Placeholder,
            Some(_) => Self::Populated,
        }
    }

    /// Whether no further transition is possible
    #[must_use]
    pub fn is_terminal(self) -> bool {
        allowed_transitions(self).is_empty()
    }
}

impl fmt::Display for DocumentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Placeholder => "placeholder",
            Self::Populated => "populated",
            Self::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// Whether content is the placeholder payload or blank
#[must_use]
pub fn is_placeholder(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.is_empty() || trimmed == PLACEHOLDER
}

/// Validates a lifecycle transition
///
/// # Errors
/// Returns `RegenError::IllegalTransition` if `to` is not reachable from `from`
pub fn validate_transition(from: DocumentPhase, to: DocumentPhase) -> RegenResult<()> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(RegenError::IllegalTransition { from, to })
    }
}

/// Phases reachable from `from` in one cycle
#[must_use]
pub fn allowed_transitions(from: DocumentPhase) -> Vec<DocumentPhase> {
    use DocumentPhase::*;
    match from {
        Absent => vec![Absent, Placeholder],
        Placeholder => vec![Placeholder, Populated, Deleted],
        Populated => vec![Populated],
        Deleted => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_content() {
        assert_eq!(DocumentPhase::classify(None), DocumentPhase::Absent);
        assert_eq!(DocumentPhase::classify(Some("{}")), DocumentPhase::Placeholder);
        assert_eq!(DocumentPhase::classify(Some(" {}\n")), DocumentPhase::Placeholder);
        assert_eq!(DocumentPhase::classify(Some("")), DocumentPhase::Placeholder);
        assert_eq!(DocumentPhase::classify(Some("{\"nodes\":[]}")), DocumentPhase::Populated);
    }

    #[test]
    fn populated_never_deleted() {
        assert!(validate_transition(DocumentPhase::Populated, DocumentPhase::Deleted).is_err());
        assert!(validate_transition(DocumentPhase::Populated, DocumentPhase::Placeholder).is_err());
    }

    #[test]
    fn deleted_is_terminal() {
        assert!(DocumentPhase::Deleted.is_terminal());
        assert!(!DocumentPhase::Placeholder.is_terminal());
    }

    #[test]
    fn display_names() {
        assert_eq!(DocumentPhase::Placeholder.to_string(), "placeholder");
    }
}
