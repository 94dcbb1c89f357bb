//! Regeneration Controller
//!
//! Wraps the pure synthesis core with the placeholder lifecycle. The first
//! cycle only reserves the path; later cycles either populate it, delete an
//! unused placeholder, or leave it alone when nothing changed.

use crate::config::RegenConfig;
use crate::error::RegenResult;
use crate::state::{validate_transition, DocumentPhase, PLACEHOLDER};
use crate::store::DocumentStore;
use calm_facts::FactTables;
use calm_graph::{synthesize_json, SynthesisConfig};

/// What one cycle does to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenAction {
    /// Write the placeholder payload
    CreatePlaceholder,
    /// Replace the content
    Write(String),
    /// Remove the placeholder
    Delete,
    /// Leave the document as it is
    Unchanged,
}

impl RegenAction {
    /// Whether applying the action touches the store
    #[must_use]
    pub fn changes_store(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Phase the document is in after the action
    #[must_use]
    pub fn phase_after(&self, from: DocumentPhase) -> DocumentPhase {
        match self {
            Self::CreatePlaceholder => DocumentPhase::Placeholder,
            Self::Write(_) => DocumentPhase::Populated,
            Self::Delete => DocumentPhase::Deleted,
            Self::Unchanged => from,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::CreatePlaceholder => "create-placeholder",
            Self::Write(_) => "write",
            Self::Delete => "delete",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Decide the action for one cycle
///
/// `synthesize` runs only when the document already exists; it returns the
/// rendered document, or `None` when there is nothing to generate.
pub fn plan(
    current: Option<&str>,
    first_cycle: bool,
    synthesize: impl FnOnce() -> Option<String>,
) -> RegenAction {
    let Some(current) = current else {
        return if first_cycle {
            RegenAction::CreatePlaceholder
        } else {
            RegenAction::Unchanged
        };
    };

    match synthesize() {
        Some(text) if text != current => RegenAction::Write(text),
        Some(_) => RegenAction::Unchanged,
        None if DocumentPhase::classify(Some(current)) == DocumentPhase::Placeholder => {
            RegenAction::Delete
        }
        None => RegenAction::Unchanged,
    }
}

/// Drives one document through its lifecycle
#[derive(Debug)]
pub struct Regenerator<S: DocumentStore> {
    store: S,
    config: RegenConfig,
    synthesis: SynthesisConfig,
    cycles: usize,
    phase: Option<DocumentPhase>,
}

impl<S: DocumentStore> Regenerator<S> {
    /// Create regenerator over a store
    pub fn new(store: S, config: RegenConfig, synthesis: SynthesisConfig) -> Self {
        Self {
            store,
            config,
            synthesis,
            cycles: 0,
            phase: None,
        }
    }

    /// Cycles run so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Phase after the last cycle, `None` before the first
    pub fn phase(&self) -> Option<DocumentPhase> {
        self.phase
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the regenerator, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Run one cycle against the full fact snapshot
    ///
    /// # Errors
    /// Returns error if the store fails or the action would break the
    /// lifecycle; in both cases the document is left as it was.
    pub fn run_cycle(&mut self, facts: &FactTables) -> RegenResult<RegenAction> {
        let path = self.config.path.clone();
        let current = self.store.read(&path)?;

        let from = match (self.phase, current.as_deref()) {
            (Some(DocumentPhase::Deleted), None) => DocumentPhase::Deleted,
            (_, content) => DocumentPhase::classify(content),
        };

        let action = if from.is_terminal() {
            RegenAction::Unchanged
        } else {
            plan(current.as_deref(), self.cycles == 0, || {
                synthesize_json(facts, &self.synthesis)
            })
        };

        let to = action.phase_after(from);
        if action.changes_store() {
            validate_transition(from, to)?;
            match &action {
                RegenAction::CreatePlaceholder => self.store.write(&path, PLACEHOLDER)?,
                RegenAction::Write(text) => self.store.write(&path, text)?,
                RegenAction::Delete => self.store.delete(&path)?,
                RegenAction::Unchanged => {}
            }
        }

        self.cycles += 1;
        self.phase = Some(to);
        tracing::info!(
            cycle = self.cycles,
            action = action.label(),
            %from,
            %to,
            path = %path.display(),
            "regeneration cycle"
        );
        Ok(action)
    }

    /// Run cycles until one changes nothing, at most `max_cycles`
    ///
    /// Returns the actions taken, the final `Unchanged` included.
    ///
    /// # Errors
    /// Returns the first error from [`run_cycle`](Self::run_cycle)
    pub fn run_until_stable(
        &mut self,
        facts: &FactTables,
        max_cycles: usize,
    ) -> RegenResult<Vec<RegenAction>> {
        let mut actions = Vec::new();
        for _ in 0..max_cycles {
            let action = self.run_cycle(facts)?;
            let settled = !action.changes_store();
            actions.push(action);
            if settled {
                return Ok(actions);
            }
        }
        tracing::warn!(max_cycles, "document did not settle within the cycle bound");
        Ok(actions)
    }
}
