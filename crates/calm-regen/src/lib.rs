//! CALM document regeneration
//!
//! Keeps one architecture document in step with the fact snapshot across
//! repeated refresh cycles: reserve the path with a placeholder, populate it
//! once facts arrive, delete the placeholder if they never do, and skip writes
//! whose text would not change.
//!
//! # Example
//!
//! ```rust
//! use calm_graph::SynthesisConfig;
//! use calm_regen::{MemoryStore, RegenAction, RegenConfig, Regenerator};
//! use calm_facts::FactTables;
//!
//! let mut regen = Regenerator::new(
//!     MemoryStore::new(),
//!     RegenConfig::default(),
//!     SynthesisConfig::default(),
//! );
//! let facts = FactTables::new();
//!
//! assert_eq!(regen.run_cycle(&facts).unwrap(), RegenAction::CreatePlaceholder);
//! assert_eq!(regen.run_cycle(&facts).unwrap(), RegenAction::Delete);
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;

// Re-exports
pub use config::{RegenConfig, DEFAULT_DOCUMENT_PATH};
pub use controller::{plan, RegenAction, Regenerator};
pub use error::{RegenError, RegenResult};
pub use state::{allowed_transitions, validate_transition, DocumentPhase, PLACEHOLDER};
pub use store::{DocumentStore, FsStore, MemoryStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
