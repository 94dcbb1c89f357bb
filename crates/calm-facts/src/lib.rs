//! CALM fact tables
//!
//! Typed access to the fact tables that discovery passes produce about a
//! codebase: endpoints, data access, outbound calls, messaging, server and
//! security settings, data assets and project identity.
//!
//! # Core Concepts
//!
//! - [`TableKind`]: closed enumeration of table identities
//! - [`FactRow`]: sealed trait tying each row type to its table
//! - [`FactTables`]: the snapshot registry the synthesizer reads from
//! - [`snapshot`]: lenient JSON decoding of a whole snapshot
//!
//! # Example
//!
//! ```rust
//! use calm_facts::{DatabaseConnection, FactTables, TableKind};
//!
//! let mut tables = FactTables::new();
//! tables.insert(DatabaseConnection::new("Order"));
//!
//! assert_eq!(tables.len_of(TableKind::DatabaseConnections), 1);
//! assert!(tables.has_architectural_facts());
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod kind;
pub mod rows;
pub mod snapshot;
pub mod tables;

// Re-exports
pub use error::{FactError, FactResult};
pub use kind::{TableKind, UnknownTable};
pub use rows::{
    simple_name, ClassDescription, DataAsset, DatabaseConnection, ExternalServiceCall,
    MessagingConnection, MessagingRole, MethodCall, ProjectMetadata, SecurityConfiguration,
    ServerConfiguration, ServiceEndpoint,
};
pub use snapshot::LoadReport;
pub use tables::{FactRow, FactTable, FactTables};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building fact snapshots
    pub use crate::{
        ClassDescription, DataAsset, DatabaseConnection, ExternalServiceCall, FactTables,
        MessagingConnection, ProjectMetadata, SecurityConfiguration, ServerConfiguration,
        ServiceEndpoint, TableKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
