//! CALM architecture graph synthesis
//!
//! Turns a [`FactTables`](calm_facts::FactTables) snapshot into a single FINOS
//! CALM document of services, data stores, external dependencies and the
//! relationships between them.
//!
//! # Core Concepts
//!
//! - [`slug`]: stable identifiers derived from display names
//! - [`OwnershipResolver`]: maps a class to the service that owns it
//! - [`GraphBuilder`]: fixed-order construction passes
//! - [`Document`]: the serialized graph
//!
//! # Example
//!
//! ```rust
//! use calm_facts::{DatabaseConnection, FactTables, ServiceEndpoint};
//! use calm_graph::{synthesize, RelationshipKind, SynthesisConfig};
//!
//! let facts = FactTables::new()
//!     .with_rows(vec![ServiceEndpoint::new(
//!         "com.shop.order.controller.OrderController",
//!         "GET",
//!         "/orders",
//!         "Spring",
//!     )])
//!     .with_rows(vec![DatabaseConnection::new("Order")
//!         .with_repository_class("com.shop.order.repository.OrderRepository")]);
//!
//! let document = synthesize(&facts, &SynthesisConfig::default()).unwrap();
//! let rel = document.relationship("order-controller-to-order-db").unwrap();
//! assert_eq!(rel.kind, RelationshipKind::Connects);
//! ```

#![warn(unreachable_pub)]

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod ownership;
pub mod slug;
pub mod synthesis;

// Re-exports
pub use builder::{GraphBuilder, WEB_CLIENT_ID};
pub use config::SynthesisConfig;
pub use document::{
    Document, Endpoint, Interface, Node, NodeKind, Relationship, RelationshipKind, CALM_SCHEMA,
};
pub use error::{SynthesisError, SynthesisResult};
pub use ownership::{package_of, packages_related, OwnershipResolver};
pub use synthesis::{render, synthesize, synthesize_json};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
