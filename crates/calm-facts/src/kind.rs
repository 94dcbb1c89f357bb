//! Table kinds
//!
//! Provides [`TableKind`], the closed set of fact tables the synthesizer
//! understands. The kebab-case names double as snapshot keys.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Identity of a fact table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    /// HTTP endpoints exposed by controller/resource classes
    ServiceEndpoints,
    /// Repositories, DAOs and the entities they persist
    DatabaseConnections,
    /// Outbound calls to services outside the codebase
    ExternalServiceCalls,
    /// Message producers and consumers
    MessagingConnections,
    /// Server port and TLS settings
    ServerConfiguration,
    /// Entities, DTOs and records of the data model
    DataAssets,
    /// Project identity from the build file
    ProjectMetadata,
    /// Security settings (CORS, OAuth2, ...)
    SecurityConfiguration,
    /// Free-text class descriptions
    ClassDescriptions,
    /// Method-to-method call edges
    MethodCalls,
}

impl TableKind {
    /// Every table kind, in declaration order
    pub const ALL: [TableKind; 10] = [
        TableKind::ServiceEndpoints,
        TableKind::DatabaseConnections,
        TableKind::ExternalServiceCalls,
        TableKind::MessagingConnections,
        TableKind::ServerConfiguration,
        TableKind::DataAssets,
        TableKind::ProjectMetadata,
        TableKind::SecurityConfiguration,
        TableKind::ClassDescriptions,
        TableKind::MethodCalls,
    ];

    /// Snapshot key for this table
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::ServiceEndpoints => "service-endpoints",
            TableKind::DatabaseConnections => "database-connections",
            TableKind::ExternalServiceCalls => "external-service-calls",
            TableKind::MessagingConnections => "messaging-connections",
            TableKind::ServerConfiguration => "server-configuration",
            TableKind::DataAssets => "data-assets",
            TableKind::ProjectMetadata => "project-metadata",
            TableKind::SecurityConfiguration => "security-configuration",
            TableKind::ClassDescriptions => "class-descriptions",
            TableKind::MethodCalls => "method-calls",
        }
    }

    /// Whether rows of this table can, on their own, justify a document
    ///
    /// Data assets, security and server settings only decorate a graph.
    #[inline]
    #[must_use]
    pub fn is_architectural(&self) -> bool {
        matches!(
            self,
            TableKind::ServiceEndpoints
                | TableKind::DatabaseConnections
                | TableKind::ExternalServiceCalls
                | TableKind::MessagingConnections
        )
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized table names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fact table: '{0}'")]
pub struct UnknownTable(pub String);

impl FromStr for TableKind {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownTable(s.to_string()))
    }
}
