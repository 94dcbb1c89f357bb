//! CALM document model
//!
//! Wire shapes of the emitted architecture document. Keys are hyphenated
//! (`unique-id`, `node-type`, `composed-of`) and absent optionals are omitted
//! rather than written as `null`.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Schema URI stamped on every document
pub const CALM_SCHEMA: &str = "https://calm.finos.org/draft/2025-03/meta/calm.json";

/// Kind of architectural entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// The whole project
    System,
    /// Internal or external service
    Service,
    /// Data store behind an entity
    Database,
    /// Entity, DTO or record
    DataAsset,
    /// Browser client allowed by CORS
    #[serde(rename = "webclient")]
    WebClient,
    /// Messaging destination
    Network,
}

impl NodeKind {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Service => "service",
            Self::Database => "database",
            Self::DataAsset => "data-asset",
            Self::WebClient => "webclient",
            Self::Network => "network",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface exposed by a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Interface id, unique within the document
    #[serde(rename = "unique-id")]
    pub unique_id: String,
    /// Wire protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Listening port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Interface {
    /// Interface with only an id
    #[must_use]
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            protocol: None,
            port: None,
        }
    }

    /// With protocol
    #[inline]
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// With port
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

/// Architectural entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Node id, unique within the document
    #[serde(rename = "unique-id")]
    pub unique_id: String,
    /// Entity kind
    #[serde(rename = "node-type")]
    pub kind: NodeKind,
    /// Display name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Exposed interfaces, omitted when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<Interface>>,
}

impl Node {
    /// Create node without interfaces
    #[must_use]
    pub fn new(
        unique_id: impl Into<String>,
        kind: NodeKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            kind,
            name: name.into(),
            description: description.into(),
            interfaces: None,
        }
    }

    /// Append an interface
    #[must_use]
    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.get_or_insert_with(Vec::new).push(interface);
        self
    }

    /// Look up an interface by id
    #[must_use]
    pub fn interface(&self, unique_id: &str) -> Option<&Interface> {
        self.interfaces
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|i| i.unique_id == unique_id)
    }
}

/// One end of a relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Node id
    pub node: String,
    /// Interface id on that node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

impl Endpoint {
    /// Endpoint on a whole node
    #[must_use]
    pub fn node(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            interface: None,
        }
    }

    /// Endpoint on a specific interface of a node
    #[must_use]
    pub fn interface(node: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            interface: Some(interface.into()),
        }
    }
}

/// Kind of edge between nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// System made of services
    ComposedOf,
    /// Runtime connection between components
    Connects,
    /// Actor interacting with a component
    Interacts,
}

impl RelationshipKind {
    /// Wire name, also the key holding the endpoints
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComposedOf => "composed-of",
            Self::Connects => "connects",
            Self::Interacts => "interacts",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed or compositional edge
///
/// Serialized with the endpoints nested under the key named by the kind:
///
/// ```json
/// { "unique-id": "a-to-b", "relationship-type": "connects",
///   "connects": { "source": { "node": "a" }, "destination": { "node": "b" } } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id, unique within the document
    pub unique_id: String,
    /// Edge kind
    pub kind: RelationshipKind,
    /// Where the edge starts
    pub source: Endpoint,
    /// Where the edge ends
    pub destination: Endpoint,
    /// Wire protocol
    pub protocol: Option<String>,
}

impl Relationship {
    /// Create relationship without protocol
    #[must_use]
    pub fn new(
        unique_id: impl Into<String>,
        kind: RelationshipKind,
        source: Endpoint,
        destination: Endpoint,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            kind,
            source,
            destination,
            protocol: None,
        }
    }

    /// With protocol
    #[inline]
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

#[derive(Serialize)]
struct Ends<'a> {
    source: &'a Endpoint,
    destination: &'a Endpoint,
}

impl Serialize for Relationship {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.protocol.is_some() { 4 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("unique-id", &self.unique_id)?;
        map.serialize_entry("relationship-type", self.kind.as_str())?;
        map.serialize_entry(
            self.kind.as_str(),
            &Ends {
                source: &self.source,
                destination: &self.destination,
            },
        )?;
        if let Some(protocol) = &self.protocol {
            map.serialize_entry("protocol", protocol)?;
        }
        map.end()
    }
}

/// Complete architecture document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Nodes in construction order
    pub nodes: Vec<Node>,
    /// Relationships in construction order
    pub relationships: Vec<Relationship>,
    /// Schema URI
    #[serde(rename = "$schema")]
    pub schema: String,
}

impl Document {
    /// Assemble a document
    #[must_use]
    pub fn new(
        schema: impl Into<String>,
        nodes: Vec<Node>,
        relationships: Vec<Relationship>,
    ) -> Self {
        Self {
            nodes,
            relationships,
            schema: schema.into(),
        }
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, unique_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.unique_id == unique_id)
    }

    /// Look up a relationship by id
    #[must_use]
    pub fn relationship(&self, unique_id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.unique_id == unique_id)
    }

    /// Nodes of one kind, in document order
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Relationships of one kind, in document order
    pub fn relationships_of(&self, kind: RelationshipKind) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter().filter(move |r| r.kind == kind)
    }
}
