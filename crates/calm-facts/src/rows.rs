//! Fact rows
//!
//! One flat record type per [`TableKind`](crate::TableKind). Rows are produced
//! by discovery passes outside this workspace and are never mutated here.
//! Required columns are plain `String`s; a row missing one fails to
//! deserialize and is dropped by the snapshot loader.

use serde::{Deserialize, Serialize};

/// A REST/HTTP endpoint exposed by a controller or resource class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Fully qualified name of the owning class
    pub service_class: String,
    /// HTTP method (GET, POST, ...)
    pub http_method: String,
    /// URL path pattern
    pub path: String,
    /// Web framework that declared the endpoint
    pub framework: String,
    /// Stable entity identifier (`endpoint:{class}#{signature}`)
    pub entity_id: Option<String>,
    /// Source file containing the endpoint
    pub source_path: Option<String>,
    /// Name of the handler method
    pub method_name: Option<String>,
    /// Produced content types
    pub produces: Option<String>,
    /// Consumed content types
    pub consumes: Option<String>,
    /// Full handler signature
    pub method_signature: Option<String>,
}

impl ServiceEndpoint {
    /// Create endpoint with the required columns
    #[must_use]
    pub fn new(
        service_class: impl Into<String>,
        http_method: impl Into<String>,
        path: impl Into<String>,
        framework: impl Into<String>,
    ) -> Self {
        Self {
            service_class: service_class.into(),
            http_method: http_method.into(),
            path: path.into(),
            framework: framework.into(),
            entity_id: None,
            source_path: None,
            method_name: None,
            produces: None,
            consumes: None,
            method_signature: None,
        }
    }

    /// With handler method name
    #[inline]
    #[must_use]
    pub fn with_method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self
    }

    /// Declared service name: the simple name of the owning class
    #[must_use]
    pub fn service_name(&self) -> &str {
        simple_name(&self.service_class)
    }
}

/// Data access from a repository/DAO to a persisted entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConnection {
    /// Logical entity or table name
    pub entity_name: String,
    /// Fully qualified entity class
    pub entity_class: Option<String>,
    /// Fully qualified repository or DAO class
    pub repository_class: Option<String>,
    /// Access style (JPA, JDBC, Spring Data, ...)
    pub connection_type: Option<String>,
    /// Database product if detectable
    pub database_type: Option<String>,
    /// Source file containing the access
    pub source_path: Option<String>,
}

impl DatabaseConnection {
    /// Create connection for an entity name
    #[must_use]
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            entity_class: None,
            repository_class: None,
            connection_type: None,
            database_type: None,
            source_path: None,
        }
    }

    /// With entity class
    #[inline]
    #[must_use]
    pub fn with_entity_class(mut self, class: impl Into<String>) -> Self {
        self.entity_class = Some(class.into());
        self
    }

    /// With repository class
    #[inline]
    #[must_use]
    pub fn with_repository_class(mut self, class: impl Into<String>) -> Self {
        self.repository_class = Some(class.into());
        self
    }

    /// With database type
    #[inline]
    #[must_use]
    pub fn with_database_type(mut self, database_type: impl Into<String>) -> Self {
        self.database_type = Some(database_type.into());
        self
    }
}

/// An outbound call to a service outside the codebase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServiceCall {
    /// Fully qualified calling class
    pub client_class: String,
    /// Name or URL of the target service
    pub target_service: String,
    /// HTTP client flavor (RestTemplate, WebClient, Feign, ...)
    pub client_type: String,
    /// Protocol if known (HTTP, HTTPS)
    pub protocol: Option<String>,
    /// Configured base URL
    pub base_url: Option<String>,
    /// Source file containing the call
    pub source_path: Option<String>,
}

impl ExternalServiceCall {
    /// Create call with the required columns
    #[must_use]
    pub fn new(
        client_class: impl Into<String>,
        target_service: impl Into<String>,
        client_type: impl Into<String>,
    ) -> Self {
        Self {
            client_class: client_class.into(),
            target_service: target_service.into(),
            client_type: client_type.into(),
            protocol: None,
            base_url: None,
            source_path: None,
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

/// Role of a class on a messaging destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagingRole {
    /// Sends to the destination
    Producer,
    /// Receives from the destination
    Consumer,
    /// Anything else the scanner reported
    Other,
}

/// A message producer or consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConnection {
    /// Fully qualified class holding the listener/producer
    pub class_name: String,
    /// Topic or queue name
    pub destination: String,
    /// `producer`, `consumer`, or scanner-specific
    pub role: String,
    /// Messaging system (Kafka, RabbitMQ, JMS, ...)
    pub messaging_type: String,
    /// Stable entity identifier
    pub entity_id: Option<String>,
    /// Handler or sender method
    pub method_name: Option<String>,
    /// Full method signature
    pub method_signature: Option<String>,
    /// Source file
    pub source_path: Option<String>,
}

impl MessagingConnection {
    /// Create connection with the required columns
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        destination: impl Into<String>,
        role: impl Into<String>,
        messaging_type: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            destination: destination.into(),
            role: role.into(),
            messaging_type: messaging_type.into(),
            entity_id: None,
            method_name: None,
            method_signature: None,
            source_path: None,
        }
    }

    /// Parsed role; matching is exact and case-sensitive
    #[must_use]
    pub fn role(&self) -> MessagingRole {
        match self.role.as_str() {
            "producer" => MessagingRole::Producer,
            "consumer" => MessagingRole::Consumer,
            _ => MessagingRole::Other,
        }
    }
}

/// Server settings from application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfiguration {
    /// Listening port
    pub port: u16,
    /// Whether TLS is enabled
    #[serde(default)]
    pub ssl_enabled: bool,
    /// Explicit protocol; derived from `ssl_enabled` when absent
    pub protocol: Option<String>,
    /// Servlet context path
    pub context_path: Option<String>,
    /// Configuration file
    pub source_path: Option<String>,
}

impl ServerConfiguration {
    /// Create configuration for a port
    #[must_use]
    pub fn new(port: u16, ssl_enabled: bool) -> Self {
        Self {
            port,
            ssl_enabled,
            protocol: None,
            context_path: None,
            source_path: None,
        }
    }

    /// Effective protocol
    #[must_use]
    pub fn protocol(&self) -> &str {
        match &self.protocol {
            Some(protocol) => protocol,
            None if self.ssl_enabled => "HTTPS",
            None => "HTTP",
        }
    }
}

/// An entity, DTO or record of the data model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAsset {
    /// Simple class name for display
    pub simple_name: String,
    /// Entity, Record, DTO, Document, ...
    pub asset_type: String,
    /// Fully qualified class name
    pub class_name: Option<String>,
    /// Description derived from the fields
    pub description: Option<String>,
    /// Comma-separated field names
    pub fields: Option<String>,
    /// Source file
    pub source_path: Option<String>,
}

impl DataAsset {
    /// Create asset with the required columns
    #[must_use]
    pub fn new(simple_name: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            asset_type: asset_type.into(),
            class_name: None,
            description: None,
            fields: None,
            source_path: None,
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Project identity from the build file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Artifact id (Maven) or project name (Gradle)
    pub artifact_id: String,
    /// Group id
    pub group_id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Project description
    pub description: Option<String>,
    /// Project version
    pub version: Option<String>,
    /// Build file
    pub source_path: Option<String>,
}

impl ProjectMetadata {
    /// Create metadata for an artifact id
    #[must_use]
    pub fn new(artifact_id: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            group_id: None,
            name: None,
            description: None,
            version: None,
            source_path: None,
        }
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A security setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfiguration {
    /// WebSecurity, OAuth2, CORS, ...
    pub configuration_type: String,
    /// Authentication method if detected
    pub auth_method: Option<String>,
    /// CORS allowed origins
    pub allowed_origins: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Source file
    pub source_path: Option<String>,
}

impl SecurityConfiguration {
    /// Configuration type marking a CORS setting
    pub const CORS: &'static str = "CORS";

    /// Create configuration of a type
    #[must_use]
    pub fn new(configuration_type: impl Into<String>) -> Self {
        Self {
            configuration_type: configuration_type.into(),
            auth_method: None,
            allowed_origins: None,
            description: None,
            source_path: None,
        }
    }

    /// CORS configuration with optional origins
    #[must_use]
    pub fn cors(allowed_origins: Option<&str>) -> Self {
        Self {
            allowed_origins: allowed_origins.map(str::to_string),
            ..Self::new(Self::CORS)
        }
    }

    /// Whether this is a CORS setting
    #[inline]
    #[must_use]
    pub fn is_cors(&self) -> bool {
        self.configuration_type == Self::CORS
    }
}

/// Free-text description of a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescription {
    /// Fully qualified class name
    pub class_name: String,
    /// What the class does
    pub description: String,
    /// Primary responsibility (two or three words)
    pub responsibility: Option<String>,
    /// Architectural patterns used by the class
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Checksum of the class source the description was made from
    pub checksum: Option<String>,
    /// Source file
    pub source_path: Option<String>,
}

impl ClassDescription {
    /// Create description for a class
    #[must_use]
    pub fn new(class_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            description: description.into(),
            responsibility: None,
            patterns: Vec::new(),
            checksum: None,
            source_path: None,
        }
    }
}

/// A method-to-method call edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Calling class
    pub from_class: String,
    /// Calling method signature
    pub from_method_signature: String,
    /// Called class
    pub to_class: String,
    /// Called method signature
    pub to_method_signature: String,
    /// Entity id of the caller, if it is a known entity
    pub caller_entity_id: Option<String>,
    /// Entity id of the callee, if it is a known entity
    pub called_entity_id: Option<String>,
    /// Source file of the call site
    pub source_path: Option<String>,
}

/// Text after the last `.` of a qualified name
#[must_use]
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map_or(qualified, |(_, simple)| simple)
}
