//! Graph Builder
//!
//! Runs the construction passes over one fact snapshot. Passes run in a fixed
//! order because later ones resolve owners against the services registered by
//! earlier ones.
//!
//! Usage:
//! ```rust
//! use calm_facts::{FactTables, ServiceEndpoint};
//! use calm_graph::{GraphBuilder, SynthesisConfig};
//!
//! let facts = FactTables::new().with_rows(vec![ServiceEndpoint::new(
//!     "com.example.GreetingController",
//!     "GET",
//!     "/greeting",
//!     "Spring",
//! )]);
//! let config = SynthesisConfig::default();
//!
//! let document = GraphBuilder::new(&facts, &config).run();
//! assert_eq!(document.nodes[0].unique_id, "greeting-controller");
//! ```

use crate::config::SynthesisConfig;
use crate::document::{
    Document, Endpoint, Interface, Node, NodeKind, Relationship, RelationshipKind,
};
use crate::ownership::OwnershipResolver;
use crate::slug::{data_asset_id, database_id, messaging_id, slug};
use calm_facts::{
    ClassDescription, DataAsset, DatabaseConnection, ExternalServiceCall, FactTables,
    MessagingConnection, MessagingRole, ProjectMetadata, SecurityConfiguration,
    ServerConfiguration, ServiceEndpoint,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Node id of the CORS web client
pub const WEB_CLIENT_ID: &str = "web-client";

/// Builder accumulating nodes and relationships for one synthesis
pub struct GraphBuilder<'a> {
    facts: &'a FactTables,
    config: &'a SynthesisConfig,
    server_protocol: String,
    server_port: u16,
    descriptions: HashMap<&'a str, &'a str>,
    nodes: Vec<Node>,
    node_ids: IndexSet<String>,
    relationships: Vec<Relationship>,
    relationship_ids: IndexSet<String>,
    owners: OwnershipResolver,
    system_id: Option<String>,
}

impl<'a> GraphBuilder<'a> {
    /// Create builder over a snapshot
    ///
    /// Server protocol and port come from the first server configuration
    /// row, else from the configured defaults.
    #[must_use]
    pub fn new(facts: &'a FactTables, config: &'a SynthesisConfig) -> Self {
        let (server_protocol, server_port) = match facts.first::<ServerConfiguration>() {
            Some(server) => (server.protocol().to_string(), server.port),
            None => (config.default_protocol.clone(), config.default_port),
        };

        let mut descriptions = HashMap::new();
        for row in facts.rows::<ClassDescription>() {
            if !row.description.is_empty() {
                descriptions.insert(row.class_name.as_str(), row.description.as_str());
            }
        }

        Self {
            facts,
            config,
            server_protocol,
            server_port,
            descriptions,
            nodes: Vec::new(),
            node_ids: IndexSet::new(),
            relationships: Vec::new(),
            relationship_ids: IndexSet::new(),
            owners: OwnershipResolver::new(),
            system_id: None,
        }
    }

    /// Number of nodes so far
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relationships so far
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Services registered so far
    pub fn owners(&self) -> &OwnershipResolver {
        &self.owners
    }

    /// Run every pass in order and assemble the document
    #[must_use]
    pub fn run(mut self) -> Document {
        self.add_system_node();
        self.add_service_nodes();
        self.add_data_asset_nodes();
        self.add_web_client_node();
        self.add_database_nodes();
        self.add_external_service_nodes();
        self.add_messaging_nodes();
        self.add_composed_of_relationships();
        self.build()
    }

    /// Assemble the document from what the passes produced
    #[must_use]
    pub fn build(self) -> Document {
        tracing::info!(
            nodes = self.nodes.len(),
            relationships = self.relationships.len(),
            services = self.owners.len(),
            "architecture graph built"
        );
        Document::new(self.config.schema.clone(), self.nodes, self.relationships)
    }

    /// Add a node unless its id is taken; returns whether it was added
    fn push_node(&mut self, node: Node) -> bool {
        if !self.node_ids.insert(node.unique_id.clone()) {
            tracing::debug!(id = %node.unique_id, "node already present, absorbing");
            return false;
        }
        self.nodes.push(node);
        true
    }

    fn push_relationship(&mut self, relationship: Relationship) {
        if !self.relationship_ids.insert(relationship.unique_id.clone()) {
            tracing::debug!(id = %relationship.unique_id, "relationship already present, absorbing");
            return;
        }
        self.relationships.push(relationship);
    }

    /// Pass 1: system node from the first project metadata row
    pub fn add_system_node(&mut self) {
        let Some(project) = self.facts.first::<ProjectMetadata>() else {
            return;
        };
        if project.artifact_id.is_empty() {
            tracing::debug!("project metadata without artifact id, no system node");
            return;
        }

        let id = slug(project.artifact_id.as_str());
        let name = non_empty(project.name.as_deref()).unwrap_or(&project.artifact_id);
        let description = match non_empty(project.description.as_deref()) {
            Some(description) => description.to_string(),
            None => format!("System containing {} services", project.artifact_id),
        };

        if self.push_node(Node::new(id.clone(), NodeKind::System, name, description)) {
            self.system_id = Some(id);
        }
    }

    /// Pass 2: one service node per endpoint-owning class
    pub fn add_service_nodes(&mut self) {
        let mut by_class: IndexMap<&str, Vec<&ServiceEndpoint>> = IndexMap::new();
        for endpoint in self.facts.rows::<ServiceEndpoint>() {
            if endpoint.service_class.is_empty() {
                tracing::debug!(path = %endpoint.path, "endpoint without owning class, skipping");
                continue;
            }
            by_class
                .entry(endpoint.service_class.as_str())
                .or_default()
                .push(endpoint);
        }

        for (class, endpoints) in by_class {
            let first = endpoints[0];
            let id = slug(first.service_name());
            let interface = Interface::new(format!("{id}-api"))
                .with_protocol(self.server_protocol.clone())
                .with_port(self.server_port);
            let description = self.service_description(class, &endpoints);

            let node = Node::new(id.clone(), NodeKind::Service, first.service_name(), description)
                .with_interface(interface);
            self.push_node(node);
            self.owners.register(class, id);
        }
        tracing::debug!(services = self.owners.len(), "service nodes added");
    }

    fn service_description(&self, class: &str, endpoints: &[&ServiceEndpoint]) -> String {
        if let Some(description) = self.descriptions.get(class) {
            return (*description).to_string();
        }

        let limit = self.config.endpoint_summary_limit;
        let listed: Vec<String> = endpoints
            .iter()
            .take(limit)
            .map(|e| format!("{} {}", e.http_method, e.path))
            .collect();
        let mut description = format!("REST API with endpoints: {}", listed.join(", "));
        if endpoints.len() > limit {
            description.push_str(&format!(" and {} more", endpoints.len() - limit));
        }
        description
    }

    /// Pass 3: data asset nodes
    pub fn add_data_asset_nodes(&mut self) {
        for asset in self.facts.rows::<DataAsset>() {
            if asset.simple_name.is_empty() {
                tracing::debug!(asset_type = %asset.asset_type, "data asset without name, skipping");
                continue;
            }
            let description = match non_empty(asset.description.as_deref()) {
                Some(description) => description.to_string(),
                None => format!("{} {}", asset.asset_type, asset.simple_name),
            };
            self.push_node(Node::new(
                data_asset_id(&asset.simple_name),
                NodeKind::DataAsset,
                asset.simple_name.as_str(),
                description,
            ));
        }
    }

    /// Pass 4: web client interacting with the first service, when CORS is configured
    pub fn add_web_client_node(&mut self) {
        let security = self.facts.rows::<SecurityConfiguration>();
        if !security.iter().any(SecurityConfiguration::is_cors) {
            return;
        }
        let Some(primary) = self.owners.service_ids().next().map(str::to_string) else {
            tracing::debug!("CORS configured but no service to reach");
            return;
        };

        let origins = security
            .iter()
            .filter(|s| s.is_cors())
            .find_map(|s| non_empty(s.allowed_origins.as_deref()))
            .unwrap_or("configured origins");

        self.push_node(Node::new(
            WEB_CLIENT_ID,
            NodeKind::WebClient,
            "Web Client",
            format!("Web application client accessing the API from {origins}"),
        ));
        self.push_relationship(
            Relationship::new(
                format!("{WEB_CLIENT_ID}-interacts-{primary}"),
                RelationshipKind::Interacts,
                Endpoint::node(WEB_CLIENT_ID),
                Endpoint::interface(primary.as_str(), format!("{primary}-api")),
            )
            .with_protocol(self.server_protocol.clone()),
        );
    }

    /// Pass 5: database nodes, connected from the owning service
    pub fn add_database_nodes(&mut self) {
        let mut seen = IndexSet::new();
        for db in self.facts.rows::<DatabaseConnection>() {
            if db.entity_name.is_empty() {
                tracing::debug!("database connection without entity, skipping");
                continue;
            }
            let id = database_id(&db.entity_name);
            if !seen.insert(id.clone()) {
                continue;
            }
            let database_type = non_empty(db.database_type.as_deref()).unwrap_or("SQL");
            let node = Node::new(
                id.clone(),
                NodeKind::Database,
                format!("{} Store", db.entity_name),
                format!("{database_type} database for {} data", db.entity_name),
            );
            self.push_node(node);

            let owner = db
                .repository_class
                .as_deref()
                .and_then(|class| self.owners.resolve(class))
                .or_else(|| {
                    db.entity_class
                        .as_deref()
                        .and_then(|class| self.owners.resolve(class))
                })
                .map(str::to_string);
            let Some(owner) = owner else {
                tracing::debug!(database = %id, "no owning service found");
                continue;
            };

            self.push_relationship(
                Relationship::new(
                    format!("{owner}-to-{id}"),
                    RelationshipKind::Connects,
                    Endpoint::node(owner.as_str()),
                    Endpoint::interface(id.as_str(), "jdbc"),
                )
                .with_protocol("JDBC"),
            );
        }
    }

    /// Pass 6: external services, connected from the calling service
    pub fn add_external_service_nodes(&mut self) {
        let mut seen = IndexSet::new();
        for call in self.facts.rows::<ExternalServiceCall>() {
            if call.target_service.is_empty() {
                tracing::debug!(client = %call.client_class, "external call without target, skipping");
                continue;
            }
            let id = slug(call.target_service.as_str());
            if !seen.insert(id.clone()) {
                continue;
            }
            let node = Node::new(
                id.clone(),
                NodeKind::Service,
                call.target_service.as_str(),
                format!("External {} service", call.client_type),
            );
            self.push_node(node);

            let Some(caller) = self.owners.resolve(&call.client_class).map(str::to_string) else {
                tracing::debug!(external = %id, "no calling service found");
                continue;
            };
            let protocol = non_empty(call.protocol.as_deref()).unwrap_or("HTTPS");

            self.push_relationship(
                Relationship::new(
                    format!("{caller}-to-{id}"),
                    RelationshipKind::Connects,
                    Endpoint::node(caller.as_str()),
                    Endpoint::interface(id.as_str(), "api"),
                )
                .with_protocol(protocol),
            );
        }
    }

    /// Pass 7: messaging destinations with producer and consumer links
    pub fn add_messaging_nodes(&mut self) {
        let mut destinations: IndexMap<&str, String> = IndexMap::new();

        for msg in self.facts.rows::<MessagingConnection>() {
            if msg.destination.is_empty() {
                tracing::debug!(class = %msg.class_name, "messaging row without destination, skipping");
                continue;
            }

            let node_id = match destinations.get(msg.destination.as_str()).cloned() {
                Some(id) => id,
                None => {
                    let id = messaging_id(&msg.destination, &msg.messaging_type);
                    let flavor = match msg.role() {
                        MessagingRole::Consumer => "topic/queue",
                        _ => "destination",
                    };
                    self.push_node(Node::new(
                        id.clone(),
                        NodeKind::Network,
                        msg.destination.as_str(),
                        format!("{} {flavor}", msg.messaging_type),
                    ));
                    destinations.insert(msg.destination.as_str(), id.clone());
                    id
                }
            };

            let Some(service) = self.owners.resolve(&msg.class_name).map(str::to_string) else {
                tracing::debug!(destination = %node_id, "no owning service found");
                continue;
            };
            let protocol = if msg.messaging_type.contains("Kafka") {
                "TCP"
            } else {
                "AMQP"
            };

            let relationship = match msg.role() {
                MessagingRole::Producer => Relationship::new(
                    format!("{service}-publishes-to-{node_id}"),
                    RelationshipKind::Connects,
                    Endpoint::node(service.as_str()),
                    Endpoint::node(node_id.as_str()),
                ),
                MessagingRole::Consumer => Relationship::new(
                    format!("{node_id}-consumed-by-{service}"),
                    RelationshipKind::Connects,
                    Endpoint::node(node_id.as_str()),
                    Endpoint::node(service.as_str()),
                ),
                MessagingRole::Other => {
                    tracing::debug!(role = %msg.role, destination = %node_id, "unrecognized messaging role");
                    continue;
                }
            };
            self.push_relationship(relationship.with_protocol(protocol));
        }
    }

    /// Pass 8: system composed of every registered service
    pub fn add_composed_of_relationships(&mut self) {
        let Some(system) = self.system_id.clone() else {
            return;
        };
        let services: Vec<String> = self.owners.service_ids().map(str::to_string).collect();
        for service in services {
            self.push_relationship(Relationship::new(
                format!("{system}-contains-{service}"),
                RelationshipKind::ComposedOf,
                Endpoint::node(system.as_str()),
                Endpoint::node(service),
            ));
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(facts: &FactTables) -> Document {
        GraphBuilder::new(facts, &SynthesisConfig::default()).run()
    }

    fn endpoint(class: &str, method: &str, path: &str) -> ServiceEndpoint {
        ServiceEndpoint::new(class, method, path, "Spring")
    }

    #[test]
    fn endpoints_group_by_class() {
        let facts = FactTables::new().with_rows(vec![
            endpoint("com.shop.OrderController", "GET", "/orders"),
            endpoint("com.shop.UserController", "GET", "/users"),
            endpoint("com.shop.OrderController", "POST", "/orders"),
        ]);
        let doc = build(&facts);

        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[0].unique_id, "order-controller");
        assert_eq!(
            doc.nodes[0].description,
            "REST API with endpoints: GET /orders, POST /orders"
        );
        assert_eq!(doc.nodes[1].unique_id, "user-controller");
    }

    #[test]
    fn endpoint_summary_truncates() {
        let facts = FactTables::new().with_rows(
            (0..7).map(|i| endpoint("a.BigController", "GET", &format!("/r{i}"))),
        );
        let doc = build(&facts);
        assert_eq!(
            doc.nodes[0].description,
            "REST API with endpoints: GET /r0, GET /r1, GET /r2, GET /r3, GET /r4 and 2 more"
        );
    }

    #[test]
    fn endpoint_summary_at_limit_has_no_suffix() {
        let facts = FactTables::new().with_rows(
            (0..5).map(|i| endpoint("a.BigController", "GET", &format!("/r{i}"))),
        );
        let doc = build(&facts);
        assert!(!doc.nodes[0].description.contains("more"));
    }

    #[test]
    fn class_description_preferred() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("a.OrderController", "GET", "/orders")])
            .with_rows(vec![
                ClassDescription::new("a.OrderController", "Manages orders"),
                ClassDescription::new("a.OrderController", ""),
            ]);
        let doc = build(&facts);
        assert_eq!(doc.nodes[0].description, "Manages orders");
    }

    #[test]
    fn whitespace_class_description_is_kept() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("a.OrderController", "GET", "/orders")])
            .with_rows(vec![ClassDescription::new("a.OrderController", "  ")]);
        let doc = build(&facts);
        assert_eq!(doc.nodes[0].description, "  ");
    }

    #[test]
    fn server_configuration_drives_interface() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("a.OrderController", "GET", "/orders")])
            .with_rows(vec![ServerConfiguration::new(8443, true)]);
        let doc = build(&facts);
        let interface = doc.nodes[0].interface("order-controller-api").unwrap();
        assert_eq!(interface.protocol.as_deref(), Some("HTTPS"));
        assert_eq!(interface.port, Some(8443));
    }

    #[test]
    fn system_node_and_composition() {
        let facts = FactTables::new()
            .with_rows(vec![ProjectMetadata::new("order-service")])
            .with_rows(vec![endpoint("a.OrderController", "GET", "/orders")]);
        let doc = build(&facts);

        let system = doc.node("order-service").unwrap();
        assert_eq!(system.kind, NodeKind::System);
        assert_eq!(system.name, "order-service");
        assert_eq!(system.description, "System containing order-service services");
        assert!(doc.relationship("order-service-contains-order-controller").is_some());
    }

    #[test]
    fn duplicate_database_rows_absorbed() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("com.shop.OrderController", "GET", "/orders")])
            .with_rows(vec![
                DatabaseConnection::new("Order")
                    .with_repository_class("com.shop.OrderRepository")
                    .with_database_type("PostgreSQL"),
                DatabaseConnection::new("Order").with_database_type("MySQL"),
            ]);
        let doc = build(&facts);

        let dbs: Vec<_> = doc.nodes_of(NodeKind::Database).collect();
        assert_eq!(dbs.len(), 1);
        assert_eq!(dbs[0].name, "Order Store");
        assert_eq!(dbs[0].description, "PostgreSQL database for Order data");
        assert_eq!(doc.relationships.len(), 1);
        assert_eq!(doc.relationships[0].unique_id, "order-controller-to-order-db");
    }

    #[test]
    fn database_owner_falls_back_to_entity_class() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("com.shop.order.OrderController", "GET", "/orders")])
            .with_rows(vec![DatabaseConnection::new("Order")
                .with_repository_class("org.vendor.GenericDao")
                .with_entity_class("com.shop.order.model.Order")]);
        let doc = build(&facts);
        assert!(doc.relationship("order-controller-to-order-db").is_some());
    }

    #[test]
    fn unowned_external_call_keeps_node() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("com.shop.OrderController", "GET", "/orders")])
            .with_rows(vec![ExternalServiceCall::new(
                "org.vendor.PaymentClient",
                "PaymentGateway",
                "RestTemplate",
            )]);
        let doc = build(&facts);

        let external = doc.node("payment-gateway").unwrap();
        assert_eq!(external.kind, NodeKind::Service);
        assert_eq!(external.description, "External RestTemplate service");
        assert!(doc.relationships.is_empty());
    }

    #[test]
    fn external_call_protocol_defaults_to_https() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("com.shop.OrderController", "GET", "/orders")])
            .with_rows(vec![ExternalServiceCall::new(
                "com.shop.PaymentClient",
                "PaymentGateway",
                "RestTemplate",
            )]);
        let doc = build(&facts);

        let rel = doc.relationship("order-controller-to-payment-gateway").unwrap();
        assert_eq!(rel.protocol.as_deref(), Some("HTTPS"));
        assert_eq!(rel.destination, Endpoint::interface("payment-gateway", "api"));
    }

    #[test]
    fn messaging_roles() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("com.shop.OrderController", "GET", "/orders")])
            .with_rows(vec![
                MessagingConnection::new("com.shop.OrderEvents", "orders", "producer", "Kafka"),
                MessagingConnection::new("com.shop.OrderListener", "orders", "consumer", "Kafka"),
                MessagingConnection::new("com.shop.Audit", "audit", "both", "RabbitMQ"),
            ]);
        let doc = build(&facts);

        let orders = doc.node("orders-kafka").unwrap();
        assert_eq!(orders.kind, NodeKind::Network);
        assert_eq!(orders.description, "Kafka destination");
        assert!(doc.node("audit-rabbit-m-q").is_some());

        let published = doc.relationship("order-controller-publishes-to-orders-kafka").unwrap();
        assert_eq!(published.protocol.as_deref(), Some("TCP"));
        let consumed = doc.relationship("orders-kafka-consumed-by-order-controller").unwrap();
        assert_eq!(consumed.source, Endpoint::node("orders-kafka"));
        assert_eq!(consumed.destination, Endpoint::node("order-controller"));
        assert_eq!(doc.relationships.len(), 2);
    }

    #[test]
    fn colliding_service_classes_share_one_node() {
        let facts = FactTables::new()
            .with_rows(vec![ProjectMetadata::new("shop")])
            .with_rows(vec![
                endpoint("com.a.OrderController", "GET", "/orders"),
                endpoint("org.b.OrderController", "POST", "/orders"),
            ])
            .with_rows(vec![MessagingConnection::new(
                "org.b.OrderController",
                "orders",
                "producer",
                "Kafka",
            )]);
        let config = SynthesisConfig::default();
        let builder = {
            let mut builder = GraphBuilder::new(&facts, &config);
            builder.add_system_node();
            builder.add_service_nodes();
            builder
        };
        assert_eq!(
            builder.owners().resolve_exact("org.b.OrderController"),
            Some("order-controller")
        );
        assert_eq!(
            builder.owners().service_ids().collect::<Vec<_>>(),
            vec!["order-controller"]
        );

        let doc = build(&facts);
        assert_eq!(doc.nodes_of(NodeKind::Service).count(), 1);
        assert_eq!(
            doc.nodes_of(NodeKind::Service).next().unwrap().description,
            "REST API with endpoints: GET /orders"
        );
        assert!(doc.relationship("order-controller-publishes-to-orders-kafka").is_some());
        assert_eq!(doc.relationships_of(RelationshipKind::ComposedOf).count(), 1);
    }

    #[test]
    fn external_target_matching_internal_service_keeps_relationship() {
        let facts = FactTables::new()
            .with_rows(vec![
                endpoint("com.shop.order.OrderController", "GET", "/orders"),
                endpoint("com.shop.inventory.InventoryService", "GET", "/stock"),
            ])
            .with_rows(vec![
                ExternalServiceCall::new("com.shop.order.InvClient", "InventoryService", "RestTemplate"),
                ExternalServiceCall::new("com.shop.order.InvClient2", "InventoryService", "Feign"),
            ]);
        let doc = build(&facts);

        assert_eq!(doc.nodes.len(), 2);
        let inventory = doc.node("inventory-service").unwrap();
        assert_eq!(inventory.description, "REST API with endpoints: GET /stock");

        let rel = doc.relationship("order-controller-to-inventory-service").unwrap();
        assert_eq!(rel.destination, Endpoint::interface("inventory-service", "api"));
        assert_eq!(doc.relationships_of(RelationshipKind::Connects).count(), 1);
    }

    #[test]
    fn database_id_taken_by_other_node_keeps_relationship() {
        let facts = FactTables::new()
            .with_rows(vec![
                endpoint("com.shop.OrderController", "GET", "/orders"),
                endpoint("com.shop.OrderDb", "GET", "/admin"),
            ])
            .with_rows(vec![
                DatabaseConnection::new("Order").with_repository_class("com.shop.OrderRepository"),
            ]);
        let doc = build(&facts);

        assert_eq!(doc.node("order-db").unwrap().kind, NodeKind::Service);
        assert!(doc.relationship("order-controller-to-order-db").is_some());
    }

    #[test]
    fn messaging_consumer_first_describes_topic() {
        let facts = FactTables::new().with_rows(vec![MessagingConnection::new(
            "a.Listener",
            "payments",
            "consumer",
            "JMS",
        )]);
        let doc = build(&facts);
        assert_eq!(doc.nodes[0].description, "JMS topic/queue");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("", "GET", "/x")])
            .with_rows(vec![DatabaseConnection::new("")])
            .with_rows(vec![DataAsset::new("", "Entity")]);
        let doc = build(&facts);
        assert!(doc.nodes.is_empty());
    }

    #[test]
    fn web_client_needs_a_service() {
        let facts = FactTables::new()
            .with_rows(vec![SecurityConfiguration::cors(Some("*"))])
            .with_rows(vec![DatabaseConnection::new("Order")]);
        let doc = build(&facts);
        assert!(doc.node(WEB_CLIENT_ID).is_none());
    }

    #[test]
    fn web_client_without_origins() {
        let facts = FactTables::new()
            .with_rows(vec![endpoint("a.OrderController", "GET", "/orders")])
            .with_rows(vec![
                SecurityConfiguration::new("OAuth2"),
                SecurityConfiguration::cors(None),
            ]);
        let doc = build(&facts);
        assert_eq!(
            doc.node(WEB_CLIENT_ID).unwrap().description,
            "Web application client accessing the API from configured origins"
        );
    }
}
