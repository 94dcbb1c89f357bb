use calm_graph::{
    render, synthesize, synthesize_json, Endpoint, NodeKind, RelationshipKind, SynthesisConfig,
    CALM_SCHEMA, WEB_CLIENT_ID,
};
use calm_test_utils::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn config() -> SynthesisConfig {
    SynthesisConfig::default()
}

#[test]
fn test_single_endpoint_document() {
    let doc = synthesize(&greeting_endpoint(), &config()).unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(
        value,
        json!({
            "nodes": [{
                "unique-id": "greeting-controller",
                "node-type": "service",
                "name": "GreetingController",
                "description": "REST API with endpoints: GET /greeting",
                "interfaces": [
                    { "unique-id": "greeting-controller-api", "protocol": "HTTP", "port": 8080 }
                ]
            }],
            "relationships": [],
            "$schema": CALM_SCHEMA
        })
    );
}

#[test]
fn test_sibling_package_owns_database() {
    let doc = synthesize(&sibling_package_database(), &config()).unwrap();

    let rel = doc.relationship("order-controller-to-order-db").unwrap();
    assert_eq!(rel.kind, RelationshipKind::Connects);
    assert_eq!(rel.source, Endpoint::node("order-controller"));
    assert_eq!(rel.destination, Endpoint::interface("order-db", "jdbc"));
    assert_eq!(rel.protocol.as_deref(), Some("JDBC"));
}

#[test]
fn test_snapshot_json_matches_programmatic_facts() {
    let from_json = facts_from_json(sibling_package_json());
    assert_eq!(
        synthesize_json(&from_json, &config()),
        synthesize_json(&sibling_package_database(), &config())
    );
}

#[test]
fn test_cors_web_client() {
    let doc = synthesize(&cors_web_client(), &config()).unwrap();

    let client = doc.node(WEB_CLIENT_ID).unwrap();
    assert_eq!(client.kind, NodeKind::WebClient);
    assert_eq!(client.name, "Web Client");
    assert!(client.description.ends_with("from https://app.example.com"));

    let interacts: Vec<_> = doc.relationships_of(RelationshipKind::Interacts).collect();
    assert_eq!(interacts.len(), 1);
    assert_eq!(interacts[0].unique_id, "web-client-interacts-greeting-controller");
    assert_eq!(interacts[0].source, Endpoint::node(WEB_CLIENT_ID));
    assert_eq!(
        interacts[0].destination,
        Endpoint::interface("greeting-controller", "greeting-controller-api")
    );
    assert_eq!(interacts[0].protocol.as_deref(), Some("HTTP"));
}

#[test]
fn test_ambient_tables_yield_no_document() {
    assert!(synthesize(&ambient_only(), &config()).is_none());
}

#[test]
fn test_order_scenario_graph() {
    let doc = synthesize(&order_scenario(), &config()).unwrap();

    let ids: Vec<&str> = doc.nodes.iter().map(|n| n.unique_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "shop",
            "order-controller",
            "billing-controller",
            "order-data",
            "web-client",
            "order-db",
            "invoice-db",
            "payment-gateway",
            "order-events-kafka",
        ]
    );

    let rels: Vec<&str> = doc.relationships.iter().map(|r| r.unique_id.as_str()).collect();
    assert_eq!(
        rels,
        vec![
            "web-client-interacts-order-controller",
            "order-controller-to-order-db",
            "billing-controller-to-invoice-db",
            "billing-controller-to-payment-gateway",
            "order-controller-publishes-to-order-events-kafka",
            "order-events-kafka-consumed-by-billing-controller",
            "shop-contains-order-controller",
            "shop-contains-billing-controller",
        ]
    );

    let system = doc.node("shop").unwrap();
    assert_eq!(system.name, "Shop");
    assert_eq!(system.description, "Online shop");

    let order = doc.node("order-controller").unwrap();
    let api = order.interface("order-controller-api").unwrap();
    assert_eq!(api.protocol.as_deref(), Some("HTTPS"));
    assert_eq!(api.port, Some(8443));
}

#[test]
fn test_composition_follows_registration_order() {
    let doc = synthesize(&order_scenario(), &config()).unwrap();
    let composed: Vec<_> = doc
        .relationships_of(RelationshipKind::ComposedOf)
        .map(|r| r.destination.node.as_str())
        .collect();
    assert_eq!(composed, vec!["order-controller", "billing-controller"]);
}

#[test]
fn test_render_is_idempotent() {
    let facts = order_scenario();
    let first = synthesize_json(&facts, &config()).unwrap();
    let second = synthesize_json(&facts, &config()).unwrap();
    assert_eq!(first, second);

    let doc = synthesize(&facts, &config()).unwrap();
    assert_eq!(render(&doc).unwrap(), first);
}

#[test]
fn test_configured_defaults_apply_without_server_row() {
    let config = SynthesisConfig::new()
        .with_default_protocol("HTTPS")
        .with_default_port(9443)
        .with_endpoint_summary_limit(1);
    let facts = greeting_endpoint().with_rows(vec![endpoint(
        "com.example.GreetingController",
        "POST",
        "/greeting",
    )]);
    let doc = synthesize(&facts, &config).unwrap();

    let node = &doc.nodes[0];
    assert_eq!(node.description, "REST API with endpoints: GET /greeting and 1 more");
    let api = node.interface("greeting-controller-api").unwrap();
    assert_eq!(api.protocol.as_deref(), Some("HTTPS"));
    assert_eq!(api.port, Some(9443));
}

#[test]
fn test_messaging_only_snapshot_produces_nodes() {
    let facts = facts_from_json(json!({
        "messaging-connections": [
            { "class_name": "com.shop.Listener", "destination": "orders",
              "role": "consumer", "messaging_type": "RabbitMQ" }
        ]
    }));
    let doc = synthesize(&facts, &config()).unwrap();

    assert_eq!(doc.nodes.len(), 1);
    assert_eq!(doc.nodes[0].unique_id, "orders-rabbit-m-q");
    assert_eq!(doc.nodes[0].description, "RabbitMQ topic/queue");
    assert!(doc.relationships.is_empty());
}
