//! Testing utilities for the CALM workspace
//!
//! Shared fact snapshots used by the graph and regeneration tests.

#![allow(missing_docs)]

use calm_facts::prelude::*;
use calm_facts::snapshot;

pub fn endpoint(class: &str, method: &str, path: &str) -> ServiceEndpoint {
    ServiceEndpoint::new(class, method, path, "Spring")
}

/// `GET /greeting` on `com.example.GreetingController`, nothing else
pub fn greeting_endpoint() -> FactTables {
    FactTables::new().with_rows(vec![endpoint(
        "com.example.GreetingController",
        "GET",
        "/greeting",
    )])
}

/// Controller and repository in sibling packages
pub fn sibling_package_database() -> FactTables {
    FactTables::new()
        .with_rows(vec![endpoint(
            "com.example.order.controller.OrderController",
            "GET",
            "/orders",
        )])
        .with_rows(vec![DatabaseConnection::new("Order")
            .with_repository_class("com.example.order.repository.OrderRepository")])
}

/// One service reachable from a browser app
pub fn cors_web_client() -> FactTables {
    greeting_endpoint().with_rows(vec![SecurityConfiguration::cors(Some(
        "https://app.example.com",
    ))])
}

/// A small shop touching every architectural table
pub fn order_scenario() -> FactTables {
    FactTables::new()
        .with_rows(vec![ProjectMetadata::new("shop")
            .with_name("Shop")
            .with_description("Online shop")])
        .with_rows(vec![ServerConfiguration::new(8443, true)])
        .with_rows(vec![
            endpoint("com.shop.order.OrderController", "GET", "/orders"),
            endpoint("com.shop.order.OrderController", "POST", "/orders"),
            endpoint("com.shop.billing.BillingController", "GET", "/invoices"),
        ])
        .with_rows(vec![
            DatabaseConnection::new("Order")
                .with_repository_class("com.shop.order.repo.OrderRepository")
                .with_database_type("PostgreSQL"),
            DatabaseConnection::new("Invoice")
                .with_repository_class("com.shop.billing.InvoiceRepository"),
        ])
        .with_rows(vec![ExternalServiceCall::new(
            "com.shop.billing.PaymentClient",
            "PaymentGateway",
            "RestTemplate",
        )])
        .with_rows(vec![
            MessagingConnection::new("com.shop.order.OrderEvents", "order-events", "producer", "Kafka"),
            MessagingConnection::new("com.shop.billing.OrderListener", "order-events", "consumer", "Kafka"),
        ])
        .with_rows(vec![DataAsset::new("Order", "Entity")])
        .with_rows(vec![SecurityConfiguration::cors(Some("https://shop.example.com"))])
}

/// Tables that never produce a document on their own
pub fn ambient_only() -> FactTables {
    FactTables::new()
        .with_rows(vec![DataAsset::new("Order", "Entity")])
        .with_rows(vec![SecurityConfiguration::cors(None)])
        .with_rows(vec![ServerConfiguration::new(9090, false)])
        .with_rows(vec![ProjectMetadata::new("shop")])
}

/// Snapshot JSON equivalent to [`sibling_package_database`]
pub fn sibling_package_json() -> serde_json::Value {
    serde_json::json!({
        "service-endpoints": [
            { "service_class": "com.example.order.controller.OrderController",
              "http_method": "GET", "path": "/orders", "framework": "Spring" }
        ],
        "database-connections": [
            { "entity_name": "Order",
              "repository_class": "com.example.order.repository.OrderRepository" }
        ]
    })
}

/// Decode a snapshot, panicking on malformed input
pub fn facts_from_json(value: serde_json::Value) -> FactTables {
    snapshot::from_json_value(value).unwrap().0
}
