/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bravenewcoin-client tests

#![allow(dead_code)]

use bravenewcoin_client::{ClientConfig, Credentials, Resource};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CUSTOMER: &str = "customer";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at the mock server
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri())
}

pub fn test_credentials() -> Credentials {
    Credentials::new("Key", "Token")
}

/// Request path for `resource` under the test customer
pub fn resource_path(resource: Resource) -> String {
    format!("/{}/{}/", CUSTOMER, resource.path())
}

pub fn success_body() -> Value {
    json!({
        "success": true,
        "payload": {"coin_id": "BTC", "last_price": "13444.3"},
    })
}

pub fn failure_body(error: &str) -> Value {
    json!({"success": false, "error": error})
}

/// Answer any GET on `resource` with `status` and `body`, expecting `calls` hits
pub async fn mount_json(
    server: &MockServer,
    resource: Resource,
    status: u16,
    body: Value,
    calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(resource_path(resource)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}
