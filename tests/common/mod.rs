//! Shared test utilities for hookdash integration tests.
//!
//! Provides a mock webhook service and canned payloads.

#![allow(dead_code)]

use hookdash::api::ApiClient;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Canned Payloads
// =============================================================================

pub fn stats_body() -> Value {
    json!({
        "totalSubscriptions": 42,
        "recentSuccessCount": 1250,
        "recentFailedCount": 17
    })
}

pub fn activity_body() -> Value {
    json!([
        {
            "type": "delivery_attempt",
            "id": "del-1001",
            "timestamp": "2024-05-01T12:05:00Z",
            "details": "Attempt #1 - Success (200)"
        },
        {
            "type": "subscription_created",
            "id": "sub-77",
            "timestamp": "2024-05-01T12:00:00Z",
            "details": "Target: https://example.com/hooks/orders"
        }
    ])
}

// =============================================================================
// Mock Service
// =============================================================================

pub async fn mount_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn delayed(response: ResponseTemplate, millis: u64) -> ResponseTemplate {
    response.set_delay(Duration::from_millis(millis))
}

/// A mock service where all three dashboard endpoints succeed.
pub async fn healthy_service() -> MockServer {
    let server = MockServer::start().await;
    mount_get(&server, "/health", json_response(200, json!({"status": "ok"}))).await;
    mount_get(&server, "/status/stats", json_response(200, stats_body())).await;
    mount_get(&server, "/status/activity", json_response(200, activity_body())).await;
    server
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_client(server.uri(), reqwest::Client::new())
}

/// Base URL where nothing is listening.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
