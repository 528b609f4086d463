// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints without authentication requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::mock_collaborators::{test_router, RecordingCollaborators};

/// Get health routes for testing
fn health_routes() -> axum::Router {
    reward_api::routes::health::HealthRoutes::routes()
}

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "reward-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["timestamp"].is_string());
}

// ============================================================================
// Full router
// ============================================================================

#[tokio::test]
async fn test_health_endpoints_accessible_through_full_router() {
    let mock = RecordingCollaborators::new();

    for endpoint in ["/health", "/ready"] {
        let response = AxumTestRequest::get(endpoint).send(test_router(&mock)).await;

        assert_eq!(response.status(), 200, "Endpoint {endpoint} should return 200");
        assert!(response.header("x-request-id").is_some());
    }
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_cors_headers_on_full_router() {
    let mock = RecordingCollaborators::new();

    let response = AxumTestRequest::get("/health")
        .header("origin", "https://app.example.com")
        .send(test_router(&mock))
        .await;

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_health_endpoints_concurrent_requests() {
    let mut handles = vec![];

    for _ in 0..10 {
        let handle = tokio::spawn(async {
            AxumTestRequest::get("/health").send(health_routes()).await
        });

        handles.push(handle);
    }

    for handle in handles {
        let response = handle.await.expect("Task panicked");
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = AxumTestRequest::get("/app/rewards/unknown")
        .send(health_routes())
        .await;

    assert_eq!(response.status(), 404);
}
