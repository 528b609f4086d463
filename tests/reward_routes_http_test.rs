// ABOUTME: HTTP integration tests for the reward summary route
// ABOUTME: Verifies the summary passes through and collaborator failures become DB_ERROR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::mock_collaborators::{access_token, test_router, RecordingCollaborators};
use reward_api::errors::ErrorCode;
use serde_json::Value;

#[tokio::test]
async fn test_reward_summary_uses_verified_user_id() {
    let mock = RecordingCollaborators::new();

    let response = AxumTestRequest::get("/rewards/users")
        .header("x-access-token", &access_token())
        .send(test_router(&mock))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["data"]["user_id"], 7);
    assert_eq!(body["data"]["points"], 120);

    let calls = mock.calls();
    assert_eq!(calls[0].operation, "retrieve_reward_main");
    assert_eq!(calls[0].detail, "7");
}

#[tokio::test]
async fn test_reward_summary_failure_is_db_error() {
    let mock = RecordingCollaborators::new();
    mock.fail_with(ErrorCode::DatabaseError);

    let response = AxumTestRequest::get("/rewards/users")
        .header("x-access-token", &access_token())
        .send(test_router(&mock))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "DB_ERROR");
    assert_eq!(body["code"], 4000);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_reward_summary_non_database_failure_is_db_error() {
    for code in [ErrorCode::InternalError, ErrorCode::ExternalServiceError] {
        let mock = RecordingCollaborators::new();
        mock.fail_with(code);

        let response = AxumTestRequest::get("/rewards/users")
            .header("x-access-token", &access_token())
            .send(test_router(&mock))
            .await;

        assert_eq!(response.status(), 200);
        let body: Value = response.json();
        assert_eq!(body["status"], "DB_ERROR", "{code:?} should map to DB_ERROR");
        assert_eq!(body["code"], 4000);
    }
}

#[tokio::test]
async fn test_reward_summary_accepts_bearer_token() {
    let mock = RecordingCollaborators::new();

    let response = AxumTestRequest::get("/rewards/users")
        .header("authorization", &format!("Bearer {}", access_token()))
        .send(test_router(&mock))
        .await;

    let body: Value = response.json();
    assert_eq!(body["status"], "SUCCESS");
}
