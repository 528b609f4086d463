// ABOUTME: Request timeout middleware bounding how long a request may run
// ABOUTME: Answers an overrunning request with a RequestTimeout AppError envelope (HTTP 408)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::time::timeout;

use crate::errors::{AppError, ErrorCode};

/// Middleware: run the request, or give up after `limit`
///
/// The inner future is dropped on timeout, so a collaborator call still in
/// flight is cancelled.
pub async fn request_timeout_middleware(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    (timeout(limit, next.run(request)).await).unwrap_or_else(|_| {
        tracing::warn!(
            path = %path,
            timeout_secs = limit.as_secs(),
            "Request timed out"
        );
        AppError::new(
            ErrorCode::RequestTimeout,
            format!("Request timed out after {}s", limit.as_secs()),
        )
        .into_response()
    })
}
