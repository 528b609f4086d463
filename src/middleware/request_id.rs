// ABOUTME: Request id middleware assigning a correlation id to every request
// ABOUTME: Reuses an inbound x-request-id, exposes it to handlers, and echoes it on the response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use super::tracing::{create_request_span, generate_request_id};
use crate::constants::headers;

/// Correlation id for the current request, available as `Extension<RequestId>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// The id as sent in `x-request-id`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware: assign a request id, run the request inside its span, echo the id
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(headers::REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map_or_else(generate_request_id, ToOwned::to_owned);

    let span = create_request_span(
        request.method().as_str(),
        request.uri().path(),
        &request_id,
    );
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    span.record("status_code", response.status().as_u16())
        .record("duration_ms", elapsed_ms);
    span.in_scope(|| {
        tracing::info!(
            status_code = response.status().as_u16(),
            duration_ms = elapsed_ms,
            "Request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(headers::REQUEST_ID, value);
    }
    response
}
