// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Generates request ids and creates the per-request span recorded by the request id middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::Span;
use uuid::Uuid;

/// Fresh request id in the `req_<uuid>` form
#[must_use]
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Create a tracing span for HTTP requests
///
/// `status_code` and `duration_ms` start empty and are recorded once the
/// response is ready.
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_ids_are_unique() {
        let first = generate_request_id();
        let second = generate_request_id();

        assert!(first.starts_with("req_"));
        assert_eq!(first.len(), "req_".len() + 32);
        assert_ne!(first, second);
    }

    #[test]
    fn test_request_span_declares_only_recorded_fields() {
        let subscriber = tracing_subscriber::registry();

        tracing::subscriber::with_default(subscriber, || {
            let span = create_request_span("POST", "/app/rewards/running/start", "req_abc");
            let fields: Vec<&str> = span
                .metadata()
                .map(|meta| meta.fields().iter().map(|f| f.name()).collect())
                .unwrap_or_default();

            assert_eq!(
                fields,
                vec!["method", "path", "request_id", "status_code", "duration_ms"]
            );
        });
    }
}
