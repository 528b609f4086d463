// ABOUTME: Router assembly for the rewards API
// ABOUTME: Merges every route group and applies request id, CORS, timeout, and body limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Router assembly
//!
//! The host process owns the listener and the collaborators; this module
//! only turns [`ServerResources`] into a ready-to-serve `Router`.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

use crate::middleware::{request_id_middleware, request_timeout_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{ChallengeRoutes, HealthRoutes, RewardRoutes, RunningRoutes};

/// Build the complete rewards router
///
/// Layers, outermost first: request id and span, CORS, timeout, body limit.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);
    let max_body = config.http.max_upload_bytes;

    info!(
        max_upload_bytes = max_body,
        request_timeout_secs = config.http.request_timeout_secs,
        "Building rewards router"
    );

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RewardRoutes::routes(Arc::clone(&resources)))
        .merge(RunningRoutes::routes(Arc::clone(&resources)))
        .merge(ChallengeRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(axum::middleware::from_fn_with_state(
            config.http.request_timeout(),
            request_timeout_middleware,
        ))
        .layer(setup_cors(&config.cors))
        .layer(axum::middleware::from_fn(request_id_middleware))
}
