// ABOUTME: Challenge route handlers for listing and creating reward challenges
// ABOUTME: Challenge fields pass through to the reward service without validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Challenge routes
//!
//! Listing requires a verified caller. Creation is open: challenge fields
//! are not tied to a caller.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Extension, Json, Router,
};
use reward_core::models::{NewChallenge, VerifiedCaller};
use reward_core::response::ResponseEnvelope;

use super::json_body;
use crate::constants::endpoints;
use crate::middleware::require_verified_caller;
use crate::resources::ServerResources;

/// Challenge routes
pub struct ChallengeRoutes;

impl ChallengeRoutes {
    /// Create challenge routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        // route_layer on the method router only covers methods added before it
        let list = get(Self::handle_list_challenges).route_layer(
            axum::middleware::from_fn_with_state(
                resources.token_verifier.clone(),
                require_verified_caller,
            ),
        );

        Router::new()
            .route(
                endpoints::CHALLENGE,
                list.post(Self::handle_create_challenge),
            )
            .with_state(resources)
    }

    /// Handle challenge listing
    async fn handle_list_challenges(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
    ) -> ResponseEnvelope {
        tracing::info!(user.id = caller.user_id, "Listing challenges");
        resources.dispatcher.list_challenges().await
    }

    /// Handle challenge creation
    async fn handle_create_challenge(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewChallenge>, JsonRejection>,
    ) -> ResponseEnvelope {
        let challenge = match json_body(body) {
            Ok(challenge) => challenge,
            Err(envelope) => return envelope,
        };

        tracing::info!(title = ?challenge.title, "Creating challenge");
        resources.dispatcher.create_challenge(&challenge).await
    }
}
