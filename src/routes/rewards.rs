// ABOUTME: Reward summary route handler for the home screen
// ABOUTME: Returns the verified caller's reward overview from the reward provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reward summary routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Router};
use reward_core::models::VerifiedCaller;
use reward_core::response::ResponseEnvelope;

use crate::constants::endpoints;
use crate::middleware::require_verified_caller;
use crate::resources::ServerResources;

/// Reward summary routes
pub struct RewardRoutes;

impl RewardRoutes {
    /// Create reward summary routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::REWARD_SUMMARY, get(Self::handle_reward_summary))
            .route_layer(axum::middleware::from_fn_with_state(
                resources.token_verifier.clone(),
                require_verified_caller,
            ))
            .with_state(resources)
    }

    async fn handle_reward_summary(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
    ) -> ResponseEnvelope {
        tracing::info!(user.id = caller.user_id, "Retrieving reward summary");
        resources.dispatcher.reward_summary(&caller).await
    }
}
