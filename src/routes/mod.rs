// ABOUTME: Route module organization for the rewards HTTP endpoints
// ABOUTME: Groups running, reward summary, challenge, and health routes by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules
//!
//! Each domain exposes a `*Routes::routes(resources)` builder returning an
//! axum `Router`; [`crate::server::build_router`] merges them.

use axum::{extract::rejection::JsonRejection, Json};
use reward_core::response::{ResponseEnvelope, ResponseStatus};

/// Challenge list and create
pub mod challenges;
/// Liveness and readiness
pub mod health;
/// Reward summary
pub mod rewards;
/// Running session commands and image proof
pub mod running;

pub use challenges::ChallengeRoutes;
pub use health::HealthRoutes;
pub use rewards::RewardRoutes;
pub use running::{RunningLocationBody, RunningRoutes};

/// Unwrap a JSON body, treating a body sent without a JSON content type as empty
///
/// Clients that omit the body entirely get the same validation errors as
/// clients that send `{}`. A body that is declared JSON but does not parse
/// is rejected with `REQUEST_BODY_INVALID`.
fn json_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, ResponseEnvelope> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            tracing::debug!(%rejection, "Rejected request body");
            Err(ResponseEnvelope::failure(ResponseStatus::RequestBodyInvalid))
        }
    }
}
