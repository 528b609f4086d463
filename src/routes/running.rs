// ABOUTME: Running session route handlers for start, check, pause, end, and image proof
// ABOUTME: Extracts query, JSON, and multipart input, validates it, then hands off to the dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Running session routes
//!
//! Every handler validates in the documented order (flag, then coordinate
//! presence, then coordinate format) and returns the first failure as an
//! envelope. Collaborators are only reached with fully validated input. All
//! endpoints require a verified caller.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, QueryRejection},
        Multipart, Query, State,
    },
    routing::{get, post},
    Extension, Json, Router,
};
use reward_core::models::{Coordinate, ImageUpload, VerifiedCaller};
use reward_core::response::ResponseEnvelope;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::json_body;
use crate::constants::{endpoints, form_fields};
use crate::errors::AppError;
use crate::middleware::require_verified_caller;
use crate::resources::ServerResources;
use crate::services::{dispatch::rejected, CheckTransition};
use crate::validation::{self, RunningOperation, ValidationError};

/// Query for the exercise group endpoint
#[derive(Debug, Default, Deserialize)]
struct ExerciseQuery {
    #[serde(rename = "type")]
    exercise_type: Option<String>,
}

/// Query for the check endpoint
#[derive(Debug, Default, Deserialize)]
struct CheckQuery {
    #[serde(rename = "isRestart")]
    is_restart: Option<String>,
}

/// Query for the end endpoint
#[derive(Debug, Default, Deserialize)]
struct EndQuery {
    #[serde(rename = "forceEnd")]
    force_end: Option<String>,
}

/// JSON body shared by start, check, stop, and end
///
/// Fields stay untyped so the validators can tell a missing coordinate from
/// a malformed one.
#[derive(Debug, Default, Deserialize)]
pub struct RunningLocationBody {
    /// Longitude as sent by the client
    #[serde(default)]
    pub longitude: Option<Value>,
    /// Latitude as sent by the client
    #[serde(default)]
    pub latitude: Option<Value>,
}

impl RunningLocationBody {
    fn coordinate(&self, operation: RunningOperation) -> Result<Coordinate, ResponseEnvelope> {
        validation::validate_coordinate(self.longitude.as_ref(), self.latitude.as_ref())
            .map_err(|e| rejected(operation, e))
    }
}

/// Running session routes
pub struct RunningRoutes;

impl RunningRoutes {
    /// Create all running session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::RUNNING_EXERCISE, get(Self::handle_exercise_group))
            .route(endpoints::RUNNING_START, post(Self::handle_start))
            .route(endpoints::RUNNING_CHECK, post(Self::handle_check))
            .route(endpoints::RUNNING_STOP, post(Self::handle_stop))
            .route(endpoints::RUNNING_END, post(Self::handle_end))
            .route(endpoints::RUNNING_IMAGE_PROOF, post(Self::handle_image_proof))
            .route_layer(axum::middleware::from_fn_with_state(
                resources.token_verifier.clone(),
                require_verified_caller,
            ))
            .with_state(resources)
    }

    /// Handle exercise group selection
    async fn handle_exercise_group(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
        query: Result<Query<ExerciseQuery>, QueryRejection>,
    ) -> ResponseEnvelope {
        let Ok(Query(query)) = query else {
            return rejected(
                RunningOperation::ExerciseGroup,
                ValidationError::ExerciseTypeWrong,
            );
        };
        let exercise_type =
            match validation::validate_exercise_type(query.exercise_type.as_deref()) {
                Ok(exercise_type) => exercise_type,
                Err(e) => return rejected(RunningOperation::ExerciseGroup, e),
            };

        info!(user.id = caller.user_id, %exercise_type, "Retrieving exercise group");
        resources
            .dispatcher
            .exercise_group(&caller, exercise_type)
            .await
    }

    /// Handle run start
    async fn handle_start(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
        body: Result<Json<RunningLocationBody>, JsonRejection>,
    ) -> ResponseEnvelope {
        let body = match json_body(body) {
            Ok(body) => body,
            Err(envelope) => return envelope,
        };
        let location = match body.coordinate(RunningOperation::Start) {
            Ok(location) => location,
            Err(envelope) => return envelope,
        };

        info!(user.id = caller.user_id, "Starting run");
        resources.dispatcher.start_running(&caller, &location).await
    }

    /// Handle progress check, or resume when `isRestart=true`
    async fn handle_check(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
        query: Result<Query<CheckQuery>, QueryRejection>,
        body: Result<Json<RunningLocationBody>, JsonRejection>,
    ) -> ResponseEnvelope {
        let operation = RunningOperation::Check;
        let Ok(Query(query)) = query else {
            return rejected(operation, ValidationError::FlagTypeWrong);
        };
        let is_restart = match validation::validate_boolean_flag(query.is_restart.as_deref()) {
            Ok(flag) => flag,
            Err(e) => return rejected(operation, e),
        };
        let body = match json_body(body) {
            Ok(body) => body,
            Err(envelope) => return envelope,
        };
        let location = match body.coordinate(operation) {
            Ok(location) => location,
            Err(envelope) => return envelope,
        };

        let transition = CheckTransition::from(is_restart);
        info!(user.id = caller.user_id, ?transition, "Checking run");
        resources
            .dispatcher
            .check_running(&caller, transition, &location)
            .await
    }

    /// Handle run pause
    async fn handle_stop(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
        body: Result<Json<RunningLocationBody>, JsonRejection>,
    ) -> ResponseEnvelope {
        let body = match json_body(body) {
            Ok(body) => body,
            Err(envelope) => return envelope,
        };
        let location = match body.coordinate(RunningOperation::Stop) {
            Ok(location) => location,
            Err(envelope) => return envelope,
        };

        info!(user.id = caller.user_id, "Pausing run");
        resources.dispatcher.pause_running(&caller, &location).await
    }

    /// Handle run end
    async fn handle_end(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
        query: Result<Query<EndQuery>, QueryRejection>,
        body: Result<Json<RunningLocationBody>, JsonRejection>,
    ) -> ResponseEnvelope {
        let operation = RunningOperation::End;
        let Ok(Query(query)) = query else {
            return rejected(operation, ValidationError::FlagTypeWrong);
        };
        let force_end = match validation::validate_boolean_flag(query.force_end.as_deref()) {
            Ok(flag) => flag,
            Err(e) => return rejected(operation, e),
        };
        let body = match json_body(body) {
            Ok(body) => body,
            Err(envelope) => return envelope,
        };
        let location = match body.coordinate(operation) {
            Ok(location) => location,
            Err(envelope) => return envelope,
        };

        info!(user.id = caller.user_id, force_end, "Ending run");
        resources
            .dispatcher
            .end_running(&caller, force_end, &location)
            .await
    }

    /// Handle proof image upload
    ///
    /// A request that is not multipart at all carries no image and is
    /// reported as such; a multipart body that breaks mid-stream is a
    /// framework error.
    async fn handle_image_proof(
        State(resources): State<Arc<ServerResources>>,
        Extension(caller): Extension<VerifiedCaller>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<ResponseEnvelope, AppError> {
        let form = match multipart {
            Ok(multipart) => ImageProofForm::read(multipart).await?,
            Err(rejection) => {
                tracing::debug!(%rejection, "Image proof request is not multipart");
                ImageProofForm::default()
            }
        };

        Ok(resources
            .dispatcher
            .submit_image_proof(&caller, form.image, form.exercise_id.as_deref())
            .await)
    }
}

/// Fields collected from the image proof multipart body
#[derive(Debug, Default)]
struct ImageProofForm {
    image: Option<ImageUpload>,
    exercise_id: Option<String>,
}

impl ImageProofForm {
    /// Read the `image` and `exercise_id` fields, ignoring anything else
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().map(ToOwned::to_owned);
            match name.as_deref() {
                Some(form_fields::IMAGE) => {
                    let file_name = field.file_name().map(ToOwned::to_owned);
                    let content_type = field.content_type().map(ToOwned::to_owned);
                    let bytes = field.bytes().await.map_err(malformed)?;
                    form.image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                Some(form_fields::EXERCISE_ID) => {
                    form.exercise_id = Some(field.text().await.map_err(malformed)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

fn malformed(error: axum::extract::multipart::MultipartError) -> AppError {
    AppError::invalid_input(format!("Malformed multipart body: {error}"))
}
