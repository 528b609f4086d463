// ABOUTME: Session command dispatcher routing validated requests to exactly one collaborator call
// ABOUTME: Multiplexes check vs restart, maps empty challenge lists, and folds collaborator errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reward command dispatch
//!
//! Protocol-agnostic: handlers validate and extract, then call one method
//! here. Every method returns an envelope; collaborator failures never escape.

use std::sync::Arc;

use reward_core::models::{
    Challenge, Coordinate, ExerciseType, ImageUpload, NewChallenge, RunningImageProof,
    VerifiedCaller,
};
use reward_core::response::{ResponseEnvelope, ResponseStatus};
use tracing::{error, info};

use super::collaborators::{ImageStorage, RewardProvider, RewardService};
use crate::errors::{AppError, AppResult};
use crate::validation::{self, RunningOperation, ValidationError};

/// Which transition the check endpoint performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTransition {
    /// Resume after a pause
    Restart,
    /// Ordinary in-progress update
    Progress,
}

impl From<bool> for CheckTransition {
    fn from(is_restart: bool) -> Self {
        if is_restart {
            Self::Restart
        } else {
            Self::Progress
        }
    }
}

/// Routes rewards commands to collaborators
#[derive(Clone)]
pub struct RewardDispatcher {
    service: Arc<dyn RewardService>,
    provider: Arc<dyn RewardProvider>,
    images: Arc<dyn ImageStorage>,
}

impl RewardDispatcher {
    /// Create a dispatcher over the given collaborators
    #[must_use]
    pub fn new(
        service: Arc<dyn RewardService>,
        provider: Arc<dyn RewardProvider>,
        images: Arc<dyn ImageStorage>,
    ) -> Self {
        Self {
            service,
            provider,
            images,
        }
    }

    /// Reward summary for the caller
    ///
    /// Any collaborator failure here is reported as `DB_ERROR`, whatever its
    /// error code.
    pub async fn reward_summary(&self, caller: &VerifiedCaller) -> ResponseEnvelope {
        settle_as_db_error(
            "retrieve_reward_main",
            self.provider.retrieve_reward_main(caller.user_id).await,
        )
    }

    /// Exercise group for the caller and `exercise_type`
    pub async fn exercise_group(
        &self,
        caller: &VerifiedCaller,
        exercise_type: ExerciseType,
    ) -> ResponseEnvelope {
        settle(
            "retrieve_user_exercise_group",
            self.provider
                .retrieve_user_exercise_group(caller.user_id, exercise_type)
                .await,
        )
    }

    /// Start a run
    pub async fn start_running(
        &self,
        caller: &VerifiedCaller,
        location: &Coordinate,
    ) -> ResponseEnvelope {
        settle(
            "start_user_running",
            self.service
                .start_user_running(caller.identity(), location)
                .await,
        )
    }

    /// Progress check or resume, chosen by `transition`
    pub async fn check_running(
        &self,
        caller: &VerifiedCaller,
        transition: CheckTransition,
        location: &Coordinate,
    ) -> ResponseEnvelope {
        match transition {
            CheckTransition::Restart => settle(
                "restart_user_running",
                self.service
                    .restart_user_running(caller.identity(), location)
                    .await,
            ),
            CheckTransition::Progress => settle(
                "check_user_running",
                self.service
                    .check_user_running(caller.identity(), location)
                    .await,
            ),
        }
    }

    /// Pause a run
    pub async fn pause_running(
        &self,
        caller: &VerifiedCaller,
        location: &Coordinate,
    ) -> ResponseEnvelope {
        settle(
            "pause_user_running",
            self.service
                .pause_user_running(caller.identity(), location)
                .await,
        )
    }

    /// Finish a run
    pub async fn end_running(
        &self,
        caller: &VerifiedCaller,
        force_end: bool,
        location: &Coordinate,
    ) -> ResponseEnvelope {
        settle(
            "end_user_running",
            self.service
                .end_user_running(caller.identity(), force_end, location)
                .await,
        )
    }

    /// Validate, store, and attach a proof image
    ///
    /// The image is only stored once both the image and the exercise id are
    /// known to be present, so a rejected request leaves nothing behind.
    pub async fn submit_image_proof(
        &self,
        caller: &VerifiedCaller,
        image: Option<ImageUpload>,
        exercise_id: Option<&str>,
    ) -> ResponseEnvelope {
        let operation = RunningOperation::ImageProof;

        let Some(image) = image.filter(|upload| !upload.bytes.is_empty()) else {
            return rejected(operation, ValidationError::ImageEmpty);
        };
        if let Err(e) = validation::parse_exercise_id(exercise_id) {
            return rejected(operation, e);
        }

        let location = match self.images.store_image(image).await {
            Ok(location) => location,
            Err(e) => return collaborator_failed("store_image", &e),
        };

        let proof: RunningImageProof =
            match validation::validate_image_proof(Some(&location), exercise_id) {
                Ok(proof) => proof,
                Err(e) => return rejected(operation, e),
            };

        info!(
            user.id = caller.user_id,
            exercise_id = proof.exercise_id,
            "Attaching proof image"
        );
        settle(
            "create_running_image",
            self.service
                .create_running_image(caller.identity(), &proof)
                .await,
        )
    }

    /// All challenges, or `CHALLENGE_NOT_FOUND` when there are none
    pub async fn list_challenges(&self) -> ResponseEnvelope {
        match self.provider.retrieve_challenges().await {
            Ok(challenges) => challenges_envelope(&challenges),
            Err(e) => collaborator_failed("retrieve_challenges", &e),
        }
    }

    /// Create a challenge; fields pass through untouched
    pub async fn create_challenge(&self, challenge: &NewChallenge) -> ResponseEnvelope {
        settle(
            "create_challenge",
            self.service.create_challenge(challenge).await,
        )
    }
}

/// Envelope for a validation failure on `operation`
#[must_use]
pub fn rejected(operation: RunningOperation, error: ValidationError) -> ResponseEnvelope {
    tracing::debug!(
        operation = operation.as_str(),
        reason = %error,
        "Rejected rewards request"
    );
    ResponseEnvelope::failure(operation.status_for(error))
}

fn challenges_envelope(challenges: &[Challenge]) -> ResponseEnvelope {
    if challenges.is_empty() {
        return ResponseEnvelope::failure(ResponseStatus::ChallengeNotFound);
    }
    ResponseEnvelope::success(&challenges)
        .unwrap_or_else(|e| collaborator_failed("serialize_challenges", &e))
}

fn settle(operation: &'static str, result: AppResult<ResponseEnvelope>) -> ResponseEnvelope {
    result.unwrap_or_else(|e| collaborator_failed(operation, &e))
}

fn settle_as_db_error(
    operation: &'static str,
    result: AppResult<ResponseEnvelope>,
) -> ResponseEnvelope {
    result.unwrap_or_else(|e| {
        log_collaborator_failure(operation, &e);
        ResponseEnvelope::failure(ResponseStatus::DbError)
    })
}

fn collaborator_failed(operation: &'static str, error: &AppError) -> ResponseEnvelope {
    log_collaborator_failure(operation, error);
    ResponseEnvelope::from_collaborator_error(error)
}

fn log_collaborator_failure(operation: &'static str, error: &AppError) {
    error!(
        operation,
        error.code = ?error.code,
        error = %error,
        "Rewards collaborator failed"
    );
}
