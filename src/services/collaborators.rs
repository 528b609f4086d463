// ABOUTME: Collaborator traits for the reward service, reward provider, and image storage
// ABOUTME: The HTTP layer depends only on these seams; implementations live with the data store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Collaborator abstractions
//!
//! Most operations return a ready-made [`ResponseEnvelope`] because the
//! collaborator already knows the business outcome (for example "no run in
//! progress"). Those envelopes are passed to the client unchanged. Challenge
//! listing returns plain data, and an empty list means "no rows".

use async_trait::async_trait;
use reward_core::models::{
    CallerIdentity, Challenge, Coordinate, ExerciseType, ImageUpload, NewChallenge,
    RunningImageProof,
};
use reward_core::response::ResponseEnvelope;

use crate::errors::AppResult;

/// Write side: running sessions and challenge creation
#[async_trait]
pub trait RewardService: Send + Sync {
    /// Begin a run at `location`
    async fn start_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope>;

    /// Record progress for a run in progress
    async fn check_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope>;

    /// Resume a paused run
    async fn restart_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope>;

    /// Pause a run, saving the record up to `location`
    async fn pause_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope>;

    /// Finish a run; `force_end` ends it even if the goal was not reached
    async fn end_user_running(
        &self,
        caller: CallerIdentity<'_>,
        force_end: bool,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope>;

    /// Attach a proof image to an exercise record
    async fn create_running_image(
        &self,
        caller: CallerIdentity<'_>,
        proof: &RunningImageProof,
    ) -> AppResult<ResponseEnvelope>;

    /// Create a challenge
    async fn create_challenge(&self, challenge: &NewChallenge) -> AppResult<ResponseEnvelope>;
}

/// Read side: reward summaries, exercise groups, challenge listing
#[async_trait]
pub trait RewardProvider: Send + Sync {
    /// Reward summary for the home screen
    async fn retrieve_reward_main(&self, user_id: i64) -> AppResult<ResponseEnvelope>;

    /// Exercise group the user belongs to for `exercise_type`
    async fn retrieve_user_exercise_group(
        &self,
        user_id: i64,
        exercise_type: ExerciseType,
    ) -> AppResult<ResponseEnvelope>;

    /// Every challenge; empty when there are none
    async fn retrieve_challenges(&self) -> AppResult<Vec<Challenge>>;
}

/// Object storage for proof images
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store `upload` and return its public location
    ///
    /// An empty location is treated as "no image".
    async fn store_image(&self, upload: ImageUpload) -> AppResult<String>;
}
