// ABOUTME: Recording mock collaborators and router wiring for route integration tests
// ABOUTME: Every collaborator call is logged so tests can assert what was (and was not) invoked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reward_api::config::ServerConfig;
use reward_api::errors::{AppError, AppResult, ErrorCode};
use reward_api::middleware::AccessTokenClaims;
use reward_api::models::{
    CallerIdentity, Challenge, Coordinate, ExerciseType, ImageUpload, NewChallenge,
    RunningImageProof,
};
use reward_api::resources::ServerResources;
use reward_api::response::ResponseEnvelope;
use reward_api::server::build_router;
use reward_api::services::{ImageStorage, RewardProvider, RewardService};
use serde_json::json;

/// Secret shared by the test router and [`access_token`]
pub const TEST_JWT_SECRET: &str = "reward-api-test-secret";

/// Location the mock storage hands back for every upload
pub const STORED_IMAGE_LOCATION: &str = "https://images.example.com/proof/1.jpg";

/// One collaborator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Collaborator method name
    pub operation: &'static str,
    /// Arguments rendered for assertions
    pub detail: String,
}

/// Mock implementing every collaborator trait, recording each call
#[derive(Default)]
pub struct RecordingCollaborators {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Mutex<Option<ErrorCode>>,
    challenges: Mutex<Vec<Challenge>>,
    image_location: Mutex<Option<String>>,
    uploads: Mutex<Vec<ImageUpload>>,
    delay: Mutex<Option<Duration>>,
}

impl RecordingCollaborators {
    /// Fresh mock with no failures and no challenges
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every following call fail with `code`
    pub fn fail_with(&self, code: ErrorCode) {
        *self.failure.lock().unwrap() = Some(code);
    }

    /// Make `retrieve_reward_main` wait `delay` before answering
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Challenges returned by `retrieve_challenges`
    pub fn set_challenges(&self, challenges: Vec<Challenge>) {
        *self.challenges.lock().unwrap() = challenges;
    }

    /// Override the location returned by `store_image`
    pub fn set_image_location(&self, location: &str) {
        *self.image_location.lock().unwrap() = Some(location.to_owned());
    }

    /// Every call so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Operation names of every call so far
    pub fn operations(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.operation).collect()
    }

    /// Images handed to storage
    pub fn uploads(&self) -> Vec<ImageUpload> {
        self.uploads.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, detail: String) -> AppResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { operation, detail });
        match *self.failure.lock().unwrap() {
            Some(code) => Err(AppError::new(code, format!("{operation} failed"))),
            None => Ok(()),
        }
    }

    fn envelope(operation: &'static str, detail: &str) -> ResponseEnvelope {
        ResponseEnvelope::success_value(json!({ "operation": operation, "detail": detail }))
    }

    fn session_call(
        &self,
        operation: &'static str,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope> {
        let detail = format!(
            "{}:{}@{},{}",
            caller.provider, caller.email, location.longitude, location.latitude
        );
        self.record(operation, detail.clone())?;
        Ok(Self::envelope(operation, &detail))
    }
}

#[async_trait]
impl RewardService for RecordingCollaborators {
    async fn start_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope> {
        self.session_call("start_user_running", caller, location)
    }

    async fn check_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope> {
        self.session_call("check_user_running", caller, location)
    }

    async fn restart_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope> {
        self.session_call("restart_user_running", caller, location)
    }

    async fn pause_user_running(
        &self,
        caller: CallerIdentity<'_>,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope> {
        self.session_call("pause_user_running", caller, location)
    }

    async fn end_user_running(
        &self,
        caller: CallerIdentity<'_>,
        force_end: bool,
        location: &Coordinate,
    ) -> AppResult<ResponseEnvelope> {
        let detail = format!(
            "{}:{}@{},{} force_end={force_end}",
            caller.provider, caller.email, location.longitude, location.latitude
        );
        self.record("end_user_running", detail.clone())?;
        Ok(Self::envelope("end_user_running", &detail))
    }

    async fn create_running_image(
        &self,
        caller: CallerIdentity<'_>,
        proof: &RunningImageProof,
    ) -> AppResult<ResponseEnvelope> {
        let detail = format!(
            "{}:{} exercise={} image={}",
            caller.provider, caller.email, proof.exercise_id, proof.image_location
        );
        self.record("create_running_image", detail.clone())?;
        Ok(Self::envelope("create_running_image", &detail))
    }

    async fn create_challenge(&self, challenge: &NewChallenge) -> AppResult<ResponseEnvelope> {
        let detail = format!(
            "{:?}|{:?}|{:?}|{:?}",
            challenge.title, challenge.content, challenge.condition, challenge.end_date
        );
        self.record("create_challenge", detail.clone())?;
        Ok(Self::envelope("create_challenge", &detail))
    }
}

#[async_trait]
impl RewardProvider for RecordingCollaborators {
    async fn retrieve_reward_main(&self, user_id: i64) -> AppResult<ResponseEnvelope> {
        self.record("retrieve_reward_main", user_id.to_string())?;
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(ResponseEnvelope::success_value(
            json!({ "user_id": user_id, "points": 120 }),
        ))
    }

    async fn retrieve_user_exercise_group(
        &self,
        user_id: i64,
        exercise_type: ExerciseType,
    ) -> AppResult<ResponseEnvelope> {
        let detail = format!("{user_id}:{exercise_type}");
        self.record("retrieve_user_exercise_group", detail.clone())?;
        Ok(Self::envelope("retrieve_user_exercise_group", &detail))
    }

    async fn retrieve_challenges(&self) -> AppResult<Vec<Challenge>> {
        self.record("retrieve_challenges", String::new())?;
        Ok(self.challenges.lock().unwrap().clone())
    }
}

#[async_trait]
impl ImageStorage for RecordingCollaborators {
    async fn store_image(&self, upload: ImageUpload) -> AppResult<String> {
        let detail = format!(
            "{:?} {:?} {} bytes",
            upload.file_name,
            upload.content_type,
            upload.bytes.len()
        );
        self.record("store_image", detail)?;
        self.uploads.lock().unwrap().push(upload);
        Ok(self
            .image_location
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| STORED_IMAGE_LOCATION.to_owned()))
    }
}

/// Full router wired to `mock` for every collaborator
pub fn test_router(mock: &Arc<RecordingCollaborators>) -> Router {
    test_router_with_config(mock, ServerConfig::for_testing(TEST_JWT_SECRET))
}

/// Full router wired to `mock`, using `config` instead of the test defaults
pub fn test_router_with_config(mock: &Arc<RecordingCollaborators>, config: ServerConfig) -> Router {
    let config = Arc::new(config);
    let resources = ServerResources::new(mock.clone(), mock.clone(), mock.clone(), config);
    build_router(Arc::new(resources))
}

/// Access token for user 7 signed with [`TEST_JWT_SECRET`], valid for an hour
pub fn access_token() -> String {
    signed_token(TEST_JWT_SECRET, chrono::Utc::now().timestamp() + 3600)
}

/// Access token with an explicit secret and expiry
pub fn signed_token(secret: &str, exp: i64) -> String {
    let claims = AccessTokenClaims {
        id: 7,
        provider: "kakao".to_owned(),
        email: "runner@example.com".to_owned(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Challenge fixture
pub fn challenge(id: i64, title: &str) -> Challenge {
    Challenge {
        challenge_id: id,
        title: title.to_owned(),
        content: format!("{title} content"),
        condition: "10km".to_owned(),
        end_date: "2025-12-31".to_owned(),
    }
}
