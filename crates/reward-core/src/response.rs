// ABOUTME: Response status vocabulary and the uniform response envelope
// ABOUTME: Every rewards endpoint answers with a ResponseEnvelope carrying one ResponseStatus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response envelopes
//!
//! The mobile client switches on `status` (and its numeric `code`), never on
//! the HTTP status line, so the names and codes here are a wire contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Status vocabulary shared with the mobile client
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// Request succeeded
    Success,
    /// Request body or multipart form could not be read
    RequestBodyInvalid,
    /// No access token was supplied
    TokenEmpty,
    /// Access token failed verification
    TokenVerificationFailure,
    /// Backing store failed
    DbError,
    /// Any other server-side failure
    ServerError,

    /// Exercise type query was not `P` or `G`
    RunningChooseExerciseTypeWrong,
    /// Start: longitude or latitude missing
    RunningStartLocationEmpty,
    /// Start: longitude or latitude not a decimal
    RunningStartLocationTypeWrong,
    /// Check: `isRestart` not a boolean
    RunningCheckRestartTypeWrong,
    /// Check: longitude or latitude missing
    RunningCheckLocationEmpty,
    /// Check: longitude or latitude not a decimal
    RunningCheckLocationTypeWrong,
    /// Stop: longitude or latitude missing
    RunningStopLocationEmpty,
    /// Stop: longitude or latitude not a decimal
    RunningStopLocationTypeWrong,
    /// End: `forceEnd` not a boolean
    RunningEndForceEndWrong,
    /// End: longitude or latitude missing
    RunningEndLocationEmpty,
    /// End: longitude or latitude not a decimal
    RunningEndLocationTypeWrong,
    /// Image proof: no image uploaded
    RunningProofImageEmpty,
    /// Image proof: no usable exercise id
    RunningProofExerciseIdEmpty,

    /// No challenges exist
    ChallengeNotFound,
}

impl ResponseStatus {
    /// Numeric code sent alongside the status name
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 1000,
            Self::RequestBodyInvalid => 2001,
            Self::TokenEmpty => 2000,
            Self::TokenVerificationFailure => 3000,
            Self::DbError => 4000,
            Self::ServerError => 4001,
            Self::RunningChooseExerciseTypeWrong => 2100,
            Self::RunningStartLocationEmpty => 2110,
            Self::RunningStartLocationTypeWrong => 2111,
            Self::RunningCheckRestartTypeWrong => 2120,
            Self::RunningCheckLocationEmpty => 2121,
            Self::RunningCheckLocationTypeWrong => 2122,
            Self::RunningStopLocationEmpty => 2130,
            Self::RunningStopLocationTypeWrong => 2131,
            Self::RunningEndForceEndWrong => 2140,
            Self::RunningEndLocationEmpty => 2141,
            Self::RunningEndLocationTypeWrong => 2142,
            Self::RunningProofImageEmpty => 2150,
            Self::RunningProofExerciseIdEmpty => 2151,
            Self::ChallengeNotFound => 3100,
        }
    }

    /// Human-readable message for this status
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::RequestBodyInvalid => "Request body is invalid",
            Self::TokenEmpty => "Access token is required",
            Self::TokenVerificationFailure => "Access token verification failed",
            Self::DbError => "Database error",
            Self::ServerError => "Server error",
            Self::RunningChooseExerciseTypeWrong => "Exercise type must be P or G",
            Self::RunningStartLocationEmpty => "Start location is required",
            Self::RunningStartLocationTypeWrong => "Start location must be decimal coordinates",
            Self::RunningCheckRestartTypeWrong => "isRestart must be a boolean",
            Self::RunningCheckLocationEmpty => "Check location is required",
            Self::RunningCheckLocationTypeWrong => "Check location must be decimal coordinates",
            Self::RunningStopLocationEmpty => "Stop location is required",
            Self::RunningStopLocationTypeWrong => "Stop location must be decimal coordinates",
            Self::RunningEndForceEndWrong => "forceEnd must be a boolean",
            Self::RunningEndLocationEmpty => "End location is required",
            Self::RunningEndLocationTypeWrong => "End location must be decimal coordinates",
            Self::RunningProofImageEmpty => "Proof image is required",
            Self::RunningProofExerciseIdEmpty => "exercise_id is required",
            Self::ChallengeNotFound => "No challenges found",
        }
    }

    /// Pick the client-facing status for an internal error code
    #[must_use]
    pub const fn for_error_code(code: ErrorCode) -> Self {
        match code {
            ErrorCode::AuthRequired => Self::TokenEmpty,
            ErrorCode::AuthInvalid | ErrorCode::AuthExpired => Self::TokenVerificationFailure,
            ErrorCode::InvalidInput
            | ErrorCode::MissingRequiredField
            | ErrorCode::InvalidFormat
            | ErrorCode::PayloadTooLarge => Self::RequestBodyInvalid,
            ErrorCode::DatabaseError | ErrorCode::StorageError => Self::DbError,
            ErrorCode::ResourceNotFound
            | ErrorCode::RequestTimeout
            | ErrorCode::ExternalServiceError
            | ErrorCode::ExternalServiceUnavailable
            | ErrorCode::ConfigError
            | ErrorCode::ConfigMissing
            | ErrorCode::ConfigInvalid
            | ErrorCode::InternalError
            | ErrorCode::SerializationError => Self::ServerError,
        }
    }
}

/// Uniform `{status, code, message, data?}` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Status name
    pub status: ResponseStatus,
    /// Numeric code for `status`
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Payload, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    /// Successful envelope carrying `data`
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized to JSON
    pub fn success<T: Serialize>(data: &T) -> AppResult<Self> {
        Ok(Self::success_value(serde_json::to_value(data)?))
    }

    /// Successful envelope carrying an already-built JSON payload
    #[must_use]
    pub fn success_value(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::failure(ResponseStatus::Success)
        }
    }

    /// Envelope for `status` with no payload
    #[must_use]
    pub fn failure(status: ResponseStatus) -> Self {
        Self {
            status,
            code: status.code(),
            message: status.message().to_owned(),
            data: None,
        }
    }

    /// Envelope for a collaborator that returned an error instead of a result
    #[must_use]
    pub fn from_collaborator_error(error: &AppError) -> Self {
        if error.code.is_storage_failure() {
            Self::failure(ResponseStatus::DbError)
        } else {
            Self::failure(ResponseStatus::ServerError)
        }
    }

    /// Whether this envelope reports success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;

    use super::{ResponseEnvelope, ResponseStatus};
    use crate::errors::AppError;

    impl IntoResponse for ResponseEnvelope {
        fn into_response(self) -> Response {
            (StatusCode::OK, Json(self)).into_response()
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let mut envelope =
                ResponseEnvelope::failure(ResponseStatus::for_error_code(self.code));
            envelope.message = self.message;
            (status, Json(envelope)).into_response()
        }
    }
}
