// ABOUTME: Request validators gating every rewards operation on well-formed input
// ABOUTME: Pure checks for coordinates, strict boolean flags, exercise types, and image proofs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request validation
//!
//! Validators never call collaborators and never mutate state. Each failure is
//! a [`ValidationError`]; [`RunningOperation::status_for`] turns it into the
//! operation-specific [`ResponseStatus`] the client expects.

use std::sync::LazyLock;

use regex::Regex;
use reward_core::models::{Coordinate, ExerciseType, RunningImageProof};
use reward_core::response::ResponseStatus;
use serde_json::Value;
use thiserror::Error;

/// Integer part, literal dot, fractional part. No sign, exponent, or padding.
static COORDINATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").ok());

/// A failed precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Exercise type was not `P` or `G`
    #[error("exercise type must be P or G")]
    ExerciseTypeWrong,
    /// Longitude or latitude missing
    #[error("longitude and latitude are required")]
    LocationEmpty,
    /// Longitude or latitude not in `digits.digits` form
    #[error("longitude and latitude must be decimal numbers")]
    LocationTypeWrong,
    /// Control flag was not a boolean
    #[error("flag must be a boolean")]
    FlagTypeWrong,
    /// No image reference
    #[error("image is required")]
    ImageEmpty,
    /// Exercise id missing or not numeric
    #[error("exercise_id is required")]
    ExerciseIdEmpty,
}

/// Operations whose validation failures carry their own status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningOperation {
    /// `GET /app/rewards/running/exercise`
    ExerciseGroup,
    /// `POST /app/rewards/running/start`
    Start,
    /// `POST /app/rewards/running/check`
    Check,
    /// `POST /app/rewards/running/stop`
    Stop,
    /// `POST /app/rewards/running/end`
    End,
    /// `POST /app/rewards/running/imageProof`
    ImageProof,
}

impl RunningOperation {
    /// Name used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExerciseGroup => "exercise_group",
            Self::Start => "start",
            Self::Check => "check",
            Self::Stop => "stop",
            Self::End => "end",
            Self::ImageProof => "image_proof",
        }
    }

    /// Status reported to the client when `error` rejects this operation
    #[must_use]
    pub const fn status_for(self, error: ValidationError) -> ResponseStatus {
        use ResponseStatus as S;
        use ValidationError as E;

        match (self, error) {
            (Self::Start, E::LocationEmpty) => S::RunningStartLocationEmpty,
            (Self::Start, E::LocationTypeWrong) => S::RunningStartLocationTypeWrong,
            (Self::Check, E::FlagTypeWrong) => S::RunningCheckRestartTypeWrong,
            (Self::Check, E::LocationEmpty) => S::RunningCheckLocationEmpty,
            (Self::Check, E::LocationTypeWrong) => S::RunningCheckLocationTypeWrong,
            (Self::Stop, E::LocationEmpty) => S::RunningStopLocationEmpty,
            (Self::Stop, E::LocationTypeWrong) => S::RunningStopLocationTypeWrong,
            (Self::End, E::FlagTypeWrong) => S::RunningEndForceEndWrong,
            (Self::End, E::LocationEmpty) => S::RunningEndLocationEmpty,
            (Self::End, E::LocationTypeWrong) => S::RunningEndLocationTypeWrong,
            (_, E::ExerciseTypeWrong) => S::RunningChooseExerciseTypeWrong,
            (_, E::ImageEmpty) => S::RunningProofImageEmpty,
            (_, E::ExerciseIdEmpty) => S::RunningProofExerciseIdEmpty,
            // Combinations no handler produces
            (Self::ExerciseGroup | Self::ImageProof | Self::Start | Self::Stop, _) => {
                S::RequestBodyInvalid
            }
        }
    }
}

/// Accept only the exact codes `P` and `G`
///
/// # Errors
///
/// Returns [`ValidationError::ExerciseTypeWrong`] for anything else, including a
/// missing value and lowercase codes
pub fn validate_exercise_type(raw: Option<&str>) -> Result<ExerciseType, ValidationError> {
    raw.and_then(ExerciseType::from_code)
        .ok_or(ValidationError::ExerciseTypeWrong)
}

/// Both coordinate fields must be present
///
/// # Errors
///
/// Returns [`ValidationError::LocationEmpty`] if either is absent
pub fn validate_coordinate_presence<'a>(
    longitude: Option<&'a Value>,
    latitude: Option<&'a Value>,
) -> Result<(&'a Value, &'a Value), ValidationError> {
    match (present(longitude), present(latitude)) {
        (Some(longitude), Some(latitude)) => Ok((longitude, latitude)),
        _ => Err(ValidationError::LocationEmpty),
    }
}

/// Both coordinate fields must be `digits.digits`
///
/// Strings are checked as sent; JSON numbers are checked through their decimal
/// rendering, so `37.5` passes and `37` does not. Other JSON types fail.
///
/// # Errors
///
/// Returns [`ValidationError::LocationTypeWrong`] if either field fails
pub fn validate_coordinate_format(
    longitude: &Value,
    latitude: &Value,
) -> Result<Coordinate, ValidationError> {
    match (decimal_text(longitude), decimal_text(latitude)) {
        (Some(longitude), Some(latitude)) => Ok(Coordinate {
            longitude,
            latitude,
        }),
        _ => Err(ValidationError::LocationTypeWrong),
    }
}

/// Presence then format, the order every running endpoint uses
///
/// # Errors
///
/// Returns the first failing precondition
pub fn validate_coordinate(
    longitude: Option<&Value>,
    latitude: Option<&Value>,
) -> Result<Coordinate, ValidationError> {
    let (longitude, latitude) = validate_coordinate_presence(longitude, latitude)?;
    validate_coordinate_format(longitude, latitude)
}

/// Strict boolean from a query-string flag
///
/// Only the canonical strings `true` and `false` pass.
///
/// # Errors
///
/// Returns [`ValidationError::FlagTypeWrong`] for anything else, including a
/// missing flag
pub fn validate_boolean_flag(raw: Option<&str>) -> Result<bool, ValidationError> {
    match raw {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        _ => Err(ValidationError::FlagTypeWrong),
    }
}

/// Strict boolean from a JSON value: only `Value::Bool` passes
///
/// # Errors
///
/// Returns [`ValidationError::FlagTypeWrong`] for strings, numbers, `null`, or
/// a missing value
pub fn validate_boolean_value(raw: Option<&Value>) -> Result<bool, ValidationError> {
    match raw {
        Some(Value::Bool(flag)) => Ok(*flag),
        _ => Err(ValidationError::FlagTypeWrong),
    }
}

/// Image reference first, then a numeric exercise id
///
/// # Errors
///
/// Returns [`ValidationError::ImageEmpty`] if the image is absent or empty;
/// otherwise [`ValidationError::ExerciseIdEmpty`] if the id is absent, blank,
/// or not an integer
pub fn validate_image_proof(
    image_location: Option<&str>,
    exercise_id: Option<&str>,
) -> Result<RunningImageProof, ValidationError> {
    let image_location = image_location
        .filter(|location| !location.is_empty())
        .ok_or(ValidationError::ImageEmpty)?;
    let exercise_id = parse_exercise_id(exercise_id)?;

    Ok(RunningImageProof {
        exercise_id,
        image_location: image_location.to_owned(),
    })
}

/// Numeric coercion of the `exercise_id` form field
///
/// # Errors
///
/// Returns [`ValidationError::ExerciseIdEmpty`] if absent, blank, or not an integer
pub fn parse_exercise_id(raw: Option<&str>) -> Result<i64, ValidationError> {
    raw.map(str::trim)
        .filter(|id| !id.is_empty())
        .and_then(|id| id.parse().ok())
        .ok_or(ValidationError::ExerciseIdEmpty)
}

/// JSON `null` counts as absent
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Text form of a coordinate value, if it is a decimal
///
/// Numbers are read the way a browser client prints them: a float with no
/// fractional part (`127.0`) prints as an integer and is not a decimal.
fn decimal_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.fract() != 0.0) => n.to_string(),
        _ => return None,
    };
    is_decimal(&text).then_some(text)
}

fn is_decimal(text: &str) -> bool {
    COORDINATE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text))
}
