// ABOUTME: Data models exchanged between the rewards HTTP layer and its collaborators
// ABOUTME: Coordinates, exercise types, image proofs, challenges, and the verified caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Everything here is transient: built from one inbound request, handed to a
//! collaborator, and dropped. Storage representation belongs to the
//! collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated `(longitude, latitude)` pair
///
/// Both fields hold the decimal text the client sent so collaborators see
/// exactly what was submitted. Only the `digits.digits` shape is enforced;
/// there is no range check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in decimal degrees
    pub longitude: String,
    /// Latitude in decimal degrees
    pub latitude: String,
}

/// Exercise grouping selected on the exercise screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    /// Personal exercise
    #[serde(rename = "P")]
    Personal,
    /// Group exercise
    #[serde(rename = "G")]
    Group,
}

impl ExerciseType {
    /// Wire code for this type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "P",
            Self::Group => "G",
        }
    }

    /// Parse the exact wire code; anything else (including lowercase) is rejected
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(Self::Personal),
            "G" => Some(Self::Group),
            _ => None,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity attached to the request by the access-token verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedCaller {
    /// Numeric user id
    pub user_id: i64,
    /// Social login provider the account was created with
    pub provider: String,
    /// Account email
    pub email: String,
}

impl VerifiedCaller {
    /// The `provider` + `email` pair the session operations key on
    #[must_use]
    pub fn identity(&self) -> CallerIdentity<'_> {
        CallerIdentity {
            provider: &self.provider,
            email: &self.email,
        }
    }
}

/// Borrowed `provider` + `email` identity used by running-session operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity<'a> {
    /// Social login provider
    pub provider: &'a str,
    /// Account email
    pub email: &'a str,
}

/// Photo evidence attached to a finished exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningImageProof {
    /// Exercise record the image belongs to
    pub exercise_id: i64,
    /// Location returned by image storage
    pub image_location: String,
}

/// A challenge as listed by the reward provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Challenge identifier
    pub challenge_id: i64,
    /// Title
    pub title: String,
    /// Body text
    pub content: String,
    /// Completion condition, free text
    pub condition: String,
    /// Last day of the challenge as stored
    pub end_date: String,
}

/// Fields for a new challenge, passed through without validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChallenge {
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Body text
    #[serde(default)]
    pub content: Option<String>,
    /// Completion condition
    #[serde(default)]
    pub condition: Option<String>,
    /// Last day of the challenge
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Raw image bytes received with an image-proof request
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, if the client sent one
    pub file_name: Option<String>,
    /// Declared content type, if any
    pub content_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}
