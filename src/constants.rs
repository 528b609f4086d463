// ABOUTME: System-wide constants for the rewards API
// ABOUTME: Route paths, header names, service names, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded values shared by routes, middleware, and configuration.

/// Service identity used in logs
pub mod service_names {
    /// Default service name for structured logging
    pub const REWARD_API: &str = "reward-api";
}

/// Route paths served by this crate
pub mod endpoints {
    /// Reward summary for the home screen
    pub const REWARD_SUMMARY: &str = "/rewards/users";
    /// Exercise group selection
    pub const RUNNING_EXERCISE: &str = "/app/rewards/running/exercise";
    /// Start a run
    pub const RUNNING_START: &str = "/app/rewards/running/start";
    /// Progress check or resume after pause
    pub const RUNNING_CHECK: &str = "/app/rewards/running/check";
    /// Pause a run
    pub const RUNNING_STOP: &str = "/app/rewards/running/stop";
    /// Finish a run
    pub const RUNNING_END: &str = "/app/rewards/running/end";
    /// Upload a proof image for a finished exercise
    pub const RUNNING_IMAGE_PROOF: &str = "/app/rewards/running/imageProof";
    /// List or create challenges
    pub const CHALLENGE: &str = "/app/rewards/challenge";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}

/// Header names
pub mod headers {
    /// Header carrying the access token issued by the login service
    pub const ACCESS_TOKEN: &str = "x-access-token";
    /// Correlation id header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Multipart field names for image proof uploads
pub mod form_fields {
    /// The uploaded image file
    pub const IMAGE: &str = "image";
    /// Exercise the image belongs to
    pub const EXERCISE_ID: &str = "exercise_id";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default upload limit (10 MiB)
    pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
    /// Signing secret used only when running in development
    pub const DEVELOPMENT_JWT_SECRET: &str = "development-only-reward-api-secret";
}
