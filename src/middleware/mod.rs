// ABOUTME: HTTP middleware for request tracing, access-token verification, timeouts, and CORS
// ABOUTME: Provides request ID generation, span creation, and verified-caller extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP middleware applied by the router and by protected route groups

/// Access-token verification and verified-caller extraction
pub mod auth;
/// CORS layer built from configuration
pub mod cors;
/// Request id assignment and per-request spans
pub mod request_id;
/// Whole-request timeout with an envelope response
pub mod timeout;
/// Request id generation and span construction
pub mod tracing;

// Access-token verification
pub use auth::{
    extract_access_token, require_verified_caller, AccessTokenClaims, AccessTokenVerifier,
};

// CORS configuration
pub use cors::setup_cors;

// Request id assignment
pub use request_id::{request_id_middleware, RequestId};

// Request timeout
pub use timeout::request_timeout_middleware;

// Request tracing
pub use tracing::{create_request_span, generate_request_id};
