// ABOUTME: Main library entry point for the running rewards HTTP API
// ABOUTME: Validates running-session requests and dispatches them to reward collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Reward API
//!
//! The HTTP controller layer of a running rewards app. It checks request
//! parameters (coordinates, strict boolean flags, exercise types, proof
//! images), routes each valid request to exactly one collaborator call, and
//! answers with a uniform `{status, code, message, data?}` envelope.
//!
//! Persistence, file storage, and token issuance live behind the traits in
//! [`services::collaborators`]; the host process supplies implementations and
//! mounts the router.
//!
//! ## Architecture
//!
//! - **Validation**: pure precondition checks with operation-specific statuses
//! - **Services**: collaborator traits and the command dispatcher
//! - **Middleware**: access-token verification, request ids, CORS
//! - **Routes**: axum handlers per domain
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use reward_api::config::ServerConfig;
//! use reward_api::errors::AppResult;
//! use reward_api::resources::ServerResources;
//! use reward_api::services::{ImageStorage, RewardProvider, RewardService};
//!
//! fn router(
//!     service: Arc<dyn RewardService>,
//!     provider: Arc<dyn RewardProvider>,
//!     images: Arc<dyn ImageStorage>,
//! ) -> AppResult<axum::Router> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let resources = ServerResources::new(service, provider, images, config);
//!     Ok(reward_api::server::build_router(Arc::new(resources)))
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Route paths, header names, and defaults
pub mod constants;

/// Error types shared with the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Access-token verification, request ids, and CORS
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// `HTTP` route handlers
pub mod routes;

/// Router assembly
pub mod server;

/// Collaborator traits and command dispatch
pub mod services;

/// Request precondition checks
pub mod validation;

pub use reward_core::models;
pub use reward_core::response;
