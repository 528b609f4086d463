// ABOUTME: Shared resource container handed to every route as axum state
// ABOUTME: Holds the command dispatcher, the access-token verifier, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Built once by the host process and shared read-only across requests.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::AccessTokenVerifier;
use crate::services::{ImageStorage, RewardDispatcher, RewardProvider, RewardService};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Routes validated commands to collaborators
    pub dispatcher: RewardDispatcher,
    /// Verifies access tokens issued by the login service
    pub token_verifier: Arc<AccessTokenVerifier>,
    /// Configuration the router was built from
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the collaborators and configuration together
    #[must_use]
    pub fn new(
        service: Arc<dyn RewardService>,
        provider: Arc<dyn RewardProvider>,
        images: Arc<dyn ImageStorage>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            dispatcher: RewardDispatcher::new(service, provider, images),
            token_verifier: Arc::new(AccessTokenVerifier::new(&config.auth.jwt_secret)),
            config,
        }
    }
}
