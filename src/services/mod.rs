// ABOUTME: Domain service layer between route handlers and the reward collaborators
// ABOUTME: Collaborator traits plus the protocol-agnostic command dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers extract and validate; everything that talks to a
//! collaborator goes through [`RewardDispatcher`].

/// Reward service, reward provider, and image storage traits
pub mod collaborators;

/// Command dispatch and response mapping
pub mod dispatch;

pub use collaborators::{ImageStorage, RewardProvider, RewardService};
pub use dispatch::{CheckTransition, RewardDispatcher};
