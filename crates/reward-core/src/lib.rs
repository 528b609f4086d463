// ABOUTME: Core types for the running rewards API
// ABOUTME: Foundation crate with error handling, the response vocabulary, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Reward Core
//!
//! Shared types for the running rewards API and the collaborators it calls.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, `AppResult`
//! - **response**: `ResponseStatus` vocabulary and `ResponseEnvelope`
//! - **models**: coordinates, exercise types, challenges, verified caller

/// Unified error handling system with standard error codes
pub mod errors;

/// Response status vocabulary and the uniform envelope
pub mod response;

/// Data models exchanged with collaborators
pub mod models;
