// ABOUTME: Error handling re-exports for the rewards API
// ABOUTME: AppError, ErrorCode, and AppResult live in reward-core so collaborators share them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The definitions live in `reward_core::errors`; `AppError` renders as a
//! response envelope through the `http-response` feature.

pub use reward_core::errors::{AppError, AppResult, ErrorCode};
