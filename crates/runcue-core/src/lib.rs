// ABOUTME: Core types and constants for the runcue workout-cue compiler
// ABOUTME: Foundation crate with the plan model, error handling, preferences and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

#![deny(unsafe_code)]

//! # Runcue Core
//!
//! Foundation crate providing the shared types for the runcue workout-cue
//! compiler. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Unit conversions, countdown anchors, preference keys and defaults
//! - **models**: The plan tree (steps, repeats, triggers, suppressions, feedback)
//! - **config**: Fail-soft preference store and the unit system provider

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Plan, step, trigger and feedback models
pub mod models;

/// Preference store and unit system provider
pub mod config;

pub use errors::{AppError, AppResult, ErrorCode};
