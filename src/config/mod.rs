// ABOUTME: Configuration loading for the runcue binaries
// ABOUTME: Preference files, environment overrides, log level and documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! Configuration module
//!
//! - **Environment**: preference files with `RUNCUE_PREF_<KEY>` overrides
//! - **Defaults**: the documented value of every preference the passes read

/// Documented preference defaults
pub mod defaults;

/// Preference loading from files and the environment
pub mod environment;

pub use defaults::documented_defaults;
pub use environment::{load_preferences, LogLevel, PREFERENCE_ENV_PREFIX};
