// ABOUTME: Main library entry point for the runcue workout-cue compiler
// ABOUTME: Re-exports the plan model and workout passes, adds logging and preference loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

#![deny(unsafe_code)]

//! # Runcue
//!
//! Turns a handful of user preferences into a fully annotated workout plan:
//! a tree of steps where every step carries the triggers that decide when an
//! audio cue fires and what it reads out.
//!
//! ## Architecture
//!
//! - **`runcue_core`**: plan model, errors, constants and the preference store
//! - **`runcue_workout`**: default plan generator, plan normalizer, cue
//!   compiler and the ordered pipeline tying them together
//! - **config**: preference loading from JSON files and the environment
//! - **logging**: structured `tracing` setup shared by the binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runcue::config::environment::load_preferences;
//! use runcue::workout::{prepare_workout, KarvonenZones, NoHeartRateZones, WorkoutMode};
//!
//! # fn main() -> runcue::core::errors::AppResult<()> {
//! let prefs = load_preferences(None)?;
//! let plan = match KarvonenZones::from_preferences(&prefs) {
//!     Some(zones) => prepare_workout(WorkoutMode::Interval, &prefs, &zones)?,
//!     None => prepare_workout(WorkoutMode::Interval, &prefs, &NoHeartRateZones)?,
//! };
//! println!("{} triggers", plan.trigger_count());
//! # Ok(())
//! # }
//! ```

/// Preference loading from files and environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Plan model, errors, constants and preference store
pub use runcue_core as core;

/// Generator, normalizer, cue compiler and pipeline
pub use runcue_workout as workout;
