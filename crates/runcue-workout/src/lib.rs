// ABOUTME: Workout plan passes for the runcue cue compiler
// ABOUTME: Default plan generation, normalization, cue compilation and zone resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

#![deny(unsafe_code)]

//! # Runcue Workout
//!
//! The tree passes that turn preferences into an annotated plan. Passes run
//! in a fixed order:
//!
//! 1. **generator**: builds the basic or interval plan
//! 2. **normalizer**: assigns autolap distances and inserts countdown pauses
//! 3. **cues**: attaches triggers and feedback to every step
//!
//! The `pipeline` module enforces that order with typestate.

/// Typed pass configuration read from preferences
pub mod config;

/// Cue compiler
pub mod cues;

/// Default plan generator
pub mod generator;

/// Plan normalizer
pub mod normalizer;

/// Ordered pipeline
pub mod pipeline;

/// Heart-rate zone resolution
pub mod zones;

pub use config::{AutoPauseConfig, BasicPlanConfig, CueConfig, CueInfo, IntervalPlanConfig, NormalizeConfig};
pub use cues::compile;
pub use generator::{build_basic_plan, build_interval_plan};
pub use normalizer::normalize;
pub use pipeline::{generate, prepare_workout, NormalizedPlan, Pipeline, WorkoutMode};
pub use zones::{HeartRateZoneResolver, KarvonenZones, NoHeartRateZones, ZONE_COUNT};
