// ABOUTME: Typed configuration for each workout pass, read from the preference store
// ABOUTME: Every reader is fail-soft and falls back to the documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

/// Cue compiler switches and the per-scope readout flags
pub mod cues;

/// Normalizer settings (autolap and countdown insertion)
pub mod normalize;

/// Default plan generator settings
pub mod plans;

pub use cues::{CueConfig, CueInfo, Readout, READOUTS};
pub use normalize::NormalizeConfig;
pub use plans::{AutoPauseConfig, BasicPlanConfig, IntervalPlanConfig};
