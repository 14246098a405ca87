// ABOUTME: Configuration types shared across the workspace
// ABOUTME: Contains the fail-soft preference store and the unit system provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

/// Key/value preference store with typed fail-soft accessors
pub mod preferences;

/// Distance unit selection and meter conversion
pub mod units;

pub use preferences::{parse_seconds, PreferenceValue, Preferences};
pub use units::UnitSystem;
