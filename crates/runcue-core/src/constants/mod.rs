// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, countdown anchors, preference keys and documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Preference key names read by the generator, normalizer and compiler
pub mod keys;

/// Documented fallback values for every preference key
pub mod defaults;

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const KM_METERS: f64 = 1000.0;
    /// Meters in one statute mile
    pub const MI_METERS: f64 = 1609.34;
    /// Meters in one foot (elevation formatting only)
    pub const METERS_PER_FOOT: f64 = 0.3048;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Audio countdown reminder tables
pub mod countdown {
    /// Periodic reminder anchor for time-bounded steps (seconds)
    pub const TIME_ANCHOR: f64 = 60.0;
    /// One-shot reminder offsets for time-bounded steps (seconds remaining)
    pub const TIME_REMINDERS: [f64; 7] = [60.0, 30.0, 10.0, 5.0, 3.0, 2.0, 1.0];
    /// Periodic reminder anchor for distance-bounded steps (meters)
    pub const DISTANCE_ANCHOR: f64 = 100.0;
    /// One-shot reminder offsets for distance-bounded steps (meters remaining)
    pub const DISTANCE_REMINDERS: [f64; 4] = [100.0, 50.0, 20.0, 10.0];
    /// Margin added to each reminder point; must stay below 0.5 so the
    /// point never rounds onto the neighbouring integer countdown value
    pub const REMINDER_MARGIN: f64 = 0.4;
    /// First value and interval of the per-unit countdown readout on rest steps
    pub const READOUT_INTERVAL: f64 = 1.0;
}

/// Trigger counters
pub mod counters {
    /// Lap-started announcements fire once per step
    pub const LAP_STARTED_MAX_FIRE: u32 = 1;
    /// The secondary lap-started trigger skips the occurrence already
    /// announced by the step-scoped trigger
    pub const LAP_STARTED_SKIP: u32 = 1;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the CLI service
    pub const RUNCUE_CLI: &str = "runcue-cli";
}
