// ABOUTME: Preference key names consumed by the workout passes
// ABOUTME: One constant per option so call sites never spell raw strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! Preference key names.
//!
//! Keys are grouped by the pass that reads them. The per-scope readout flags
//! follow the pattern `cueinfo_<scope>_<dimension>`.

/// Sport code (integer)
pub const SPORT: &str = "sport";
/// Distance unit (`km` or `mi`)
pub const UNIT: &str = "unit";
/// Mute all audio cues
pub const MUTE: &str = "mute";

/// Plan generation
pub mod plan {
    /// Prepend a countdown pause to the basic plan
    pub const COUNTDOWN_ACTIVE: &str = "countdown_active";
    /// Countdown length in seconds
    pub const COUNTDOWN_TIME: &str = "countdown_time";
    /// Autolap enabled in basic mode
    pub const AUTOLAP_ACTIVE: &str = "autolap_active";
    /// Autolap enabled for structured (interval) plans
    pub const STEP_AUTOLAP_ACTIVE: &str = "step_autolap_active";
    /// Autolap distance in meters
    pub const AUTOLAP: &str = "autolap";
    /// Auto-pause enabled
    pub const AUTOPAUSE_ACTIVE: &str = "autopause_active";
    /// Auto-pause minimum pace in minutes per kilometer
    pub const AUTOPAUSE_MIN_PACE: &str = "autopause_minpace";
    /// Auto-pause delay in seconds
    pub const AUTOPAUSE_AFTER_SECONDS: &str = "autopause_afterseconds";
    /// Basic target: slowest pace per unit (`hh:mm:ss`)
    pub const BASIC_TARGET_PACE_MAX: &str = "basic_target_pace_max";
    /// Basic target: pace tolerance in seconds per unit
    pub const BASIC_TARGET_PACE_MIN_RANGE: &str = "basic_target_pace_min_range";
    /// Basic target: zero-based heart-rate zone
    pub const BASIC_TARGET_HRZ: &str = "basic_target_hrz";
    /// Interval repetitions
    pub const INTERVAL_REPETITIONS: &str = "interval_repetitions";
    /// Work duration kind (0 = time, 1 = distance)
    pub const INTERVAL_TYPE: &str = "interval_type";
    /// Work duration in `hh:mm:ss`
    pub const INTERVAL_TIME: &str = "interval_time";
    /// Work distance in meters
    pub const INTERVAL_DISTANCE: &str = "interval_distance";
    /// Rest duration kind (0 = time, 1 = distance)
    pub const INTERVAL_REST_TYPE: &str = "interval_rest_type";
    /// Rest duration in `hh:mm:ss`
    pub const INTERVAL_REST_TIME: &str = "interval_rest_time";
    /// Rest distance in meters
    pub const INTERVAL_REST_DISTANCE: &str = "interval_rest_distance";
    /// Turn distance rests into recovery steps
    pub const CONVERT_REST_TO_RECOVERY: &str = "convert_interval_distance_rest_to_recovery";
}

/// Plan normalization
pub mod normalize {
    /// Insert countdowns after manual-advance steps
    pub const STEP_COUNTDOWN_ACTIVE: &str = "step_countdown_active";
    /// Countdown lead time in seconds
    pub const STEP_COUNTDOWN_TIME: &str = "step_countdown_time";
}

/// Cue compilation
pub mod cues {
    /// Suppress start/stop/pause/resume announcements
    pub const SKIP_START_STOP: &str = "cueinfo_skip_startstop";
    /// Coach when the live value leaves the target range
    pub const TARGET_COACHING: &str = "cueinfo_target_coaching";
    /// Announce every lap start
    pub const LAP_STARTED: &str = "lap_started";
    /// Announce heart-rate monitor connectivity changes
    pub const HRM_CONNECTION: &str = "cue_hrm_connection";
    /// Coaching moving average window in seconds
    pub const MOVING_AVERAGE_SECONDS: &str = "target_pace_moving_average_seconds";
    /// Coaching grace period in seconds
    pub const GRACE_SECONDS: &str = "target_pace_grace_seconds";
    /// Periodic time cue enabled
    pub const TIME: &str = "cue_time";
    /// Periodic time cue interval in seconds
    pub const TIME_INTERVAL: &str = "cue_time_intervall";
    /// Periodic distance cue enabled
    pub const DISTANCE: &str = "cue_distance";
    /// Periodic distance cue interval in meters
    pub const DISTANCE_INTERVAL: &str = "cue_distance_intervall";
    /// Announce lap completion
    pub const END_OF_LAP: &str = "cue_end_of_lap";
}

/// Heart-rate zone resolution
pub mod zones {
    /// Resting heart rate in bpm
    pub const RESTING_HR: &str = "hrz_resting_hr";
    /// Maximum heart rate in bpm
    pub const MAX_HR: &str = "hrz_max_hr";
}

/// Per-scope readout switches, `cueinfo_<scope>_<dimension>`
pub mod readouts {
    /// Read distance of the whole activity
    pub const TOTAL_DISTANCE: &str = "cueinfo_total_distance";
    /// Read elapsed time of the whole activity
    pub const TOTAL_TIME: &str = "cueinfo_total_time";
    /// Read average speed of the whole activity
    pub const TOTAL_SPEED: &str = "cueinfo_total_speed";
    /// Read average pace of the whole activity
    pub const TOTAL_PACE: &str = "cueinfo_total_pace";
    /// Read average heart rate of the whole activity
    pub const TOTAL_HR: &str = "cueinfo_total_hr";
    /// Read average heart-rate zone of the whole activity
    pub const TOTAL_HRZ: &str = "cueinfo_total_hrz";
    /// Read distance of the current step
    pub const STEP_DISTANCE: &str = "cueinfo_step_distance";
    /// Read elapsed time of the current step
    pub const STEP_TIME: &str = "cueinfo_step_time";
    /// Read average speed of the current step
    pub const STEP_SPEED: &str = "cueinfo_step_speed";
    /// Read average pace of the current step
    pub const STEP_PACE: &str = "cueinfo_step_pace";
    /// Read average heart rate of the current step
    pub const STEP_HR: &str = "cueinfo_step_hr";
    /// Read average heart-rate zone of the current step
    pub const STEP_HRZ: &str = "cueinfo_step_hrz";
    /// Read distance of the current lap
    pub const LAP_DISTANCE: &str = "cueinfo_lap_distance";
    /// Read elapsed time of the current lap
    pub const LAP_TIME: &str = "cueinfo_lap_time";
    /// Read average speed of the current lap
    pub const LAP_SPEED: &str = "cueinfo_lap_speed";
    /// Read average pace of the current lap
    pub const LAP_PACE: &str = "cueinfo_lap_pace";
    /// Read average heart rate of the current lap
    pub const LAP_HR: &str = "cueinfo_lap_hr";
    /// Read average heart-rate zone of the current lap
    pub const LAP_HRZ: &str = "cueinfo_lap_hrz";
    /// Read current pace
    pub const CURRENT_PACE: &str = "cueinfo_current_pace";
    /// Read current speed
    pub const CURRENT_SPEED: &str = "cueinfo_current_speed";
    /// Read current heart rate
    pub const CURRENT_HR: &str = "cueinfo_current_hr";
    /// Read current heart-rate zone
    pub const CURRENT_HRZ: &str = "cueinfo_current_hrz";
    /// Read current cadence
    pub const CURRENT_CAD: &str = "cueinfo_current_cad";
}
