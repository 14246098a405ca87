// ABOUTME: Documented fallback values for every preference read by the passes
// ABOUTME: Used when a preference is absent, mistyped or unparsable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! Preference defaults.

/// Sport code for running
pub const SPORT: i64 = 0;
/// Distance unit
pub const UNIT: &str = "km";

/// Countdown before the basic plan, seconds (disabled)
pub const COUNTDOWN_TIME: &str = "0";
/// Countdown used when the text does not parse (disabled)
pub const COUNTDOWN_TIME_ON_ERROR: i64 = 0;
/// Autolap distance text
pub const AUTOLAP: &str = "1000";
/// Autolap distance used when the text does not parse
pub const AUTOLAP_ON_ERROR: f64 = 0.0;
/// Auto-pause minimum pace text (minutes per km)
pub const AUTOPAUSE_MIN_PACE: &str = "20";
/// Auto-pause minimum speed used when the pace does not parse
pub const AUTOPAUSE_MIN_SPEED_ON_ERROR: f64 = 0.0;
/// Auto-pause delay text
pub const AUTOPAUSE_AFTER_SECONDS: &str = "15";
/// Auto-pause delay used when the text does not parse
pub const AUTOPAUSE_AFTER_SECONDS_ON_ERROR: f64 = 4.0;
/// Basic target pace text
pub const BASIC_TARGET_PACE_MAX: &str = "00:05:00";
/// Basic target pace in seconds per unit
pub const BASIC_TARGET_PACE_MAX_SECONDS: i64 = 5 * 60;
/// Basic target pace tolerance in seconds per unit
pub const BASIC_TARGET_PACE_MIN_RANGE: i64 = 15;
/// Basic target heart-rate zone (none)
pub const BASIC_TARGET_HRZ: i64 = -1;

/// Interval repetitions text
pub const INTERVAL_REPETITIONS: &str = "1";
/// Interval repetitions used when the text does not parse
pub const INTERVAL_REPETITIONS_ON_ERROR: f64 = 1.0;
/// Minimum interval repetitions
pub const INTERVAL_REPETITIONS_MIN: u32 = 1;
/// Interval work time text
pub const INTERVAL_TIME: &str = "00:04:00";
/// Interval work time in seconds
pub const INTERVAL_TIME_SECONDS: i64 = 4 * 60;
/// Interval work distance text
pub const INTERVAL_DISTANCE: &str = "1000";
/// Interval work distance used when the text does not parse
pub const INTERVAL_DISTANCE_ON_ERROR: f64 = 1000.0;
/// Interval rest time text
pub const INTERVAL_REST_TIME: &str = "00:01:00";
/// Interval rest time in seconds
pub const INTERVAL_REST_TIME_SECONDS: i64 = 60;
/// Interval rest distance text
pub const INTERVAL_REST_DISTANCE: &str = "200";
/// Interval rest distance used when the text does not parse
pub const INTERVAL_REST_DISTANCE_ON_ERROR: f64 = 200.0;
/// Convert distance rests into recovery steps
pub const CONVERT_REST_TO_RECOVERY: bool = true;

/// Coaching enabled
pub const TARGET_COACHING: bool = true;
/// Coaching moving average window text
pub const MOVING_AVERAGE_SECONDS: &str = "20";
/// Coaching moving average window used when the text does not parse
pub const MOVING_AVERAGE_SECONDS_ON_ERROR: i64 = 20;
/// Coaching grace period text
pub const GRACE_SECONDS: &str = "30";
/// Coaching grace period used when the text does not parse
pub const GRACE_SECONDS_ON_ERROR: i64 = 30;
/// Periodic time cue interval text
pub const TIME_INTERVAL: &str = "120";
/// Periodic distance cue interval text
pub const DISTANCE_INTERVAL: &str = "1000";
/// Periodic cue interval used when the text does not parse (disabled)
pub const CUE_INTERVAL_ON_ERROR: i64 = 0;

/// Countdown insertion enabled
pub const STEP_COUNTDOWN_ACTIVE: bool = true;
/// Countdown lead time text
pub const STEP_COUNTDOWN_TIME: &str = "15";
/// Countdown lead time used when the text does not parse
pub const STEP_COUNTDOWN_TIME_ON_ERROR: i64 = 15;
