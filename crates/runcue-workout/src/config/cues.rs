// ABOUTME: Cue compiler configuration with bitflags for the per-scope readout switches
// ABOUTME: The readout table fixes the order values are announced in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::config::Preferences;
use runcue_core::constants::keys::{self, readouts};
use runcue_core::constants::defaults;
use runcue_core::models::{Dimension, Scope};
use serde::{Deserialize, Serialize};
use tracing::debug;

bitflags::bitflags! {
    /// Which values are read out whenever a periodic or end-of-lap cue fires
    ///
    /// The current scope has no distance or time readout.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CueInfo: u32 {
        /// Total distance
        const TOTAL_DISTANCE = 1 << 0;
        /// Total time
        const TOTAL_TIME = 1 << 1;
        /// Average speed over the activity
        const TOTAL_SPEED = 1 << 2;
        /// Average pace over the activity
        const TOTAL_PACE = 1 << 3;
        /// Average heart rate over the activity
        const TOTAL_HR = 1 << 4;
        /// Average heart-rate zone over the activity
        const TOTAL_HRZ = 1 << 5;
        /// Step distance
        const STEP_DISTANCE = 1 << 6;
        /// Step time
        const STEP_TIME = 1 << 7;
        /// Step speed
        const STEP_SPEED = 1 << 8;
        /// Step pace
        const STEP_PACE = 1 << 9;
        /// Step heart rate
        const STEP_HR = 1 << 10;
        /// Step heart-rate zone
        const STEP_HRZ = 1 << 11;
        /// Lap distance
        const LAP_DISTANCE = 1 << 12;
        /// Lap time
        const LAP_TIME = 1 << 13;
        /// Lap speed
        const LAP_SPEED = 1 << 14;
        /// Lap pace
        const LAP_PACE = 1 << 15;
        /// Lap heart rate
        const LAP_HR = 1 << 16;
        /// Lap heart-rate zone
        const LAP_HRZ = 1 << 17;
        /// Current pace
        const CURRENT_PACE = 1 << 18;
        /// Current speed
        const CURRENT_SPEED = 1 << 19;
        /// Current heart rate
        const CURRENT_HR = 1 << 20;
        /// Current heart-rate zone
        const CURRENT_HRZ = 1 << 21;
        /// Current cadence
        const CURRENT_CAD = 1 << 22;
    }
}

/// One readout switch: flag, preference key, and the value it reads
#[derive(Debug, Clone, Copy)]
pub struct Readout {
    /// Flag bit
    pub flag: CueInfo,
    /// Preference key holding the switch
    pub key: &'static str,
    /// Aggregation level of the value
    pub scope: Scope,
    /// Quantity read out
    pub dimension: Dimension,
}

const fn readout(flag: CueInfo, key: &'static str, scope: Scope, dimension: Dimension) -> Readout {
    Readout {
        flag,
        key,
        scope,
        dimension,
    }
}

/// Readout switches in announcement order: activity, step, lap, current;
/// within a scope distance, time, speed, pace, heart rate, zone, cadence
pub static READOUTS: [Readout; 23] = [
    readout(CueInfo::TOTAL_DISTANCE, readouts::TOTAL_DISTANCE, Scope::Activity, Dimension::Distance),
    readout(CueInfo::TOTAL_TIME, readouts::TOTAL_TIME, Scope::Activity, Dimension::Time),
    readout(CueInfo::TOTAL_SPEED, readouts::TOTAL_SPEED, Scope::Activity, Dimension::Speed),
    readout(CueInfo::TOTAL_PACE, readouts::TOTAL_PACE, Scope::Activity, Dimension::Pace),
    readout(CueInfo::TOTAL_HR, readouts::TOTAL_HR, Scope::Activity, Dimension::HeartRate),
    readout(CueInfo::TOTAL_HRZ, readouts::TOTAL_HRZ, Scope::Activity, Dimension::HeartRateZone),
    readout(CueInfo::STEP_DISTANCE, readouts::STEP_DISTANCE, Scope::Step, Dimension::Distance),
    readout(CueInfo::STEP_TIME, readouts::STEP_TIME, Scope::Step, Dimension::Time),
    readout(CueInfo::STEP_SPEED, readouts::STEP_SPEED, Scope::Step, Dimension::Speed),
    readout(CueInfo::STEP_PACE, readouts::STEP_PACE, Scope::Step, Dimension::Pace),
    readout(CueInfo::STEP_HR, readouts::STEP_HR, Scope::Step, Dimension::HeartRate),
    readout(CueInfo::STEP_HRZ, readouts::STEP_HRZ, Scope::Step, Dimension::HeartRateZone),
    readout(CueInfo::LAP_DISTANCE, readouts::LAP_DISTANCE, Scope::Lap, Dimension::Distance),
    readout(CueInfo::LAP_TIME, readouts::LAP_TIME, Scope::Lap, Dimension::Time),
    readout(CueInfo::LAP_SPEED, readouts::LAP_SPEED, Scope::Lap, Dimension::Speed),
    readout(CueInfo::LAP_PACE, readouts::LAP_PACE, Scope::Lap, Dimension::Pace),
    readout(CueInfo::LAP_HR, readouts::LAP_HR, Scope::Lap, Dimension::HeartRate),
    readout(CueInfo::LAP_HRZ, readouts::LAP_HRZ, Scope::Lap, Dimension::HeartRateZone),
    readout(CueInfo::CURRENT_PACE, readouts::CURRENT_PACE, Scope::Current, Dimension::Pace),
    readout(CueInfo::CURRENT_SPEED, readouts::CURRENT_SPEED, Scope::Current, Dimension::Speed),
    readout(CueInfo::CURRENT_HR, readouts::CURRENT_HR, Scope::Current, Dimension::HeartRate),
    readout(CueInfo::CURRENT_HRZ, readouts::CURRENT_HRZ, Scope::Current, Dimension::HeartRateZone),
    readout(CueInfo::CURRENT_CAD, readouts::CURRENT_CAD, Scope::Current, Dimension::Cadence),
];

impl CueInfo {
    /// Read every `cueinfo_<scope>_<dimension>` switch
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        READOUTS
            .iter()
            .filter(|r| prefs.get_bool(r.key, false))
            .fold(Self::empty(), |acc, r| acc | r.flag)
    }

    /// Enabled readouts in announcement order
    pub fn readouts(self) -> impl Iterator<Item = &'static Readout> {
        READOUTS.iter().filter(move |r| self.contains(r.flag))
    }
}

/// Switches read by the cue compiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueConfig {
    /// Mute all audio feedback
    pub mute: bool,
    /// Drop start/stop/pause/resume and warmup/cooldown announcements
    pub skip_start_stop: bool,
    /// Warn when a live value leaves the step's target range
    pub coaching: bool,
    /// Announce every lap start, not only the first of each step
    pub lap_started: bool,
    /// Announce heart-rate monitor connectivity changes
    pub hrm_connection: bool,
    /// Coaching moving average window in seconds
    pub moving_average_seconds: u32,
    /// Seconds after step start without coaching warnings
    pub grace_seconds: u32,
    /// Periodic time cue interval in seconds, `None` when disabled
    pub time_interval: Option<f64>,
    /// Periodic distance cue interval in meters, `None` when disabled
    pub distance_interval: Option<f64>,
    /// Announce lap completion
    pub end_of_lap: bool,
    /// Values read out by periodic and end-of-lap cues
    pub readouts: CueInfo,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            mute: false,
            skip_start_stop: false,
            coaching: defaults::TARGET_COACHING,
            lap_started: false,
            hrm_connection: false,
            moving_average_seconds: 20,
            grace_seconds: 30,
            time_interval: None,
            distance_interval: None,
            end_of_lap: false,
            readouts: CueInfo::empty(),
        }
    }
}

impl CueConfig {
    /// Read compiler switches from the preference store
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let config = Self {
            mute: prefs.get_bool(keys::MUTE, false),
            skip_start_stop: prefs.get_bool(keys::cues::SKIP_START_STOP, false),
            coaching: prefs.get_bool(keys::cues::TARGET_COACHING, defaults::TARGET_COACHING),
            lap_started: prefs.get_bool(keys::cues::LAP_STARTED, false),
            hrm_connection: prefs.get_bool(keys::cues::HRM_CONNECTION, false),
            moving_average_seconds: seconds(
                prefs,
                keys::cues::MOVING_AVERAGE_SECONDS,
                defaults::MOVING_AVERAGE_SECONDS,
                defaults::MOVING_AVERAGE_SECONDS_ON_ERROR,
            ),
            grace_seconds: seconds(
                prefs,
                keys::cues::GRACE_SECONDS,
                defaults::GRACE_SECONDS,
                defaults::GRACE_SECONDS_ON_ERROR,
            ),
            time_interval: periodic(
                prefs,
                keys::cues::TIME,
                keys::cues::TIME_INTERVAL,
                defaults::TIME_INTERVAL,
            ),
            distance_interval: periodic(
                prefs,
                keys::cues::DISTANCE,
                keys::cues::DISTANCE_INTERVAL,
                defaults::DISTANCE_INTERVAL,
            ),
            end_of_lap: prefs.get_bool(keys::cues::END_OF_LAP, false),
            readouts: CueInfo::from_preferences(prefs),
        };
        debug!(?config, "Cue configuration loaded");
        config
    }
}

fn seconds(prefs: &Preferences, key: &str, default: &str, on_error: i64) -> u32 {
    let value = prefs.parse_i64(key, default, on_error);
    u32::try_from(value).unwrap_or_else(|_| u32::try_from(on_error).unwrap_or_default())
}

fn periodic(prefs: &Preferences, switch: &str, key: &str, default: &str) -> Option<f64> {
    if !prefs.get_bool(switch, false) {
        return None;
    }
    let value = prefs.parse_i64(key, default, defaults::CUE_INTERVAL_ON_ERROR);
    (value > 0).then_some(value as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_table_order() {
        let scopes: Vec<Scope> = READOUTS.iter().map(|r| r.scope).collect();
        let mut sorted = scopes.clone();
        sorted.sort_by_key(|s| Scope::ANNOUNCE_ORDER.iter().position(|o| o == s));
        assert_eq!(scopes, sorted);
        assert!(READOUTS
            .iter()
            .filter(|r| r.scope == Scope::Current)
            .all(|r| !r.dimension.is_cumulative()));
        assert_eq!(CueInfo::all().bits().count_ones(), 23);
    }

    #[test]
    fn test_periodic_interval_disabled_when_not_positive() {
        let prefs = Preferences::new()
            .with(keys::cues::TIME, true)
            .with(keys::cues::TIME_INTERVAL, "0")
            .with(keys::cues::DISTANCE, true)
            .with(keys::cues::DISTANCE_INTERVAL, "1km");
        let config = CueConfig::from_preferences(&prefs);
        assert_eq!(config.time_interval, None);
        assert_eq!(config.distance_interval, None);
    }
}
