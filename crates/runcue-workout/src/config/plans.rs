// ABOUTME: Settings for the two canned plans (basic target run and interval session)
// ABOUTME: Durations and distances are parsed from text with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::config::{Preferences, UnitSystem};
use runcue_core::constants::{defaults, keys, units};
use runcue_core::models::{Measure, SportType};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Auto-pause trigger settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoPauseConfig {
    /// Attach an auto-pause trigger
    pub enabled: bool,
    /// Seconds below `min_speed` before pausing
    pub after_seconds: f64,
    /// Minimum speed in meters per second
    pub min_speed: f64,
}

impl Default for AutoPauseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            after_seconds: 15.0,
            min_speed: min_speed_from_pace(20.0),
        }
    }
}

impl AutoPauseConfig {
    /// Read the auto-pause switches
    ///
    /// The minimum pace is given in minutes per kilometer and converted to a
    /// speed; a non-positive or unparsable pace disables the speed floor.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let pace = prefs.parse_f64(
            keys::plan::AUTOPAUSE_MIN_PACE,
            defaults::AUTOPAUSE_MIN_PACE,
            0.0,
        );
        let min_speed = if pace > 0.0 {
            min_speed_from_pace(pace)
        } else {
            defaults::AUTOPAUSE_MIN_SPEED_ON_ERROR
        };
        Self {
            enabled: prefs.get_bool(keys::plan::AUTOPAUSE_ACTIVE, false),
            after_seconds: prefs.parse_f64(
                keys::plan::AUTOPAUSE_AFTER_SECONDS,
                defaults::AUTOPAUSE_AFTER_SECONDS,
                defaults::AUTOPAUSE_AFTER_SECONDS_ON_ERROR,
            ),
            min_speed,
        }
    }
}

fn min_speed_from_pace(minutes_per_km: f64) -> f64 {
    units::KM_METERS / (minutes_per_km * units::SECONDS_PER_MINUTE)
}

/// Settings for the single-step basic plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicPlanConfig {
    /// Sport of the plan
    pub sport: SportType,
    /// Countdown pause before the run in seconds, `None` when disabled
    pub countdown_seconds: Option<f64>,
    /// Autolap distance in meters, `None` when autolap is off
    pub autolap: Option<f64>,
    /// Auto-pause settings
    pub auto_pause: AutoPauseConfig,
    /// Distance unit the pace target is expressed in
    pub unit: UnitSystem,
    /// Slowest accepted pace in seconds per unit
    pub target_pace_max: f64,
    /// Width of the accepted pace band in seconds per unit
    pub target_pace_range: f64,
    /// Zero-based heart-rate zone, `None` for no zone target
    pub target_hr_zone: Option<u32>,
}

impl Default for BasicPlanConfig {
    fn default() -> Self {
        Self {
            sport: SportType::default(),
            countdown_seconds: None,
            autolap: None,
            auto_pause: AutoPauseConfig::default(),
            unit: UnitSystem::default(),
            target_pace_max: defaults::BASIC_TARGET_PACE_MAX_SECONDS as f64,
            target_pace_range: defaults::BASIC_TARGET_PACE_MIN_RANGE as f64,
            target_hr_zone: None,
        }
    }
}

impl BasicPlanConfig {
    /// Read basic plan settings
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let countdown_seconds = if prefs.get_bool(keys::plan::COUNTDOWN_ACTIVE, false) {
            let seconds = prefs.parse_i64(
                keys::plan::COUNTDOWN_TIME,
                defaults::COUNTDOWN_TIME,
                defaults::COUNTDOWN_TIME_ON_ERROR,
            );
            (seconds > 0).then_some(seconds as f64)
        } else {
            None
        };

        let autolap = prefs
            .get_bool(keys::plan::AUTOLAP_ACTIVE, false)
            .then(|| autolap_distance(prefs));

        let zone = prefs.get_int(keys::plan::BASIC_TARGET_HRZ, defaults::BASIC_TARGET_HRZ);

        Self {
            sport: sport(prefs),
            countdown_seconds,
            autolap,
            auto_pause: AutoPauseConfig::from_preferences(prefs),
            unit: UnitSystem::from_preferences(prefs),
            target_pace_max: prefs.parse_seconds(
                keys::plan::BASIC_TARGET_PACE_MAX,
                defaults::BASIC_TARGET_PACE_MAX,
                defaults::BASIC_TARGET_PACE_MAX_SECONDS,
            ) as f64,
            target_pace_range: prefs.get_int(
                keys::plan::BASIC_TARGET_PACE_MIN_RANGE,
                defaults::BASIC_TARGET_PACE_MIN_RANGE,
            ) as f64,
            target_hr_zone: u32::try_from(zone).ok(),
        }
    }
}

/// Settings for the warmup / repeat(work, rest) / cooldown plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalPlanConfig {
    /// Sport of the plan
    pub sport: SportType,
    /// Auto-pause settings for warmup and cooldown
    pub auto_pause: AutoPauseConfig,
    /// Number of work/rest repetitions, at least 1
    pub repetitions: u32,
    /// End condition of the work step
    pub work: Measure,
    /// End condition of the rest step
    pub rest: Measure,
    /// Turn a distance-bounded rest into a moving recovery step
    pub convert_rest_to_recovery: bool,
}

impl Default for IntervalPlanConfig {
    fn default() -> Self {
        Self {
            sport: SportType::default(),
            auto_pause: AutoPauseConfig::default(),
            repetitions: defaults::INTERVAL_REPETITIONS_MIN,
            work: Measure::time(defaults::INTERVAL_TIME_SECONDS as f64),
            rest: Measure::time(defaults::INTERVAL_REST_TIME_SECONDS as f64),
            convert_rest_to_recovery: defaults::CONVERT_REST_TO_RECOVERY,
        }
    }
}

impl IntervalPlanConfig {
    /// Read interval plan settings
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let repetitions = prefs.parse_f64(
            keys::plan::INTERVAL_REPETITIONS,
            defaults::INTERVAL_REPETITIONS,
            defaults::INTERVAL_REPETITIONS_ON_ERROR,
        );
        let repetitions = if repetitions >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            (repetitions as u32).max(defaults::INTERVAL_REPETITIONS_MIN)
        };

        let work = duration_choice(
            prefs,
            keys::plan::INTERVAL_TYPE,
            || {
                prefs.parse_seconds(
                    keys::plan::INTERVAL_TIME,
                    defaults::INTERVAL_TIME,
                    defaults::INTERVAL_TIME_SECONDS,
                ) as f64
            },
            || {
                prefs.parse_f64(
                    keys::plan::INTERVAL_DISTANCE,
                    defaults::INTERVAL_DISTANCE,
                    defaults::INTERVAL_DISTANCE_ON_ERROR,
                )
            },
        );
        let rest = duration_choice(
            prefs,
            keys::plan::INTERVAL_REST_TYPE,
            || {
                prefs.parse_seconds(
                    keys::plan::INTERVAL_REST_TIME,
                    defaults::INTERVAL_REST_TIME,
                    defaults::INTERVAL_REST_TIME_SECONDS,
                ) as f64
            },
            || {
                prefs.parse_f64(
                    keys::plan::INTERVAL_REST_DISTANCE,
                    defaults::INTERVAL_REST_DISTANCE,
                    defaults::INTERVAL_REST_DISTANCE_ON_ERROR,
                )
            },
        );

        Self {
            sport: sport(prefs),
            auto_pause: AutoPauseConfig::from_preferences(prefs),
            repetitions,
            work,
            rest,
            convert_rest_to_recovery: prefs.get_bool(
                keys::plan::CONVERT_REST_TO_RECOVERY,
                defaults::CONVERT_REST_TO_RECOVERY,
            ),
        }
    }
}

/// Autolap distance from the shared `autolap` key; 0 when unparsable
pub(crate) fn autolap_distance(prefs: &Preferences) -> f64 {
    prefs.parse_f64(
        keys::plan::AUTOLAP,
        defaults::AUTOLAP,
        defaults::AUTOLAP_ON_ERROR,
    )
}

fn sport(prefs: &Preferences) -> SportType {
    SportType::from_code(prefs.get_int(keys::SPORT, defaults::SPORT))
}

/// Pick a time or distance end condition from a 0/1 choice key
fn duration_choice(
    prefs: &Preferences,
    choice_key: &str,
    time: impl FnOnce() -> f64,
    distance: impl FnOnce() -> f64,
) -> Measure {
    match prefs.get_int(choice_key, 0) {
        0 => Measure::time(time()),
        1 => Measure::distance(distance()),
        other => {
            warn!(key = choice_key, value = other, "Unknown duration kind, using time");
            Measure::time(time())
        }
    }
}
