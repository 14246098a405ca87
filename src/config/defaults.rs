// ABOUTME: Documented default value of every preference read by the workout passes
// ABOUTME: Backs the CLI defaults command and serves as a template preference file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::config::Preferences;
use runcue_core::constants::{defaults, keys};
use runcue_workout::config::READOUTS;

/// A preference store holding the documented default of every known key
///
/// Feeding this store back into the passes produces the same plan as an
/// empty store. Heart-rate zone keys have no default and are left out.
#[must_use]
pub fn documented_defaults() -> Preferences {
    let mut prefs = Preferences::new()
        .with(keys::SPORT, defaults::SPORT)
        .with(keys::UNIT, defaults::UNIT)
        .with(keys::MUTE, false)
        // plan generator
        .with(keys::plan::COUNTDOWN_ACTIVE, false)
        .with(keys::plan::COUNTDOWN_TIME, defaults::COUNTDOWN_TIME)
        .with(keys::plan::AUTOLAP_ACTIVE, false)
        .with(keys::plan::STEP_AUTOLAP_ACTIVE, false)
        .with(keys::plan::AUTOLAP, defaults::AUTOLAP)
        .with(keys::plan::AUTOPAUSE_ACTIVE, false)
        .with(keys::plan::AUTOPAUSE_MIN_PACE, defaults::AUTOPAUSE_MIN_PACE)
        .with(keys::plan::AUTOPAUSE_AFTER_SECONDS, defaults::AUTOPAUSE_AFTER_SECONDS)
        .with(keys::plan::BASIC_TARGET_PACE_MAX, defaults::BASIC_TARGET_PACE_MAX)
        .with(
            keys::plan::BASIC_TARGET_PACE_MIN_RANGE,
            defaults::BASIC_TARGET_PACE_MIN_RANGE,
        )
        .with(keys::plan::BASIC_TARGET_HRZ, defaults::BASIC_TARGET_HRZ)
        .with(keys::plan::INTERVAL_REPETITIONS, defaults::INTERVAL_REPETITIONS)
        .with(keys::plan::INTERVAL_TYPE, 0_i64)
        .with(keys::plan::INTERVAL_TIME, defaults::INTERVAL_TIME)
        .with(keys::plan::INTERVAL_DISTANCE, defaults::INTERVAL_DISTANCE)
        .with(keys::plan::INTERVAL_REST_TYPE, 0_i64)
        .with(keys::plan::INTERVAL_REST_TIME, defaults::INTERVAL_REST_TIME)
        .with(keys::plan::INTERVAL_REST_DISTANCE, defaults::INTERVAL_REST_DISTANCE)
        .with(
            keys::plan::CONVERT_REST_TO_RECOVERY,
            defaults::CONVERT_REST_TO_RECOVERY,
        )
        // normalizer
        .with(
            keys::normalize::STEP_COUNTDOWN_ACTIVE,
            defaults::STEP_COUNTDOWN_ACTIVE,
        )
        .with(
            keys::normalize::STEP_COUNTDOWN_TIME,
            defaults::STEP_COUNTDOWN_TIME,
        )
        // cue compiler
        .with(keys::cues::SKIP_START_STOP, false)
        .with(keys::cues::TARGET_COACHING, defaults::TARGET_COACHING)
        .with(keys::cues::LAP_STARTED, false)
        .with(keys::cues::HRM_CONNECTION, false)
        .with(keys::cues::MOVING_AVERAGE_SECONDS, defaults::MOVING_AVERAGE_SECONDS)
        .with(keys::cues::GRACE_SECONDS, defaults::GRACE_SECONDS)
        .with(keys::cues::TIME, false)
        .with(keys::cues::TIME_INTERVAL, defaults::TIME_INTERVAL)
        .with(keys::cues::DISTANCE, false)
        .with(keys::cues::DISTANCE_INTERVAL, defaults::DISTANCE_INTERVAL)
        .with(keys::cues::END_OF_LAP, false);

    for readout in &READOUTS {
        prefs.set(readout.key, false);
    }
    prefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_readout_key_listed() {
        let prefs = documented_defaults();
        assert!(READOUTS.iter().all(|r| prefs.contains(r.key)));
        assert!(!prefs.contains(keys::zones::MAX_HR));
    }
}
