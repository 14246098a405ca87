// ABOUTME: Integration tests for the default plan generator
// ABOUTME: Covers basic and interval plan shapes, targets, auto-pause and fail-soft preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use runcue_core::config::Preferences;
use runcue_core::constants::keys;
use runcue_core::models::{Dimension, Intensity, PlanStep, SportType, TriggerKind};
use runcue_workout::{
    build_basic_plan, build_interval_plan, BasicPlanConfig, IntervalPlanConfig, KarvonenZones,
    NoHeartRateZones,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_interval_plan_time_rest_stays_resting() {
    common::init_test_logging();
    let prefs = Preferences::new()
        .with(keys::plan::INTERVAL_REPETITIONS, "3")
        .with(keys::plan::INTERVAL_TYPE, 0)
        .with(keys::plan::INTERVAL_TIME, "00:04:00")
        .with(keys::plan::INTERVAL_REST_TYPE, 0)
        .with(keys::plan::INTERVAL_REST_TIME, "00:01:00")
        .with(keys::plan::CONVERT_REST_TO_RECOVERY, true);

    let plan = build_interval_plan(&IntervalPlanConfig::from_preferences(&prefs));

    assert_eq!(plan.steps.len(), 3);
    assert_eq!(plan.steps[0].intensity(), Intensity::Warmup);
    assert_eq!(plan.steps[2].intensity(), Intensity::Cooldown);

    let PlanStep::Repeat(repeat) = &plan.steps[1] else {
        panic!("second step should be the repeat group");
    };
    assert_eq!(repeat.repeat_count, 3);
    assert_eq!(repeat.steps.len(), 2);

    let work = common::repeat_child(&plan, 1, 0);
    assert_eq!(work.intensity, Intensity::Active);
    let duration = work.duration.unwrap();
    assert_eq!(duration.dimension, Dimension::Time);
    assert!(close(duration.value, 240.0));

    let rest = common::repeat_child(&plan, 1, 1);
    assert_eq!(rest.intensity, Intensity::Resting);
    let duration = rest.duration.unwrap();
    assert_eq!(duration.dimension, Dimension::Time);
    assert!(close(duration.value, 60.0));
}

#[test]
fn test_interval_distance_rest_converted_to_recovery() {
    let prefs = Preferences::new()
        .with(keys::plan::INTERVAL_TYPE, 1)
        .with(keys::plan::INTERVAL_DISTANCE, "800")
        .with(keys::plan::INTERVAL_REST_TYPE, 1)
        .with(keys::plan::INTERVAL_REST_DISTANCE, "400");

    let plan = build_interval_plan(&IntervalPlanConfig::from_preferences(&prefs));
    let work = common::repeat_child(&plan, 1, 0);
    assert_eq!(work.duration.unwrap().dimension, Dimension::Distance);
    assert!(close(work.duration.unwrap().value, 800.0));

    let rest = common::repeat_child(&plan, 1, 1);
    assert_eq!(rest.intensity, Intensity::Recovery);
    assert!(close(rest.duration.unwrap().value, 400.0));

    let no_convert = prefs.with(keys::plan::CONVERT_REST_TO_RECOVERY, false);
    let plan = build_interval_plan(&IntervalPlanConfig::from_preferences(&no_convert));
    let rest = common::repeat_child(&plan, 1, 1);
    assert_eq!(rest.intensity, Intensity::Resting);
    assert_eq!(rest.duration.unwrap().dimension, Dimension::Distance);
}

#[test]
fn test_interval_repetitions_fail_soft() {
    for (raw, expected) in [("0", 1), ("-4", 1), ("many", 1), ("2.7", 2), ("12", 12)] {
        let prefs = Preferences::new().with(keys::plan::INTERVAL_REPETITIONS, raw);
        let config = IntervalPlanConfig::from_preferences(&prefs);
        assert_eq!(config.repetitions, expected, "repetitions from {raw:?}");
    }
}

#[test]
fn test_unknown_interval_type_falls_back_to_time() {
    let prefs = Preferences::new().with(keys::plan::INTERVAL_TYPE, 7);
    let config = IntervalPlanConfig::from_preferences(&prefs);
    assert_eq!(config.work.dimension, Dimension::Time);
    assert!(close(config.work.value, 240.0));
}

#[test]
fn test_basic_plan_with_countdown_and_autolap() {
    let prefs = Preferences::new()
        .with(keys::plan::COUNTDOWN_ACTIVE, true)
        .with(keys::plan::COUNTDOWN_TIME, "10")
        .with(keys::plan::AUTOLAP_ACTIVE, true)
        .with(keys::plan::AUTOLAP, "500");

    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&prefs),
        None,
        &NoHeartRateZones,
    );

    assert_eq!(plan.steps.len(), 2);
    let countdown = common::top_step(&plan, 0);
    assert_eq!(countdown.intensity, Intensity::Resting);
    assert!(close(countdown.duration.unwrap().value, 10.0));

    let active = common::top_step(&plan, 1);
    assert_eq!(active.intensity, Intensity::Active);
    assert!(active.duration.is_none());
    assert!(close(active.autolap, 500.0));
    assert!(active.target.is_none());
}

#[test]
fn test_basic_plan_zero_countdown_is_skipped() {
    let prefs = Preferences::new()
        .with(keys::plan::COUNTDOWN_ACTIVE, true)
        .with(keys::plan::COUNTDOWN_TIME, "0");
    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&prefs),
        None,
        &NoHeartRateZones,
    );
    assert_eq!(plan.steps.len(), 1);
}

#[test]
fn test_basic_pace_target_in_seconds_per_meter() {
    let prefs = Preferences::new()
        .with(keys::plan::BASIC_TARGET_PACE_MAX, "00:05:00")
        .with(keys::plan::BASIC_TARGET_PACE_MIN_RANGE, 15);
    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&prefs),
        Some(Dimension::Pace),
        &NoHeartRateZones,
    );
    let target = common::top_step(&plan, 0).target.unwrap();
    assert_eq!(target.dimension, Dimension::Pace);
    assert!(close(target.range.low, 285.0 / 1000.0));
    assert!(close(target.range.high, 300.0 / 1000.0));

    let miles = prefs.with(keys::UNIT, "mi");
    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&miles),
        Some(Dimension::Pace),
        &NoHeartRateZones,
    );
    let target = common::top_step(&plan, 0).target.unwrap();
    assert!(close(target.range.high, 300.0 / 1609.34));
}

#[test]
fn test_basic_heart_rate_zone_target() {
    let prefs = Preferences::new()
        .with(keys::plan::BASIC_TARGET_HRZ, 0)
        .with(keys::zones::RESTING_HR, 50)
        .with(keys::zones::MAX_HR, 190);
    let zones = KarvonenZones::from_preferences(&prefs).unwrap();

    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&prefs),
        Some(Dimension::HeartRateZone),
        &zones,
    );
    let target = common::top_step(&plan, 0).target.unwrap();
    assert_eq!(target.dimension, Dimension::HeartRate);
    assert!(close(target.range.low, 120.0));
    assert!(close(target.range.high, 134.0));
}

#[test]
fn test_unavailable_zone_leaves_target_unset() {
    let prefs = Preferences::new().with(keys::plan::BASIC_TARGET_HRZ, 2);
    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&prefs),
        Some(Dimension::HeartRateZone),
        &NoHeartRateZones,
    );
    assert!(common::top_step(&plan, 0).target.is_none());
    assert!(!plan.has_target());
}

#[test]
fn test_auto_pause_attached_to_basic_and_interval_plans() {
    let prefs = Preferences::new()
        .with(keys::plan::AUTOPAUSE_ACTIVE, true)
        .with(keys::plan::AUTOPAUSE_MIN_PACE, "20")
        .with(keys::plan::AUTOPAUSE_AFTER_SECONDS, "not a number");

    let plan = build_basic_plan(
        &BasicPlanConfig::from_preferences(&prefs),
        None,
        &NoHeartRateZones,
    );
    let active = common::top_step(&plan, 0);
    assert_eq!(active.triggers.len(), 1);
    let TriggerKind::AutoPause {
        after_seconds,
        min_speed,
    } = active.triggers[0].kind
    else {
        panic!("expected an auto-pause trigger");
    };
    assert!(close(after_seconds, 4.0));
    assert!(close(min_speed, 1000.0 / (20.0 * 60.0)));

    let plan = build_interval_plan(&IntervalPlanConfig::from_preferences(&prefs));
    let auto_pauses = plan
        .leaves()
        .iter()
        .filter(|s| {
            s.triggers
                .iter()
                .any(|t| matches!(t.kind, TriggerKind::AutoPause { .. }))
        })
        .count();
    assert_eq!(auto_pauses, 2);
    assert_ne!(
        common::top_step(&plan, 0).triggers[0].id,
        common::top_step(&plan, 2).triggers[0].id
    );
}

#[test]
fn test_sport_code_read_from_preferences() {
    let prefs = Preferences::new().with(keys::SPORT, 1);
    let plan = build_interval_plan(&IntervalPlanConfig::from_preferences(&prefs));
    assert_eq!(plan.sport, SportType::Biking);

    let prefs = Preferences::new().with(keys::SPORT, 42);
    let plan = build_interval_plan(&IntervalPlanConfig::from_preferences(&prefs));
    assert_eq!(plan.sport, SportType::Other);
}
