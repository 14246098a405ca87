// ABOUTME: Integration tests for the plan normalizer
// ABOUTME: Covers autolap propagation, countdown insertion and stale-view detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use runcue_core::config::Preferences;
use runcue_core::constants::keys;
use runcue_core::errors::{AppError, ErrorCode, PlanError};
use runcue_core::models::{
    Dimension, Intensity, Measure, Plan, PlanStep, RepeatStep, SportType, Step, StepPath,
};
use runcue_workout::normalizer::{insert_countdowns, propagate_autolap};
use runcue_workout::{build_interval_plan, normalize, IntervalPlanConfig, NormalizeConfig};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn mixed_plan() -> Plan {
    let mut plan = Plan::new(SportType::Running);
    let mut warmup = Step::new(Intensity::Warmup);
    warmup.autolap = 400.0;
    plan.push(warmup);
    plan.push(RepeatStep::new(
        4,
        vec![
            Step::active().with_duration(Measure::distance(400.0)).into(),
            Step::new(Intensity::Recovery)
                .with_duration(Measure::distance(200.0))
                .into(),
        ],
    ));
    plan.push(Step::active());
    plan.push(Step::new(Intensity::Cooldown));
    plan
}

fn intensities(plan: &Plan) -> Vec<Intensity> {
    plan.entries()
        .iter()
        .map(|e| plan.step_at(&e.path).unwrap().intensity())
        .collect()
}

#[test]
fn test_autolap_only_on_active_steps() {
    common::init_test_logging();
    let mut plan = mixed_plan();
    propagate_autolap(&mut plan, Some(1000.0));

    for step in plan.leaves() {
        if step.intensity == Intensity::Active {
            assert!(close(step.autolap, 1000.0));
        } else {
            assert!(close(step.autolap, 0.0), "{}", step.intensity);
        }
    }
}

#[test]
fn test_autolap_disabled_clears_everything() {
    let mut plan = mixed_plan();
    propagate_autolap(&mut plan, None);
    assert!(plan.leaves().iter().all(|s| close(s.autolap, 0.0)));
}

#[test]
fn test_countdown_inserted_after_manual_steps() {
    let mut plan = mixed_plan();
    let inserted = insert_countdowns(&mut plan, 15.0).unwrap();

    // warmup -> repeat, and active -> cooldown; cooldown is last
    assert_eq!(inserted, 2);
    assert_eq!(
        intensities(&plan),
        vec![
            Intensity::Warmup,
            Intensity::Resting,
            Intensity::Repeat,
            Intensity::Active,
            Intensity::Recovery,
            Intensity::Active,
            Intensity::Resting,
            Intensity::Cooldown,
        ]
    );
    let countdown = common::top_step(&plan, 1);
    assert_eq!(countdown.duration, Some(Measure::time(15.0)));
}

#[test]
fn test_no_countdown_before_timed_rest() {
    let mut plan = Plan::new(SportType::Running);
    plan.push(Step::active());
    plan.push(Step::pause(Dimension::Time, 60.0));
    plan.push(Step::active());
    plan.push(Step::pause(Dimension::Distance, 100.0));

    let inserted = insert_countdowns(&mut plan, 10.0).unwrap();
    assert_eq!(inserted, 1);
    assert_eq!(plan.steps.len(), 5);
    assert_eq!(
        common::top_step(&plan, 3).duration,
        Some(Measure::time(10.0))
    );
    assert_eq!(
        common::top_step(&plan, 4).duration,
        Some(Measure::distance(100.0))
    );
}

#[test]
fn test_countdown_inside_repeat_group() {
    let mut plan = Plan::new(SportType::Running);
    plan.push(RepeatStep::new(
        3,
        vec![
            Step::active().into(),
            Step::new(Intensity::Recovery)
                .with_duration(Measure::time(90.0))
                .into(),
            Step::active().into(),
        ],
    ));
    plan.push(Step::new(Intensity::Cooldown));

    let inserted = insert_countdowns(&mut plan, 5.0).unwrap();
    assert_eq!(inserted, 2);

    let PlanStep::Repeat(repeat) = &plan.steps[0] else {
        panic!("repeat group moved");
    };
    let children: Vec<Intensity> = repeat.steps.iter().map(PlanStep::intensity).collect();
    assert_eq!(
        children,
        vec![
            Intensity::Active,
            Intensity::Resting,
            Intensity::Recovery,
            Intensity::Active,
            Intensity::Resting,
        ]
    );
    assert_eq!(plan.steps.len(), 2);
}

#[test]
fn test_normalize_is_stable_on_second_run() {
    let mut plan = mixed_plan();
    let config = NormalizeConfig {
        autolap: Some(500.0),
        countdown_seconds: Some(15.0),
    };
    normalize(&mut plan, &config).unwrap();
    let once = plan.clone();
    normalize(&mut plan, &config).unwrap();
    assert_eq!(plan, once);
}

#[test]
fn test_normalize_config_from_preferences() {
    let prefs = Preferences::new()
        .with(keys::normalize::STEP_COUNTDOWN_ACTIVE, true)
        .with(keys::normalize::STEP_COUNTDOWN_TIME, "abc")
        .with(keys::plan::AUTOLAP_ACTIVE, true)
        .with(keys::plan::AUTOLAP, "garbage");
    let config = NormalizeConfig::from_preferences(&prefs, true);
    assert_eq!(config.countdown_seconds, Some(15.0));
    assert_eq!(config.autolap, Some(0.0));

    let off = prefs.with(keys::normalize::STEP_COUNTDOWN_ACTIVE, false);
    assert_eq!(
        NormalizeConfig::from_preferences(&off, true).countdown_seconds,
        None
    );
}

#[test]
fn test_interval_plan_gets_countdown_after_warmup() {
    let mut plan = build_interval_plan(&IntervalPlanConfig::default());
    normalize(&mut plan, &NormalizeConfig::default()).unwrap();

    assert_eq!(plan.steps.len(), 4);
    assert_eq!(plan.steps[1].intensity(), Intensity::Resting);
    assert_eq!(plan.steps[2].intensity(), Intensity::Repeat);
    assert_eq!(plan.steps[3].intensity(), Intensity::Cooldown);
}

#[test]
fn test_stale_path_is_an_internal_error() {
    let mut plan = mixed_plan();
    let err = plan
        .insert_after(&StepPath::new(vec![9]), Step::active())
        .unwrap_err();
    assert!(matches!(err, PlanError::StaleEntry { .. }));

    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::InternalError);
}
