// ABOUTME: Default plan generator for the basic target run and the interval session
// ABOUTME: Builds plan trees from typed settings; heart-rate bands come from a zone resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::models::{
    Dimension, Intensity, Plan, Range, RepeatStep, Scope, Step, Target, Trigger, TriggerKind,
};
use tracing::{debug, info, warn};

use crate::config::{AutoPauseConfig, BasicPlanConfig, IntervalPlanConfig};
use crate::zones::HeartRateZoneResolver;

/// Build the single-step basic plan
///
/// The plan is an optional countdown pause followed by one manual-advance
/// active step. With a `Pace` target the step gets the band
/// `[(max - range) / unit, max / unit]` in seconds per meter; with a
/// `HeartRateZone` target the configured zone is resolved into a heart-rate
/// band, and left unset when the resolver has no data for it.
#[must_use]
pub fn build_basic_plan(
    config: &BasicPlanConfig,
    target: Option<Dimension>,
    zones: &dyn HeartRateZoneResolver,
) -> Plan {
    let mut plan = Plan::new(config.sport);

    if let Some(seconds) = config.countdown_seconds {
        debug!(seconds, "Prepending countdown pause");
        plan.push(Step::pause(Dimension::Time, seconds));
    }

    let mut step = Step::active();
    if let Some(distance) = config.autolap {
        step.autolap = distance;
    }
    attach_auto_pause(&mut plan, &mut step, &config.auto_pause);

    step.target = match target {
        None => None,
        Some(Dimension::Pace) => Some(pace_target(config)),
        Some(Dimension::HeartRateZone) => heart_rate_target(config, zones),
        Some(other) => {
            warn!(dimension = %other, "Unsupported basic plan target, ignoring");
            None
        }
    };
    plan.push(step);

    info!(
        sport = ?plan.sport,
        steps = plan.steps.len(),
        has_target = plan.has_target(),
        "Built basic plan"
    );
    plan
}

fn pace_target(config: &BasicPlanConfig) -> Target {
    let unit_meters = config.unit.meters_per_unit();
    let max = config.target_pace_max / unit_meters;
    let min = (config.target_pace_max - config.target_pace_range) / unit_meters;
    Target::new(Dimension::Pace, Range::new(min, max))
}

fn heart_rate_target(
    config: &BasicPlanConfig,
    zones: &dyn HeartRateZoneResolver,
) -> Option<Target> {
    let zone = config.target_hr_zone?;
    let Some((low, high)) = zones.zone_bounds(zone + 1) else {
        debug!(zone, "Heart-rate zone not available, leaving target unset");
        return None;
    };
    Some(Target::new(
        Dimension::HeartRate,
        Range::new(f64::from(low), f64::from(high)),
    ))
}

/// Build the warmup, repeat(work, rest), cooldown plan
///
/// A distance-bounded rest becomes a moving recovery step when conversion is
/// enabled; a time-bounded rest is always a standing pause.
#[must_use]
pub fn build_interval_plan(config: &IntervalPlanConfig) -> Plan {
    let mut plan = Plan::new(config.sport);

    let mut warmup = Step::new(Intensity::Warmup);
    attach_auto_pause(&mut plan, &mut warmup, &config.auto_pause);
    plan.push(warmup);

    let work = Step::active().with_duration(config.work);
    let rest = match config.rest.dimension {
        Dimension::Distance if config.convert_rest_to_recovery => {
            Step::new(Intensity::Recovery).with_duration(config.rest)
        }
        dimension => Step::pause(dimension, config.rest.value),
    };
    plan.push(RepeatStep::new(
        config.repetitions,
        vec![work.into(), rest.into()],
    ));

    let mut cooldown = Step::new(Intensity::Cooldown);
    attach_auto_pause(&mut plan, &mut cooldown, &config.auto_pause);
    plan.push(cooldown);

    info!(
        sport = ?plan.sport,
        repetitions = config.repetitions,
        work = %config.work.dimension,
        rest = %config.rest.dimension,
        "Built interval plan"
    );
    plan
}

/// Attach an auto-pause trigger to `step` when auto-pause is enabled
pub fn attach_auto_pause(plan: &mut Plan, step: &mut Step, config: &AutoPauseConfig) {
    if !config.enabled {
        return;
    }
    let trigger = Trigger::new(
        plan.next_trigger_id(),
        Scope::Step,
        TriggerKind::AutoPause {
            after_seconds: config.after_seconds,
            min_speed: config.min_speed,
        },
    );
    debug!(id = %trigger.id, intensity = %step.intensity, "Attached auto-pause trigger");
    step.triggers.push(trigger);
}
