// ABOUTME: Plan normalizer assigning autolap distances and inserting countdown pauses
// ABOUTME: Insertions are planned on a pre-order snapshot and applied last to first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::errors::{AppResult, PlanError};
use runcue_core::models::{Dimension, Intensity, Plan, PlanStep, Step, StepPath};
use tracing::{debug, info};

use crate::config::NormalizeConfig;

/// Rewrite `plan` in place: assign autolap distances, then insert countdown
/// pauses after manual-advance steps
///
/// # Errors
///
/// Returns an internal error if a planned insertion point no longer resolves
/// inside the tree, which means the flattened view diverged from the plan.
pub fn normalize(plan: &mut Plan, config: &NormalizeConfig) -> AppResult<()> {
    propagate_autolap(plan, config.autolap);

    let inserted = match config.countdown_seconds {
        Some(seconds) => insert_countdowns(plan, seconds)?,
        None => 0,
    };

    info!(
        autolap = ?config.autolap,
        countdowns_inserted = inserted,
        steps = plan.entries().len(),
        "Normalized plan"
    );
    Ok(())
}

/// Clear autolap on every step, then set `distance` on active steps
pub fn propagate_autolap(plan: &mut Plan, distance: Option<f64>) {
    let value = distance.unwrap_or(0.0);
    for step in plan.leaves_mut() {
        step.autolap = if step.intensity == Intensity::Active {
            value
        } else {
            0.0
        };
    }
    debug!(autolap = value, "Assigned autolap to active steps");
}

/// Whether a countdown pause belongs between `step` and the node after it
///
/// Only manual-advance steps that are neither repeat groups nor rests get a
/// countdown, and only when the next node is not already a timed rest.
#[must_use]
pub fn needs_countdown(step: &PlanStep, next: Option<&PlanStep>) -> bool {
    let Some(step) = step.as_step() else {
        return false;
    };
    if !step.is_manual() || step.intensity == Intensity::Resting {
        return false;
    }
    let Some(next) = next else {
        return false;
    };
    let next_is_timed_rest = next.as_step().is_some_and(|next| {
        next.intensity == Intensity::Resting
            && next.duration_dimension() == Some(Dimension::Time)
    });
    !next_is_timed_rest
}

/// Insert a timed pause of `seconds` after every step that needs one
///
/// The "next" relation follows the depth-first order, so the last child of
/// a repeat group is followed by whatever comes after the group. Returns the
/// number of inserted steps.
///
/// # Errors
///
/// Returns `PlanError::StaleEntry` (as an internal error) if a snapshot path
/// no longer resolves.
pub fn insert_countdowns(plan: &mut Plan, seconds: f64) -> AppResult<usize> {
    let entries = plan.entries();
    let mut targets: Vec<StepPath> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let step = resolve(plan, &entry.path)?;
        let next = match entries.get(index + 1) {
            Some(next) => Some(resolve(plan, &next.path)?),
            None => None,
        };
        if needs_countdown(step, next) {
            targets.push(entry.path.clone());
        }
    }

    for path in targets.iter().rev() {
        plan.insert_after(path, Step::pause(Dimension::Time, seconds))?;
        debug!(%path, seconds, "Inserted countdown pause");
    }
    Ok(targets.len())
}

fn resolve<'a>(plan: &'a Plan, path: &StepPath) -> Result<&'a PlanStep, PlanError> {
    plan.step_at(path)
        .ok_or_else(|| PlanError::StaleEntry { path: path.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use runcue_core::models::{Measure, RepeatStep, SportType};

    #[test]
    fn test_countdown_not_inserted_before_timed_rest() {
        let manual = PlanStep::from(Step::active());
        let rest = PlanStep::from(Step::pause(Dimension::Time, 60.0));
        assert!(!needs_countdown(&manual, Some(&rest)));

        let distance_rest = PlanStep::from(Step::pause(Dimension::Distance, 200.0));
        assert!(needs_countdown(&manual, Some(&distance_rest)));
        assert!(!needs_countdown(&manual, None));
    }

    #[test]
    fn test_bounded_and_rest_steps_never_get_countdown() {
        let bounded = PlanStep::from(Step::active().with_duration(Measure::time(240.0)));
        let manual_rest = PlanStep::from(Step::new(Intensity::Resting));
        let next = PlanStep::from(Step::active());
        assert!(!needs_countdown(&bounded, Some(&next)));
        assert!(!needs_countdown(&manual_rest, Some(&next)));
    }

    #[test]
    fn test_countdown_only_for_manual_leaves() {
        let manual = PlanStep::from(Step::active());
        let group = PlanStep::from(RepeatStep::new(2, vec![Step::active().into()]));
        assert!(needs_countdown(&manual, Some(&group)));
        assert!(!needs_countdown(&group, Some(&manual)));

        let cooldown = PlanStep::from(Step::new(Intensity::Cooldown));
        assert!(needs_countdown(&cooldown, Some(&manual)));
    }

    #[test]
    fn test_insert_after_last_child_of_repeat() {
        let mut plan = Plan::new(SportType::Running);
        plan.push(RepeatStep::new(
            2,
            vec![
                Step::active().with_duration(Measure::time(60.0)).into(),
                Step::new(Intensity::Recovery).into(),
            ],
        ));
        plan.push(Step::new(Intensity::Cooldown));

        let inserted = insert_countdowns(&mut plan, 15.0).unwrap();
        assert_eq!(inserted, 1);
        let children = plan.steps[0].children().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[2].intensity(), Intensity::Resting);
        assert_eq!(plan.steps.len(), 2);
    }
}
