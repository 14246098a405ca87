// ABOUTME: Cue compiler attaching triggers and feedback to every step of a plan
// ABOUTME: Builds the global trigger set once and dispatches per step intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! # Cue Compiler
//!
//! Walks the plan depth-first and attaches the trigger set each step needs:
//!
//! - **Active** steps get a copy of every global trigger (periodic cues,
//!   end-of-lap, pause/resume/stop, lap-started and monitor triggers) and,
//!   closing a run of active steps, a step-completed announcement.
//! - **Recovery/Resting** steps get a running countdown readout and spoken
//!   countdown reminders.
//! - **Warmup/Cooldown** steps get pause/resume/stop and a start announcement.
//! - Any step with a target range gets a coaching trigger when coaching is on.
//!
//! Global triggers are deep-copied into each step. Every copy keeps the id of
//! the rule it was copied from, so the runtime can tell copies apart from
//! distinct rules while each step owns its own feedback list. The end-of-lap
//! marker is therefore set per step: only the copy on the step closing a run
//! of active steps carries it, not every active step sharing the rule.

/// Spoken countdown reminders
pub mod countdown;

/// Readout list construction and scope labelling
pub mod feedback;

use runcue_core::constants::counters;
use runcue_core::constants::countdown::READOUT_INTERVAL;
use runcue_core::models::{
    CueMessage, Dimension, Event, Feedback, Intensity, Plan, PlanStep, Scope, Step, Target,
    Trigger, TriggerIds, TriggerKind, TriggerSuppression,
};
use tracing::{debug, info, warn};

use crate::config::CueConfig;

/// Annotate `plan` in place with the triggers described by `config`
///
/// Sets the plan's mute flag, then attaches triggers to every leaf step.
/// Must run after normalization so inserted countdown steps and autolap
/// distances are visible to the duplicate-cue reconciliation.
pub fn compile(plan: &mut Plan, config: &CueConfig) {
    plan.mute = config.mute;
    let has_target = plan.has_target();

    let Plan {
        steps, trigger_ids, ..
    } = plan;

    let mut compiler = CueCompiler::new(config, trigger_ids, has_target);
    compiler.compile_sequence(steps);
    let silent = compiler.silent;
    let global_triggers = compiler.globals.len();

    info!(
        silent,
        global_triggers,
        triggers = plan.trigger_count(),
        mute = plan.mute,
        "Compiled audio cues"
    );
}

/// Whether a plan gets no non-essential cues
///
/// Silent when no periodic or end-of-lap trigger exists and coaching cannot
/// fire, either because it is off or because no step has a target.
#[must_use]
pub const fn is_silent(periodic_triggers: usize, coaching: bool, has_target: bool) -> bool {
    periodic_triggers == 0 && (!coaching || !has_target)
}

struct CueCompiler<'a> {
    config: &'a CueConfig,
    ids: &'a mut TriggerIds,
    silent: bool,
    globals: Vec<Trigger>,
}

impl<'a> CueCompiler<'a> {
    fn new(config: &'a CueConfig, ids: &'a mut TriggerIds, has_target: bool) -> Self {
        let readouts = feedback::readout_feedback(config.readouts);
        let mut globals = periodic_triggers(config, ids);
        for trigger in &mut globals {
            trigger.feedback.clone_from(&readouts);
            trigger.suppressions.push(TriggerSuppression::EmptyLap);
        }

        let silent = is_silent(globals.len(), config.coaching, has_target);
        globals.extend(pause_resume_stop(config, ids));

        if !silent {
            globals.push(
                Trigger::new(
                    ids.next_id(),
                    Scope::Step,
                    TriggerKind::Event {
                        event: Event::Started,
                        max_fire_count: Some(counters::LAP_STARTED_MAX_FIRE),
                        skip_count: 0,
                    },
                )
                .with_feedback(Feedback::announce(CueMessage::LapStarted)),
            );

            if config.lap_started {
                globals.push(
                    Trigger::new(
                        ids.next_id(),
                        Scope::Lap,
                        TriggerKind::Event {
                            event: Event::Started,
                            max_fire_count: None,
                            skip_count: counters::LAP_STARTED_SKIP,
                        },
                    )
                    .with_feedback(Feedback::announce(CueMessage::LapStarted)),
                );
            }

            if config.hrm_connection {
                let id = ids.next_id();
                globals.push(
                    Trigger::new(id, Scope::Activity, TriggerKind::HrmState)
                        .with_feedback(Feedback::HrmStateChange { owning_trigger: id }),
                );
            }
        }

        debug!(
            silent,
            globals = globals.len(),
            readouts = readouts.len(),
            "Built global trigger set"
        );

        Self {
            config,
            ids,
            silent,
            globals,
        }
    }

    fn compile_sequence(&mut self, steps: &mut [PlanStep]) {
        for index in 0..steps.len() {
            let next = steps.get(index + 1).map(PlanStep::intensity);
            match &mut steps[index] {
                PlanStep::Repeat(repeat) => self.compile_sequence(&mut repeat.steps),
                PlanStep::Step(step) => self.compile_step(step, next),
            }
        }
    }

    fn compile_step(&mut self, step: &mut Step, next: Option<Intensity>) {
        match step.intensity {
            Intensity::Active => self.attach_active(step, next),
            Intensity::Recovery | Intensity::Resting => self.attach_rest(step),
            Intensity::Warmup | Intensity::Cooldown => self.attach_warmup_cooldown(step),
            Intensity::Repeat => {
                warn!("Leaf step with repeat intensity, no cues attached");
            }
        }

        if self.config.coaching {
            if let Some(target) = step.target {
                self.attach_coaching(step, target);
            }
        }
    }

    fn attach_active(&mut self, step: &mut Step, next: Option<Intensity>) {
        let mut triggers = self.globals.clone();

        if !self.silent && next != Some(Intensity::Active) {
            let mut completed = Trigger::event(self.ids.next_id(), Scope::Step, Event::Completed)
                .with_feedback(Feedback::announce(CueMessage::LapCompleted));

            if let Some(end_of_lap) = triggers.iter_mut().find(|t| t.is_end_of_lap()) {
                completed.feedback.extend(end_of_lap.feedback.iter().cloned());
                completed.suppressions.push(TriggerSuppression::EmptyLap);
                end_of_lap
                    .suppressions
                    .push(TriggerSuppression::EndOfLap { threshold: None });
            }
            debug!(id = %completed.id, "Attached step-completed cue");
            triggers.push(completed);
        }

        step.triggers.extend(triggers);
        reconcile_end_of_lap(step);
    }

    fn attach_rest(&mut self, step: &mut Step) {
        if let Some(duration) = step.duration {
            step.triggers.push(
                Trigger::interval(
                    self.ids.next_id(),
                    duration.dimension,
                    READOUT_INTERVAL,
                    READOUT_INTERVAL,
                )
                .with_feedback(Feedback::Countdown {
                    scope: Scope::Step,
                    dimension: duration.dimension,
                }),
            );
        }
        step.triggers
            .extend(pause_resume_stop(self.config, self.ids));

        if !self.silent {
            countdown::attach_audio_countdown(step, self.ids);
        }
    }

    fn attach_warmup_cooldown(&mut self, step: &mut Step) {
        step.triggers
            .extend(pause_resume_stop(self.config, self.ids));

        if !self.config.skip_start_stop {
            let message = if step.intensity == Intensity::Warmup {
                CueMessage::WarmupStarted
            } else {
                CueMessage::CooldownStarted
            };
            step.triggers.push(
                Trigger::event(self.ids.next_id(), Scope::Step, Event::Started)
                    .with_feedback(Feedback::announce(message)),
            );
        }
    }

    fn attach_coaching(&mut self, step: &mut Step, target: Target) {
        let id = self.ids.next_id();
        step.triggers.push(
            Trigger::new(
                id,
                Scope::Step,
                TriggerKind::Target {
                    dimension: target.dimension,
                    moving_average_window: self.config.moving_average_seconds,
                    grace_period: self.config.grace_seconds,
                    range: target.range,
                },
            )
            .with_feedback(Feedback::Coach {
                scope: Scope::Activity,
                dimension: target.dimension,
                range: target.range,
                owning_trigger: id,
            }),
        );
        debug!(%id, dimension = %target.dimension, "Attached coaching trigger");
    }
}

/// Periodic time and distance cues plus the end-of-lap cue, without feedback
fn periodic_triggers(config: &CueConfig, ids: &mut TriggerIds) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    if let Some(seconds) = config.time_interval {
        triggers.push(Trigger::interval(ids.next_id(), Dimension::Time, seconds, seconds));
    }
    if let Some(meters) = config.distance_interval {
        triggers.push(Trigger::interval(ids.next_id(), Dimension::Distance, meters, meters));
    }
    if config.end_of_lap {
        triggers.push(Trigger::event(ids.next_id(), Scope::Lap, Event::Completed));
    }
    triggers
}

/// Fresh pause, resume and stop announcements, none when start/stop cues are skipped
fn pause_resume_stop(config: &CueConfig, ids: &mut TriggerIds) -> Vec<Trigger> {
    if config.skip_start_stop {
        return Vec::new();
    }
    [
        (Event::Paused, CueMessage::ActivityPaused),
        (Event::Resumed, CueMessage::ActivityResumed),
        (Event::Stopped, CueMessage::ActivityStopped),
    ]
    .into_iter()
    .map(|(event, message)| {
        Trigger::event(ids.next_id(), Scope::Step, event).with_feedback(Feedback::announce(message))
    })
    .collect()
}

/// Keep distance interval cues from firing on top of a lap end
///
/// When the step announces lap ends, every distance interval trigger gets an
/// end-of-lap suppression for the autolap distance and for a distance
/// duration, so a firing landing on either is left to the lap cue.
fn reconcile_end_of_lap(step: &mut Step) {
    if !step.triggers.iter().any(Trigger::is_end_of_lap) {
        return;
    }

    let mut thresholds = Vec::new();
    if step.autolap > 0.0 {
        thresholds.push(step.autolap);
    }
    if let Some(duration) = step.duration {
        if duration.dimension == Dimension::Distance {
            thresholds.push(duration.value);
        }
    }
    if thresholds.is_empty() {
        return;
    }

    for trigger in &mut step.triggers {
        if let TriggerKind::Interval {
            dimension: Dimension::Distance,
            ..
        } = trigger.kind
        {
            trigger.suppressions.extend(
                thresholds
                    .iter()
                    .map(|&t| TriggerSuppression::EndOfLap { threshold: Some(t) }),
            );
            debug!(id = %trigger.id, ?thresholds, "Suppressing distance cue on lap end");
        }
    }
}
