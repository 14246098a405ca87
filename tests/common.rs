// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, preference builders and trigger lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `runcue`

use runcue_core::config::Preferences;
use runcue_core::constants::keys;
use runcue_core::models::{Event, Plan, PlanStep, Scope, Step, Trigger, TriggerKind};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Preferences with every periodic and end-of-lap cue off and coaching off
pub fn quiet_preferences() -> Preferences {
    Preferences::new()
        .with(keys::cues::TIME, false)
        .with(keys::cues::DISTANCE, false)
        .with(keys::cues::END_OF_LAP, false)
        .with(keys::cues::TARGET_COACHING, false)
}

/// Leaf step at `index` of the top-level sequence
pub fn top_step(plan: &Plan, index: usize) -> &Step {
    plan.steps[index]
        .as_step()
        .unwrap_or_else(|| panic!("step {index} is a repeat group"))
}

/// Leaf step `child` inside the repeat group at top-level `index`
pub fn repeat_child(plan: &Plan, index: usize, child: usize) -> &Step {
    let PlanStep::Repeat(repeat) = &plan.steps[index] else {
        panic!("step {index} is not a repeat group");
    };
    repeat.steps[child]
        .as_step()
        .unwrap_or_else(|| panic!("child {child} is a repeat group"))
}

/// Event triggers of `step` matching `scope` and `event`
pub fn events(step: &Step, scope: Scope, event: Event) -> Vec<&Trigger> {
    step.triggers
        .iter()
        .filter(|t| t.is_event(scope, event))
        .collect()
}

/// Whether `trigger` is a pause, resume or stop announcement
pub fn is_pause_resume_stop(trigger: &Trigger) -> bool {
    matches!(
        trigger.kind,
        TriggerKind::Event {
            event: Event::Paused | Event::Resumed | Event::Stopped,
            ..
        }
    )
}
