// ABOUTME: Plan model for the workout-cue compiler
// ABOUTME: Re-exports steps, repeat groups, triggers, suppressions and feedback actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! # Plan Model
//!
//! Pure data describing a workout plan and the cue rules attached to each
//! step. The model has no behavior beyond construction helpers, tree
//! navigation and invariant checks; the passes that fill it live in
//! `runcue-workout`.
//!
//! ## Lifecycle
//!
//! - Built once by the default plan generator (or an external editor)
//! - Rewritten in place by the normalizer (insertions only)
//! - Annotated in place by the cue compiler (trigger attachment only)
//! - Treated as immutable by the runtime evaluator afterwards
//!
//! ## Core Models
//!
//! - `Plan`: sport, ordered top-level steps and the mute flag
//! - `PlanStep`: either a leaf `Step` or a `RepeatStep` group
//! - `Trigger`: a rule with a scope, suppressions and feedback
//! - `Feedback`: an action invoked when a trigger fires

mod dimension;
mod feedback;
mod plan;
mod range;
mod sport;
mod step;
mod trigger;

pub use dimension::{Dimension, Event, Intensity, Scope};
pub use feedback::{CueMessage, Feedback};
pub use plan::{Plan, PlanEntry, StepPath};
pub use range::{Measure, Range, Target};
pub use sport::SportType;
pub use step::{PlanStep, RepeatStep, Step};
pub use trigger::{Trigger, TriggerId, TriggerIds, TriggerKind, TriggerSuppression};
