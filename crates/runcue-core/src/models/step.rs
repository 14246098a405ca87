// ABOUTME: Leaf steps, repeat groups and the sum type joining them
// ABOUTME: Repeat groups own their children; leaves own their attached triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};

use super::{Dimension, Intensity, Measure, Target, Trigger};

/// Atomic phase of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Step {
    /// Role of the step
    pub intensity: Intensity,
    /// End condition; `None` means the step advances manually
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Measure>,
    /// Band the live value should stay inside
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    /// Automatic lap distance in meters, 0 when disabled
    #[serde(default)]
    pub autolap: f64,
    /// Attached trigger rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Trigger>,
}

impl Step {
    /// Manual-advance step with the given intensity
    #[must_use]
    pub const fn new(intensity: Intensity) -> Self {
        Self {
            intensity,
            duration: None,
            target: None,
            autolap: 0.0,
            triggers: Vec::new(),
        }
    }

    /// Manual-advance active step
    #[must_use]
    pub const fn active() -> Self {
        Self::new(Intensity::Active)
    }

    /// Resting step bounded by `value` along `dimension`
    #[must_use]
    pub fn pause(dimension: Dimension, value: f64) -> Self {
        Self::new(Intensity::Resting).with_duration(Measure::new(dimension, value))
    }

    /// Set the end condition
    #[must_use]
    pub fn with_duration(mut self, duration: Measure) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the target band
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Whether the step advances only when externally signalled
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        self.duration.is_none()
    }

    /// Dimension of the end condition
    #[must_use]
    pub fn duration_dimension(&self) -> Option<Dimension> {
        self.duration.map(|d| d.dimension)
    }
}

/// A sequence of steps executed `repeat_count` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatStep {
    /// Number of repetitions
    pub repeat_count: u32,
    /// Body executed on every repetition
    pub steps: Vec<PlanStep>,
}

impl RepeatStep {
    /// Create a repeat group
    #[must_use]
    pub const fn new(repeat_count: u32, steps: Vec<PlanStep>) -> Self {
        Self {
            repeat_count,
            steps,
        }
    }
}

/// Node of the plan tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanStep {
    /// Leaf step
    Step(Step),
    /// Repeat group
    Repeat(RepeatStep),
}

impl PlanStep {
    /// Intensity of the node; repeat groups report `Intensity::Repeat`
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        match self {
            Self::Step(step) => step.intensity,
            Self::Repeat(_) => Intensity::Repeat,
        }
    }

    /// End condition of a leaf; repeat groups have none
    #[must_use]
    pub const fn duration(&self) -> Option<Measure> {
        match self {
            Self::Step(step) => step.duration,
            Self::Repeat(_) => None,
        }
    }

    /// Leaf step, if this node is one
    #[must_use]
    pub const fn as_step(&self) -> Option<&Step> {
        match self {
            Self::Step(step) => Some(step),
            Self::Repeat(_) => None,
        }
    }

    /// Child sequence, if this node is a repeat group
    #[must_use]
    pub fn children(&self) -> Option<&[PlanStep]> {
        match self {
            Self::Step(_) => None,
            Self::Repeat(repeat) => Some(&repeat.steps),
        }
    }
}

impl From<Step> for PlanStep {
    fn from(step: Step) -> Self {
        Self::Step(step)
    }
}

impl From<RepeatStep> for PlanStep {
    fn from(repeat: RepeatStep) -> Self {
        Self::Repeat(repeat)
    }
}
