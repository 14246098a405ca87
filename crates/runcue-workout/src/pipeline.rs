// ABOUTME: Ordered generate, normalize, compile pipeline with typestate enforcement
// ABOUTME: A plan can only reach the cue compiler after it has been normalized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::config::Preferences;
use runcue_core::errors::AppResult;
use runcue_core::models::{Dimension, Plan};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{BasicPlanConfig, CueConfig, IntervalPlanConfig, NormalizeConfig};
use crate::cues;
use crate::generator;
use crate::normalizer;
use crate::zones::HeartRateZoneResolver;

/// Which canned plan to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WorkoutMode {
    /// Single active step with an optional pace or heart-rate-zone target
    Basic {
        /// `Pace`, `HeartRateZone` or no target
        target: Option<Dimension>,
    },
    /// Warmup, repeated work/rest, cooldown
    Interval,
}

impl WorkoutMode {
    /// Whether this is the basic mode (selects the autolap switch)
    #[must_use]
    pub const fn is_basic(self) -> bool {
        matches!(self, Self::Basic { .. })
    }
}

/// Build the default plan for `mode` from preferences
#[must_use]
pub fn generate(
    mode: WorkoutMode,
    prefs: &Preferences,
    zones: &dyn HeartRateZoneResolver,
) -> Plan {
    match mode {
        WorkoutMode::Basic { target } => {
            generator::build_basic_plan(&BasicPlanConfig::from_preferences(prefs), target, zones)
        }
        WorkoutMode::Interval => {
            generator::build_interval_plan(&IntervalPlanConfig::from_preferences(prefs))
        }
    }
}

/// A plan that has not been normalized yet
#[derive(Debug, Clone)]
pub struct Pipeline {
    plan: Plan,
}

impl Pipeline {
    /// Start from a generated or externally edited plan
    #[must_use]
    pub const fn new(plan: Plan) -> Self {
        Self { plan }
    }

    /// Validate and normalize the plan
    ///
    /// # Errors
    ///
    /// Returns an error if the plan is structurally invalid or if
    /// normalization finds its flattened view out of sync with the tree
    pub fn normalize(mut self, config: &NormalizeConfig) -> AppResult<NormalizedPlan> {
        self.plan.validate()?;
        normalizer::normalize(&mut self.plan, config)?;
        Ok(NormalizedPlan { plan: self.plan })
    }
}

/// A normalized plan, ready for cue compilation
#[derive(Debug, Clone)]
pub struct NormalizedPlan {
    plan: Plan,
}

impl NormalizedPlan {
    /// Inspect the normalized tree
    #[must_use]
    pub const fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Attach cues and hand back the annotated plan
    #[must_use]
    pub fn compile(mut self, config: &CueConfig) -> Plan {
        cues::compile(&mut self.plan, config);
        self.plan
    }
}

/// Generate, normalize and compile the default plan for `mode`
///
/// # Errors
///
/// Returns an error if normalization fails; generation and compilation are
/// fail-soft
pub fn prepare_workout(
    mode: WorkoutMode,
    prefs: &Preferences,
    zones: &dyn HeartRateZoneResolver,
) -> AppResult<Plan> {
    let plan = generate(mode, prefs, zones);
    let normalize_config = NormalizeConfig::from_preferences(prefs, mode.is_basic());
    let plan = Pipeline::new(plan)
        .normalize(&normalize_config)?
        .compile(&CueConfig::from_preferences(prefs));

    info!(
        ?mode,
        steps = plan.entries().len(),
        triggers = plan.trigger_count(),
        "Workout prepared"
    );
    Ok(plan)
}
