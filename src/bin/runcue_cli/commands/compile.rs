// ABOUTME: Compile command for runcue-cli
// ABOUTME: Loads preferences, runs the workout pipeline and prints the annotated plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use anyhow::Result;
use runcue::config::load_preferences;
use runcue_workout::{prepare_workout, KarvonenZones, NoHeartRateZones, WorkoutMode, ZONE_COUNT};
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::{print_json, print_plan_summary};

/// Compile the default plan for `mode` and print it as JSON on stdout
pub fn run(mode: WorkoutMode, prefs_path: Option<&Path>, pretty: bool) -> Result<()> {
    let prefs = load_preferences(prefs_path)?;

    let plan = if let Some(zones) = KarvonenZones::from_preferences(&prefs) {
        info!(zones = ZONE_COUNT, "Using Karvonen heart-rate zones");
        prepare_workout(mode, &prefs, &zones)?
    } else {
        if matches!(mode, WorkoutMode::Basic { target: Some(_) }) {
            warn!("No heart-rate zone data; a zone target will be skipped");
        }
        prepare_workout(mode, &prefs, &NoHeartRateZones)?
    };

    print_plan_summary(&plan);
    print_json(&plan, pretty)
}
