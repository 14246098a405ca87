// ABOUTME: Output formatting helpers for runcue-cli
// ABOUTME: JSON goes to stdout, the human-readable plan summary goes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use anyhow::Result;
use runcue_core::models::{Plan, PlanStep};
use serde::Serialize;

/// Serialize `value` to stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// One line per step with its depth, intensity and trigger count
pub fn print_plan_summary(plan: &Plan) {
    eprintln!(
        "{} plan, {} steps, {} triggers{}",
        plan.sport.display_name(),
        plan.entries().len(),
        plan.trigger_count(),
        if plan.mute { " (muted)" } else { "" }
    );
    for entry in plan.entries() {
        let Some(step) = plan.step_at(&entry.path) else {
            continue;
        };
        let indent = "  ".repeat(entry.path.indices().len());
        match step {
            PlanStep::Repeat(repeat) => {
                eprintln!("{indent}{} repeat x{}", entry.path, repeat.repeat_count);
            }
            PlanStep::Step(step) => {
                let duration = step
                    .duration
                    .map_or_else(|| "manual".to_owned(), |d| format!("{} {}", d.value, d.dimension));
                eprintln!(
                    "{indent}{} {} ({duration}), {} triggers",
                    entry.path,
                    step.intensity,
                    step.triggers.len()
                );
            }
        }
    }
}
