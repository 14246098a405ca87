// ABOUTME: Runcue CLI - compiles default workout plans into cue-annotated JSON
// ABOUTME: Handles plan compilation and printing the documented preference defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers
//!
//! Usage:
//! ```bash
//! # Compile the basic plan with a pace target
//! runcue-cli compile --mode basic --target pace --prefs prefs.json --pretty
//!
//! # Compile the interval plan, overriding one preference from the environment
//! RUNCUE_PREF_INTERVAL_REPETITIONS=6 runcue-cli compile --mode interval
//!
//! # Print a template preference file with every documented default
//! runcue-cli defaults --pretty > prefs.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use runcue::logging::init_default_logging;
use runcue_core::models::Dimension;
use runcue_workout::WorkoutMode;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "runcue-cli",
    about = "Runcue workout-cue compiler",
    long_about = "Generates the default basic or interval workout plan from preferences, \
                  normalizes it and attaches every audio cue trigger."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate, normalize and compile a plan, printing it as JSON
    Compile {
        /// Which canned plan to build
        #[arg(long, value_enum)]
        mode: ModeArg,

        /// Target for the basic plan
        #[arg(long, value_enum)]
        target: Option<TargetArg>,

        /// JSON file with preference values
        #[arg(long)]
        prefs: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the documented default of every preference as JSON
    Defaults {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Basic,
    Interval,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    Pace,
    Hrz,
}

impl TargetArg {
    const fn dimension(self) -> Dimension {
        match self {
            Self::Pace => Dimension::Pace,
            Self::Hrz => Dimension::HeartRateZone,
        }
    }
}

fn workout_mode(mode: ModeArg, target: Option<TargetArg>) -> Result<WorkoutMode> {
    match (mode, target) {
        (ModeArg::Basic, target) => Ok(WorkoutMode::Basic {
            target: target.map(TargetArg::dimension),
        }),
        (ModeArg::Interval, None) => Ok(WorkoutMode::Interval),
        (ModeArg::Interval, Some(_)) => {
            anyhow::bail!("--target only applies to --mode basic")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_default_logging(cli.verbose)?;

    info!("Runcue CLI");

    match cli.command {
        Command::Compile {
            mode,
            target,
            prefs,
            pretty,
        } => {
            let mode = workout_mode(mode, target)?;
            commands::compile::run(mode, prefs.as_deref(), pretty)?;
        }
        Command::Defaults { pretty } => {
            commands::defaults::run(pretty)?;
        }
    }

    Ok(())
}
