// ABOUTME: Enumerations for measured quantities, step roles, trigger scopes and lifecycle events
// ABOUTME: Closed sets matched exhaustively by every pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical quantity a value is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Meters
    Distance,
    /// Seconds
    Time,
    /// Seconds per meter
    Pace,
    /// Meters per second
    Speed,
    /// Beats per minute
    HeartRate,
    /// Heart-rate zone index
    HeartRateZone,
    /// Revolutions or steps per minute
    Cadence,
    /// Degrees Celsius
    Temperature,
    /// Hectopascal
    Pressure,
}

impl Dimension {
    /// Whether progress along this dimension accumulates monotonically within
    /// a step, which is what duration bounds and interval triggers need
    #[must_use]
    pub const fn is_cumulative(self) -> bool {
        matches!(self, Self::Distance | Self::Time)
    }

    /// Short name used in logs and CLI output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
            Self::Pace => "pace",
            Self::Speed => "speed",
            Self::HeartRate => "heart_rate",
            Self::HeartRateZone => "heart_rate_zone",
            Self::Cadence => "cadence",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a step within the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy running before the main set
    Warmup,
    /// Work portion
    #[default]
    Active,
    /// Moving recovery between work portions
    Recovery,
    /// Standing rest or countdown
    Resting,
    /// Easy running after the main set
    Cooldown,
    /// A group whose body is a sequence of steps
    Repeat,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warmup => "warmup",
            Self::Active => "active",
            Self::Recovery => "recovery",
            Self::Resting => "resting",
            Self::Cooldown => "cooldown",
            Self::Repeat => "repeat",
        };
        f.write_str(name)
    }
}

/// Aggregation level a trigger or feedback pertains to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Whole activity ("total")
    Activity,
    /// Current step
    Step,
    /// Current lap
    Lap,
    /// Instantaneous live value
    Current,
}

impl Scope {
    /// Scopes in the order readouts are announced
    pub const ANNOUNCE_ORDER: [Self; 4] = [Self::Activity, Self::Step, Self::Lap, Self::Current];
}

/// Lifecycle event within a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Scope began
    Started,
    /// Scope ended
    Completed,
    /// Activity paused
    Paused,
    /// Activity resumed
    Resumed,
    /// Activity stopped
    Stopped,
}
