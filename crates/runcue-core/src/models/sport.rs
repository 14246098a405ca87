// ABOUTME: Sport type enumeration for workout plans
// ABOUTME: Maps stored integer sport codes to sport types with display names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};

/// Sport a plan is executed as
///
/// Stored preferences keep the sport as an integer code. Unknown codes map to
/// `Other` rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running
    #[default]
    Running,
    /// Cycling
    Biking,
    /// Any other activity
    Other,
    /// Orienteering
    Orienteering,
    /// Walking
    Walking,
}

impl SportType {
    /// Create `SportType` from a stored integer code
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Running,
            1 => Self::Biking,
            3 => Self::Orienteering,
            4 => Self::Walking,
            _ => Self::Other,
        }
    }

    /// Stored integer code
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Running => 0,
            Self::Biking => 1,
            Self::Other => 2,
            Self::Orienteering => 3,
            Self::Walking => 4,
        }
    }

    /// Get the human-readable name for this sport type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "run",
            Self::Biking => "bike ride",
            Self::Other => "activity",
            Self::Orienteering => "orienteering",
            Self::Walking => "walk",
        }
    }
}
