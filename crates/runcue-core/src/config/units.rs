// ABOUTME: Unit system provider mapping the configured distance unit to meters
// ABOUTME: Kilometers and statute miles; anything unrecognized falls back to metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Preferences;
use crate::constants::{defaults, keys, units};

/// Active distance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilometers
    #[default]
    Metric,
    /// Statute miles
    Imperial,
}

impl UnitSystem {
    /// Parse from a unit code with fallback to metric
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "km" | "metric" => Self::Metric,
            "mi" | "imperial" => Self::Imperial,
            other => {
                warn!(unit = other, "Unknown distance unit, using kilometers");
                Self::Metric
            }
        }
    }

    /// Read the `unit` preference
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self::from_str_or_default(&prefs.get_text(keys::UNIT, defaults::UNIT))
    }

    /// Meters in one distance unit
    #[must_use]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Self::Metric => units::KM_METERS,
            Self::Imperial => units::MI_METERS,
        }
    }

    /// Meters in one foot, the same in both systems
    #[must_use]
    pub const fn meters_per_foot(self) -> f64 {
        units::METERS_PER_FOOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_meters() {
        assert!((UnitSystem::Metric.meters_per_unit() - 1000.0).abs() < f64::EPSILON);
        assert!((UnitSystem::Imperial.meters_per_unit() - 1609.34).abs() < f64::EPSILON);
        assert!((UnitSystem::Imperial.meters_per_foot() - 0.3048).abs() < f64::EPSILON);
        assert!((UnitSystem::Metric.meters_per_foot() - 0.3048).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_from_preferences() {
        let prefs = Preferences::new().with(keys::UNIT, "mi");
        assert_eq!(UnitSystem::from_preferences(&prefs), UnitSystem::Imperial);
        let prefs = Preferences::new().with(keys::UNIT, "furlong");
        assert_eq!(UnitSystem::from_preferences(&prefs), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_preferences(&Preferences::new()), UnitSystem::Metric);
    }
}
