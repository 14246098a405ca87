// ABOUTME: Normalizer settings for autolap propagation and countdown insertion
// ABOUTME: Autolap enablement depends on whether the plan is a basic or structured one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::config::Preferences;
use runcue_core::constants::{defaults, keys};
use serde::{Deserialize, Serialize};

use super::plans::autolap_distance;

/// Settings read by the plan normalizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Autolap distance for active steps, `None` when autolap is off
    pub autolap: Option<f64>,
    /// Countdown inserted after manual-advance steps in seconds, `None` when off
    pub countdown_seconds: Option<f64>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            autolap: None,
            countdown_seconds: Some(defaults::STEP_COUNTDOWN_TIME_ON_ERROR as f64),
        }
    }
}

impl NormalizeConfig {
    /// Read normalizer settings
    ///
    /// Basic plans use `autolap_active`; structured plans use
    /// `step_autolap_active`, which defaults to the basic switch.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences, basic: bool) -> Self {
        let mut autolap_on = prefs.get_bool(keys::plan::AUTOLAP_ACTIVE, false);
        if !basic {
            autolap_on = prefs.get_bool(keys::plan::STEP_AUTOLAP_ACTIVE, autolap_on);
        }

        let countdown_seconds = if prefs.get_bool(
            keys::normalize::STEP_COUNTDOWN_ACTIVE,
            defaults::STEP_COUNTDOWN_ACTIVE,
        ) {
            let seconds = prefs.parse_i64(
                keys::normalize::STEP_COUNTDOWN_TIME,
                defaults::STEP_COUNTDOWN_TIME,
                defaults::STEP_COUNTDOWN_TIME_ON_ERROR,
            );
            (seconds > 0).then_some(seconds as f64)
        } else {
            None
        };

        Self {
            autolap: autolap_on.then(|| autolap_distance(prefs)),
            countdown_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_autolap_overrides_basic_switch() {
        let prefs = Preferences::new()
            .with(keys::plan::AUTOLAP_ACTIVE, true)
            .with(keys::plan::STEP_AUTOLAP_ACTIVE, false)
            .with(keys::plan::AUTOLAP, "400");

        assert_eq!(NormalizeConfig::from_preferences(&prefs, true).autolap, Some(400.0));
        assert_eq!(NormalizeConfig::from_preferences(&prefs, false).autolap, None);
    }

    #[test]
    fn test_countdown_defaults_on() {
        let config = NormalizeConfig::from_preferences(&Preferences::new(), false);
        assert_eq!(config, NormalizeConfig::default());

        let prefs = Preferences::new().with(keys::normalize::STEP_COUNTDOWN_TIME, "later");
        let config = NormalizeConfig::from_preferences(&prefs, false);
        assert_eq!(config.countdown_seconds, Some(15.0));
    }
}
