// ABOUTME: Environment configuration for preference loading and log levels
// ABOUTME: Reads JSON preference files and applies RUNCUE_PREF_<KEY> environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! Environment-based configuration

use runcue_core::config::{PreferenceValue, Preferences};
use runcue_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, Level};

/// Environment variables with this prefix override single preferences
pub const PREFERENCE_ENV_PREFIX: &str = "RUNCUE_PREF_";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Pass summaries
    #[default]
    Info,
    /// Per-decision events
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Load preferences from an optional JSON file, then apply environment overrides
///
/// Keys that are absent fall back to the documented defaults when the passes
/// read them, so an empty store is a valid configuration.
///
/// # Errors
///
/// Returns an error if `path` does not exist, cannot be read, or does not
/// hold a JSON object of booleans, numbers and strings
pub fn load_preferences(path: Option<&Path>) -> AppResult<Preferences> {
    let mut prefs = match path {
        Some(path) => read_preference_file(path)?,
        None => Preferences::new(),
    };

    let overrides = env_overrides();
    let override_count = overrides.len();
    prefs.merge(overrides);

    info!(
        file = ?path,
        overrides = override_count,
        preferences = prefs.len(),
        "Loaded preferences"
    );
    Ok(prefs)
}

fn read_preference_file(path: &Path) -> AppResult<Preferences> {
    if !path.exists() {
        return Err(AppError::not_found(format!(
            "Preference file {}",
            path.display()
        )));
    }
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    Preferences::from_json_str(&text)
}

/// Collect `RUNCUE_PREF_<KEY>` variables; the key is lowercased
#[must_use]
pub fn env_overrides() -> Preferences {
    let mut prefs = Preferences::new();
    for (name, raw) in env::vars() {
        let Some(key) = name.strip_prefix(PREFERENCE_ENV_PREFIX) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let key = key.to_lowercase();
        let value = PreferenceValue::infer(&raw);
        debug!(%key, %value, "Preference overridden from environment");
        prefs.set(&key, value);
    }
    prefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default(" warn "), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Error.to_tracing_level(), Level::ERROR);
    }
}
