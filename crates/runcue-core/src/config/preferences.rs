// ABOUTME: Preference store mapping option names to loosely typed values
// ABOUTME: Typed accessors fall back to documented defaults instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! # Preferences
//!
//! Options are stored the way a settings screen writes them: switches as
//! booleans, pickers as integers and free-form fields as text. Passes read
//! them through fail-soft accessors. A missing key yields the caller's
//! default silently; a present but malformed value logs a warning and yields
//! the caller's documented fallback.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

use crate::errors::{AppError, AppResult};

/// A single stored option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    /// Switch
    Bool(bool),
    /// Picker or counter
    Int(i64),
    /// Numeric value stored without text
    Float(f64),
    /// Free-form text field
    Text(String),
}

impl PreferenceValue {
    /// Text form of the value, as a text field would hold it
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Interpret a raw string the way environment overrides are written
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Self::Float(f);
            }
        }
        Self::Text(raw.to_owned())
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PreferenceValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PreferenceValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for PreferenceValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Read-only view of user options consumed by the workout passes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, PreferenceValue>,
}

impl Preferences {
    /// Empty store; every accessor returns its default
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<PreferenceValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value
    pub fn set(&mut self, key: &str, value: impl Into<PreferenceValue>) {
        self.values.insert(key.to_owned(), value.into());
    }

    /// Parse a JSON object of option values
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an object whose values are booleans,
    /// numbers or strings
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::serialization(format!("Invalid preference document: {e}")).with_source(e)
        })
    }

    /// Overlay `other` on top of this store; its values win
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Raw value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PreferenceValue> {
        self.values.get(key)
    }

    /// Whether `key` has a stored value
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no value is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Switch value
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            None => default,
            Some(PreferenceValue::Bool(b)) => *b,
            Some(PreferenceValue::Text(s)) => match s.trim() {
                "true" => true,
                "false" => false,
                _ => malformed(key, s, default),
            },
            Some(other) => malformed(key, other, default),
        }
    }

    /// Integer value; text holding an integer is accepted
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            None => default,
            Some(PreferenceValue::Int(i)) => *i,
            Some(PreferenceValue::Text(s)) => s
                .trim()
                .parse()
                .unwrap_or_else(|_| malformed(key, s, default)),
            Some(other) => malformed(key, other, default),
        }
    }

    /// Text value; numbers and booleans are rendered as text
    #[must_use]
    pub fn get_text(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .map_or_else(|| default.to_owned(), PreferenceValue::as_text)
    }

    /// Decimal number stored as text, `on_error` when it does not parse
    #[must_use]
    pub fn parse_f64(&self, key: &str, default: &str, on_error: f64) -> f64 {
        let text = self.get_text(key, default);
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => malformed(key, &text, on_error),
        }
    }

    /// Whole number stored as text, `on_error` when it does not parse
    #[must_use]
    pub fn parse_i64(&self, key: &str, default: &str, on_error: i64) -> i64 {
        let text = self.get_text(key, default);
        text.trim()
            .parse()
            .unwrap_or_else(|_| malformed(key, &text, on_error))
    }

    /// Duration stored as `ss`, `mm:ss` or `hh:mm:ss`, in seconds
    #[must_use]
    pub fn parse_seconds(&self, key: &str, default: &str, on_error: i64) -> i64 {
        let text = self.get_text(key, default);
        parse_seconds(&text).unwrap_or_else(|| malformed(key, &text, on_error))
    }
}

fn malformed<T: fmt::Debug>(key: &str, value: impl fmt::Display, fallback: T) -> T {
    warn!(key, value = %value, fallback = ?fallback, "Malformed preference, using default");
    fallback
}

/// Parse `ss`, `mm:ss` or `hh:mm:ss` into seconds
///
/// Each component must be a non-negative integer. Returns `None` for empty
/// input, more than three components, or any component that does not parse.
#[must_use]
pub fn parse_seconds(text: &str) -> Option<i64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() > 3 {
        return None;
    }
    parts.iter().try_fold(0_i64, |acc, part| {
        let value: i64 = part.trim().parse().ok()?;
        if value < 0 {
            return None;
        }
        acc.checked_mul(60)?.checked_add(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds_formats() {
        assert_eq!(parse_seconds("45"), Some(45));
        assert_eq!(parse_seconds("04:00"), Some(240));
        assert_eq!(parse_seconds("00:05:00"), Some(300));
        assert_eq!(parse_seconds("1:02:03"), Some(3723));
    }

    #[test]
    fn test_parse_seconds_rejects_garbage() {
        assert_eq!(parse_seconds(""), None);
        assert_eq!(parse_seconds("abc"), None);
        assert_eq!(parse_seconds("1:2:3:4"), None);
        assert_eq!(parse_seconds("5:-1"), None);
        assert_eq!(parse_seconds("05::00"), None);
    }

    #[test]
    fn test_fail_soft_accessors() {
        let prefs = Preferences::new()
            .with("flag", "maybe")
            .with("count", "seven")
            .with("distance", "1k")
            .with("pace", "five minutes");

        assert!(prefs.get_bool("flag", true));
        assert_eq!(prefs.get_int("count", 3), 3);
        assert!((prefs.parse_f64("distance", "1000", 0.0)).abs() < f64::EPSILON);
        assert_eq!(prefs.parse_seconds("pace", "00:05:00", 300), 300);
        assert_eq!(prefs.parse_seconds("missing", "00:05:00", 1), 300);
    }

    #[test]
    fn test_numbers_read_as_text() {
        let prefs = Preferences::new().with("autolap", 500).with("interval", 400.5);
        assert!((prefs.parse_f64("autolap", "1000", 0.0) - 500.0).abs() < f64::EPSILON);
        assert_eq!(prefs.get_text("interval", ""), "400.5");
    }

    #[test]
    fn test_from_json_and_merge() {
        let mut prefs =
            Preferences::from_json_str(r#"{"mute": true, "sport": 1, "unit": "mi"}"#).unwrap();
        prefs.merge(Preferences::new().with("unit", "km"));
        assert!(prefs.get_bool("mute", false));
        assert_eq!(prefs.get_int("sport", 0), 1);
        assert_eq!(prefs.get_text("unit", ""), "km");

        assert!(Preferences::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn test_infer_value_kinds() {
        assert_eq!(PreferenceValue::infer("true"), PreferenceValue::Bool(true));
        assert_eq!(PreferenceValue::infer("42"), PreferenceValue::Int(42));
        assert_eq!(PreferenceValue::infer("2.5"), PreferenceValue::Float(2.5));
        assert_eq!(
            PreferenceValue::infer("00:04:00"),
            PreferenceValue::Text("00:04:00".to_owned())
        );
    }
}
