// ABOUTME: Numeric range, step duration and step target value types
// ABOUTME: Small Copy types shared by steps, target triggers and coach feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};

use super::Dimension;

/// Closed interval `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound (inclusive)
    pub low: f64,
    /// Upper bound (inclusive)
    pub high: f64,
}

impl Range {
    /// Create a range
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether the bounds are ordered
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }
}

/// A value along a dimension, used as a step's end condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Dimension the step is bounded in
    pub dimension: Dimension,
    /// Amount in base units (seconds or meters)
    pub value: f64,
}

impl Measure {
    /// Create a measure
    #[must_use]
    pub const fn new(dimension: Dimension, value: f64) -> Self {
        Self { dimension, value }
    }

    /// Duration bounded in seconds
    #[must_use]
    pub const fn time(seconds: f64) -> Self {
        Self::new(Dimension::Time, seconds)
    }

    /// Duration bounded in meters
    #[must_use]
    pub const fn distance(meters: f64) -> Self {
        Self::new(Dimension::Distance, meters)
    }
}

/// The band a live value should stay inside during a step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Dimension of the live value
    pub dimension: Dimension,
    /// Accepted band
    pub range: Range,
}

impl Target {
    /// Create a target
    #[must_use]
    pub const fn new(dimension: Dimension, range: Range) -> Self {
        Self { dimension, range }
    }
}
