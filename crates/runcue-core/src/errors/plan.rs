// ABOUTME: Plan structure error types raised by validation and tree rewriting
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

//! # Plan Error Types
//!
//! - `PlanError` - structural problems in a plan tree
//! - Conversion into `AppError` for uniform propagation

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};
use crate::models::StepPath;

/// Errors describing an invalid or inconsistent plan tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A leaf step carries `REPEAT` intensity
    RepeatIntensityOnLeaf {
        /// Location of the offending step
        path: StepPath,
    },
    /// A repeat group repeats zero times
    EmptyRepeat {
        /// Location of the repeat group
        path: StepPath,
    },
    /// A target range has `low > high`
    InvertedRange {
        /// Location of the offending step
        path: StepPath,
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// A flattened entry no longer resolves inside the tree
    StaleEntry {
        /// Path that failed to resolve
        path: StepPath,
    },
}

impl PlanError {
    /// Path of the step the error refers to
    #[must_use]
    pub const fn path(&self) -> &StepPath {
        match self {
            Self::RepeatIntensityOnLeaf { path }
            | Self::EmptyRepeat { path }
            | Self::InvertedRange { path, .. }
            | Self::StaleEntry { path } => path,
        }
    }

    /// Error code this maps to when converted into `AppError`
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::RepeatIntensityOnLeaf { .. } | Self::EmptyRepeat { .. } => {
                ErrorCode::InvalidInput
            }
            Self::InvertedRange { .. } => ErrorCode::ValueOutOfRange,
            Self::StaleEntry { .. } => ErrorCode::InternalError,
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepeatIntensityOnLeaf { path } => {
                write!(f, "Step {path} has repeat intensity but no child steps")
            }
            Self::EmptyRepeat { path } => {
                write!(f, "Repeat group {path} has a repeat count of zero")
            }
            Self::InvertedRange { path, low, high } => {
                write!(f, "Step {path} has an inverted target range [{low}, {high}]")
            }
            Self::StaleEntry { path } => {
                write!(f, "Flattened entry {path} no longer resolves in the plan tree")
            }
        }
    }
}

impl Error for PlanError {}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        Self::new(error.code(), error.to_string()).with_details(serde_json::json!({
            "path": error.path().indices(),
        }))
    }
}
