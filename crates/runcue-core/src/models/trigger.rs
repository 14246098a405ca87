// ABOUTME: Trigger rules attached to steps and their suppression vetoes
// ABOUTME: Closed tagged unions for event, interval, list, target, HRM and auto-pause triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Dimension, Event, Feedback, Range, Scope};

/// Identity of a trigger rule within a plan
///
/// Allocated by `Plan::next_trigger_id`. Copies of a shared rule attached to
/// several steps keep the id of the rule they were copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(pub u32);

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Allocator handing out sequential trigger ids for one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerIds(u32);

impl TriggerIds {
    /// Allocator starting at `t0`
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> TriggerId {
        let id = TriggerId(self.0);
        self.0 += 1;
        id
    }
}

/// Condition under which a trigger fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerKind {
    /// Fires on a lifecycle event within the trigger's scope
    Event {
        /// Event to react to
        event: Event,
        /// Maximum number of firings, unlimited when absent
        max_fire_count: Option<u32>,
        /// Number of initial occurrences to ignore
        skip_count: u32,
    },
    /// Fires at `first_value`, `first_value + interval_value`, ...
    Interval {
        /// Dimension progress is measured along
        dimension: Dimension,
        /// First firing point
        first_value: f64,
        /// Distance between subsequent firings
        interval_value: f64,
    },
    /// Fires once when progress crosses each listed value
    List {
        /// Dimension progress is measured along
        dimension: Dimension,
        /// Crossing points
        trigger_values: Vec<f64>,
        /// Measure against remaining rather than accumulated progress
        relative_to_remaining: bool,
    },
    /// Fires while a smoothed live value is outside `range`
    Target {
        /// Dimension of the live value
        dimension: Dimension,
        /// Moving average window in seconds
        moving_average_window: u32,
        /// Seconds after step start during which no warning is issued
        grace_period: u32,
        /// Accepted band
        range: Range,
    },
    /// Fires on heart-rate monitor connectivity changes
    HrmState,
    /// Pauses the activity when speed stays low
    AutoPause {
        /// Seconds below `min_speed` before pausing
        after_seconds: f64,
        /// Minimum speed in meters per second
        min_speed: f64,
    },
}

/// Veto preventing a trigger from firing under a coincidental condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerSuppression {
    /// Suppress when the scope interval had zero elapsed progress
    EmptyLap,
    /// Suppress an end-of-lap firing that coincides with another cue.
    ///
    /// With a threshold: the firing lands on a multiple of a distance that
    /// already ends a lap or step. Without: the lap end coincides with the
    /// step end, whose completion cue already reads the lap feedback.
    EndOfLap {
        /// Distance the firing coincides with
        threshold: Option<f64>,
    },
}

/// A rule that fires feedback actions when a runtime condition is met
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Rule identity
    pub id: TriggerId,
    /// Aggregation level the condition is evaluated in
    pub scope: Scope,
    /// Firing condition
    pub kind: TriggerKind,
    /// Vetoes checked before firing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressions: Vec<TriggerSuppression>,
    /// Actions invoked on firing, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<Feedback>,
}

impl Trigger {
    /// Create a trigger with no suppressions and no feedback
    #[must_use]
    pub const fn new(id: TriggerId, scope: Scope, kind: TriggerKind) -> Self {
        Self {
            id,
            scope,
            kind,
            suppressions: Vec::new(),
            feedback: Vec::new(),
        }
    }

    /// Event trigger firing on every occurrence
    #[must_use]
    pub const fn event(id: TriggerId, scope: Scope, event: Event) -> Self {
        Self::new(
            id,
            scope,
            TriggerKind::Event {
                event,
                max_fire_count: None,
                skip_count: 0,
            },
        )
    }

    /// Step-scoped interval trigger
    #[must_use]
    pub const fn interval(id: TriggerId, dimension: Dimension, first: f64, interval: f64) -> Self {
        Self::new(
            id,
            Scope::Step,
            TriggerKind::Interval {
                dimension,
                first_value: first,
                interval_value: interval,
            },
        )
    }

    /// Append a feedback action
    #[must_use]
    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback.push(feedback);
        self
    }

    /// Whether this is an event trigger for `event` in `scope`
    #[must_use]
    pub fn is_event(&self, scope: Scope, event: Event) -> bool {
        self.scope == scope && matches!(self.kind, TriggerKind::Event { event: e, .. } if e == event)
    }

    /// Whether this trigger announces lap completion
    #[must_use]
    pub fn is_end_of_lap(&self) -> bool {
        self.is_event(Scope::Lap, Event::Completed)
    }
}
