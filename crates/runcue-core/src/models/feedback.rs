// ABOUTME: Feedback actions invoked when a trigger fires
// ABOUTME: Spoken announcements, value readouts, countdowns and coaching warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};

use super::{Dimension, Range, Scope, TriggerId};

/// Fixed phrases announced on lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueMessage {
    /// "Lap started"
    LapStarted,
    /// "Lap completed"
    LapCompleted,
    /// "Warmup started"
    WarmupStarted,
    /// "Cooldown started"
    CooldownStarted,
    /// "Activity paused"
    ActivityPaused,
    /// "Activity resumed"
    ActivityResumed,
    /// "Activity stopped"
    ActivityStopped,
}

/// Action invoked when a trigger fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    /// Speak a fixed phrase
    Announce {
        /// Phrase to speak
        message: CueMessage,
    },
    /// Speak the scope name ("total", "lap", ...) ahead of the readouts that follow
    ScopeLabel {
        /// Scope being introduced
        scope: Scope,
    },
    /// Read out a live or cumulative value
    Audio {
        /// Aggregation level of the value
        scope: Scope,
        /// Quantity to read
        dimension: Dimension,
    },
    /// Report the deviation of a live value from its target band
    Coach {
        /// Aggregation level of the live value
        scope: Scope,
        /// Quantity being coached
        dimension: Dimension,
        /// Target band
        range: Range,
        /// Trigger that raised the warning
        owning_trigger: TriggerId,
    },
    /// Silent running countdown readout (display)
    Countdown {
        /// Aggregation level
        scope: Scope,
        /// Quantity counted down
        dimension: Dimension,
    },
    /// Spoken remaining amount
    AudioCountdown {
        /// Aggregation level
        scope: Scope,
        /// Quantity counted down
        dimension: Dimension,
    },
    /// Report a heart-rate monitor connectivity change
    HrmStateChange {
        /// Trigger that observed the change
        owning_trigger: TriggerId,
    },
}

impl Feedback {
    /// Fixed phrase
    #[must_use]
    pub const fn announce(message: CueMessage) -> Self {
        Self::Announce { message }
    }

    /// Scope separator
    #[must_use]
    pub const fn scope_label(scope: Scope) -> Self {
        Self::ScopeLabel { scope }
    }

    /// Value readout for `scope` and `dimension`
    #[must_use]
    pub const fn audio(scope: Scope, dimension: Dimension) -> Self {
        Self::Audio { scope, dimension }
    }

    /// Scope of the feedback, if it has one
    #[must_use]
    pub const fn scope(&self) -> Option<Scope> {
        match self {
            Self::ScopeLabel { scope }
            | Self::Audio { scope, .. }
            | Self::Coach { scope, .. }
            | Self::Countdown { scope, .. }
            | Self::AudioCountdown { scope, .. } => Some(*scope),
            Self::Announce { .. } | Self::HrmStateChange { .. } => None,
        }
    }

    /// Dimension of the feedback, if it has one
    #[must_use]
    pub const fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Audio { dimension, .. }
            | Self::Coach { dimension, .. }
            | Self::Countdown { dimension, .. }
            | Self::AudioCountdown { dimension, .. } => Some(*dimension),
            Self::Announce { .. } | Self::ScopeLabel { .. } | Self::HrmStateChange { .. } => {
                None
            }
        }
    }

    /// Whether this entry only announces a scope change
    #[must_use]
    pub const fn is_scope_label(&self) -> bool {
        matches!(self, Self::ScopeLabel { .. })
    }
}
