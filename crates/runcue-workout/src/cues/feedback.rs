// ABOUTME: Builds the shared readout feedback list and labels each scope change
// ABOUTME: Produces "total: distance, time; current: pace" style announcements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::models::Feedback;

use crate::config::CueInfo;

/// Readouts enabled in `readouts`, in announcement order, with scope labels
#[must_use]
pub fn readout_feedback(readouts: CueInfo) -> Vec<Feedback> {
    let values = readouts
        .readouts()
        .map(|r| Feedback::audio(r.scope, r.dimension))
        .collect();
    insert_scope_labels(values)
}

/// Insert a `ScopeLabel` ahead of every value readout whose scope differs
/// from the entry before it
///
/// Entries that are not value readouts pass through unchanged. Running the
/// pass on already-labelled output changes nothing.
#[must_use]
pub fn insert_scope_labels(feedback: Vec<Feedback>) -> Vec<Feedback> {
    let mut labelled: Vec<Feedback> = Vec::with_capacity(feedback.len() * 2);
    for entry in feedback {
        if let Feedback::Audio { scope, .. } = &entry {
            let scope = *scope;
            let previous = labelled.last().and_then(|prev| match prev {
                Feedback::Audio { scope, .. } | Feedback::ScopeLabel { scope } => Some(*scope),
                _ => None,
            });
            if previous != Some(scope) {
                labelled.push(Feedback::scope_label(scope));
            }
        }
        labelled.push(entry);
    }
    labelled
}
