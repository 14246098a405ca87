// ABOUTME: Spoken countdown reminders for steps with a bounded duration
// ABOUTME: Periodic anchor reminders plus one-shot points for the final stretch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::constants::countdown;
use runcue_core::models::{
    Dimension, Event, Feedback, Measure, Scope, Step, Trigger, TriggerIds, TriggerKind,
};
use tracing::debug;

/// Anchor and reminder offsets for a duration dimension
#[must_use]
pub const fn reminder_schedule(dimension: Dimension) -> Option<(f64, &'static [f64])> {
    match dimension {
        Dimension::Time => Some((countdown::TIME_ANCHOR, &countdown::TIME_REMINDERS)),
        Dimension::Distance => Some((countdown::DISTANCE_ANCHOR, &countdown::DISTANCE_REMINDERS)),
        Dimension::Pace
        | Dimension::Speed
        | Dimension::HeartRate
        | Dimension::HeartRateZone
        | Dimension::Cadence
        | Dimension::Temperature
        | Dimension::Pressure => None,
    }
}

/// Remaining-amount points at which a one-shot reminder is spoken
///
/// An offset is kept when it is shorter than the duration and the amount
/// already covered at that moment is not a multiple of the anchor, which the
/// periodic reminder announces instead. Each kept offset is shifted by a
/// margin below one half so it never rounds onto a neighbouring value.
#[must_use]
pub fn reminder_points(duration: Measure) -> Option<(f64, Vec<f64>)> {
    let (anchor, offsets) = reminder_schedule(duration.dimension)?;
    let points = offsets
        .iter()
        .copied()
        .filter(|&offset| offset < duration.value)
        .filter(|&offset| ((duration.value - offset) % anchor).abs() >= f64::EPSILON)
        .map(|offset| offset + countdown::REMINDER_MARGIN)
        .collect();
    Some((anchor, points))
}

/// Attach the spoken countdown to a bounded step
///
/// Adds a periodic anchor reminder when the step is longer than the anchor,
/// a remaining-amount list trigger for the final reminders, and a start
/// trigger announcing the full amount. Manual-advance steps and dimensions
/// without a reminder table are left untouched.
pub fn attach_audio_countdown(step: &mut Step, ids: &mut TriggerIds) {
    let Some(duration) = step.duration else {
        return;
    };
    let Some((anchor, points)) = reminder_points(duration) else {
        return;
    };
    let dimension = duration.dimension;
    let spoken = Feedback::AudioCountdown {
        scope: Scope::Step,
        dimension,
    };

    if duration.value > anchor {
        step.triggers.push(
            Trigger::interval(ids.next_id(), dimension, anchor, anchor)
                .with_feedback(spoken.clone()),
        );
    }

    debug!(%dimension, value = duration.value, ?points, "Attached countdown reminders");
    step.triggers.push(
        Trigger::new(
            ids.next_id(),
            Scope::Step,
            TriggerKind::List {
                dimension,
                trigger_values: points,
                relative_to_remaining: true,
            },
        )
        .with_feedback(spoken.clone()),
    );

    step.triggers.push(
        Trigger::event(ids.next_id(), Scope::Step, Event::Started).with_feedback(spoken),
    );
}
