// ABOUTME: Top-level plan container with tree navigation by index path
// ABOUTME: Provides the flattened (step, parent) view used by insertion passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PlanStep, SportType, Step, TriggerId, TriggerIds};
use crate::errors::PlanError;

/// Location of a node as the sequence of child indices from the top level
///
/// Paths are recomputed from a fresh traversal whenever the tree changes;
/// they are never stored across insertions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepPath(Vec<usize>);

impl StepPath {
    /// Path from raw indices
    #[must_use]
    pub const fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Top-level path with a single index
    #[must_use]
    pub fn top(index: usize) -> Self {
        Self(vec![index])
    }

    /// Raw indices
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Path of the owning repeat group, `None` for top-level nodes
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Index within the owning sequence
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Path of the `index`-th child of this node
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

impl fmt::Display for StepPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join("."))
    }
}

/// One node of the flattened depth-first view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Location of the node
    pub path: StepPath,
    /// Location of the owning repeat group, `None` at top level
    pub parent: Option<StepPath>,
}

/// Compiled, annotated workout description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Plan {
    /// Sport the plan is executed as
    pub sport: SportType,
    /// Ordered top-level steps
    pub steps: Vec<PlanStep>,
    /// Mute all audio feedback
    #[serde(default)]
    pub mute: bool,
    /// Trigger id allocator
    #[serde(default)]
    pub trigger_ids: TriggerIds,
}

impl Plan {
    /// Empty plan for `sport`
    #[must_use]
    pub const fn new(sport: SportType) -> Self {
        Self {
            sport,
            steps: Vec::new(),
            mute: false,
            trigger_ids: TriggerIds::new(),
        }
    }

    /// Append a top-level node
    pub fn push(&mut self, step: impl Into<PlanStep>) {
        self.steps.push(step.into());
    }

    /// Allocate a fresh trigger id
    pub fn next_trigger_id(&mut self) -> TriggerId {
        self.trigger_ids.next_id()
    }

    /// Depth-first, pre-order view of every node, repeat groups included
    #[must_use]
    pub fn entries(&self) -> Vec<PlanEntry> {
        let mut entries = Vec::new();
        collect_entries(&self.steps, None, &mut entries);
        entries
    }

    /// Node at `path`
    #[must_use]
    pub fn step_at(&self, path: &StepPath) -> Option<&PlanStep> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.steps.get(*first)?;
        for index in rest {
            node = match node {
                PlanStep::Repeat(repeat) => repeat.steps.get(*index)?,
                PlanStep::Step(_) => return None,
            };
        }
        Some(node)
    }

    /// Mutable node at `path`
    pub fn step_at_mut(&mut self, path: &StepPath) -> Option<&mut PlanStep> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.steps.get_mut(*first)?;
        for index in rest {
            node = match node {
                PlanStep::Repeat(repeat) => repeat.steps.get_mut(*index)?,
                PlanStep::Step(_) => return None,
            };
        }
        Some(node)
    }

    /// Sequence owning the node at `path`: the top level, or the parent
    /// repeat group's children
    pub fn sequence_mut(&mut self, path: &StepPath) -> Option<&mut Vec<PlanStep>> {
        match path.parent() {
            None => Some(&mut self.steps),
            Some(parent) => match self.step_at_mut(&parent)? {
                PlanStep::Repeat(repeat) => Some(&mut repeat.steps),
                PlanStep::Step(_) => None,
            },
        }
    }

    /// Insert `step` directly after the node at `path` in its owning sequence
    ///
    /// # Errors
    ///
    /// Returns `PlanError::StaleEntry` if `path` no longer resolves, which
    /// means the caller's flattened view has diverged from the tree.
    pub fn insert_after(&mut self, path: &StepPath, step: impl Into<PlanStep>) -> Result<(), PlanError> {
        let stale = || PlanError::StaleEntry { path: path.clone() };
        let index = path.last().ok_or_else(stale)?;
        let sequence = self.sequence_mut(path).ok_or_else(stale)?;
        if index >= sequence.len() {
            return Err(stale());
        }
        sequence.insert(index + 1, step.into());
        Ok(())
    }

    /// Every leaf step in depth-first order
    #[must_use]
    pub fn leaves(&self) -> Vec<&Step> {
        let mut leaves = Vec::new();
        collect_leaves(&self.steps, &mut leaves);
        leaves
    }

    /// Every leaf step in depth-first order, mutably
    pub fn leaves_mut(&mut self) -> Vec<&mut Step> {
        let mut leaves = Vec::new();
        collect_leaves_mut(&mut self.steps, &mut leaves);
        leaves
    }

    /// Whether any leaf carries a target range
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.leaves().iter().any(|step| step.target.is_some())
    }

    /// Total number of triggers attached across all leaves
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.leaves().iter().map(|step| step.triggers.len()).sum()
    }

    /// Check structural invariants
    ///
    /// # Errors
    ///
    /// Returns the first violation found in depth-first order: a leaf with
    /// repeat intensity, a repeat group with zero repetitions, or a target
    /// range whose bounds are inverted.
    pub fn validate(&self) -> Result<(), PlanError> {
        for entry in self.entries() {
            let Some(node) = self.step_at(&entry.path) else {
                return Err(PlanError::StaleEntry { path: entry.path });
            };
            match node {
                PlanStep::Repeat(repeat) if repeat.repeat_count == 0 => {
                    return Err(PlanError::EmptyRepeat { path: entry.path });
                }
                PlanStep::Repeat(_) => {}
                PlanStep::Step(step) => {
                    if step.intensity == super::Intensity::Repeat {
                        return Err(PlanError::RepeatIntensityOnLeaf { path: entry.path });
                    }
                    if let Some(target) = step.target {
                        if !target.range.is_ordered() {
                            return Err(PlanError::InvertedRange {
                                path: entry.path,
                                low: target.range.low,
                                high: target.range.high,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn collect_entries(steps: &[PlanStep], parent: Option<&StepPath>, out: &mut Vec<PlanEntry>) {
    for (index, step) in steps.iter().enumerate() {
        let path = parent.map_or_else(|| StepPath::top(index), |p| p.child(index));
        out.push(PlanEntry {
            path: path.clone(),
            parent: parent.cloned(),
        });
        if let PlanStep::Repeat(repeat) = step {
            collect_entries(&repeat.steps, Some(&path), out);
        }
    }
}

fn collect_leaves<'a>(steps: &'a [PlanStep], out: &mut Vec<&'a Step>) {
    for step in steps {
        match step {
            PlanStep::Step(leaf) => out.push(leaf),
            PlanStep::Repeat(repeat) => collect_leaves(&repeat.steps, out),
        }
    }
}

fn collect_leaves_mut<'a>(steps: &'a mut [PlanStep], out: &mut Vec<&'a mut Step>) {
    for step in steps {
        match step {
            PlanStep::Step(leaf) => out.push(leaf),
            PlanStep::Repeat(repeat) => collect_leaves_mut(&mut repeat.steps, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimension, Intensity, RepeatStep};

    fn nested_plan() -> Plan {
        let mut plan = Plan::new(SportType::Running);
        plan.push(Step::new(Intensity::Warmup));
        plan.push(RepeatStep::new(
            2,
            vec![
                Step::active().into(),
                Step::pause(Dimension::Time, 60.0).into(),
            ],
        ));
        plan.push(Step::new(Intensity::Cooldown));
        plan
    }

    #[test]
    fn test_entries_are_preorder_with_parents() {
        let plan = nested_plan();
        let entries = plan.entries();
        let paths: Vec<&[usize]> = entries.iter().map(|e| e.path.indices()).collect();
        assert_eq!(paths, vec![&[0][..], &[1], &[1, 0], &[1, 1], &[2]]);
        assert_eq!(entries[2].parent, Some(StepPath::top(1)));
        assert_eq!(entries[1].parent, None);
    }

    #[test]
    fn test_insert_after_nested_keeps_order() {
        let mut plan = nested_plan();
        plan.insert_after(&StepPath::new(vec![1, 0]), Step::pause(Dimension::Time, 15.0))
            .unwrap();
        let children = plan.steps[1].children().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].intensity(), Intensity::Active);
        assert_eq!(children[1].duration().unwrap().value, 15.0);
        assert_eq!(children[2].duration().unwrap().value, 60.0);
    }

    #[test]
    fn test_insert_after_stale_path_fails() {
        let mut plan = nested_plan();
        let err = plan
            .insert_after(&StepPath::new(vec![0, 3]), Step::active())
            .unwrap_err();
        assert!(matches!(err, PlanError::StaleEntry { .. }));
    }
}
