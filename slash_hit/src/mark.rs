// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted records of resolved hits.

use alloc::vec::Vec;

use kurbo::Point;

use crate::live::{LiveTargets, TargetId};
use crate::sample::SlashSpan;

/// One resolved hit span on a target.
///
/// Marks outlive the gesture that created them; they are cleared explicitly,
/// when their target dies or by [`MarkLog::retain_live`] once it is gone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlashMark {
    /// Target the span was cut into.
    pub target: TargetId,
    /// Entry point in world coordinates.
    pub start: Point,
    /// Exit point in world coordinates.
    pub end: Point,
    /// Time of the pointer move that produced the mark, in milliseconds.
    pub timestamp: u64,
}

impl SlashMark {
    /// The span this mark covers.
    #[must_use]
    pub fn span(&self) -> SlashSpan {
        SlashSpan {
            start: self.start,
            end: self.end,
        }
    }
}

/// Append-only log of [`SlashMark`]s with per-target cleanup.
#[derive(Clone, Debug, Default)]
pub struct MarkLog {
    marks: Vec<SlashMark>,
}

impl MarkLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Appends a mark.
    pub fn push(&mut self, mark: SlashMark) {
        self.marks.push(mark);
    }

    /// All marks in creation order.
    #[must_use]
    pub fn as_slice(&self) -> &[SlashMark] {
        &self.marks
    }

    /// Iterates all marks in creation order.
    pub fn iter(&self) -> core::slice::Iter<'_, SlashMark> {
        self.marks.iter()
    }

    /// Iterates the marks cut into `target`.
    pub fn for_target(&self, target: TargetId) -> impl Iterator<Item = &SlashMark> + '_ {
        self.marks.iter().filter(move |m| m.target == target)
    }

    /// Drops every mark cut into `target`, returning how many were removed.
    pub fn clear_target(&mut self, target: TargetId) -> usize {
        let before = self.marks.len();
        self.marks.retain(|m| m.target != target);
        before - self.marks.len()
    }

    /// Drops marks whose target is no longer in `targets`, returning how many were removed.
    pub fn retain_live<T>(&mut self, targets: &LiveTargets<T>) -> usize {
        let before = self.marks.len();
        self.marks.retain(|m| targets.contains(m.target));
        before - self.marks.len()
    }

    /// Drops every mark.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Number of marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` when the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
