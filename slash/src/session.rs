// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture state: raw pointer positions, swipe length and touched targets.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Vec2};
use slash_hit::TargetId;

/// State of one slash gesture, from pointer-down until it is resolved.
///
/// Positions are the raw pointer samples, not the filtered trail points, so
/// the swipe length and the collision segments follow the pointer exactly.
#[derive(Clone, Debug)]
pub struct SlashSession {
    /// Where the gesture started.
    pub start_pos: Point,
    /// Last raw pointer position fed to the gesture.
    pub last_pos: Point,
    /// Time of pointer-down, in milliseconds.
    pub started_at: u64,
    accumulated_length: f64,
    touched: HashSet<TargetId>,
    touch_order: Vec<TargetId>,
}

impl SlashSession {
    /// Starts tracking a gesture at `pos`.
    #[must_use]
    pub fn new(pos: Point, now: u64) -> Self {
        Self {
            start_pos: pos,
            last_pos: pos,
            started_at: now,
            accumulated_length: 0.0,
            touched: HashSet::new(),
            touch_order: Vec::new(),
        }
    }

    /// Moves the gesture to `pos`, returning the movement since the last position.
    ///
    /// The length of the movement is added to [`SlashSession::accumulated_length`].
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        self.accumulated_length += delta.hypot();
        delta
    }

    /// Offset of `current` from the start of the gesture.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Vec2 {
        current - self.start_pos
    }

    /// Sum of the distances between consecutive raw positions.
    #[must_use]
    pub fn accumulated_length(&self) -> f64 {
        self.accumulated_length
    }

    /// Records that the gesture touched `id`. Returns `false` if it already had.
    pub fn touch(&mut self, id: TargetId) -> bool {
        let fresh = self.touched.insert(id);
        if fresh {
            self.touch_order.push(id);
        }
        fresh
    }

    /// Returns `true` if the gesture has touched `id`.
    #[must_use]
    pub fn is_touched(&self, id: TargetId) -> bool {
        self.touched.contains(&id)
    }

    /// Targets touched so far, each once, in order of first touch.
    #[must_use]
    pub fn touched(&self) -> &[TargetId] {
        &self.touch_order
    }

    /// Time since pointer-down.
    #[must_use]
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }
}
