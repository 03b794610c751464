// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trail session lifecycle: start, record, end, fade.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`TrailTracker::start_session`] on pointer-down.
//! 2) Feed every pointer-move to [`TrailTracker::add_point`]. Stop feeding the
//!    gesture once it returns `false`.
//! 3) Call [`TrailTracker::end_session`] on pointer-up. Points are kept so the
//!    ribbon can fade out.
//! 4) Call [`TrailTracker::advance`] once per frame to get the ribbon to draw.

use alloc::collections::{VecDeque, vec_deque};
use alloc::vec::Vec;

use kurbo::Point;

use crate::config::TrailConfig;
use crate::point::TrailPoint;
use crate::ribbon::Ribbon;
use crate::smooth::{CurveSample, smooth_trail};

/// Owns the recorded points of at most one gesture at a time.
#[derive(Clone, Debug)]
pub struct TrailTracker {
    config: TrailConfig,
    points: VecDeque<TrailPoint>,
    active: bool,
    started_at: Option<u64>,
    ended_at: Option<u64>,
    /// Smoothed curve; `None` when the points changed since it was built.
    curve: Option<Vec<CurveSample>>,
}

impl TrailTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            points: VecDeque::with_capacity(config.max_points.max(1) + 1),
            active: false,
            started_at: None,
            ended_at: None,
            curve: None,
        }
    }

    /// Returns the configuration this tracker was built with.
    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Begins a new gesture at `pos`, discarding any previous trail.
    pub fn start_session(&mut self, pos: Point, now: u64) {
        self.points.clear();
        self.points.push_back(TrailPoint::new(pos, now));
        self.active = true;
        self.started_at = Some(now);
        self.ended_at = None;
        self.curve = None;
        log::debug!("trail session started at {now}ms");
    }

    /// Records a pointer sample, returning `false` once the gesture can no longer continue.
    ///
    /// - Returns `false` when no gesture is active.
    /// - Returns `false` and ends the gesture when it has lasted
    ///   [`TrailConfig::max_session_duration`] or longer.
    /// - Returns `true` without recording when `pos` is closer than
    ///   [`TrailConfig::min_point_distance`] to the last recorded point.
    /// - Otherwise records `pos`, dropping the oldest point beyond
    ///   [`TrailConfig::max_points`].
    pub fn add_point(&mut self, pos: Point, now: u64) -> bool {
        if !self.active {
            return false;
        }
        let start = self.started_at.unwrap_or(now);
        if now.saturating_sub(start) >= self.config.max_session_duration {
            log::debug!(
                "trail session exceeded {}ms; forcing end",
                self.config.max_session_duration
            );
            self.end_session(now);
            return false;
        }
        if let Some(last) = self.points.back()
            && last.pos.distance(pos) < self.config.min_point_distance
        {
            return true;
        }

        self.points.push_back(TrailPoint::new(pos, now));
        while self.points.len() > self.config.max_points.max(1) {
            self.points.pop_front();
        }
        self.curve = None;
        true
    }

    /// Ends the active gesture. Recorded points are kept for the fade-out.
    pub fn end_session(&mut self, now: u64) {
        if !self.active {
            return;
        }
        self.active = false;
        self.ended_at = Some(now);
        log::debug!(
            "trail session ended at {now}ms with {} points",
            self.points.len()
        );
    }

    /// Returns `true` while a gesture is being recorded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the most recently recorded point.
    #[must_use]
    pub fn last_point(&self) -> Option<TrailPoint> {
        self.points.back().copied()
    }

    /// Iterates recorded points from oldest to newest.
    pub fn points(&self) -> vec_deque::Iter<'_, TrailPoint> {
        self.points.iter()
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when no points are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time the current or last gesture started.
    #[must_use]
    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    /// Time the last gesture ended, if it has.
    #[must_use]
    pub fn ended_at(&self) -> Option<u64> {
        self.ended_at
    }

    /// Duration of the current or last gesture as seen at `now`.
    ///
    /// Never more than [`TrailConfig::max_session_duration`], even when the
    /// end was noticed later than that.
    #[must_use]
    pub fn duration(&self, now: u64) -> Option<u64> {
        self.started_at.map(|start| {
            self.ended_at
                .unwrap_or(now)
                .saturating_sub(start)
                .min(self.config.max_session_duration)
        })
    }

    /// Overall trail opacity at `now`.
    ///
    /// Full while recording and for [`TrailConfig::fade_delay`] after the end,
    /// then linear down to zero over [`TrailConfig::fade_duration`].
    #[must_use]
    pub fn opacity_at(&self, now: u64) -> f64 {
        if self.active {
            return 1.0;
        }
        let Some(end) = self.ended_at else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(end);
        if elapsed <= self.config.fade_delay {
            return 1.0;
        }
        if self.config.fade_duration == 0 {
            return 0.0;
        }
        let fading = (elapsed - self.config.fade_delay) as f64;
        (1.0 - fading / self.config.fade_duration as f64).max(0.0)
    }

    /// Advances the render state to `now` and returns the ribbon to draw.
    ///
    /// Once the fade completes the points are discarded and this returns
    /// `None` on every later call until a new gesture starts.
    pub fn advance(&mut self, now: u64) -> Option<Ribbon> {
        if self.points.is_empty() {
            return None;
        }
        let opacity = self.opacity_at(now);
        if !self.active && opacity <= 0.0 {
            self.points.clear();
            self.curve = None;
            log::trace!("trail faded out at {now}ms");
            return None;
        }

        let points = &self.points;
        let segments = self.config.segments_per_span;
        let curve = self.curve.get_or_insert_with(|| {
            let positions: Vec<Point> = points.iter().map(|p| p.pos).collect();
            smooth_trail(&positions, segments)
        });
        Ribbon::from_curve(curve, self.config.max_width, opacity)
    }
}
