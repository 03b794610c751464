// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment sampling and opaque-span search.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Where a slash entered and left an opaque region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlashSpan {
    /// Entry point, on the side the pointer came from.
    pub start: Point,
    /// Exit point, in the direction the pointer moved.
    pub end: Point,
}

impl SlashSpan {
    /// Distance from entry to exit.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Point halfway between entry and exit.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Evenly spaced points along a segment, endpoints included.
///
/// Produced by [`segment_samples`].
#[derive(Clone, Debug)]
pub struct SegmentSamples {
    from: Point,
    to: Point,
    steps: usize,
    next: usize,
}

impl Iterator for SegmentSamples {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next > self.steps {
            return None;
        }
        let i = self.next;
        self.next += 1;
        if i == 0 {
            Some(self.from)
        } else if i == self.steps {
            Some(self.to)
        } else {
            Some(self.from.lerp(self.to, i as f64 / self.steps as f64))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentSamples {}

/// Samples the segment `from → to` every `step` units.
///
/// For a segment of length `d` this yields `ceil(d / step) + 1` points at
/// `t = i / steps`, so the spacing never exceeds `step` and both endpoints are
/// included. A zero-length segment yields `from` once. A step that is not
/// positive and finite samples only the endpoints.
#[must_use]
pub fn segment_samples(from: Point, to: Point, step: f64) -> SegmentSamples {
    let distance = from.distance(to);
    let steps = if distance > 0.0 && step > 0.0 && step.is_finite() {
        ceil_steps(distance / step)
    } else if distance > 0.0 {
        1
    } else {
        0
    };
    SegmentSamples {
        from,
        to,
        steps,
        next: 0,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "segment lengths are a few screens at most"
)]
fn ceil_steps(ratio: f64) -> usize {
    (ratio.ceil() as usize).max(1)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "search lengths are a few hundred pixels at most"
)]
fn floor_steps(ratio: f64) -> usize {
    ratio.floor() as usize
}

/// Walks from `origin` backward and forward along `direction` to find an opaque span.
///
/// Each direction advances in increments of `step` up to `max_len` inclusive,
/// extending its endpoint while `is_opaque` holds and stopping at the first
/// transparent sample. `origin` is the endpoint of a direction whose very
/// first step is transparent, so a silhouette narrower than `step` yields a
/// zero-length span at `origin`.
///
/// Returns `None` when `origin` itself is not opaque, or when `direction` or
/// `step` is unusable.
pub fn find_span(
    origin: Point,
    direction: Vec2,
    step: f64,
    max_len: f64,
    mut is_opaque: impl FnMut(Point) -> bool,
) -> Option<SlashSpan> {
    let len = direction.hypot();
    let usable = len > 0.0 && len.is_finite() && step > 0.0 && step.is_finite();
    if !usable {
        return None;
    }
    if !is_opaque(origin) {
        return None;
    }
    let dir = direction / len;
    let max_steps = if max_len > 0.0 {
        floor_steps(max_len / step)
    } else {
        0
    };

    let mut start = origin;
    for i in 1..=max_steps {
        let p = origin - dir * (step * i as f64);
        if !is_opaque(p) {
            break;
        }
        start = p;
    }
    let mut end = origin;
    for i in 1..=max_steps {
        let p = origin + dir * (step * i as f64);
        if !is_opaque(p) {
            break;
        }
        end = p;
    }

    Some(SlashSpan { start, end })
}
