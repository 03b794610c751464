// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapered ribbon geometry built from a smoothed trail.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};

use crate::smooth::CurveSample;

/// One renderable sample of a [`Ribbon`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonSample {
    /// Center of the ribbon at this sample.
    pub pos: Point,
    /// Full stroke width at this sample.
    pub width: f64,
    /// Stroke opacity at this sample, already multiplied by the trail fade.
    pub alpha: f64,
}

/// A frame's worth of trail geometry.
///
/// Width and opacity are both eased by `progress²`, which gives the blade its
/// thin, transparent tail and full-width head.
#[derive(Clone, Debug, PartialEq)]
pub struct Ribbon {
    samples: Vec<RibbonSample>,
    cap: Option<[Point; 3]>,
    opacity: f64,
}

impl Ribbon {
    pub(crate) fn from_curve(curve: &[CurveSample], max_width: f64, opacity: f64) -> Option<Self> {
        if curve.is_empty() {
            return None;
        }
        let samples: Vec<RibbonSample> = curve
            .iter()
            .map(|s| {
                let ease = s.progress * s.progress;
                RibbonSample {
                    pos: s.pos,
                    width: max_width * ease,
                    alpha: opacity * ease,
                }
            })
            .collect();
        let cap = end_cap(&samples);
        Some(Self {
            samples,
            cap,
            opacity,
        })
    }

    /// Samples from the oldest end of the trail to the newest.
    #[must_use]
    pub fn samples(&self) -> &[RibbonSample] {
        &self.samples
    }

    /// End-cap triangle at the newest end: `[left, tip, right]`.
    ///
    /// `None` when the last two samples coincide and no tangent exists.
    #[must_use]
    pub fn cap(&self) -> Option<[Point; 3]> {
        self.cap
    }

    /// Overall trail opacity this frame.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Closed outline of the tapered ribbon, including the end cap.
    #[must_use]
    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        let n = self.samples.len();
        if n == 0 {
            return path;
        }

        let mut right = Vec::with_capacity(n);
        for i in 0..n {
            let s = self.samples[i];
            let tangent =
                self.samples[(i + 1).min(n - 1)].pos - self.samples[i.saturating_sub(1)].pos;
            let offset = unit_normal(tangent) * (s.width * 0.5);
            if i == 0 {
                path.move_to(s.pos + offset);
            } else {
                path.line_to(s.pos + offset);
            }
            right.push(s.pos - offset);
        }
        if let Some([_, tip, _]) = self.cap {
            path.line_to(tip);
        }
        for p in right.into_iter().rev() {
            path.line_to(p);
        }
        path.close_path();
        path
    }
}

fn unit_normal(tangent: Vec2) -> Vec2 {
    let len = tangent.hypot();
    if len > 0.0 {
        Vec2::new(-tangent.y / len, tangent.x / len)
    } else {
        Vec2::ZERO
    }
}

fn end_cap(samples: &[RibbonSample]) -> Option<[Point; 3]> {
    let [.., prev, last] = samples else {
        return None;
    };
    let tangent = last.pos - prev.pos;
    let len = tangent.hypot();
    if len <= 0.0 {
        return None;
    }
    let dir = tangent / len;
    let normal = unit_normal(tangent) * (last.width * 0.5);
    Some([
        last.pos + normal,
        last.pos + dir * last.width,
        last.pos - normal,
    ])
}
