// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catmull-Rom smoothing of recorded trail points.

use alloc::vec::Vec;

use kurbo::{CubicBez, ParamCurve, Point};

/// One sub-sample of a smoothed trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSample {
    /// Position on the smoothed curve.
    pub pos: Point,
    /// Normalized position along the whole trail: `0` at the oldest end, `1` at the newest.
    pub progress: f64,
}

/// Converts the Catmull-Rom span between `p1` and `p2` into a cubic Bézier.
///
/// `p0` and `p3` are the neighbors that shape the tangents at either end.
/// The returned curve passes through `p1` at `t = 0` and `p2` at `t = 1`.
#[must_use]
pub fn catmull_rom_segment(p0: Point, p1: Point, p2: Point, p3: Point) -> CubicBez {
    CubicBez::new(p1, p1 + (p2 - p0) / 6.0, p2 - (p3 - p1) / 6.0, p2)
}

/// Smooths `points` into `segments_per_span` sub-samples per span, plus the final point.
///
/// End points are duplicated to form the quadruples for the first and last
/// spans. Returns an empty vector for fewer than two points or a trail with
/// zero total length.
#[must_use]
pub fn smooth_trail(points: &[Point], segments_per_span: usize) -> Vec<CurveSample> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let length: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    if length <= 0.0 {
        return Vec::new();
    }

    let segments = segments_per_span.max(1);
    let count = (n - 1) * segments + 1;
    let last = (count - 1) as f64;
    let mut out = Vec::with_capacity(count);

    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        let bez = catmull_rom_segment(p0, p1, p2, p3);
        for j in 0..segments {
            let t = j as f64 / segments as f64;
            let k = out.len() as f64;
            out.push(CurveSample {
                pos: bez.eval(t),
                progress: k / last,
            });
        }
    }
    out.push(CurveSample {
        pos: points[n - 1],
        progress: 1.0,
    });
    out
}
