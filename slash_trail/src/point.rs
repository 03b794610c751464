// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// One recorded sample of a trail.
///
/// Points are immutable once recorded. `alpha` is a render-time weight only;
/// collision never looks at it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    /// Position in world coordinates.
    pub pos: Point,
    /// Time the sample was recorded, in milliseconds.
    pub timestamp: u64,
    /// Render weight in `[0, 1]`.
    pub alpha: f64,
}

impl TrailPoint {
    /// Creates a fully opaque point.
    #[must_use]
    pub const fn new(pos: Point, timestamp: u64) -> Self {
        Self {
            pos,
            timestamp,
            alpha: 1.0,
        }
    }
}
