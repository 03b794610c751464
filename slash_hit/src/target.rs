// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::sample::SlashSpan;

/// Capability a slashable target exposes to the collision resolver.
///
/// The resolver never needs to know what kind of target it is looking at;
/// different enemy types differ only in how they answer these queries.
pub trait HitTarget {
    /// World-space bounding box of the target's current texture.
    fn bounds(&self) -> Rect;

    /// Alpha of the texture under `local`, relative to the top-left of [`HitTarget::bounds`].
    ///
    /// Returns `None` outside the texture.
    fn alpha_at(&self, local: Point) -> Option<u8>;

    /// Returns `true` when the pixel under `local` has alpha strictly above `threshold`.
    fn is_pixel_opaque(&self, local: Point, threshold: u8) -> bool {
        self.alpha_at(local).is_some_and(|alpha| alpha > threshold)
    }

    /// Visual feedback: the target was struck by a swipe moving by `delta`.
    fn shake(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// Visual feedback: draw a cut along `span`, triggered at `point` by a swipe heading `direction`.
    fn draw_slash_damage(&mut self, point: Point, direction: Vec2, span: SlashSpan) {
        let _ = (point, direction, span);
    }
}
