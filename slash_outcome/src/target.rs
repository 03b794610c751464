// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use slash_hit::HitTarget;

/// Opaque handle to a death visual owned by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub u64);

/// A target that can take damage and die.
pub trait Damageable: HitTarget {
    /// Subtracts `amount` from the target's health.
    fn take_damage(&mut self, amount: f64);

    /// Returns `true` once health has dropped to zero or below.
    fn is_dead(&self) -> bool;

    /// Stops entrance or idle animations bound to the target.
    fn cancel_animations(&mut self) {}

    /// Starts the death sequence and returns handles to the visuals it spawned.
    fn explode(&mut self) -> Vec<VisualHandle>;

    /// Anchor for floating numbers and collect animations.
    fn center(&self) -> Point {
        self.bounds().center()
    }
}
