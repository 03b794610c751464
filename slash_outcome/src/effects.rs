// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use slash_hit::SlashEffects;

/// Effect requests made while applying damage, on top of the hit effects.
pub trait OutcomeEffects: SlashEffects {
    /// Requests a floating damage number at `at`.
    fn show_floating_number(&mut self, value: f64, at: Point);

    /// Requests a collect animation moving `amount` currency from `from` to
    /// the counter, starting after `delay_ms`.
    fn collect_currency(&mut self, amount: u32, from: Point, delay_ms: u64);
}

/// Discards every request.
impl OutcomeEffects for () {
    #[inline]
    fn show_floating_number(&mut self, _value: f64, _at: Point) {}

    #[inline]
    fn collect_currency(&mut self, _amount: u32, _from: Point, _delay_ms: u64) {}
}

/// Receives kill notifications so population counters stay correct.
pub trait SpawnDirector {
    /// A target died. Called exactly once per death.
    fn on_enemy_killed(&mut self);
}

impl<F: FnMut()> SpawnDirector for F {
    fn on_enemy_killed(&mut self) {
        self();
    }
}
