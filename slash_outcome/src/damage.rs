// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Damage and reward tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageParams {
    /// Damage of the shortest slash.
    pub base_damage: f64,
    /// Extra damage earned by a slash of at least [`DamageParams::full_bonus_length`].
    pub bonus_damage: f64,
    /// Swipe length, in pixels, that earns the whole bonus.
    pub full_bonus_length: f64,
    /// Currency awarded per kill.
    pub currency_reward: u32,
    /// Delay before the currency collect animation starts, in milliseconds.
    pub currency_delay: u64,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            base_damage: 50.0,
            bonus_damage: 50.0,
            full_bonus_length: 600.0,
            currency_reward: 10,
            currency_delay: 250,
        }
    }
}

impl DamageParams {
    /// Returns a copy with the length normalization multiplied by `density`.
    #[must_use]
    pub fn scaled(self, density: f64) -> Self {
        Self {
            full_bonus_length: self.full_bonus_length * density,
            ..self
        }
    }

    /// Damage dealt by a slash whose accumulated length is `length`.
    ///
    /// Grows linearly from `base_damage` at zero length to
    /// `base_damage + bonus_damage` at `full_bonus_length`, and stays there
    /// for longer slashes. Non-positive or NaN lengths deal the base damage.
    /// When `full_bonus_length` is not positive every positive length earns
    /// the whole bonus.
    #[must_use]
    pub fn damage_for(&self, length: f64) -> f64 {
        let fraction = if length.is_nan() || length <= 0.0 {
            0.0
        } else if self.full_bonus_length > 0.0 {
            (length / self.full_bonus_length).min(1.0)
        } else {
            1.0
        };
        self.base_damage + fraction * self.bonus_damage.max(0.0)
    }

    /// Largest damage any slash can deal.
    #[must_use]
    pub fn max_damage(&self) -> f64 {
        self.base_damage + self.bonus_damage.max(0.0)
    }
}
