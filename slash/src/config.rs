// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use slash_hit::HitParams;
use slash_outcome::DamageParams;
use slash_trail::TrailConfig;

/// Error returned when a configuration cannot be built.
#[derive(Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The display density was zero, negative, NaN or infinite.
    InvalidDensity(f64),
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(density) => write!(f, "InvalidDensity({density})"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(density) => {
                write!(f, "display density must be finite and positive, got {density}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Configuration of the whole slash pipeline.
///
/// The defaults are in logical pixels. Use [`SlashConfig::for_density`] to
/// get a configuration for a display with a given pixel density.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlashConfig {
    /// Trail capture and rendering.
    pub trail: TrailConfig,
    /// Collision detection.
    pub hit: HitParams,
    /// Damage and rewards.
    pub damage: DamageParams,
}

impl SlashConfig {
    /// Default configuration scaled to `density` device pixels per logical pixel.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDensity`]: `density` is not finite and positive.
    pub fn for_density(density: f64) -> Result<Self, ConfigError> {
        Self::default().scaled(density)
    }

    /// Returns a copy with every geometric value multiplied by `density`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDensity`]: `density` is not finite and positive.
    pub fn scaled(self, density: f64) -> Result<Self, ConfigError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }
        Ok(Self {
            trail: self.trail.scaled(density),
            hit: self.hit.scaled(density),
            damage: self.damage.scaled(density),
        })
    }
}
