// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Parameters for slash collision.
///
/// Distances are in logical pixels; use [`HitParams::scaled`] to convert them
/// to device pixels so detection behaves the same at every display density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Distance between interpolated samples along a pointer segment.
    pub sample_step: f64,
    /// Increment used when searching for the ends of an opaque span.
    pub search_step: f64,
    /// Maximum distance a span search walks in each direction.
    pub max_search_length: f64,
    /// Inflation applied to the segment's bounding box in the broad phase.
    pub broad_phase_margin: f64,
    /// A pixel is opaque when its alpha is strictly greater than this.
    pub alpha_threshold: u8,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            sample_step: 4.0,
            search_step: 1.0,
            max_search_length: 120.0,
            broad_phase_margin: 16.0,
            alpha_threshold: 50,
        }
    }
}

impl HitParams {
    /// Returns a copy with every distance multiplied by `density`.
    #[must_use]
    pub fn scaled(self, density: f64) -> Self {
        Self {
            sample_step: self.sample_step * density,
            search_step: self.search_step * density,
            max_search_length: self.max_search_length * density,
            broad_phase_margin: self.broad_phase_margin * density,
            alpha_threshold: self.alpha_threshold,
        }
    }
}
