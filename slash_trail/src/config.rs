// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for trail capture and rendering.
///
/// Distances are in logical pixels and times in milliseconds. Use
/// [`TrailConfig::scaled`] to convert the geometric fields to device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Samples closer than this to the last recorded point are not recorded.
    pub min_point_distance: f64,
    /// Maximum number of recorded points; the oldest is dropped first.
    pub max_points: usize,
    /// A gesture is force-ended once it has lasted this long.
    pub max_session_duration: u64,
    /// Time after the gesture ends before the ribbon starts fading.
    pub fade_delay: u64,
    /// Time the ribbon takes to fade from full opacity to zero.
    pub fade_duration: u64,
    /// Sub-samples generated for each span between two recorded points.
    pub segments_per_span: usize,
    /// Ribbon width at the newest end of the trail.
    pub max_width: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            min_point_distance: 4.0,
            max_points: 24,
            max_session_duration: 1000,
            fade_delay: 80,
            fade_duration: 220,
            segments_per_span: 8,
            max_width: 14.0,
        }
    }
}

impl TrailConfig {
    /// Returns a copy with geometric fields multiplied by `density`.
    ///
    /// Counts and durations are left untouched.
    #[must_use]
    pub fn scaled(self, density: f64) -> Self {
        Self {
            min_point_distance: self.min_point_distance * density,
            max_width: self.max_width * density,
            ..self
        }
    }

    /// Total time from the end of a gesture until the ribbon is fully transparent.
    #[must_use]
    pub fn fade_total(&self) -> u64 {
        self.fade_delay.saturating_add(self.fade_duration)
    }
}
