// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slash Trail: capture a pointer gesture as a time-bounded, smoothed blade trail.
//!
//! This crate owns the visual half of a slash gesture. A [`TrailTracker`]
//! accepts raw pointer samples while a gesture is active and keeps an ordered,
//! capped sequence of [`TrailPoint`]s:
//!
//! - Samples closer than [`TrailConfig::min_point_distance`] to the last
//!   recorded point are treated as redundant and not recorded.
//! - The point count never exceeds [`TrailConfig::max_points`]; the oldest
//!   point is dropped first.
//! - A gesture never outlives [`TrailConfig::max_session_duration`]; the first
//!   sample past the limit force-ends it.
//!
//! Once per frame the host calls [`TrailTracker::advance`], which returns a
//! [`Ribbon`]: a Catmull-Rom smoothed curve whose width and opacity are eased
//! by `progress²`, so the oldest end is thin and transparent and the newest end
//! is full width. After the gesture ends the ribbon fades out linearly and the
//! points are discarded once fully transparent.
//!
//! The tracker does no hit testing. Collision is resolved against the raw
//! pointer segment by `slash_hit`, independently of the filtered trail.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use slash_trail::{TrailConfig, TrailTracker};
//!
//! let mut trail = TrailTracker::new(TrailConfig::default());
//!
//! trail.start_session(Point::new(0.0, 0.0), 0);
//! assert!(trail.add_point(Point::new(20.0, 0.0), 16));
//! assert!(trail.add_point(Point::new(40.0, 10.0), 32));
//! assert_eq!(trail.len(), 3);
//!
//! // A render tick produces the tapered ribbon.
//! let ribbon = trail.advance(40).unwrap();
//! assert!(!ribbon.samples().is_empty());
//!
//! // After release the ribbon fades out and the points are dropped.
//! trail.end_session(48);
//! let gone = 48 + TrailConfig::default().fade_delay + TrailConfig::default().fade_duration;
//! assert!(trail.advance(gone).is_none());
//! assert!(trail.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod point;
mod ribbon;
mod smooth;
mod tracker;

pub use config::TrailConfig;
pub use point::TrailPoint;
pub use ribbon::{Ribbon, RibbonSample};
pub use smooth::{CurveSample, catmull_rom_segment, smooth_trail};
pub use tracker::TrailTracker;
