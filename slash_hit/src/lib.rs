// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slash Hit: pixel-accurate collision between a pointer segment and live targets.
//!
//! A fast swipe moves the pointer tens of pixels between events, so testing
//! only the event positions would step straight over thin silhouettes. This
//! crate resolves the whole segment between two pointer events instead:
//!
//! - **Broad phase**: the segment's bounding box, inflated by
//!   [`HitParams::broad_phase_margin`], selects candidate targets through
//!   [`LiveTargets::visit_rect`]. Targets far from the segment never see a
//!   per-pixel query.
//! - **Narrow phase**: [`segment_samples`] walks the segment at
//!   [`HitParams::sample_step`] and each sample inside a candidate's bounds
//!   is tested against the target's alpha ([`HitTarget::is_pixel_opaque`]).
//! - **Span search**: from an opaque sample, [`find_span`] walks backward and
//!   forward along the swipe direction to recover where the blade actually
//!   entered and left the opaque region.
//!
//! Recovered spans become [`SlashMark`]s in a [`MarkLog`] and fire-and-forget
//! requests on a [`SlashEffects`] sink. The crate has no global state; the
//! caller passes the targets, the effect sink and the mark log on every call.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use slash_hit::{AlphaMask, CollisionResolver, HitParams, HitTarget, LiveTargets, MarkLog};
//!
//! struct Crate {
//!     origin: Point,
//!     mask: AlphaMask,
//! }
//!
//! impl HitTarget for Crate {
//!     fn bounds(&self) -> Rect {
//!         Rect::from_origin_size(self.origin, (self.mask.width() as f64, self.mask.height() as f64))
//!     }
//!     fn alpha_at(&self, local: Point) -> Option<u8> {
//!         self.mask.alpha_at(local)
//!     }
//! }
//!
//! let mut targets = LiveTargets::new();
//! let id = targets.insert(Crate {
//!     origin: Point::new(50.0, 50.0),
//!     mask: AlphaMask::filled(40, 40, 255),
//! });
//!
//! let resolver = CollisionResolver::new(HitParams::default());
//! let mut marks = MarkLog::new();
//! let report = resolver.resolve_move(
//!     Some(Point::new(0.0, 70.0)),
//!     Point::new(120.0, 70.0),
//!     0,
//!     &mut targets,
//!     &mut (),
//!     &mut marks,
//! );
//!
//! assert_eq!(report.hits.as_slice(), &[id]);
//! assert_eq!(marks.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod effects;
mod live;
mod mark;
mod mask;
mod params;
mod resolver;
mod sample;
mod target;

pub use effects::{SlashEffects, SoundCue};
pub use live::{LiveTargets, TargetId};
pub use mark::{MarkLog, SlashMark};
pub use mask::{AlphaMask, MaskError};
pub use params::HitParams;
pub use resolver::{CollisionResolver, MoveReport};
pub use sample::{SegmentSamples, SlashSpan, find_span, segment_samples};
pub use target::HitTarget;
