// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slash: the pointer-driven slash pipeline of a swipe-to-cut game.
//!
//! The player drags a pointer across on-screen characters. Swipes that cross
//! a character's non-transparent pixels hit it, and when the pointer lifts
//! every character the swipe touched takes damage that grows with the swipe
//! length. [`SlashController`] runs that pipeline from pointer events:
//!
//! - [`slash_trail`] captures the gesture into a time-bounded, smoothed,
//!   fading blade ribbon.
//! - [`slash_hit`] resolves each raw pointer segment against the live targets
//!   with pixel-accurate collision and records where the blade cut them.
//! - [`slash_outcome`] turns the finished gesture into damage and deaths.
//!
//! The scene owns the [`LiveTargets`] and passes them to every call; audio
//! and visual requests go to an injected [`OutcomeEffects`] sink and kill
//! notifications to an injected [`SpawnDirector`]. Everything runs on the
//! caller's thread inside its input handlers, and the render tick
//! ([`SlashController::advance`]) only touches the trail's fade state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use slash::{Damageable, HitTarget, LiveTargets, SlashConfig, SlashController, VisualHandle};
//!
//! struct Bat {
//!     hp: f64,
//! }
//!
//! impl HitTarget for Bat {
//!     fn bounds(&self) -> Rect {
//!         Rect::new(100.0, 100.0, 140.0, 140.0)
//!     }
//!     fn alpha_at(&self, _local: Point) -> Option<u8> {
//!         Some(255)
//!     }
//! }
//!
//! impl Damageable for Bat {
//!     fn take_damage(&mut self, amount: f64) {
//!         self.hp -= amount;
//!     }
//!     fn is_dead(&self) -> bool {
//!         self.hp <= 0.0
//!     }
//!     fn explode(&mut self) -> Vec<VisualHandle> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut targets = LiveTargets::new();
//! let bat = targets.insert(Bat { hp: 50.0 });
//! let mut kills = 0;
//! let mut slash = SlashController::new(SlashConfig::default(), (), || kills += 1);
//!
//! assert!(slash.begin_slash(Point::new(80.0, 120.0), 0));
//! assert!(slash.continue_slash(&mut targets, Point::new(160.0, 120.0), 16));
//! assert_eq!(slash.accumulated_length(), 80.0);
//!
//! let outcome = slash.end_slash(&mut targets, 32).unwrap();
//! assert_eq!(outcome.kills[0].id, bat);
//! assert!(targets.is_empty());
//! assert!(slash.advance(32).is_some(), "the blade is still fading out");
//! drop(slash);
//! assert_eq!(kills, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod session;

pub use config::{ConfigError, SlashConfig};
pub use controller::SlashController;
pub use session::SlashSession;

pub use slash_hit::{
    AlphaMask, HitParams, HitTarget, LiveTargets, MarkLog, MoveReport, SlashEffects, SlashMark,
    SlashSpan, SoundCue, TargetId,
};
pub use slash_outcome::{
    DamageParams, Damageable, Kill, OutcomeEffects, SlashOutcome, SpawnDirector, VisualHandle,
};
pub use slash_trail::{Ribbon, RibbonSample, TrailConfig, TrailPoint, TrailTracker};

pub use slash_hit;
pub use slash_outcome;
pub use slash_trail;
