// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slash Outcome: damage and deaths for a finished slash.
//!
//! When the pointer lifts, every target the swipe touched takes the same
//! damage. Longer swipes hit harder: [`DamageParams::damage_for`] grows
//! linearly with the accumulated swipe length from the base damage up to the
//! full bonus and never beyond it.
//!
//! [`DamageResolver::resolve`] applies that damage through the
//! [`Damageable`] capability and processes deaths. Side effects go to an
//! [`OutcomeEffects`] sink and kill notifications to a [`SpawnDirector`];
//! both are passed in by the caller. Any `FnMut()` closure is a
//! [`SpawnDirector`], and `()` discards every effect request.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use slash_hit::{HitTarget, LiveTargets, MarkLog};
//! use slash_outcome::{Damageable, DamageResolver, VisualHandle};
//!
//! struct Slime {
//!     hp: f64,
//! }
//!
//! impl HitTarget for Slime {
//!     fn bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 32.0, 32.0)
//!     }
//!     fn alpha_at(&self, _local: Point) -> Option<u8> {
//!         Some(255)
//!     }
//! }
//!
//! impl Damageable for Slime {
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
//! let slime = targets.insert(Slime { hp: 50.0 });
//! let mut kills = 0;
//!
//! let outcome = DamageResolver::default().resolve(
//!     [slime],
//!     600.0,
//!     &mut targets,
//!     &mut MarkLog::new(),
//!     &mut (),
//!     &mut || kills += 1,
//! );
//!
//! assert_eq!(outcome.damage, 100.0);
//! assert_eq!(kills, 1);
//! assert!(targets.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod effects;
mod resolver;
mod target;

pub use damage::DamageParams;
pub use effects::{OutcomeEffects, SpawnDirector};
pub use resolver::{DamageResolver, Kill, SlashOutcome};
pub use target::{Damageable, VisualHandle};
