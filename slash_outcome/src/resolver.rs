// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying a finished slash to the targets it touched.

use alloc::vec::Vec;

use hashbrown::HashSet;
use slash_hit::{LiveTargets, MarkLog, SoundCue, TargetId};

use crate::damage::DamageParams;
use crate::effects::{OutcomeEffects, SpawnDirector};
use crate::target::{Damageable, VisualHandle};

/// A target that died and was removed from the live collection.
#[derive(Debug)]
pub struct Kill<T> {
    /// Id the target had while it was alive. Stale from now on.
    pub id: TargetId,
    /// The removed target, handed back so the host can finish its death sequence.
    pub target: T,
    /// Visuals returned by [`Damageable::explode`].
    pub handles: Vec<VisualHandle>,
}

/// Result of resolving one slash.
#[derive(Debug)]
pub struct SlashOutcome<T> {
    /// Damage applied to every touched target.
    pub damage: f64,
    /// Number of live targets that took damage.
    pub damaged: usize,
    /// Targets that died, in the order they were touched.
    pub kills: Vec<Kill<T>>,
}

impl<T> SlashOutcome<T> {
    /// Returns `true` if at least one target died.
    #[must_use]
    pub fn is_kill(&self) -> bool {
        !self.kills.is_empty()
    }
}

/// Turns a finished slash into damage and deaths.
#[derive(Clone, Debug, Default)]
pub struct DamageResolver {
    params: DamageParams,
}

impl DamageResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new(params: DamageParams) -> Self {
        Self { params }
    }

    /// The parameters in use.
    #[must_use]
    pub fn params(&self) -> &DamageParams {
        &self.params
    }

    /// Applies a slash of accumulated `length` to every distinct id in `touched`.
    ///
    /// Damage is computed once and applied identically to every touched
    /// target that is still alive; ids repeated in `touched` are applied once
    /// and stale ids are skipped. Each damaged target gets a floating number
    /// at its center before [`Damageable::take_damage`].
    ///
    /// A target that is dead afterwards has its marks cleared and its
    /// animations cancelled, explodes, requests [`SoundCue::Kill`] and a
    /// delayed currency collection, is reported to `spawner` exactly once, and
    /// is removed from `targets` and returned in [`SlashOutcome::kills`].
    pub fn resolve<T, I, E, S>(
        &self,
        touched: I,
        length: f64,
        targets: &mut LiveTargets<T>,
        marks: &mut MarkLog,
        effects: &mut E,
        spawner: &mut S,
    ) -> SlashOutcome<T>
    where
        T: Damageable,
        I: IntoIterator<Item = TargetId>,
        E: OutcomeEffects + ?Sized,
        S: SpawnDirector + ?Sized,
    {
        let damage = self.params.damage_for(length);
        let mut outcome = SlashOutcome {
            damage,
            damaged: 0,
            kills: Vec::new(),
        };
        let mut seen = HashSet::new();

        for id in touched {
            if !seen.insert(id) {
                continue;
            }
            let Some(target) = targets.get_mut(id) else {
                log::trace!("touched target {id:?} is gone, skipping");
                continue;
            };
            effects.show_floating_number(damage, target.center());
            target.take_damage(damage);
            outcome.damaged += 1;
            if !target.is_dead() {
                continue;
            }

            let at = target.center();
            marks.clear_target(id);
            target.cancel_animations();
            let handles = target.explode();
            effects.play_sound(SoundCue::Kill);
            effects.collect_currency(self.params.currency_reward, at, self.params.currency_delay);
            spawner.on_enemy_killed();
            if let Some(target) = targets.remove(id) {
                log::debug!("target {id:?} killed by {damage:.1} damage");
                outcome.kills.push(Kill {
                    id,
                    target,
                    handles,
                });
            }
        }
        outcome
    }
}
