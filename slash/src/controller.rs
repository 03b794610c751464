// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer-driven slash pipeline.

use core::fmt;

use kurbo::Point;
use slash_hit::{CollisionResolver, LiveTargets, MarkLog};
use slash_outcome::{DamageResolver, Damageable, OutcomeEffects, SlashOutcome, SpawnDirector};
use slash_trail::{Ribbon, TrailTracker};

use crate::config::SlashConfig;
use crate::session::SlashSession;

/// Runs slash gestures from pointer events to damage.
///
/// ## Lifecycle
///
/// - [`begin_slash`](Self::begin_slash) on pointer-down takes the gesture
///   lock and starts the trail.
/// - [`continue_slash`](Self::continue_slash) on every pointer-move feeds the
///   trail and resolves collisions on the raw segment since the last move.
/// - [`end_slash`](Self::end_slash) on pointer-up applies damage once to every
///   target the gesture touched and releases the lock.
/// - [`advance`](Self::advance) on every frame returns the trail ribbon to draw.
///
/// A gesture that outlives the trail's maximum duration is resolved by the
/// move that notices it, but the lock is kept until pointer-up so the same
/// press cannot start another gesture.
///
/// `T` is the target type, `E` the effect sink and `S` the spawn director.
pub struct SlashController<T, E, S> {
    config: SlashConfig,
    trail: TrailTracker,
    collision: CollisionResolver,
    damage: DamageResolver,
    marks: MarkLog,
    session: Option<SlashSession>,
    locked: bool,
    /// Outcome of a gesture that timed out, returned at pointer-up.
    pending: Option<SlashOutcome<T>>,
    effects: E,
    spawner: S,
}

impl<T, E, S> fmt::Debug for SlashController<T, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlashController")
            .field("config", &self.config)
            .field("trail", &self.trail)
            .field("marks", &self.marks.len())
            .field("session", &self.session)
            .field("locked", &self.locked)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl<T, E, S> SlashController<T, E, S>
where
    T: Damageable,
    E: OutcomeEffects,
    S: SpawnDirector,
{
    /// Creates a controller with injected collaborators.
    pub fn new(config: SlashConfig, effects: E, spawner: S) -> Self {
        Self {
            config,
            trail: TrailTracker::new(config.trail),
            collision: CollisionResolver::new(config.hit),
            damage: DamageResolver::new(config.damage),
            marks: MarkLog::new(),
            session: None,
            locked: false,
            pending: None,
            effects,
            spawner,
        }
    }

    /// Pointer-down. Returns `false` and does nothing while a gesture holds the lock.
    pub fn begin_slash(&mut self, pos: Point, now: u64) -> bool {
        if self.locked {
            log::trace!("slash refused at {now}ms: gesture lock held");
            return false;
        }
        self.locked = true;
        self.trail.start_session(pos, now);
        self.session = Some(SlashSession::new(pos, now));
        true
    }

    /// Pointer-move. Returns `false` when the caller should stop feeding this gesture.
    ///
    /// Returns `false` without doing anything when no gesture is active. When
    /// the trail refuses `pos` because the gesture lasted too long, whatever
    /// was touched so far is resolved immediately and `false` is returned;
    /// the outcome is handed back by the next [`end_slash`](Self::end_slash).
    pub fn continue_slash(&mut self, targets: &mut LiveTargets<T>, pos: Point, now: u64) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !self.trail.add_point(pos, now) {
            log::debug!("slash timed out after {}ms", session.elapsed(now));
            self.pending = self.resolve(targets);
            return false;
        }

        let previous = session.last_pos;
        session.update(pos);
        let report = self.collision.resolve_move(
            Some(previous),
            pos,
            now,
            targets,
            &mut self.effects,
            &mut self.marks,
        );
        for id in report.hits {
            session.touch(id);
        }
        true
    }

    /// Pointer-up. Ends the gesture, applies its damage and releases the lock.
    ///
    /// Returns the outcome of the gesture, including one that already timed
    /// out, or `None` when there was no gesture to end. Marks of targets that
    /// left `targets` since they were cut are dropped here too.
    pub fn end_slash(&mut self, targets: &mut LiveTargets<T>, now: u64) -> Option<SlashOutcome<T>> {
        self.trail.end_session(now);
        let outcome = match self.resolve(targets) {
            Some(outcome) => Some(outcome),
            None => self.pending.take(),
        };
        self.prune_marks(targets);
        self.locked = false;
        outcome
    }

    /// Pointer-leave or cancel. Resolves like [`end_slash`](Self::end_slash);
    /// cancelling still applies damage for what was touched.
    pub fn cancel_slash(
        &mut self,
        targets: &mut LiveTargets<T>,
        now: u64,
    ) -> Option<SlashOutcome<T>> {
        log::debug!("slash cancelled at {now}ms");
        self.end_slash(targets, now)
    }

    /// Consumes the active session and applies its damage.
    fn resolve(&mut self, targets: &mut LiveTargets<T>) -> Option<SlashOutcome<T>> {
        let session = self.session.take()?;
        let outcome = self.damage.resolve(
            session.touched().iter().copied(),
            session.accumulated_length(),
            targets,
            &mut self.marks,
            &mut self.effects,
            &mut self.spawner,
        );
        log::debug!(
            "slash of {:.1}px dealt {:.1} to {} target(s), {} killed",
            session.accumulated_length(),
            outcome.damage,
            outcome.damaged,
            outcome.kills.len()
        );
        Some(outcome)
    }
}

impl<T, E, S> SlashController<T, E, S> {
    /// Returns `true` while a gesture is collecting pointer moves.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` when [`begin_slash`](Self::begin_slash) would start a gesture.
    #[must_use]
    pub fn can_start_new_slash(&self) -> bool {
        !self.locked
    }

    /// Swipe length of the active gesture, or `0.0` without one.
    #[must_use]
    pub fn accumulated_length(&self) -> f64 {
        self.session
            .as_ref()
            .map_or(0.0, SlashSession::accumulated_length)
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn session(&self) -> Option<&SlashSession> {
        self.session.as_ref()
    }

    /// Render tick: the trail ribbon to draw at `now`, if any.
    ///
    /// Only the trail's fade and curve state change here.
    pub fn advance(&mut self, now: u64) -> Option<Ribbon> {
        self.trail.advance(now)
    }

    /// The trail tracker.
    #[must_use]
    pub fn trail(&self) -> &TrailTracker {
        &self.trail
    }

    /// Marks recorded so far, across gestures.
    #[must_use]
    pub fn marks(&self) -> &MarkLog {
        &self.marks
    }

    /// Mutable access to the mark log, for hosts that expire marks themselves.
    pub fn marks_mut(&mut self) -> &mut MarkLog {
        &mut self.marks
    }

    /// Drops marks of targets no longer in `targets`, returning how many were removed.
    pub fn prune_marks(&mut self, targets: &LiveTargets<T>) -> usize {
        let removed = self.marks.retain_live(targets);
        if removed > 0 {
            log::trace!("dropped {removed} mark(s) of departed targets");
        }
        removed
    }

    /// The effect sink.
    #[must_use]
    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Mutable access to the effect sink.
    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// The spawn director.
    #[must_use]
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// The configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &SlashConfig {
        &self.config
    }
}
