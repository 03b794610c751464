// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-move collision resolution.

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::effects::{SlashEffects, SoundCue};
use crate::live::{LiveTargets, TargetId};
use crate::mark::{MarkLog, SlashMark};
use crate::params::HitParams;
use crate::sample::{SlashSpan, find_span, segment_samples};
use crate::target::HitTarget;

/// Result of resolving one pointer move.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveReport {
    /// Length of the pointer segment that was resolved.
    pub distance: f64,
    /// Targets hit during this move, each listed once, in order of first hit.
    pub hits: SmallVec<[TargetId; 4]>,
    /// Number of [`SlashMark`]s recorded during this move.
    pub marks: usize,
}

impl MoveReport {
    /// Returns `true` if any target was hit.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !self.hits.is_empty()
    }

    fn record_hit(&mut self, id: TargetId) {
        if !self.hits.contains(&id) {
            self.hits.push(id);
        }
    }
}

/// Per-candidate state for one move.
struct Contact {
    id: TargetId,
    /// Shake and hit sound already fired for this move.
    struck: bool,
    /// Distance along the swipe of the last recovered span end.
    covered_until: f64,
}

/// Resolves pointer segments against live targets.
#[derive(Clone, Debug, Default)]
pub struct CollisionResolver {
    params: HitParams,
}

impl CollisionResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new(params: HitParams) -> Self {
        Self { params }
    }

    /// The parameters in use.
    #[must_use]
    pub fn params(&self) -> &HitParams {
        &self.params
    }

    /// Broad phase: targets whose bounds come within the margin of the segment.
    pub fn candidates<T: HitTarget>(
        &self,
        previous: Option<Point>,
        current: Point,
        targets: &LiveTargets<T>,
    ) -> SmallVec<[TargetId; 8]> {
        let margin = self.params.broad_phase_margin.max(0.0);
        let query =
            Rect::from_points(previous.unwrap_or(current), current).inflate(margin, margin);
        let mut out = SmallVec::new();
        targets.visit_rect(query, |id| out.push(id));
        out
    }

    /// Resolves the pointer move `previous → current` against `targets`.
    ///
    /// For every opaque sample on a candidate, the first one in this call
    /// shakes the target along the move and requests [`SoundCue::Hit`]; every
    /// opaque sample not already inside a span recovered during this call runs
    /// a span search, and each recovered span is recorded in `marks`, sent to
    /// `effects` as sparks and a persistent mark, and drawn on the target.
    ///
    /// Without a `previous` point, or when the pointer did not move, only
    /// `current` is tested and an opaque pixel counts as a hit without a mark.
    pub fn resolve_move<T, E>(
        &self,
        previous: Option<Point>,
        current: Point,
        now: u64,
        targets: &mut LiveTargets<T>,
        effects: &mut E,
        marks: &mut MarkLog,
    ) -> MoveReport
    where
        T: HitTarget,
        E: SlashEffects + ?Sized,
    {
        let delta = previous.map_or(Vec2::ZERO, |p| current - p);
        let mut report = MoveReport {
            distance: delta.hypot(),
            ..MoveReport::default()
        };

        let candidates = self.candidates(previous, current, targets);
        if candidates.is_empty() {
            return report;
        }

        match previous {
            Some(from) if report.distance > 0.0 => {
                self.sweep(
                    from,
                    current,
                    now,
                    &candidates,
                    targets,
                    effects,
                    marks,
                    &mut report,
                );
            }
            _ => self.hit_test_point(current, &candidates, targets, effects, &mut report),
        }
        if report.is_hit() {
            log::trace!(
                "move of {:.1}px hit {} target(s), {} mark(s)",
                report.distance,
                report.hits.len(),
                report.marks
            );
        }
        report
    }

    /// Single-point opacity test of `at` against each candidate.
    fn hit_test_point<T, E>(
        &self,
        at: Point,
        candidates: &[TargetId],
        targets: &LiveTargets<T>,
        effects: &mut E,
        report: &mut MoveReport,
    ) where
        T: HitTarget,
        E: SlashEffects + ?Sized,
    {
        for &id in candidates {
            let Some(target) = targets.get(id) else {
                continue;
            };
            let bounds = target.bounds();
            if bounds.contains(at)
                && target.is_pixel_opaque(to_local(at, bounds), self.params.alpha_threshold)
            {
                effects.play_sound(SoundCue::Hit);
                report.record_hit(id);
            }
        }
    }

    /// Interpolated narrow phase with span search along `from → to`.
    fn sweep<T, E>(
        &self,
        from: Point,
        to: Point,
        now: u64,
        candidates: &[TargetId],
        targets: &mut LiveTargets<T>,
        effects: &mut E,
        marks: &mut MarkLog,
        report: &mut MoveReport,
    ) where
        T: HitTarget,
        E: SlashEffects + ?Sized,
    {
        let delta = to - from;
        let direction = delta / report.distance;
        let threshold = self.params.alpha_threshold;
        let mut contacts: SmallVec<[Contact; 8]> = candidates
            .iter()
            .map(|&id| Contact {
                id,
                struck: false,
                covered_until: f64::NEG_INFINITY,
            })
            .collect();

        for sample in segment_samples(from, to, self.params.sample_step) {
            let along = (sample - from).dot(direction);
            for contact in &mut contacts {
                let Some(target) = targets.get_mut(contact.id) else {
                    continue;
                };
                let bounds = target.bounds();
                if !bounds.contains(sample)
                    || !target.is_pixel_opaque(to_local(sample, bounds), threshold)
                {
                    continue;
                }

                if !contact.struck {
                    contact.struck = true;
                    target.shake(delta);
                    effects.play_sound(SoundCue::Hit);
                }
                // A span end is only known to within one search step.
                if along < contact.covered_until + self.params.search_step {
                    continue;
                }

                let span = find_span(
                    sample,
                    direction,
                    self.params.search_step,
                    self.params.max_search_length,
                    |p| bounds.contains(p) && target.is_pixel_opaque(to_local(p, bounds), threshold),
                );
                let Some(span) = span else {
                    continue;
                };
                contact.covered_until = (span.end - from).dot(direction);
                target.draw_slash_damage(sample, direction, span);
                emit(effects, span);
                marks.push(SlashMark {
                    target: contact.id,
                    start: span.start,
                    end: span.end,
                    timestamp: now,
                });
                report.marks += 1;
                report.record_hit(contact.id);
            }
        }
    }
}

fn emit<E: SlashEffects + ?Sized>(effects: &mut E, span: SlashSpan) {
    effects.add_persistent_mark(span);
    effects.emit_sparks_along(span);
}

fn to_local(world: Point, bounds: Rect) -> Point {
    Point::new(world.x - bounds.x0, world.y - bounds.y0)
}
