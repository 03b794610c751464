// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live-target collection with generational handles and a linear broad phase.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::target::HitTarget;

/// Handle of a target in a [`LiveTargets`] collection.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any `TargetId` that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `TargetId`.
///
/// Stale ids never alias a different live target because the generation must
/// match. Lookups through a stale id return `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetId {
    slot: usize,
    generation: u32,
}

impl TargetId {
    /// Slot index inside the owning collection.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.slot
    }

    /// Generation of the slot when this id was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// The live targets of a scene.
///
/// Targets are appended by the spawner and removed when they die. Iteration
/// order is slot order, which is stable while no target is removed.
pub struct LiveTargets<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for LiveTargets<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for LiveTargets<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LiveTargets")
            .field("total_slots", &self.slots.len())
            .field("alive", &self.len)
            .finish_non_exhaustive()
    }
}

impl<T> LiveTargets<T> {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Adds a target and returns its handle.
    pub fn insert(&mut self, target: T) -> TargetId {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot];
            entry.generation = entry.generation.wrapping_add(1);
            entry.value = Some(target);
            return TargetId {
                slot,
                generation: entry.generation,
            };
        }
        self.slots.push(Slot {
            generation: 1,
            value: Some(target),
        });
        TargetId {
            slot: self.slots.len() - 1,
            generation: 1,
        }
    }

    /// Removes and returns the target behind `id`, or `None` if `id` is stale.
    pub fn remove(&mut self, id: TargetId) -> Option<T> {
        let entry = self.slots.get_mut(id.slot)?;
        if entry.generation != id.generation {
            return None;
        }
        let value = entry.value.take()?;
        self.free.push(id.slot);
        self.len -= 1;
        Some(value)
    }

    /// Returns `true` if `id` refers to a live target.
    #[must_use]
    pub fn contains(&self, id: TargetId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the target behind `id`, if it is still alive.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&T> {
        self.slots
            .get(id.slot)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.value.as_ref())
    }

    /// Returns the target behind `id` mutably, if it is still alive.
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut T> {
        self.slots
            .get_mut(id.slot)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.value.as_mut())
    }

    /// Number of live targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no target is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates live targets in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(slot, entry)| {
            let value = entry.value.as_ref()?;
            Some((
                TargetId {
                    slot,
                    generation: entry.generation,
                },
                value,
            ))
        })
    }

    /// Iterates live targets mutably in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TargetId, &mut T)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(slot, entry)| {
            let generation = entry.generation;
            let value = entry.value.as_mut()?;
            Some((TargetId { slot, generation }, value))
        })
    }

    /// Removes every target. Outstanding ids become stale.
    pub fn clear(&mut self) {
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.value.take().is_some() {
                self.free.push(slot);
            }
        }
        self.len = 0;
    }
}

impl<T: HitTarget> LiveTargets<T> {
    /// Calls `f` with every live target whose bounds touch `rect`.
    ///
    /// Edges count as touching, so degenerate query rectangles (a single
    /// point or a horizontal segment) still find the targets they lie on.
    pub fn visit_rect<F: FnMut(TargetId)>(&self, rect: Rect, mut f: F) {
        for (id, target) in self.iter() {
            if overlaps(target.bounds(), rect) {
                f(id);
            }
        }
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
