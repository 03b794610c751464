// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gestures through [`SlashController`].
//!
//! Each test plays pointer events against a small scene and checks what the
//! targets, the effect sink and the spawn director saw.

use kurbo::{Point, Rect, Vec2};
use slash::{
    AlphaMask, Damageable, HitTarget, LiveTargets, OutcomeEffects, SlashConfig, SlashController,
    SlashEffects, SlashSpan, SoundCue, SpawnDirector, TargetId, VisualHandle,
};

struct Enemy {
    origin: Point,
    mask: AlphaMask,
    hp: f64,
    hits_taken: usize,
    shakes: usize,
    cuts: usize,
}

impl Enemy {
    fn new(origin: Point, mask: AlphaMask, hp: f64) -> Self {
        Self {
            origin,
            mask,
            hp,
            hits_taken: 0,
            shakes: 0,
            cuts: 0,
        }
    }

    /// A 100x100 enemy at (50, 50) whose opaque columns are local x in `cols`.
    fn banded(cols: core::ops::Range<u32>, hp: f64) -> Self {
        Self::new(
            Point::new(50.0, 50.0),
            AlphaMask::from_fn(100, 100, |x, _| if cols.contains(&x) { 255 } else { 0 }),
            hp,
        )
    }

    fn solid(origin: Point, side: u32, hp: f64) -> Self {
        Self::new(origin, AlphaMask::filled(side, side, 255), hp)
    }
}

impl HitTarget for Enemy {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            (f64::from(self.mask.width()), f64::from(self.mask.height())),
        )
    }

    fn alpha_at(&self, local: Point) -> Option<u8> {
        self.mask.alpha_at(local)
    }

    fn shake(&mut self, _delta: Vec2) {
        self.shakes += 1;
    }

    fn draw_slash_damage(&mut self, _point: Point, _direction: Vec2, _span: SlashSpan) {
        self.cuts += 1;
    }
}

impl Damageable for Enemy {
    fn take_damage(&mut self, amount: f64) {
        self.hp -= amount;
        self.hits_taken += 1;
    }

    fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    fn explode(&mut self) -> Vec<VisualHandle> {
        vec![VisualHandle(99)]
    }
}

#[derive(Default)]
struct Fx {
    sounds: Vec<SoundCue>,
    sparks: usize,
    numbers: Vec<f64>,
    coins: u32,
}

impl SlashEffects for Fx {
    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    fn emit_sparks_along(&mut self, _span: SlashSpan) {
        self.sparks += 1;
    }

    fn add_persistent_mark(&mut self, _span: SlashSpan) {}
}

impl OutcomeEffects for Fx {
    fn show_floating_number(&mut self, value: f64, _at: Point) {
        self.numbers.push(value);
    }

    fn collect_currency(&mut self, amount: u32, _from: Point, _delay_ms: u64) {
        self.coins += amount;
    }
}

#[derive(Default)]
struct Spawner {
    killed: usize,
}

impl SpawnDirector for Spawner {
    fn on_enemy_killed(&mut self) {
        self.killed += 1;
    }
}

fn controller() -> SlashController<Enemy, Fx, Spawner> {
    SlashController::new(SlashConfig::default(), Fx::default(), Spawner::default())
}

fn hits_of(targets: &LiveTargets<Enemy>, id: TargetId) -> usize {
    targets.get(id).map_or(0, |e| e.hits_taken)
}

#[test]
fn short_cut_over_an_opaque_pixel() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::banded(50..61, 1000.0));
    let mut slash = controller();

    assert!(slash.begin_slash(Point::new(100.0, 100.0), 0));
    assert!(slash.continue_slash(&mut targets, Point::new(110.0, 100.0), 16));

    let enemy = targets.get(id).unwrap();
    assert_eq!(enemy.shakes, 1);
    assert_eq!(enemy.cuts, 1);
    assert_eq!(slash.effects().sounds, [SoundCue::Hit]);
    assert_eq!(slash.effects().sparks, 1);
    assert_eq!(slash.marks().len(), 1);
    let mark = slash.marks().as_slice()[0];
    assert_eq!(mark.target, id);
    for x in [mark.start.x, mark.end.x] {
        assert!((100.0..=110.0).contains(&x), "mark edge at {x}");
    }

    let outcome = slash.end_slash(&mut targets, 32).unwrap();
    assert_eq!(outcome.damaged, 1);
    assert_eq!(hits_of(&targets, id), 1);
}

#[test]
fn transparent_target_takes_nothing_but_the_trail_still_fades() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::new(
        Point::new(50.0, 50.0),
        AlphaMask::filled(100, 100, 0),
        1000.0,
    ));
    let mut slash = controller();

    slash.begin_slash(Point::new(100.0, 100.0), 0);
    assert!(slash.continue_slash(&mut targets, Point::new(110.0, 100.0), 16));
    assert!(slash.advance(16).is_some());

    let outcome = slash.end_slash(&mut targets, 32).unwrap();
    assert_eq!(outcome.damaged, 0);
    assert!(slash.marks().is_empty());
    assert!(slash.effects().sounds.is_empty());
    assert_eq!(hits_of(&targets, id), 0);

    let fade = slash.config().trail.fade_total();
    assert!(slash.advance(32 + fade / 2).is_some());
    assert!(slash.advance(32 + fade).is_none());
    assert!(slash.trail().is_empty());
    assert!(slash.advance(32 + fade + 100).is_none());
}

#[test]
fn full_bonus_length_deals_maximum_damage() {
    let mut targets = LiveTargets::new();
    let mut slash = controller();
    let full = slash.config().damage.full_bonus_length;

    slash.begin_slash(Point::new(0.0, 500.0), 0);
    slash.continue_slash(&mut targets, Point::new(full / 2.0, 500.0), 16);
    slash.continue_slash(&mut targets, Point::new(full, 500.0), 32);
    assert_eq!(slash.accumulated_length(), full);

    let outcome = slash.end_slash(&mut targets, 48).unwrap();
    assert_eq!(outcome.damage, 100.0);
}

#[test]
fn lethal_slash_kills_once_and_removes_the_target() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::solid(Point::new(250.0, 50.0), 100, 50.0));
    let mut slash = controller();

    slash.begin_slash(Point::new(0.0, 100.0), 0);
    slash.continue_slash(&mut targets, Point::new(300.0, 100.0), 16);
    slash.continue_slash(&mut targets, Point::new(600.0, 100.0), 32);
    assert!(slash.marks().len() >= 2, "each move cuts the enemy");

    let outcome = slash.end_slash(&mut targets, 48).unwrap();
    assert_eq!(outcome.damage, 100.0);
    assert_eq!(outcome.kills.len(), 1);
    let kill = &outcome.kills[0];
    assert_eq!(kill.id, id);
    assert!(kill.target.is_dead());
    assert_eq!(kill.target.hits_taken, 1);
    assert_eq!(kill.handles, [VisualHandle(99)]);

    assert!(!targets.contains(id));
    assert_eq!(slash.spawner().killed, 1);
    assert!(slash.marks().is_empty(), "a dead target's marks are cleared");
    let fx = slash.effects();
    assert_eq!(fx.sounds.iter().filter(|&&s| s == SoundCue::Kill).count(), 1);
    assert_eq!(fx.coins, 10);
    assert_eq!(fx.numbers, [100.0]);
}

#[test]
fn overlong_gesture_is_force_ended() {
    let mut targets = LiveTargets::new();
    let mut slash = controller();
    let limit = slash.config().trail.max_session_duration;

    slash.begin_slash(Point::ZERO, 0);
    assert!(slash.continue_slash(&mut targets, Point::new(50.0, 0.0), limit - 1));
    assert!(!slash.continue_slash(&mut targets, Point::new(100.0, 0.0), limit));
    assert!(!slash.is_active());
    assert!(!slash.continue_slash(&mut targets, Point::new(150.0, 0.0), limit + 10));
    assert!(!slash.trail().is_active());

    assert!(!slash.can_start_new_slash(), "the press still holds the lock");
    assert!(!slash.begin_slash(Point::ZERO, limit + 20));

    assert!(slash.end_slash(&mut targets, limit + 30).is_some());
    assert!(slash.can_start_new_slash());
    assert!(slash.begin_slash(Point::ZERO, limit + 40));
}

#[test]
fn timeout_resolves_immediately_and_pointer_up_does_not_repeat_it() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::solid(Point::new(40.0, 0.0), 40, 1000.0));
    let mut slash = controller();
    let limit = slash.config().trail.max_session_duration;

    slash.begin_slash(Point::new(0.0, 20.0), 0);
    assert!(slash.continue_slash(&mut targets, Point::new(120.0, 20.0), 100));
    assert!(!slash.continue_slash(&mut targets, Point::new(200.0, 20.0), limit));

    // Damage landed at the timeout, not at pointer-up.
    assert_eq!(hits_of(&targets, id), 1);
    assert_eq!(slash.effects().numbers.len(), 1);

    let outcome = slash.end_slash(&mut targets, limit + 500).unwrap();
    assert_eq!(outcome.damaged, 1);
    assert_eq!(hits_of(&targets, id), 1);
    assert_eq!(slash.effects().numbers.len(), 1);
    assert!(slash.end_slash(&mut targets, limit + 600).is_none());
}

#[test]
fn second_press_is_refused_until_pointer_up() {
    let mut targets: LiveTargets<Enemy> = LiveTargets::new();
    let mut slash = controller();

    assert!(slash.can_start_new_slash());
    assert!(slash.begin_slash(Point::ZERO, 0));
    assert!(!slash.can_start_new_slash());
    assert!(!slash.begin_slash(Point::new(500.0, 500.0), 5));
    assert_eq!(slash.session().unwrap().start_pos, Point::ZERO);

    slash.end_slash(&mut targets, 10);
    assert!(!slash.is_active());
    assert!(slash.begin_slash(Point::new(500.0, 500.0), 20));
}

#[test]
fn many_hits_in_one_gesture_damage_once() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::solid(Point::new(100.0, 100.0), 50, 1000.0));
    let mut slash = controller();

    slash.begin_slash(Point::new(80.0, 110.0), 0);
    let zigzag = [(170.0, 110.0), (80.0, 125.0), (170.0, 140.0), (80.0, 140.0)];
    for (i, (x, y)) in zigzag.into_iter().enumerate() {
        assert!(slash.continue_slash(&mut targets, Point::new(x, y), 16 * (i as u64 + 1)));
    }
    assert_eq!(targets.get(id).unwrap().shakes, 4);
    assert_eq!(slash.session().unwrap().touched(), &[id]);

    let outcome = slash.end_slash(&mut targets, 100).unwrap();
    assert_eq!(outcome.damaged, 1);
    assert_eq!(hits_of(&targets, id), 1);
    assert_eq!(slash.effects().numbers.len(), 1);
}

#[test]
fn cancelling_still_applies_damage() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::solid(Point::new(0.0, 0.0), 40, 1000.0));
    let mut slash = controller();

    slash.begin_slash(Point::new(-10.0, 20.0), 0);
    slash.continue_slash(&mut targets, Point::new(60.0, 20.0), 16);
    let outcome = slash.cancel_slash(&mut targets, 20).unwrap();

    assert_eq!(outcome.damaged, 1);
    assert_eq!(hits_of(&targets, id), 1);
    assert!(slash.can_start_new_slash());
}

#[test]
fn density_config_scales_hit_detection() {
    let config = SlashConfig::for_density(2.0).unwrap();
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::solid(Point::new(200.0, 200.0), 60, 1000.0));
    let mut slash = SlashController::new(config, Fx::default(), Spawner::default());

    slash.begin_slash(Point::new(100.0, 230.0), 0);
    slash.continue_slash(&mut targets, Point::new(400.0, 230.0), 16);
    assert_eq!(slash.accumulated_length(), 300.0);

    let outcome = slash.end_slash(&mut targets, 32).unwrap();
    assert_eq!(outcome.damage, 50.0 + 300.0 / 1200.0 * 50.0);
    assert_eq!(hits_of(&targets, id), 1);
}

#[test]
fn one_pixel_column_takes_damage() {
    let mut targets = LiveTargets::new();
    let id = targets.insert(Enemy::banded(41..42, 1000.0));
    let mut slash = controller();

    slash.begin_slash(Point::new(59.0, 100.0), 0);
    assert!(slash.continue_slash(&mut targets, Point::new(123.0, 100.0), 16));
    assert_eq!(targets.get(id).unwrap().shakes, 1);
    assert_eq!(slash.effects().sounds, [SoundCue::Hit]);
    assert_eq!(slash.session().unwrap().touched(), &[id]);

    let outcome = slash.end_slash(&mut targets, 32).unwrap();
    assert_eq!(outcome.damaged, 1);
    assert_eq!(hits_of(&targets, id), 1);
    assert_eq!(slash.marks().len(), 1);
}

#[test]
fn marks_of_targets_removed_by_the_scene_are_pruned() {
    let mut targets = LiveTargets::new();
    let gone = targets.insert(Enemy::solid(Point::new(0.0, 0.0), 40, 1000.0));
    let kept = targets.insert(Enemy::solid(Point::new(200.0, 0.0), 40, 1000.0));
    let mut slash = controller();

    slash.begin_slash(Point::new(-10.0, 20.0), 0);
    slash.continue_slash(&mut targets, Point::new(60.0, 20.0), 16);
    slash.end_slash(&mut targets, 20);
    slash.begin_slash(Point::new(190.0, 20.0), 40);
    slash.continue_slash(&mut targets, Point::new(260.0, 20.0), 56);
    slash.end_slash(&mut targets, 60);
    assert_eq!(slash.marks().for_target(gone).count(), 1);

    // Despawned offscreen, not killed.
    targets.remove(gone);
    assert_eq!(slash.prune_marks(&targets), 1);
    assert!(slash.marks().iter().all(|m| m.target == kept));

    targets.remove(kept);
    slash.begin_slash(Point::new(500.0, 500.0), 80);
    slash.end_slash(&mut targets, 90);
    assert!(slash.marks().is_empty(), "pointer-up drops marks of departed targets");
}
