// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use slash_hit::{AlphaMask, CollisionResolver, HitParams, HitTarget, LiveTargets, MarkLog};

struct Sprite {
    origin: Point,
    mask: AlphaMask,
}

impl HitTarget for Sprite {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            (f64::from(self.mask.width()), f64::from(self.mask.height())),
        )
    }

    fn alpha_at(&self, local: Point) -> Option<u8> {
        self.mask.alpha_at(local)
    }
}

/// A disc-shaped sprite, so span searches stop at a curved silhouette.
fn disc(origin: Point, side: u32) -> Sprite {
    let r = f64::from(side) / 2.0;
    Sprite {
        origin,
        mask: AlphaMask::from_fn(side, side, |x, y| {
            let dx = f64::from(x) + 0.5 - r;
            let dy = f64::from(y) + 0.5 - r;
            if dx * dx + dy * dy <= r * r { 255 } else { 0 }
        }),
    }
}

/// `n` sprites on a grid spanning a 2000x2000 scene.
fn scene(n: usize) -> LiveTargets<Sprite> {
    let cols = (n as f64).sqrt().ceil().max(1.0) as usize;
    let pitch = 2000.0 / cols as f64;
    let mut targets = LiveTargets::new();
    for i in 0..n {
        let x = (i % cols) as f64 * pitch;
        let y = (i / cols) as f64 * pitch;
        targets.insert(disc(Point::new(x, y), 96));
    }
    targets
}

fn bench_resolve_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision/resolve_move");
    let resolver = CollisionResolver::new(HitParams::default());

    // A short move near the scene origin: broad phase should keep the cost
    // flat as the scene grows.
    for n in [16_usize, 256, 4_096] {
        let mut targets = scene(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("short_move", n), |b| {
            b.iter(|| {
                let mut marks = MarkLog::new();
                let report = resolver.resolve_move(
                    Some(Point::new(10.0, 48.0)),
                    Point::new(90.0, 48.0),
                    0,
                    &mut targets,
                    &mut (),
                    &mut marks,
                );
                black_box((report, marks));
            });
        });
    }

    // A long diagonal swipe across the whole scene.
    for n in [16_usize, 256] {
        let mut targets = scene(n);
        group.bench_function(BenchmarkId::new("diagonal_swipe", n), |b| {
            b.iter(|| {
                let mut marks = MarkLog::new();
                let report = resolver.resolve_move(
                    Some(Point::new(0.0, 0.0)),
                    Point::new(2000.0, 2000.0),
                    0,
                    &mut targets,
                    &mut (),
                    &mut marks,
                );
                black_box((report, marks));
            });
        });
    }

    group.finish();
}

fn bench_find_span(c: &mut Criterion) {
    let sprite = disc(Point::ZERO, 240);
    let bounds = sprite.bounds();
    c.bench_function("collision/find_span", |b| {
        b.iter(|| {
            slash_hit::find_span(
                black_box(Point::new(120.0, 120.0)),
                kurbo::Vec2::new(1.0, 0.3),
                1.0,
                120.0,
                |p| bounds.contains(p) && sprite.is_pixel_opaque(p, 50),
            )
        });
    });
}

criterion_group!(benches, bench_resolve_move, bench_find_span);
criterion_main!(benches);
