// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use slash_trail::{TrailConfig, TrailTracker, smooth_trail};

/// A wavy swipe of `n` points.
fn swipe(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new(t * 12.0, 300.0 + (t * 0.4).sin() * 80.0)
        })
        .collect()
}

fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("trail/smooth_trail");
    for n in [8_usize, 24, 96] {
        let points = swipe(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| black_box(smooth_trail(points, 8)));
        });
    }
    group.finish();
}

fn bench_gesture_frames(c: &mut Criterion) {
    // One frame of a live gesture: record a point, then rebuild the ribbon.
    let points = swipe(256);
    c.bench_function("trail/frame", |b| {
        b.iter(|| {
            let mut trail = TrailTracker::new(TrailConfig {
                max_session_duration: u64::MAX,
                ..TrailConfig::default()
            });
            trail.start_session(points[0], 0);
            for (i, &p) in points.iter().enumerate().skip(1) {
                let now = i as u64 * 16;
                trail.add_point(p, now);
                black_box(trail.advance(now).map(|r| r.outline()));
            }
        });
    });
}

criterion_group!(benches, bench_smooth, bench_gesture_frames);
criterion_main!(benches);
