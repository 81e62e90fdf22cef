// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_range` snapping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_range::{Bounds, SnapPolicy, Tick};

fn bench_snap(c: &mut Criterion) {
    let bounds = Bounds::new(0.0, 1000.0);
    let values: Vec<f64> = (0..1024).map(|i| f64::from(i) * 0.977).collect();

    let mut group = c.benchmark_group("snap");

    group.bench_function("fixed_step", |b| {
        let policy = SnapPolicy::fixed_step(7.5);
        b.iter(|| {
            let mut acc = 0.0;
            for &v in &values {
                acc += policy.snap(black_box(v), &bounds);
            }
            black_box(acc)
        });
    });

    // The tick scan is linear in the number of ticks.
    for count in [4_u32, 32, 256] {
        let ticks = (0..count).map(|i| Tick::new(f64::from(i) * 1000.0 / f64::from(count), true));
        let policy = SnapPolicy::tick_set(ticks);
        group.bench_with_input(BenchmarkId::new("ticks", count), &policy, |b, policy| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in &values {
                    acc += policy.snap(black_box(v), &bounds);
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snap);
criterion_main!(benches);
