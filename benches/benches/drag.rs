// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for drag resolution, from the value model up to a full
//! pointer gesture on `RangeSlider`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_range::{Handle, RangeConfig, TrackGeometry, ValueRange};
use understory_range_slider::RangeSlider;

fn bench_drag(c: &mut Criterion) {
    let config = RangeConfig::new().bounds(0.0, 100.0).step(1.0);
    let model = config.build();
    let geometry = TrackGeometry::new(640.0, Size::new(48.0, 32.0));
    let start = ValueRange::new(20.0, 30.0);

    let mut group = c.benchmark_group("drag");

    group.bench_function("drag_by_pixels_tandem", |b| {
        b.iter(|| {
            let mut range = start;
            // Sweep the lower knob right, pushing the upper one along.
            for _ in 0..256 {
                range = model.drag_by_pixels(Handle::Lower, black_box(2.5), range, &geometry);
            }
            black_box(range)
        });
    });

    group.bench_function("value_to_offset", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..256 {
                let value = f64::from(i) * 0.39;
                acc += geometry.value_to_offset(black_box(value), model.bounds(), Handle::Upper);
            }
            black_box(acc)
        });
    });

    group.bench_function("slider_gesture", |b| {
        b.iter_batched(
            || {
                let mut slider = RangeSlider::new(config.clone());
                slider.layout(640.0);
                slider
            },
            |mut slider| {
                let mut range = start;
                let x = slider.knob_offset(&range, Handle::Lower).unwrap_or_default();
                slider.pointer_down(Point::new(x, 0.0), &range);
                for i in 1..=120 {
                    slider.pointer_move(Point::new(x + f64::from(i) * 3.0, 0.0), &mut range);
                }
                slider.pointer_up(0);
                black_box(slider.scene(&range))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
