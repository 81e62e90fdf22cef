// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the range value model.
//!
//! Uses proptest to verify:
//! 1. Ordering: every resolved range stays ordered and inside its bounds
//! 2. Round trip: offset -> value inverts value -> offset for both handles
//! 3. Idempotence: snapping a snapped value changes nothing

use kurbo::Size;
use proptest::prelude::*;
use understory_range::{Bounds, Handle, RangeModel, SnapPolicy, Tick, TrackGeometry, ValueRange};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (-1_000.0..1_000.0_f64, 0.001..2_000.0_f64)
        .prop_map(|(min, span)| Bounds::new(min, min + span))
}

fn arb_handle() -> impl Strategy<Value = Handle> {
    prop_oneof![Just(Handle::Lower), Just(Handle::Upper)]
}

fn arb_geometry() -> impl Strategy<Value = TrackGeometry> {
    (1.0..96.0_f64, 10.0..2_000.0_f64).prop_map(|(knob, extra)| {
        TrackGeometry::new(2.0 * knob + extra, Size::new(knob, knob / 1.5))
    })
}

/// A policy scaled to the bounds so that steps and ticks land inside them.
fn arb_policy(bounds: Bounds) -> impl Strategy<Value = SnapPolicy> {
    let span = bounds.span();
    let min = bounds.min();
    prop_oneof![
        Just(SnapPolicy::None),
        (0.01..1.0_f64).prop_map(move |fraction| SnapPolicy::fixed_step(fraction * span)),
        prop::collection::vec((0.0..=1.0_f64, any::<bool>()), 0..8).prop_map(move |ticks| {
            SnapPolicy::tick_set(
                ticks
                    .into_iter()
                    .map(|(fraction, snap)| Tick::new(min + fraction * span, snap)),
            )
        }),
    ]
}

fn arb_model() -> impl Strategy<Value = RangeModel> {
    arb_bounds().prop_flat_map(|bounds| {
        arb_policy(bounds).prop_map(move |policy| RangeModel::new(bounds, policy))
    })
}

// ── 1. Ordering ──────────────────────────────────────────────────────

proptest! {
    /// Any drag from any starting range yields an ordered range inside the bounds.
    #[test]
    fn drags_keep_range_ordered_and_bounded(
        model in arb_model(),
        handle in arb_handle(),
        a in -2.0..3.0_f64,
        b in -2.0..3.0_f64,
        delta in -3.0..3.0_f64,
    ) {
        let bounds = *model.bounds();
        let start = ValueRange::new(bounds.lerp(a), bounds.lerp(b));
        let next = model.drag_by_value(handle, delta * bounds.span(), start);
        prop_assert!(next.is_valid_in(&bounds), "{next:?} escaped {bounds:?}");
    }

    /// Repeated pixel drags never break the invariant either.
    #[test]
    fn drag_sequences_keep_range_ordered(
        model in arb_model(),
        geometry in arb_geometry(),
        moves in prop::collection::vec((arb_handle(), -500.0..500.0_f64), 1..24),
    ) {
        let bounds = *model.bounds();
        let mut range = ValueRange::new(bounds.min(), bounds.max());
        for (handle, pixels) in moves {
            range = model.drag_by_pixels(handle, pixels, range, &geometry);
            prop_assert!(range.is_valid_in(&bounds), "{range:?} escaped {bounds:?}");
        }
    }
}

// ── 2. Round trip ────────────────────────────────────────────────────

proptest! {
    /// Mapping a value to an offset and back returns the value.
    #[test]
    fn offset_round_trip(
        bounds in arb_bounds(),
        geometry in arb_geometry(),
        handle in arb_handle(),
        fraction in 0.0..=1.0_f64,
    ) {
        let value = bounds.lerp(fraction);
        let offset = geometry.value_to_offset(value, &bounds, handle);
        let back = geometry.offset_to_value(offset, &bounds, handle);
        let tolerance = 1e-9 * bounds.span().max(bounds.min().abs()).max(1.0);
        prop_assert!((back - value).abs() <= tolerance, "{value} came back as {back}");
    }

    /// Offsets of in-bounds values stay inside the handle's legal extent.
    #[test]
    fn offsets_stay_on_the_track(
        bounds in arb_bounds(),
        geometry in arb_geometry(),
        handle in arb_handle(),
        fraction in 0.0..=1.0_f64,
    ) {
        let offset = geometry.value_to_offset(bounds.lerp(fraction), &bounds, handle);
        let (left, right) = geometry.offset_extent(handle);
        prop_assert!(offset >= left - 1e-9 && offset <= right + 1e-9);
    }
}

// ── 3. Idempotence ───────────────────────────────────────────────────

proptest! {
    /// Snapping twice is the same as snapping once.
    #[test]
    fn snap_is_idempotent(
        (bounds, policy) in arb_bounds().prop_flat_map(|bounds| (Just(bounds), arb_policy(bounds))),
        fraction in -0.5..1.5_f64,
    ) {
        let once = policy.snap(bounds.lerp(fraction), &bounds);
        let twice = policy.snap(once, &bounds);
        prop_assert_eq!(once, twice);
    }
}
