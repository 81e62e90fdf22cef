// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag resolution.
//!
//! [`RangeModel`] owns the configuration that outlives a single gesture
//! (bounds and snapping) and turns "move this handle by so much" into a new
//! [`ValueRange`]. The same code path serves both handles; the handle is a
//! parameter, and the only mirrored piece is the direction of the crossover
//! test.
//!
//! A drag update runs these steps:
//!
//! 1. convert a pixel delta to a value delta (for [`RangeModel::drag_by_pixels`]),
//! 2. move the dragged handle by the delta and snap it,
//! 3. if it now reaches past the other handle by the minimum gap, move the
//!    other handle by the same delta and snap it too,
//! 4. clamp both values into bounds and order them.
//!
//! Each update starts from the current range rather than from an accumulated
//! delta log, so an interrupted gesture can never leave partial state behind.

use crate::bounds::{Bounds, ValueRange};
use crate::geometry::TrackGeometry;
use crate::handle::Handle;
use crate::snap::SnapPolicy;

/// Bounds plus snapping: everything needed to resolve handle movement.
///
/// ```
/// use understory_range::{Bounds, Handle, RangeModel, SnapPolicy, ValueRange};
///
/// let model = RangeModel::new(Bounds::new(0.0, 100.0), SnapPolicy::fixed_step(10.0));
/// let range = ValueRange::new(40.0, 50.0);
///
/// // Dragging the lower handle past the upper one pushes it along.
/// let next = model.drag_by_value(Handle::Lower, 30.0, range);
/// assert_eq!(next, ValueRange::new(70.0, 80.0));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RangeModel {
    bounds: Bounds,
    policy: SnapPolicy,
}

impl RangeModel {
    /// Creates a model from bounds and a snapping policy.
    #[must_use]
    pub fn new(bounds: Bounds, policy: SnapPolicy) -> Self {
        Self { bounds, policy }
    }

    /// The value domain.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The active snapping policy.
    #[must_use]
    pub fn policy(&self) -> &SnapPolicy {
        &self.policy
    }

    /// Snaps a value under the active policy. Does not clamp.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        self.policy.snap(value, &self.bounds)
    }

    /// Brings an arbitrary range into bounds and orders it.
    #[must_use]
    pub fn sanitize(&self, range: ValueRange) -> ValueRange {
        range.clamped(&self.bounds)
    }

    /// Resolves a drag of `handle` by a pixel delta on the given track.
    #[must_use]
    pub fn drag_by_pixels(
        &self,
        handle: Handle,
        delta_pixels: f64,
        current: ValueRange,
        geometry: &TrackGeometry,
    ) -> ValueRange {
        let delta = geometry.pixels_to_value_delta(delta_pixels, &self.bounds);
        self.drag_by_value(handle, delta, current)
    }

    /// Resolves a drag of `handle` by a delta expressed in domain units.
    ///
    /// The result always satisfies `min <= lower <= upper <= max`.
    #[must_use]
    pub fn drag_by_value(&self, handle: Handle, delta: f64, current: ValueRange) -> ValueRange {
        let current = self.sanitize(current);
        let delta = if delta.is_finite() { delta } else { 0.0 };

        let moved = self.snap(current.get(handle) + delta);
        let other = current.get(handle.other());

        let mut next = current;
        next.set(handle, moved);
        if self.crosses(handle, moved, other) {
            next.set(handle.other(), self.snap(other + delta));
        }

        let next = self.sanitize(next);
        debug_assert!(next.is_valid_in(&self.bounds), "unresolved range {next:?}");
        tracing::trace!(?handle, delta, lower = next.lower, upper = next.upper, "resolved drag");
        next
    }

    /// Whether `handle`, moved to `value`, reaches past `other` by the minimum gap.
    fn crosses(&self, handle: Handle, value: f64, other: f64) -> bool {
        let gap = self.policy.min_gap();
        match handle {
            Handle::Lower => value >= other + gap,
            Handle::Upper => value <= other - gap,
        }
    }
}
