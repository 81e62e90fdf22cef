// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping policies.
//!
//! A [`SnapPolicy`] turns a raw proposed value into the nearest admissible
//! one. Both bounds are always admissible, so a range can reach its extremes
//! even when a step does not evenly divide the domain.
//!
//! Snapping never clamps: a value far outside the bounds may snap to a step
//! multiple that is itself outside. Clamping happens afterwards, in
//! [`RangeModel`](crate::RangeModel).
//!
//! ```
//! use understory_range::{Bounds, SnapPolicy, Tick};
//!
//! let bounds = Bounds::new(1.0, 60.0);
//! let ticks = SnapPolicy::tick_set([Tick::snapping(25.0), Tick::snapping(45.0)]);
//! assert_eq!(ticks.snap(30.0, &bounds), 25.0);
//!
//! let step = SnapPolicy::fixed_step(10.0);
//! assert_eq!(step.snap(33.0, &bounds), 30.0);
//! assert_eq!(step.snap(59.0, &bounds), 60.0);
//! ```

use alloc::vec::Vec;

use crate::bounds::Bounds;

/// A marked value on the track.
///
/// Every tick is drawn; only ticks with `snap_enabled` attract the handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position of the tick in the value domain.
    pub value: f64,
    /// Whether handles snap to this tick.
    pub snap_enabled: bool,
}

impl Tick {
    /// Creates a tick.
    #[must_use]
    pub const fn new(value: f64, snap_enabled: bool) -> Self {
        Self {
            value,
            snap_enabled,
        }
    }

    /// A tick handles snap to.
    #[must_use]
    pub const fn snapping(value: f64) -> Self {
        Self::new(value, true)
    }

    /// A purely visual tick.
    #[must_use]
    pub const fn marker(value: f64) -> Self {
        Self::new(value, false)
    }
}

/// How proposed values are rounded to admissible ones.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SnapPolicy {
    /// Every value is admissible.
    #[default]
    None,
    /// Multiples of a positive step, plus both bounds.
    FixedStep(f64),
    /// Snap-enabled ticks, plus both bounds. Order is irrelevant.
    TickSet(Vec<Tick>),
}

impl SnapPolicy {
    /// Step-based snapping. A step that is not positive and finite disables
    /// snapping.
    #[must_use]
    pub fn fixed_step(step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            Self::FixedStep(step)
        } else {
            Self::None
        }
    }

    /// Tick-based snapping. Non-finite tick values are dropped.
    #[must_use]
    pub fn tick_set(ticks: impl IntoIterator<Item = Tick>) -> Self {
        Self::TickSet(
            ticks
                .into_iter()
                .filter(|tick| tick.value.is_finite())
                .collect(),
        )
    }

    /// The active step, if stepping.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::FixedStep(step) => Some(*step),
            _ => None,
        }
    }

    /// Ticks of a tick set; empty for other policies.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        match self {
            Self::TickSet(ticks) => ticks,
            _ => &[],
        }
    }

    /// Minimum separation the handles keep before one pushes the other.
    #[must_use]
    pub fn min_gap(&self) -> f64 {
        self.step().unwrap_or(0.0)
    }

    /// Returns the admissible value nearest to `value`.
    ///
    /// Ties go to the lower candidate. Non-finite input is returned unchanged.
    #[must_use]
    pub fn snap(&self, value: f64, bounds: &Bounds) -> f64 {
        if !value.is_finite() {
            return value;
        }
        match self {
            Self::None => value,
            Self::FixedStep(step) => {
                let multiple = libm::round(value / step) * step;
                nearest(value, [multiple, bounds.min(), bounds.max()]).unwrap_or(value)
            }
            Self::TickSet(ticks) => {
                let candidates = ticks
                    .iter()
                    .filter(|tick| tick.snap_enabled)
                    .map(|tick| tick.value)
                    .chain([bounds.min(), bounds.max()]);
                nearest(value, candidates).unwrap_or(value)
            }
        }
    }
}

/// Full scan for the candidate closest to `value`; ties go to the lower one.
fn nearest(value: f64, candidates: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for candidate in candidates {
        let distance = (candidate - value).abs();
        best = match best {
            Some((best_candidate, best_distance))
                if best_distance < distance
                    || (best_distance == distance && best_candidate <= candidate) =>
            {
                Some((best_candidate, best_distance))
            }
            _ => Some((candidate, distance)),
        };
    }
    best.map(|(candidate, _)| candidate)
}
