// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use crate::handle::Handle;
use crate::issue::ConfigIssue;

/// Smallest span a repaired [`Bounds`] may have near zero.
pub const MIN_SPAN: f64 = 1e-9;

/// Closed value domain `[min, max]` a range slider selects from.
///
/// `min < max` always holds for a constructed `Bounds`; see [`Bounds::new`]
/// for how invalid input is repaired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl Bounds {
    /// Creates bounds, repairing invalid input instead of failing.
    ///
    /// - Non-finite bounds fall back to `[0, 1]`.
    /// - `min >= max` becomes `[min, min + ε]`, where `ε` is [`MIN_SPAN`]
    ///   scaled to the magnitude of `min`, or `[min - ε, min]` when
    ///   `min + ε` would overflow.
    ///
    /// Each repair is logged as a warning.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (bounds, issue) = Self::repaired(min, max);
        if let Some(issue) = issue {
            tracing::warn!(%issue, "repaired range bounds");
        }
        bounds
    }

    /// Creates bounds only if `min < max` and both are finite.
    pub fn try_new(min: f64, max: f64) -> Result<Self, ConfigIssue> {
        match Self::repaired(min, max) {
            (bounds, None) => Ok(bounds),
            (_, Some(issue)) => Err(issue),
        }
    }

    pub(crate) fn repaired(min: f64, max: f64) -> (Self, Option<ConfigIssue>) {
        if !min.is_finite() || !max.is_finite() {
            return (Self::default(), Some(ConfigIssue::NonFiniteBounds { min, max }));
        }
        if min >= max {
            let epsilon = MIN_SPAN.max(min.abs() * f64::EPSILON * 4.0);
            // Near `f64::MAX` the span has to open downwards instead.
            let repaired = if (min + epsilon).is_finite() {
                Self {
                    min,
                    max: min + epsilon,
                }
            } else {
                Self {
                    min: min - epsilon,
                    max: min,
                }
            };
            return (repaired, Some(ConfigIssue::EmptyBounds { min, max }));
        }
        (Self { min, max }, None)
    }

    /// Lower end of the domain.
    #[must_use]
    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper end of the domain.
    #[must_use]
    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Width of the domain, always positive.
    #[must_use]
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `value` into the domain. NaN clamps to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Returns `true` if `value` lies inside the closed domain.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` as a fraction of the domain (`min` is 0, `max` is 1).
    ///
    /// Values outside the domain extrapolate linearly.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Inverse of [`Bounds::fraction`].
    #[must_use]
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.min + fraction * self.span()
    }
}

impl From<Bounds> for RangeInclusive<f64> {
    fn from(bounds: Bounds) -> Self {
        bounds.min..=bounds.max
    }
}

/// The selected sub-range `[lower, upper]`.
///
/// The canonical value is owned by the host application. The slider reads it
/// and proposes replacements; every proposal satisfies
/// `bounds.min <= lower <= upper <= bounds.max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    /// Value of the lower handle.
    pub lower: f64,
    /// Value of the upper handle.
    pub upper: f64,
}

impl ValueRange {
    /// Creates a range from its two ends, as given.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Value of the given handle.
    #[must_use]
    pub const fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Lower => self.lower,
            Handle::Upper => self.upper,
        }
    }

    /// Replaces the value of the given handle.
    pub fn set(&mut self, handle: Handle, value: f64) {
        match handle {
            Handle::Lower => self.lower = value,
            Handle::Upper => self.upper = value,
        }
    }

    /// Returns the range with its ends swapped if they are inverted.
    #[must_use]
    pub fn ordered(self) -> Self {
        if self.upper < self.lower {
            Self::new(self.upper, self.lower)
        } else {
            self
        }
    }

    /// Clamps both ends into `bounds`, then orders them.
    #[must_use]
    pub fn clamped(self, bounds: &Bounds) -> Self {
        Self::new(bounds.clamp(self.lower), bounds.clamp(self.upper)).ordered()
    }

    /// Returns `true` if the range is ordered and lies inside `bounds`.
    #[must_use]
    pub fn is_valid_in(&self, bounds: &Bounds) -> bool {
        bounds.min() <= self.lower && self.lower <= self.upper && self.upper <= bounds.max()
    }

    /// Distance between the two ends.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl From<RangeInclusive<f64>> for ValueRange {
    fn from(range: RangeInclusive<f64>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl From<ValueRange> for RangeInclusive<f64> {
    fn from(range: ValueRange) -> Self {
        range.lower..=range.upper
    }
}
