// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for a range slider's value model.

use alloc::vec::Vec;

use kurbo::Size;

use crate::bounds::Bounds;
use crate::geometry::{DEFAULT_KNOB_SIZE, TrackGeometry};
use crate::issue::ConfigIssue;
use crate::resolve::RangeModel;
use crate::snap::{SnapPolicy, Tick};

/// Options recognized when constructing a range slider.
///
/// The snapping policy is derived from the options:
///
/// - `use_ticks`, or any tick at all, selects [`SnapPolicy::TickSet`];
/// - otherwise a positive `step` selects [`SnapPolicy::FixedStep`];
/// - otherwise values are not snapped.
///
/// Nothing here is ever rejected. [`RangeConfig::validate`] reports what
/// [`RangeConfig::build`] will repair.
///
/// ```
/// use understory_range::{RangeConfig, SnapPolicy};
///
/// let config = RangeConfig::new().bounds(0.0, 100.0).step(5.0).width(320.0);
/// assert!(config.validate().is_empty());
///
/// let model = config.build();
/// assert_eq!(model.policy(), &SnapPolicy::FixedStep(5.0));
/// assert_eq!(config.geometry().unwrap().usable_span(), 320.0 - 2.0 * 48.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RangeConfig {
    min: f64,
    max: f64,
    step: Option<f64>,
    use_ticks: bool,
    ticks: Vec<Tick>,
    width: Option<f64>,
    knob_size: Size,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: None,
            use_ticks: false,
            ticks: Vec::new(),
            width: None,
            knob_size: DEFAULT_KNOB_SIZE,
        }
    }
}

impl RangeConfig {
    /// Default options: bounds `[0, 1]`, no snapping, measured width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value domain.
    #[must_use]
    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Enables step snapping, unless ticks take precedence.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Removes any configured step.
    #[must_use]
    pub fn no_step(mut self) -> Self {
        self.step = None;
        self
    }

    /// Forces tick snapping even when no ticks are configured, in which case
    /// only the bounds attract the handles.
    #[must_use]
    pub fn use_ticks(mut self, use_ticks: bool) -> Self {
        self.use_ticks = use_ticks;
        self
    }

    /// Adds a tick at `place`; handles snap to it if `snap_to` is set.
    #[must_use]
    pub fn tick(mut self, place: f64, snap_to: bool) -> Self {
        self.ticks.push(Tick::new(place, snap_to));
        self
    }

    /// Adds several ticks.
    #[must_use]
    pub fn ticks(mut self, ticks: impl IntoIterator<Item = Tick>) -> Self {
        self.ticks.extend(ticks);
        self
    }

    /// Fixes the track width in pixels instead of measuring it from layout.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the baseline knob footprint.
    #[must_use]
    pub fn knob_size(mut self, knob_size: Size) -> Self {
        self.knob_size = knob_size;
        self
    }

    /// Configured ticks, in the order given.
    #[must_use]
    pub fn tick_list(&self) -> &[Tick] {
        &self.ticks
    }

    /// Configured track width, if valid.
    #[must_use]
    pub fn fixed_width(&self) -> Option<f64> {
        self.width.filter(|width| width.is_finite() && *width >= 0.0)
    }

    /// Baseline knob footprint.
    #[must_use]
    pub fn baseline_knob_size(&self) -> Size {
        self.knob_size
    }

    fn uses_ticks(&self) -> bool {
        self.use_ticks || !self.ticks.is_empty()
    }

    /// The effective (repaired) bounds.
    #[must_use]
    pub fn effective_bounds(&self) -> Bounds {
        Bounds::repaired(self.min, self.max).0
    }

    /// The snapping policy these options select.
    #[must_use]
    pub fn snap_policy(&self) -> SnapPolicy {
        if self.uses_ticks() {
            SnapPolicy::tick_set(self.ticks.iter().copied())
        } else {
            self.step.map(SnapPolicy::fixed_step).unwrap_or_default()
        }
    }

    /// Geometry for the fixed width, if one is configured.
    #[must_use]
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.fixed_width()
            .map(|width| TrackGeometry::new(width, self.knob_size))
    }

    /// Lists every repair [`RangeConfig::build`] would make.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let (bounds, bounds_issue) = Bounds::repaired(self.min, self.max);
        issues.extend(bounds_issue);

        if let Some(step) = self.step {
            if self.uses_ticks() {
                issues.push(ConfigIssue::StepOverriddenByTicks(step));
            } else if SnapPolicy::fixed_step(step) == SnapPolicy::None {
                issues.push(ConfigIssue::InvalidStep(step));
            }
        }

        for tick in &self.ticks {
            if !tick.value.is_finite() {
                issues.push(ConfigIssue::NonFiniteTick(tick.value));
            } else if !bounds.contains(tick.value) {
                issues.push(ConfigIssue::TickOutsideBounds {
                    value: tick.value,
                    min: bounds.min(),
                    max: bounds.max(),
                });
            }
        }

        match self.width {
            Some(width) if self.fixed_width().is_none() => {
                issues.push(ConfigIssue::InvalidWidth(width));
            }
            Some(_) => issues.extend(self.geometry().and_then(|geometry| geometry.issue())),
            None => {}
        }
        issues
    }

    /// Builds the value model, logging every repair made along the way.
    #[must_use]
    pub fn build(&self) -> RangeModel {
        for issue in self.validate() {
            tracing::warn!(%issue, "repaired range slider configuration");
        }
        let model = RangeModel::new(self.effective_bounds(), self.snap_policy());
        tracing::debug!(
            min = model.bounds().min(),
            max = model.bounds().max(),
            policy = ?model.policy(),
            "built range model"
        );
        model
    }
}
