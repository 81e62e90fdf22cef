// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration diagnostics.
//!
//! Nothing in this crate fails at runtime. When a caller hands over a
//! configuration that cannot be honored literally, the value model repairs it
//! and describes the repair with a [`ConfigIssue`]. Hosts can inspect the
//! issues up front with [`RangeConfig::validate`](crate::RangeConfig::validate);
//! [`RangeConfig::build`](crate::RangeConfig::build) logs them through
//! `tracing` and carries on.

/// A configuration value that was repaired rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigIssue {
    /// At least one bound was NaN or infinite; the default `[0, 1]` is used instead.
    #[error("bounds [{min}, {max}] are not finite, falling back to [0, 1]")]
    NonFiniteBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// `min >= max`; the span is widened to a minimal positive width above `min`.
    #[error("bounds [{min}, {max}] are empty or inverted, using a minimal span above {min}")]
    EmptyBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The step was zero, negative or not finite; stepping is disabled.
    #[error("step {0} is not a positive finite number, snapping disabled")]
    InvalidStep(f64),
    /// A step was configured but the tick set takes precedence.
    #[error("step {0} is ignored because tick snapping is active")]
    StepOverriddenByTicks(f64),
    /// A tick value was NaN or infinite and is dropped.
    #[error("tick at {0} is not finite and was dropped")]
    NonFiniteTick(f64),
    /// A tick lies outside the bounds; it is kept but can never survive clamping.
    #[error("tick at {value} lies outside bounds [{min}, {max}]")]
    TickOutsideBounds {
        /// Tick position.
        value: f64,
        /// Effective lower bound.
        min: f64,
        /// Effective upper bound.
        max: f64,
    },
    /// The configured track width was negative or not finite; it is measured from layout instead.
    #[error("track width {0} is invalid, waiting for a measured width")]
    InvalidWidth(f64),
    /// The track is too narrow to host both knobs; every value maps to the lower bound.
    #[error("track width {width} leaves no room to drag knobs of width {knob_width}")]
    NarrowTrack {
        /// Track width in pixels.
        width: f64,
        /// Knob width in pixels.
        knob_width: f64,
    },
}
