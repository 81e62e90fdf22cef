// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range --heading-base-level=0

//! Understory Range: the headless value model behind dual-handle range sliders.
//!
//! A range slider lets the user drag two knobs along a bounded track to pick
//! a sub-range `[lower, upper]` of a continuous domain `[min, max]`. This
//! crate holds everything about that widget that is not drawing:
//!
//! - [`TrackGeometry`]: the bidirectional mapping between pixel offsets on the
//!   track and domain values, plus knob placement and hit testing.
//! - [`SnapPolicy`]: free movement, fixed steps, or an explicit set of ticks,
//!   always with both bounds as snap candidates.
//! - [`RangeModel`]: resolves a drag of one handle into a new [`ValueRange`],
//!   pushing the other handle along instead of letting the range invert.
//! - [`RangeConfig`]: the construction options, with [`ConfigIssue`]
//!   diagnostics for anything that had to be repaired.
//!
//! It does **not** own the selected range. Hosts keep the canonical
//! [`ValueRange`], hand it to the model on every update, and store whatever
//! comes back. Gesture tracking, knob animation and rendering live in
//! `understory_range_slider`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_range::{Handle, RangeConfig, ValueRange};
//!
//! let config = RangeConfig::new().bounds(0.0, 100.0).step(10.0).width(300.0);
//! let model = config.build();
//! let geometry = config.geometry().unwrap();
//!
//! let mut range = ValueRange::new(20.0, 60.0);
//!
//! // The pointer moved 41 pixels to the right while holding the lower knob.
//! range = model.drag_by_pixels(Handle::Lower, 41.0, range, &geometry);
//! assert_eq!(range, ValueRange::new(40.0, 60.0));
//!
//! // Place the knobs for rendering.
//! let lower_x = geometry.value_to_offset(range.lower, model.bounds(), Handle::Lower);
//! let upper_x = geometry.value_to_offset(range.upper, model.bounds(), Handle::Upper);
//! assert!(lower_x < upper_x);
//! ```
//!
//! ## Invariants
//!
//! - Every range produced by [`RangeModel`] satisfies
//!   `min <= lower <= upper <= max`.
//! - For values inside the bounds, [`TrackGeometry::offset_to_value`] inverts
//!   [`TrackGeometry::value_to_offset`] up to floating-point error.
//! - Snapping is idempotent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod config;
mod geometry;
mod handle;
mod issue;
mod resolve;
mod snap;

pub use bounds::{Bounds, MIN_SPAN, ValueRange};
pub use config::RangeConfig;
pub use geometry::{DEFAULT_KNOB_SIZE, TrackGeometry};
pub use handle::Handle;
pub use issue::ConfigIssue;
pub use resolve::RangeModel;
pub use snap::{SnapPolicy, Tick};
