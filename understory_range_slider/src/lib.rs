// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range_slider --heading-base-level=0

//! Understory Range Slider: host-side state for dual-handle range sliders.
//!
//! [`understory_range`] answers "where does this value go and what happens
//! when a knob moves". This crate wraps it with the state a live widget needs
//! between events:
//!
//! - [`gesture`]: which knob is held and how far the pointer has moved.
//! - [`KnobSizes`]: cosmetic knob growth while held, shrinking back
//!   [`SHRINK_DELAY_MS`] after release.
//! - [`Visuals`]: knob styling chosen once from [`VisualCapabilities`].
//! - [`SliderScene`]: a plain-data description of one frame, for any renderer.
//!
//! [`RangeSlider`] ties these together. It does not own the selected range:
//! hosts pass their [`ValueRange`] into each call and get told when it changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_range::{Handle, RangeConfig, ValueRange};
//! use understory_range_slider::RangeSlider;
//!
//! let mut slider = RangeSlider::new(RangeConfig::new().bounds(0.0, 100.0).step(10.0));
//! let mut range = ValueRange::new(20.0, 60.0);
//!
//! // Nothing can be hit until layout reports a width.
//! assert_eq!(slider.pointer_down(Point::ORIGIN, &range), None);
//! slider.layout(300.0);
//!
//! // Grab the lower knob at its center and move 41 pixels right.
//! let x = slider.knob_offset(&range, Handle::Lower).unwrap();
//! assert_eq!(slider.pointer_down(Point::new(x, 0.0), &range), Some(Handle::Lower));
//! let changed = slider.pointer_move(Point::new(x + 41.0, 0.0), &mut range);
//! assert_eq!(changed, Some(ValueRange::new(40.0, 60.0)));
//! assert_eq!(range, ValueRange::new(40.0, 60.0));
//!
//! slider.pointer_up(0);
//! let scene = slider.scene(&range).unwrap();
//! assert!(scene.knob(Handle::Lower).shape.rect().center().x < 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gesture;
mod knob;
mod scene;
mod slider;
mod visuals;

pub use knob::{DEFAULT_GROWTH, KnobSizes, SHRINK_DELAY_MS};
pub use scene::{Capsule, KnobShape, SliderScene, TickMark};
pub use slider::{RangeSlider, to_track_space};
pub use visuals::{
    BasicVisuals, EnhancedVisuals, KnobAppearance, KnobMaterial, KnobVisuals, SliderStyle,
    TickStyle, VisualCapabilities, Visuals,
};

pub use understory_range::{Handle, ValueRange};
