// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-data description of a slider frame.
//!
//! A [`SliderScene`] lists the shapes a renderer should paint, back to front:
//! the track, the selected segment, tick marks, then both knobs. Coordinates
//! are track coordinates: `x = 0` is the horizontal center of the track and
//! `y = 0` its center line.

use alloc::vec::Vec;

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;
use understory_range::{Bounds, Handle, Tick, TrackGeometry, ValueRange};

use crate::visuals::{KnobAppearance, TickStyle};

/// A filled capsule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
    /// Outline, with fully rounded ends.
    pub shape: RoundedRect,
    /// Fill color.
    pub color: Color,
}

impl Capsule {
    fn new(center: Point, size: Size, color: Color) -> Self {
        let rect = Rect::from_center_size(center, size);
        let radius = 0.5 * size.width.min(size.height);
        Self {
            shape: RoundedRect::from_rect(rect, radius),
            color,
        }
    }
}

/// A tick mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// The tick this mark represents.
    pub tick: Tick,
    /// Area to fill.
    pub rect: Rect,
    /// Fill color.
    pub color: Color,
}

/// A knob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobShape {
    /// Which handle this knob controls.
    pub handle: Handle,
    /// Outline, with fully rounded ends.
    pub shape: RoundedRect,
    /// Paint and material.
    pub appearance: KnobAppearance,
    /// Whether the knob is currently held.
    pub dragging: bool,
}

/// Everything needed to paint one frame of a range slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderScene {
    /// The full track.
    pub track: Capsule,
    /// The segment between the knobs.
    pub selection: Capsule,
    /// Tick marks inside the bounds.
    pub ticks: Vec<TickMark>,
    /// Lower knob first, upper knob on top.
    pub knobs: [KnobShape; 2],
}

/// Inputs for [`SliderScene::build`] that do not come from the value model.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScenePaint<'a> {
    pub(crate) track_color: Color,
    pub(crate) tint: Color,
    pub(crate) track_height: f64,
    pub(crate) ticks: &'a [(Tick, TickStyle)],
    pub(crate) knob_sizes: [Size; 2],
    pub(crate) knobs: [(KnobAppearance, bool); 2],
}

impl SliderScene {
    pub(crate) fn build(
        geometry: &TrackGeometry,
        bounds: &Bounds,
        range: &ValueRange,
        paint: ScenePaint<'_>,
    ) -> Self {
        let lower = geometry.value_to_offset(range.lower, bounds, Handle::Lower);
        let upper = geometry.value_to_offset(range.upper, bounds, Handle::Upper);
        let knob_width = geometry.knob_size().width;

        let track = Capsule::new(
            Point::ORIGIN,
            Size::new(geometry.pixel_width(), paint.track_height),
            paint.track_color,
        );
        // The selection spans from the lower knob's center to the upper knob's
        // center, widened by half a knob on each side.
        let selection = Capsule::new(
            Point::new((lower + upper) * 0.5, 0.0),
            Size::new((upper - lower + knob_width).max(0.0), paint.track_height),
            paint.tint,
        );

        let ticks = paint
            .ticks
            .iter()
            .filter(|(tick, _)| bounds.contains(tick.value))
            .map(|(tick, style)| TickMark {
                tick: *tick,
                rect: Rect::from_center_size(
                    Point::new(geometry.value_to_track_offset(tick.value, bounds), 0.0),
                    Size::new(style.width, style.height),
                ),
                color: style.color,
            })
            .collect();

        let offsets = [lower, upper];
        let knobs = Handle::ALL.map(|handle| {
            let (appearance, dragging) = paint.knobs[handle.index()];
            let outline = Capsule::new(
                Point::new(offsets[handle.index()], 0.0),
                paint.knob_sizes[handle.index()],
                appearance.fill,
            );
            KnobShape {
                handle,
                shape: outline.shape,
                appearance,
                dragging,
            }
        });

        Self {
            track,
            selection,
            ticks,
            knobs,
        }
    }

    /// The knob for `handle`.
    #[must_use]
    pub fn knob(&self, handle: Handle) -> &KnobShape {
        &self.knobs[handle.index()]
    }
}
