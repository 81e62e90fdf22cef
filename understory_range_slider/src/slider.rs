// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};
use understory_range::{Handle, RangeConfig, RangeModel, Tick, TrackGeometry, ValueRange};

use crate::gesture::DragState;
use crate::knob::KnobSizes;
use crate::scene::{ScenePaint, SliderScene};
use crate::visuals::{KnobVisuals, SliderStyle, TickStyle, VisualCapabilities, Visuals};

/// Where the dragged knob started, in value and pointer terms.
#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    value: f64,
    pointer_offset: f64,
    /// Last range written to the host.
    emitted: ValueRange,
}

/// Host-side state of one range slider.
///
/// `RangeSlider` never owns the selected range. Every method that can change
/// it takes the host's [`ValueRange`] by mutable reference, writes the new
/// value in place, and returns it when it changed, so hosts can use either
/// the binding or the return value as their "range changed" notification.
///
/// Pointer positions are in track coordinates (see [`to_track_space`]).
///
/// While a knob is held, each move places the dragged knob at the value it
/// had when the drag began plus the total pointer offset, so snapping works
/// with arbitrarily fine pointer events. The other knob is always taken from
/// the range the host passes in: it is pushed along when crossed, never
/// pulled back, and changes the host makes mid-drag are kept.
#[derive(Clone, Debug)]
pub struct RangeSlider {
    config: RangeConfig,
    model: RangeModel,
    tick_styles: Vec<Option<TickStyle>>,
    style: SliderStyle,
    visuals: Visuals,
    measured_width: Option<f64>,
    drag: DragState,
    anchor: Option<DragAnchor>,
    knobs: KnobSizes,
}

impl RangeSlider {
    /// Creates a slider from its value-model configuration.
    #[must_use]
    pub fn new(config: RangeConfig) -> Self {
        let model = config.build();
        let knobs = KnobSizes::new(config.baseline_knob_size());
        Self {
            tick_styles: Vec::new(),
            model,
            knobs,
            config,
            style: SliderStyle::default(),
            visuals: Visuals::default(),
            measured_width: None,
            drag: DragState::default(),
            anchor: None,
        }
    }

    /// Sets colors and sizes.
    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the color of the selected segment.
    #[must_use]
    pub fn tint(mut self, tint: peniko::Color) -> Self {
        self.style = self.style.tint(tint);
        self
    }

    /// Chooses knob visuals from the platform's capabilities.
    #[must_use]
    pub fn capabilities(mut self, capabilities: VisualCapabilities) -> Self {
        self.visuals = Visuals::select(capabilities);
        self
    }

    /// Adds a tick with its own style.
    #[must_use]
    pub fn styled_tick(mut self, place: f64, snap_to: bool, style: TickStyle) -> Self {
        let config = self.config.clone().tick(place, snap_to);
        self.tick_styles.resize(self.config.tick_list().len(), None);
        self.tick_styles.push(Some(style));
        self.apply_config(config);
        self
    }

    /// Replaces the whole value-model configuration.
    ///
    /// Any drag in progress is cancelled. Per-tick styles are kept by index.
    pub fn reconfigure(&mut self, config: RangeConfig) {
        self.cancel();
        self.apply_config(config);
    }

    fn apply_config(&mut self, config: RangeConfig) {
        self.model = config.build();
        self.knobs = KnobSizes::new(config.baseline_knob_size());
        self.config = config;
    }

    /// The value model.
    #[must_use]
    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// The visual style.
    #[must_use]
    pub fn slider_style(&self) -> &SliderStyle {
        &self.style
    }

    /// Reports the width measured by layout.
    ///
    /// Ignored when the configuration fixes a width.
    pub fn layout(&mut self, width: f64) {
        if self.config.fixed_width().is_some() {
            return;
        }
        if width.is_finite() && width >= 0.0 {
            self.measured_width = Some(width);
        } else {
            tracing::warn!(width, "ignoring invalid measured slider width");
        }
    }

    /// Track geometry with the baseline knob size, once a width is known.
    #[must_use]
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.config.geometry().or_else(|| {
            self.measured_width
                .map(|width| TrackGeometry::new(width, self.config.baseline_knob_size()))
        })
    }

    /// Offset of `handle`'s knob center for the given range.
    #[must_use]
    pub fn knob_offset(&self, range: &ValueRange, handle: Handle) -> Option<f64> {
        let geometry = self.geometry()?;
        let range = self.model.sanitize(*range);
        Some(geometry.value_to_offset(range.get(handle), self.model.bounds(), handle))
    }

    /// Brings an externally supplied range into bounds and order.
    ///
    /// Returns the stored value if it had to change.
    pub fn set_range(&self, range: &mut ValueRange) -> Option<ValueRange> {
        let sanitized = self.model.sanitize(*range);
        if sanitized == *range {
            None
        } else {
            *range = sanitized;
            Some(sanitized)
        }
    }

    /// Handles a pointer press; starts dragging the knob under `pos`, if any.
    pub fn pointer_down(&mut self, pos: Point, range: &ValueRange) -> Option<Handle> {
        let geometry = self.geometry()?;
        let handle = geometry.hit_test(
            pos,
            &self.model.sanitize(*range),
            self.model.bounds(),
            self.drag.last_dragged(),
        )?;
        self.begin_drag(handle, pos, range);
        Some(handle)
    }

    /// Starts dragging `handle` from `pos` without hit testing.
    pub fn begin_drag(&mut self, handle: Handle, pos: Point, range: &ValueRange) {
        if let Some(previous) = self.drag.active() {
            self.knobs.reset(previous);
        }
        self.drag.start(handle, pos);
        let range = self.model.sanitize(*range);
        self.anchor = Some(DragAnchor {
            value: range.get(handle),
            pointer_offset: 0.0,
            emitted: range,
        });
        self.knobs.grow(handle);
        tracing::debug!(?handle, x = pos.x, "knob drag started");
    }

    /// Handles a pointer move while a knob is held.
    ///
    /// Writes the resolved range into `range` and returns it if it changed.
    pub fn pointer_move(&mut self, pos: Point, range: &mut ValueRange) -> Option<ValueRange> {
        let geometry = self.geometry()?;
        let mut anchor = self.anchor?;
        let (handle, moved) = self.drag.update(pos)?;
        let (_, offset) = self.drag.total_offset(pos)?;

        let current = self.model.sanitize(*range);
        if current != anchor.emitted {
            // The host changed the range since the last move; continue from it.
            anchor.value = current.get(handle);
            anchor.pointer_offset = offset - moved;
            tracing::debug!(
                ?handle,
                lower = current.lower,
                upper = current.upper,
                "drag re-anchored"
            );
        }

        let bounds = self.model.bounds();
        let target =
            anchor.value + geometry.pixels_to_value_delta(offset - anchor.pointer_offset, bounds);
        let next = self.model.drag_by_value(handle, target - current.get(handle), current);
        anchor.emitted = next;
        self.anchor = Some(anchor);

        if next == *range {
            return None;
        }
        *range = next;
        tracing::trace!(?handle, lower = next.lower, upper = next.upper, "range changed");
        Some(next)
    }

    /// Handles a pointer release, ending the drag.
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<Handle> {
        let handle = self.drag.end()?;
        self.anchor = None;
        self.knobs.release(handle, now_ms);
        tracing::debug!(?handle, "knob drag ended");
        Some(handle)
    }

    /// Abandons the drag, e.g. when pointer capture is lost.
    ///
    /// Knobs return to their baseline size immediately. The range keeps the
    /// last value that was written.
    pub fn cancel(&mut self) -> Option<Handle> {
        let handle = self.drag.cancel()?;
        self.anchor = None;
        self.knobs.reset_all();
        tracing::debug!(?handle, "knob drag cancelled");
        Some(handle)
    }

    /// The knob currently held, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.drag.active()
    }

    /// Advances cosmetic knob animation; returns `true` if a redraw is due.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        self.knobs.advance(now_ms)
    }

    /// When [`RangeSlider::advance`] next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.knobs.next_deadline()
    }

    /// Size at which `handle`'s knob is currently drawn.
    #[must_use]
    pub fn knob_size(&self, handle: Handle) -> Size {
        self.knobs.size(handle)
    }

    /// Describes the frame to paint for `range`, once a width is known.
    #[must_use]
    pub fn scene(&self, range: &ValueRange) -> Option<SliderScene> {
        let geometry = self.geometry()?;
        let range = self.model.sanitize(*range);
        let ticks: Vec<(Tick, TickStyle)> = self
            .config
            .tick_list()
            .iter()
            .enumerate()
            .filter(|(_, tick)| tick.value.is_finite())
            .map(|(index, tick)| {
                let style = self
                    .tick_styles
                    .get(index)
                    .copied()
                    .flatten()
                    .unwrap_or(self.style.tick_style);
                (*tick, style)
            })
            .collect();
        let knobs = Handle::ALL.map(|handle| {
            let dragging = self.drag.is_dragging(handle);
            (self.visuals.knob(&self.style, dragging), dragging)
        });
        let paint = ScenePaint {
            track_color: self.style.track_color,
            tint: self.style.tint,
            track_height: self.style.track_height,
            ticks: &ticks,
            knob_sizes: Handle::ALL.map(|handle| self.knobs.size(handle)),
            knobs,
        };
        Some(SliderScene::build(
            &geometry,
            self.model.bounds(),
            &range,
            paint,
        ))
    }
}

/// Converts a widget-local position (origin at the top-left corner of a
/// widget of `size`) into track coordinates (origin at the widget center).
#[must_use]
pub fn to_track_space(local: Point, size: Size) -> Point {
    Point::new(local.x - size.width / 2.0, local.y - size.height / 2.0)
}
