// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry and the pixel/value coordinate mapping.
//!
//! Offsets are measured in pixels from the horizontal center of the track,
//! growing to the right. Each knob is positioned by the offset of its own
//! center. The two knobs sit side by side rather than on top of each other:
//! at equal values the upper knob's center is one knob width to the right of
//! the lower knob's center. Consequently the two handles have different
//! origins (the offset that represents `bounds.min`), while both move over the
//! same usable span of `pixel_width - 2 * knob_width` pixels.
//!
//! ```text
//!  |<------------------------- pixel_width ------------------------->|
//!  [ lower ][ upper ] . . . . . . . . . . . . . . . . [ lower ][ upper ]
//!      ^        ^                                         ^        ^
//!   lower at min                                       lower at max
//!            upper at min                                       upper at max
//! ```
//!
//! All mapping functions are pure. When the track is too narrow to drag at
//! all (usable span `<= 0`) they degrade to a fixed mapping onto `bounds.min`
//! instead of dividing by zero.

use kurbo::{Point, Rect, Size};

use crate::bounds::{Bounds, ValueRange};
use crate::handle::Handle;
use crate::issue::ConfigIssue;

/// Default knob footprint: 48 pixels wide, two thirds as tall.
pub const DEFAULT_KNOB_SIZE: Size = Size::new(48.0, 32.0);

/// Pixel geometry of a horizontal range track.
///
/// Recomputed on every layout pass; the knob size may differ from the
/// baseline while a knob is being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pixel_width: f64,
    knob_size: Size,
}

impl TrackGeometry {
    /// Creates geometry for a track `pixel_width` pixels wide.
    ///
    /// Negative or non-finite widths are treated as zero.
    #[must_use]
    pub fn new(pixel_width: f64, knob_size: Size) -> Self {
        let pixel_width = if pixel_width.is_finite() {
            pixel_width.max(0.0)
        } else {
            0.0
        };
        let geometry = Self {
            pixel_width,
            knob_size,
        };
        if let Some(issue) = geometry.issue() {
            tracing::debug!(%issue, "range track cannot be dragged");
        }
        geometry
    }

    /// Track width in pixels.
    #[must_use]
    pub const fn pixel_width(&self) -> f64 {
        self.pixel_width
    }

    /// Knob footprint in pixels.
    #[must_use]
    pub const fn knob_size(&self) -> Size {
        self.knob_size
    }

    /// Returns the same track with a different knob footprint.
    #[must_use]
    pub fn with_knob_size(self, knob_size: Size) -> Self {
        Self::new(self.pixel_width, knob_size)
    }

    /// Distance in pixels over which a knob center can travel.
    #[must_use]
    pub fn usable_span(&self) -> f64 {
        self.pixel_width - 2.0 * self.knob_size.width
    }

    /// Returns `true` when the usable span is not positive.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let span = self.usable_span();
        span.is_nan() || span <= 0.0
    }

    /// Describes why the track cannot be dragged, if it cannot.
    #[must_use]
    pub fn issue(&self) -> Option<ConfigIssue> {
        self.is_degenerate().then_some(ConfigIssue::NarrowTrack {
            width: self.pixel_width,
            knob_width: self.knob_size.width,
        })
    }

    /// Offset of `handle`'s center when its value is `bounds.min`.
    #[must_use]
    pub fn origin(&self, handle: Handle) -> f64 {
        let half_width = self.pixel_width / 2.0;
        let knob = self.knob_size.width;
        match handle {
            Handle::Lower => -(half_width - 0.5 * knob),
            Handle::Upper => -(half_width - 1.5 * knob),
        }
    }

    /// Legal offsets of `handle`'s center, as `(leftmost, rightmost)`.
    #[must_use]
    pub fn offset_extent(&self, handle: Handle) -> (f64, f64) {
        let origin = self.origin(handle);
        (origin, origin + self.usable_span().max(0.0))
    }

    /// Maps a domain value to the offset of `handle`'s center.
    #[must_use]
    pub fn value_to_offset(&self, value: f64, bounds: &Bounds, handle: Handle) -> f64 {
        let origin = self.origin(handle);
        if self.is_degenerate() {
            return origin;
        }
        bounds.fraction(value) * self.usable_span() + origin
    }

    /// Maps the offset of `handle`'s center back to a domain value.
    ///
    /// Exact inverse of [`TrackGeometry::value_to_offset`]. The result is not
    /// clamped.
    #[must_use]
    pub fn offset_to_value(&self, offset: f64, bounds: &Bounds, handle: Handle) -> f64 {
        if self.is_degenerate() {
            return bounds.min();
        }
        bounds.lerp((offset - self.origin(handle)) / self.usable_span())
    }

    /// Converts a pixel movement into a movement in the domain.
    ///
    /// Unlike the absolute mapping this carries no per-handle correction, so it
    /// is the right conversion for incremental drag deltas.
    #[must_use]
    pub fn pixels_to_value_delta(&self, delta_pixels: f64, bounds: &Bounds) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        delta_pixels / self.usable_span() * bounds.span()
    }

    /// Handle-independent placement of a value, midway between where the two
    /// knobs would put their centers. Used for tick marks.
    #[must_use]
    pub fn value_to_track_offset(&self, value: f64, bounds: &Bounds) -> f64 {
        let lower = self.value_to_offset(value, bounds, Handle::Lower);
        let upper = self.value_to_offset(value, bounds, Handle::Upper);
        (lower + upper) * 0.5
    }

    /// Rectangle covered by a knob centered at `offset`.
    ///
    /// The track center line is `y = 0`.
    #[must_use]
    pub fn knob_rect(&self, offset: f64) -> Rect {
        Rect::from_center_size(Point::new(offset, 0.0), self.knob_size)
    }

    /// Rectangle covered by `handle`'s knob for the given range.
    #[must_use]
    pub fn handle_rect(&self, range: &ValueRange, bounds: &Bounds, handle: Handle) -> Rect {
        self.knob_rect(self.value_to_offset(range.get(handle), bounds, handle))
    }

    /// Finds the knob under `point`, in track coordinates.
    ///
    /// When both knobs are hit, `preferred` wins if given; otherwise the knob
    /// whose center is horizontally closer, with the upper knob winning ties
    /// since it is stacked on top.
    #[must_use]
    pub fn hit_test(
        &self,
        point: Point,
        range: &ValueRange,
        bounds: &Bounds,
        preferred: Option<Handle>,
    ) -> Option<Handle> {
        let lower = self.handle_rect(range, bounds, Handle::Lower);
        let upper = self.handle_rect(range, bounds, Handle::Upper);
        match (lower.contains(point), upper.contains(point)) {
            (false, false) => None,
            (true, false) => Some(Handle::Lower),
            (false, true) => Some(Handle::Upper),
            (true, true) => preferred.or_else(|| {
                let to_lower = (point.x - lower.center().x).abs();
                let to_upper = (point.x - upper.center().x).abs();
                if to_lower < to_upper {
                    Some(Handle::Lower)
                } else {
                    Some(Handle::Upper)
                }
            }),
        }
    }
}
