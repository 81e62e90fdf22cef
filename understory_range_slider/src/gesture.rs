// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knob drag tracking: which knob is held, and how far the pointer has moved.
//!
//! ## Usage
//!
//! 1) When a pointer goes down on a knob, call [`DragState::start`] with that
//!    knob and the pointer position.
//! 2) On each move event, call [`DragState::update`] to get the horizontal
//!    movement since the previous event, or [`DragState::total_offset`] for the
//!    movement since the drag began.
//! 3) End the drag with [`DragState::end`], or [`DragState::cancel`] when the
//!    pointer capture was lost. Both return to idle.
//!
//! Only one knob is dragged at a time; starting a drag on one knob ends any
//! drag on the other.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_range::Handle;
//! use understory_range_slider::gesture::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Handle::Upper, Point::new(10.0, 0.0));
//! assert!(drag.is_dragging(Handle::Upper));
//!
//! assert_eq!(drag.update(Point::new(15.0, 3.0)), Some((Handle::Upper, 5.0)));
//! assert_eq!(drag.total_offset(Point::new(18.0, 0.0)), Some((Handle::Upper, 8.0)));
//!
//! assert_eq!(drag.end(), Some(Handle::Upper));
//! assert!(!drag.is_dragging(Handle::Upper));
//! ```

use kurbo::Point;
use understory_range::Handle;

/// Per-knob drag phase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    /// Not being dragged.
    #[default]
    Idle,
    /// Held by the pointer.
    Dragging {
        /// Pointer x where the drag began.
        start_x: f64,
        /// Pointer x at the most recent update.
        last_x: f64,
    },
}

impl DragPhase {
    /// Returns `true` while the knob is held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Tracks which knob is dragged and by how much.
///
/// Positions are horizontal only; the vertical component of pointer positions
/// is ignored so a drag keeps working when the pointer leaves the track.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    phases: [DragPhase; 2],
    last_dragged: Option<Handle>,
}

impl DragState {
    /// Starts dragging `handle` from `pos`, ending any other drag.
    pub fn start(&mut self, handle: Handle, pos: Point) {
        self.phases[handle.other().index()] = DragPhase::Idle;
        self.phases[handle.index()] = DragPhase::Dragging {
            start_x: pos.x,
            last_x: pos.x,
        };
        self.last_dragged = Some(handle);
    }

    /// Records a new pointer position and returns the horizontal movement
    /// since the previous one, with the knob it applies to.
    pub fn update(&mut self, pos: Point) -> Option<(Handle, f64)> {
        let handle = self.active()?;
        match &mut self.phases[handle.index()] {
            DragPhase::Dragging { last_x, .. } => {
                let delta = pos.x - *last_x;
                *last_x = pos.x;
                Some((handle, delta))
            }
            DragPhase::Idle => None,
        }
    }

    /// Horizontal movement from the drag start to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<(Handle, f64)> {
        let handle = self.active()?;
        match self.phases[handle.index()] {
            DragPhase::Dragging { start_x, .. } => Some((handle, pos.x - start_x)),
            DragPhase::Idle => None,
        }
    }

    /// Ends the current drag normally, returning the knob that was released.
    pub fn end(&mut self) -> Option<Handle> {
        let handle = self.active()?;
        self.phases[handle.index()] = DragPhase::Idle;
        Some(handle)
    }

    /// Abandons the current drag, e.g. when pointer capture is lost.
    ///
    /// Equivalent to [`DragState::end`] for the state machine; callers use the
    /// distinction to skip release effects.
    pub fn cancel(&mut self) -> Option<Handle> {
        self.end()
    }

    /// The knob currently held, if any.
    #[must_use]
    pub fn active(&self) -> Option<Handle> {
        Handle::ALL
            .into_iter()
            .find(|handle| self.phases[handle.index()].is_active())
    }

    /// Returns `true` while `handle` is held.
    #[must_use]
    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.phases[handle.index()].is_active()
    }

    /// Phase of `handle`.
    #[must_use]
    pub fn phase(&self, handle: Handle) -> DragPhase {
        self.phases[handle.index()]
    }

    /// The knob most recently held, even after release.
    ///
    /// Used to pick a knob when both overlap under the pointer.
    #[must_use]
    pub fn last_dragged(&self) -> Option<Handle> {
        self.last_dragged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let drag = DragState::default();
        assert_eq!(drag.active(), None);
        assert_eq!(drag.last_dragged(), None);
        for handle in Handle::ALL {
            assert_eq!(drag.phase(handle), DragPhase::Idle);
        }
    }

    #[test]
    fn start_activates_one_knob() {
        let mut drag = DragState::default();
        drag.start(Handle::Lower, Point::new(-40.0, 2.0));

        assert!(drag.is_dragging(Handle::Lower));
        assert!(!drag.is_dragging(Handle::Upper));
        assert_eq!(
            drag.phase(Handle::Lower),
            DragPhase::Dragging {
                start_x: -40.0,
                last_x: -40.0
            }
        );
    }

    #[test]
    fn update_returns_incremental_horizontal_deltas() {
        let mut drag = DragState::default();
        drag.start(Handle::Lower, Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 30.0)), Some((Handle::Lower, 5.0)));
        assert_eq!(drag.update(Point::new(8.0, -10.0)), Some((Handle::Lower, 3.0)));
        assert_eq!(drag.update(Point::new(2.0, 0.0)), Some((Handle::Lower, -6.0)));
        assert_eq!(drag.total_offset(Point::new(2.0, 0.0)), Some((Handle::Lower, 2.0)));
    }

    #[test]
    fn update_without_drag_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert_eq!(drag.total_offset(Point::new(15.0, 25.0)), None);
    }

    #[test]
    fn zero_movement_delta() {
        let mut drag = DragState::default();
        drag.start(Handle::Upper, Point::new(50.0, 50.0));
        assert_eq!(drag.update(Point::new(50.0, 80.0)), Some((Handle::Upper, 0.0)));
    }

    #[test]
    fn starting_the_other_knob_ends_the_first() {
        let mut drag = DragState::default();
        drag.start(Handle::Lower, Point::new(0.0, 0.0));
        drag.start(Handle::Upper, Point::new(100.0, 0.0));

        assert_eq!(drag.active(), Some(Handle::Upper));
        assert!(!drag.is_dragging(Handle::Lower));
        assert_eq!(drag.total_offset(Point::new(90.0, 0.0)), Some((Handle::Upper, -10.0)));
    }

    #[test]
    fn end_and_cancel_return_to_idle() {
        let mut drag = DragState::default();
        drag.start(Handle::Upper, Point::new(0.0, 0.0));
        assert_eq!(drag.end(), Some(Handle::Upper));
        assert_eq!(drag.active(), None);
        assert_eq!(drag.end(), None);

        drag.start(Handle::Lower, Point::new(0.0, 0.0));
        assert_eq!(drag.cancel(), Some(Handle::Lower));
        assert_eq!(drag.active(), None);
        assert_eq!(drag.last_dragged(), Some(Handle::Lower));
    }

    #[test]
    fn restart_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Handle::Lower, Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));

        drag.start(Handle::Lower, Point::new(50.0, 60.0));
        assert_eq!(drag.total_offset(Point::new(55.0, 65.0)), Some((Handle::Lower, 5.0)));
    }
}
