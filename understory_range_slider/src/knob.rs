// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cosmetic knob sizing.
//!
//! A held knob grows; once released it stays grown for [`SHRINK_DELAY_MS`]
//! and then snaps back to its baseline size. Timestamps are supplied by the
//! host in milliseconds from any monotonic clock, the same convention used
//! for click recognition elsewhere in Understory.
//!
//! The sizes tracked here only affect how knobs are drawn. The value model
//! always maps positions with the baseline knob size.

use kurbo::Size;
use understory_range::Handle;

/// Delay between releasing a knob and restoring its baseline size.
pub const SHRINK_DELAY_MS: u64 = 250;

/// Default growth factor for a held knob.
pub const DEFAULT_GROWTH: f64 = 1.25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum KnobPhase {
    #[default]
    Resting,
    Grown,
    ShrinkAt(u64),
}

/// Drawn knob sizes for both handles.
#[derive(Clone, Copy, Debug)]
pub struct KnobSizes {
    baseline: Size,
    growth: f64,
    phases: [KnobPhase; 2],
}

impl KnobSizes {
    /// Creates resting knobs of the given baseline size.
    #[must_use]
    pub fn new(baseline: Size) -> Self {
        Self {
            baseline,
            growth: DEFAULT_GROWTH,
            phases: [KnobPhase::Resting; 2],
        }
    }

    /// Sets how much a held knob grows. Factors below `1.0` are raised to `1.0`.
    #[must_use]
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = if growth.is_finite() { growth.max(1.0) } else { 1.0 };
        self
    }

    /// Baseline knob size.
    #[must_use]
    pub fn baseline(&self) -> Size {
        self.baseline
    }

    /// Grows `handle`'s knob immediately.
    pub fn grow(&mut self, handle: Handle) {
        self.phases[handle.index()] = KnobPhase::Grown;
    }

    /// Schedules `handle`'s knob to shrink [`SHRINK_DELAY_MS`] after `now_ms`.
    pub fn release(&mut self, handle: Handle, now_ms: u64) {
        if self.phases[handle.index()] != KnobPhase::Resting {
            self.phases[handle.index()] =
                KnobPhase::ShrinkAt(now_ms.saturating_add(SHRINK_DELAY_MS));
        }
    }

    /// Restores `handle`'s knob to baseline immediately.
    pub fn reset(&mut self, handle: Handle) {
        self.phases[handle.index()] = KnobPhase::Resting;
    }

    /// Restores both knobs to baseline immediately.
    pub fn reset_all(&mut self) {
        self.phases = [KnobPhase::Resting; 2];
    }

    /// Applies pending shrinks that are due at `now_ms`.
    ///
    /// Returns `true` if any knob changed size.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        for phase in &mut self.phases {
            if let KnobPhase::ShrinkAt(deadline) = *phase
                && now_ms >= deadline
            {
                *phase = KnobPhase::Resting;
                changed = true;
            }
        }
        changed
    }

    /// Earliest pending shrink, for hosts that schedule redraws.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.phases
            .iter()
            .filter_map(|phase| match phase {
                KnobPhase::ShrinkAt(deadline) => Some(*deadline),
                _ => None,
            })
            .min()
    }

    /// Size at which `handle`'s knob is drawn.
    #[must_use]
    pub fn size(&self, handle: Handle) -> Size {
        match self.phases[handle.index()] {
            KnobPhase::Resting => self.baseline,
            KnobPhase::Grown | KnobPhase::ShrinkAt(_) => self.baseline * self.growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Size = Size::new(40.0, 20.0);

    #[test]
    fn knobs_start_at_baseline() {
        let knobs = KnobSizes::new(BASE);
        assert_eq!(knobs.size(Handle::Lower), BASE);
        assert_eq!(knobs.size(Handle::Upper), BASE);
        assert_eq!(knobs.next_deadline(), None);
    }

    #[test]
    fn held_knob_grows_then_shrinks_after_delay() {
        let mut knobs = KnobSizes::new(BASE).with_growth(1.5);
        knobs.grow(Handle::Upper);
        assert_eq!(knobs.size(Handle::Upper), Size::new(60.0, 30.0));
        assert_eq!(knobs.size(Handle::Lower), BASE);

        knobs.release(Handle::Upper, 1_000);
        assert_eq!(knobs.next_deadline(), Some(1_250));
        assert!(!knobs.advance(1_100));
        assert_eq!(knobs.size(Handle::Upper), Size::new(60.0, 30.0));

        assert!(knobs.advance(1_250));
        assert_eq!(knobs.size(Handle::Upper), BASE);
        assert_eq!(knobs.next_deadline(), None);
    }

    #[test]
    fn regrabbing_cancels_a_pending_shrink() {
        let mut knobs = KnobSizes::new(BASE);
        knobs.grow(Handle::Lower);
        knobs.release(Handle::Lower, 0);
        knobs.grow(Handle::Lower);
        assert!(!knobs.advance(10_000));
        assert_eq!(knobs.size(Handle::Lower), BASE * DEFAULT_GROWTH);
    }

    #[test]
    fn releasing_a_resting_knob_schedules_nothing() {
        let mut knobs = KnobSizes::new(BASE);
        knobs.release(Handle::Lower, 5);
        assert_eq!(knobs.next_deadline(), None);
    }

    #[test]
    fn reset_is_immediate() {
        let mut knobs = KnobSizes::new(BASE);
        knobs.grow(Handle::Lower);
        knobs.grow(Handle::Upper);
        knobs.reset(Handle::Lower);
        assert_eq!(knobs.size(Handle::Lower), BASE);
        knobs.reset_all();
        assert_eq!(knobs.size(Handle::Upper), BASE);
    }

    #[test]
    fn shrinking_growth_is_rejected() {
        let mut knobs = KnobSizes::new(BASE).with_growth(0.5);
        knobs.grow(Handle::Lower);
        assert_eq!(knobs.size(Handle::Lower), BASE);
    }
}
