// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifies one of the two draggable knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The knob controlling [`ValueRange::lower`](crate::ValueRange::lower).
    Lower,
    /// The knob controlling [`ValueRange::upper`](crate::ValueRange::upper).
    Upper,
}

impl Handle {
    /// Both handles, lower first.
    pub const ALL: [Self; 2] = [Self::Lower, Self::Upper];

    /// The opposite handle.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }

    /// Stable index (`Lower` is 0), handy for per-handle arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Lower => 0,
            Self::Upper => 1,
        }
    }
}
