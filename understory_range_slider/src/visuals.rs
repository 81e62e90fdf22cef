// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling and the knob rendering capability split.
//!
//! How a knob looks depends on what the platform can draw. Hosts detect
//! their capabilities once, at composition time, and pick a [`Visuals`]
//! implementation from them with [`Visuals::select`]:
//!
//! - [`EnhancedVisuals`]: the held knob turns into an interactive glass
//!   material and its solid fill clears; at rest it is solid.
//! - [`BasicVisuals`]: knobs are always solid.
//!
//! None of this reaches the value model.

use peniko::Color;

/// Rendering features available on the host platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisualCapabilities {
    /// The renderer can draw translucent "glass" materials.
    pub glass_material: bool,
}

impl VisualCapabilities {
    /// Nothing beyond solid fills.
    pub const BASIC: Self = Self {
        glass_material: false,
    };

    /// Glass materials are available.
    pub const ENHANCED: Self = Self {
        glass_material: true,
    };
}

/// Appearance of one tick mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    /// Fill color.
    pub color: Color,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x8e, 0x8e, 0x93),
            width: 1.5,
            height: 8.0,
        }
    }
}

/// Colors and sizes of a range slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderStyle {
    /// Color of the selected segment between the knobs.
    pub tint: Color,
    /// Color of the full track.
    pub track_color: Color,
    /// Solid knob color.
    pub knob_color: Color,
    /// Thickness of the track in pixels.
    pub track_height: f64,
    /// Style for ticks that do not carry their own.
    pub tick_style: TickStyle,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            tint: Color::from_rgb8(0x00, 0x7a, 0xff),
            track_color: Color::from_rgb8(0x8e, 0x8e, 0x93),
            knob_color: Color::from_rgb8(0x1c, 0x1c, 0x1e),
            track_height: 8.0,
            tick_style: TickStyle::default(),
        }
    }
}

impl SliderStyle {
    /// Returns the style with a different tint.
    #[must_use]
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}

/// Surface material of a knob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnobMaterial {
    /// Plain fill.
    Solid,
    /// Translucent glass; `interactive` glass reacts to the pointer.
    Glass {
        /// Whether the glass responds to touch.
        interactive: bool,
    },
}

/// How a knob should be painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobAppearance {
    /// Fill color, drawn beneath the material.
    pub fill: Color,
    /// Surface material.
    pub material: KnobMaterial,
}

/// Renderer-facing knob styling.
pub trait KnobVisuals {
    /// Appearance of a knob, held or not.
    fn knob(&self, style: &SliderStyle, dragging: bool) -> KnobAppearance;
}

/// Knob styling for renderers with glass materials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnhancedVisuals;

impl KnobVisuals for EnhancedVisuals {
    fn knob(&self, style: &SliderStyle, dragging: bool) -> KnobAppearance {
        if dragging {
            KnobAppearance {
                fill: Color::TRANSPARENT,
                material: KnobMaterial::Glass { interactive: true },
            }
        } else {
            KnobAppearance {
                fill: style.knob_color,
                material: KnobMaterial::Solid,
            }
        }
    }
}

/// Knob styling for renderers with solid fills only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BasicVisuals;

impl KnobVisuals for BasicVisuals {
    fn knob(&self, style: &SliderStyle, _dragging: bool) -> KnobAppearance {
        KnobAppearance {
            fill: style.knob_color,
            material: KnobMaterial::Solid,
        }
    }
}

/// One of the built-in [`KnobVisuals`], chosen from capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visuals {
    /// See [`EnhancedVisuals`].
    Enhanced(EnhancedVisuals),
    /// See [`BasicVisuals`].
    Basic(BasicVisuals),
}

impl Default for Visuals {
    fn default() -> Self {
        Self::Basic(BasicVisuals)
    }
}

impl Visuals {
    /// Picks the richest visuals the capabilities allow.
    #[must_use]
    pub fn select(capabilities: VisualCapabilities) -> Self {
        if capabilities.glass_material {
            Self::Enhanced(EnhancedVisuals)
        } else {
            Self::Basic(BasicVisuals)
        }
    }
}

impl KnobVisuals for Visuals {
    fn knob(&self, style: &SliderStyle, dragging: bool) -> KnobAppearance {
        match self {
            Self::Enhanced(visuals) => visuals.knob(style, dragging),
            Self::Basic(visuals) => visuals.knob(style, dragging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_capabilities() {
        assert_eq!(
            Visuals::select(VisualCapabilities::ENHANCED),
            Visuals::Enhanced(EnhancedVisuals)
        );
        assert_eq!(
            Visuals::select(VisualCapabilities::BASIC),
            Visuals::Basic(BasicVisuals)
        );
        assert_eq!(Visuals::default(), Visuals::Basic(BasicVisuals));
    }

    #[test]
    fn enhanced_knob_turns_to_glass_while_held() {
        let style = SliderStyle::default();
        let held = EnhancedVisuals.knob(&style, true);
        assert_eq!(held.material, KnobMaterial::Glass { interactive: true });
        assert_eq!(held.fill, Color::TRANSPARENT);

        let resting = EnhancedVisuals.knob(&style, false);
        assert_eq!(resting.material, KnobMaterial::Solid);
        assert_eq!(resting.fill, style.knob_color);
    }

    #[test]
    fn basic_knob_never_changes() {
        let style = SliderStyle::default();
        assert_eq!(
            BasicVisuals.knob(&style, true),
            BasicVisuals.knob(&style, false)
        );
    }

    #[test]
    fn tint_replaces_only_the_tint() {
        let red = Color::from_rgb8(0xff, 0, 0);
        let style = SliderStyle::default().tint(red);
        assert_eq!(style.tint, red);
        assert_eq!(style.track_color, SliderStyle::default().track_color);
    }
}
