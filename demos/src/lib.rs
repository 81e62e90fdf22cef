// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the range slider demos.

use understory_range_slider::SliderScene;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `debug`
/// for the range crates.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,understory_range=debug,understory_range_slider=debug")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}

/// Draws `scene` as one line of text, `columns` characters wide.
///
/// `=` is the selected segment, `-` the rest of the track, `|` a tick, and
/// `[` / `]` the lower and upper knobs.
#[must_use]
pub fn ascii_track(scene: &SliderScene, columns: usize) -> String {
    let track = scene.track.shape.rect();
    let to_column = |x: f64| column(x - track.x0, track.width(), columns);

    let mut cells = vec!['-'; columns];
    let selection = scene.selection.shape.rect();
    for cell in &mut cells[to_column(selection.x0)..=to_column(selection.x1)] {
        *cell = '=';
    }
    for mark in &scene.ticks {
        cells[to_column(mark.rect.center().x)] = '|';
    }
    for (knob, glyph) in scene.knobs.iter().zip(['[', ']']) {
        cells[to_column(knob.shape.rect().center().x)] = glyph;
    }
    cells.into_iter().collect()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the fraction is clamped to [0, 1] before scaling"
)]
fn column(x: f64, width: f64, columns: usize) -> usize {
    let fraction = if width > 0.0 { x / width } else { 0.0 };
    (fraction.clamp(0.0, 1.0) * columns.saturating_sub(1) as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use understory_range::{RangeConfig, ValueRange};
    use understory_range_slider::RangeSlider;

    use super::ascii_track;

    #[test]
    fn full_range_fills_the_track() {
        let config = RangeConfig::new()
            .bounds(0.0, 100.0)
            .width(300.0)
            .knob_size(Size::new(50.0, 30.0));
        let slider = RangeSlider::new(config);
        let scene = slider.scene(&ValueRange::new(0.0, 100.0)).unwrap();
        let line: Vec<char> = ascii_track(&scene, 61).chars().collect();

        assert_eq!(line.len(), 61);
        assert_eq!(line[5], '[');
        assert_eq!(line[55], ']');
        assert!(line.iter().all(|cell| matches!(cell, '=' | '[' | ']')));
    }
}
