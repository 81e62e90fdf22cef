// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider basics.
//!
//! Drive a stepped range slider with a scripted pointer and print each frame.
//!
//! Run:
//! - `cargo run -p understory_range_demos --example range_slider_basics`
//! - `RUST_LOG=trace cargo run -p understory_range_demos --example range_slider_basics`

use kurbo::{Point, Size};
use understory_range::{Handle, RangeConfig, ValueRange};
use understory_range_demos::{ascii_track, init_logging};
use understory_range_slider::{RangeSlider, VisualCapabilities, to_track_space};

const WIDGET: Size = Size::new(320.0, 40.0);

fn print_frame(label: &str, slider: &RangeSlider, range: &ValueRange) {
    if let Some(scene) = slider.scene(range) {
        println!(
            "{label:>24}  {}  [{:>5.1}, {:>5.1}]",
            ascii_track(&scene, 64),
            range.lower,
            range.upper
        );
    }
}

fn main() {
    init_logging();

    let config = RangeConfig::new()
        .bounds(0.0, 100.0)
        .step(5.0)
        .tick(0.0, true)
        .tick(25.0, true)
        .tick(50.0, true)
        .tick(75.0, true)
        .tick(100.0, true);
    let mut slider = RangeSlider::new(config).capabilities(VisualCapabilities::ENHANCED);
    let mut range = ValueRange::new(25.0, 50.0);

    // The first layout pass reports the widget width.
    slider.layout(WIDGET.width);
    print_frame("initial", &slider, &range);

    // Grab the lower knob in widget-local coordinates.
    let Some(lower_x) = slider.knob_offset(&range, Handle::Lower) else {
        return;
    };
    let local = Point::new(lower_x + WIDGET.width / 2.0, WIDGET.height / 2.0);
    let grabbed = slider.pointer_down(to_track_space(local, WIDGET), &range);
    println!("grabbed {grabbed:?}");

    let mut now_ms = 0;
    for step in 1..=12 {
        now_ms += 16;
        let moved = Point::new(local.x + f64::from(step) * 12.0, local.y);
        if let Some(changed) = slider.pointer_move(to_track_space(moved, WIDGET), &mut range) {
            let label = format!("moved to {:.0}..{:.0}", changed.lower, changed.upper);
            print_frame(&label, &slider, &range);
        }
    }
    slider.pointer_up(now_ms);

    // Knobs shrink back after release.
    while let Some(deadline) = slider.next_deadline() {
        now_ms = deadline;
        if slider.advance(now_ms) {
            println!("knob restored at {now_ms}ms: {:?}", slider.knob_size(Handle::Lower));
        }
    }

    // A host can overwrite the range at any time; the slider repairs it.
    let mut external = ValueRange::new(140.0, 60.0);
    if let Some(repaired) = slider.set_range(&mut external) {
        print_frame(
            &format!("external {:.0}..{:.0}", repaired.lower, repaired.upper),
            &slider,
            &external,
        );
    }
}
