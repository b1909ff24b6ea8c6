// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement sweep.
//!
//! Moves a trigger across a grid inside a container and prints the chosen
//! placement at each cell, which makes the side preference, the vertical flip
//! and the centered fallback easy to see at a glance.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_sweep`

use kurbo::{Rect, Size};
use understory_placement::{Gaps, Horizontal, Measurements, Vertical, place};

fn glyph(h: Horizontal, v: Vertical, corrected: bool) -> char {
    match (h, v, corrected) {
        (_, _, true) => '*',
        (Horizontal::Right, Vertical::Bottom, _) => '↘',
        (Horizontal::Right, Vertical::Top, _) => '↗',
        (Horizontal::Left, Vertical::Bottom, _) => '↙',
        (Horizontal::Left, Vertical::Top, _) => '↖',
        (Horizontal::Center, Vertical::Bottom, _) => '↓',
        (Horizontal::Center, Vertical::Top, _) => '↑',
    }
}

fn sweep(label: &str, container: Rect, overlay: Size) {
    println!("== {label}: container {container:?}, overlay {overlay:?} ==");
    let step = 40.0;
    let rows = (container.height() / step) as usize;
    let cols = (container.width() / step) as usize;
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..cols {
            let x = container.x0 + col as f64 * step;
            let y = container.y0 + row as f64 * step;
            let m = Measurements {
                container,
                trigger: Rect::new(x + 10.0, y + 10.0, x + 30.0, y + 30.0),
                overlay,
            };
            let p = place(&m, Gaps::DEFAULT);
            line.push(glyph(p.horizontal, p.vertical, p.offset.is_some()));
        }
        println!("  {line}");
    }
}

fn main() {
    sweep(
        "wide",
        Rect::new(0.0, 0.0, 800.0, 400.0),
        Size::new(200.0, 160.0),
    );
    sweep(
        "narrow",
        Rect::new(0.0, 0.0, 320.0, 480.0),
        Size::new(220.0, 160.0),
    );
    sweep(
        "short",
        Rect::new(0.0, 0.0, 800.0, 200.0),
        Size::new(200.0, 260.0),
    );
}
