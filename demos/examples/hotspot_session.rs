// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot session.
//!
//! Drives a controller through a scripted sequence of pointer, key and
//! breakpoint events against an in-memory page, applying every effect the way
//! a real host would: tracking bound listeners, positioning the overlay from
//! the published placement, and settling exit animations.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example hotspot_session`

use std::time::Duration;

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_hotspot::{
    AnimationOutcome, Effect, HotspotController, InputEvent, Key, Listeners, OverlaySurface, Region,
};
use understory_placement::Breakpoint;

/// A page with one hotspot on a product image.
#[derive(Debug)]
struct Page {
    image: Rect,
    dot: Rect,
    panel_size: Size,
    panel_at: Option<Rect>,
    measuring: bool,
    bound: Listeners,
}

impl OverlaySurface for Page {
    type Style = bool;

    fn container_rect(&self) -> Option<Rect> {
        Some(self.image)
    }

    fn trigger_rect(&self) -> Option<Rect> {
        Some(self.dot)
    }

    fn overlay_rect(&self) -> Option<Rect> {
        self.panel_at
    }

    fn overlay_contains_focus(&self) -> bool {
        false
    }

    fn stash_style(&mut self) -> Option<bool> {
        Some(self.measuring)
    }

    fn apply_measuring_style(&mut self) {
        self.measuring = true;
    }

    fn natural_size(&self) -> Option<Size> {
        Some(self.panel_size)
    }

    fn restore_style(&mut self, style: bool) {
        self.measuring = style;
    }
}

impl Page {
    fn apply(&mut self, hotspot: &mut HotspotController, effects: Vec<Effect>) {
        for effect in effects {
            println!("    {effect:?}");
            match effect {
                Effect::Subscribe(l) => self.bound.insert(l),
                Effect::Unsubscribe(l) => self.bound.remove(l),
                Effect::Publish(signal) => {
                    self.panel_at = Some(signal.rect + self.image.origin().to_vec2());
                }
                Effect::Open | Effect::Hide => {}
                Effect::AwaitAnimations(ticket) => {
                    // No animation engine here: report a single finished fade-out.
                    let more = hotspot.finish_close(ticket, [AnimationOutcome::Finished]);
                    self.apply(hotspot, more);
                }
                Effect::Clear => self.panel_at = None,
            }
        }
        assert_eq!(self.bound, hotspot.listeners(), "host and controller agree");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ms = Duration::from_millis;
    let mut page = Page {
        image: Rect::new(100.0, 100.0, 500.0, 500.0),
        dot: Rect::new(450.0, 420.0, 490.0, 460.0),
        panel_size: Size::new(100.0, 140.0),
        panel_at: None,
        measuring: false,
        bound: Listeners::empty(),
    };
    let mut hotspot = HotspotController::default();

    println!("== attach (desktop) ==");
    let fx = hotspot.attach(Breakpoint::Desktop);
    page.apply(&mut hotspot, fx);

    let script = [
        (0, InputEvent::TriggerEnter),
        (60, InputEvent::TriggerLeave { to: Region::Elsewhere }),
        (200, InputEvent::TriggerEnter),
        (450, InputEvent::TriggerLeave { to: Region::Overlay }),
        (600, InputEvent::Click { at: Point::new(400.0, 400.0) }),
        (700, InputEvent::KeyDown(Key::Escape)),
        (900, InputEvent::TriggerEnter),
        (950, InputEvent::BreakpointChanged(Breakpoint::Mobile)),
        (1_500, InputEvent::BreakpointChanged(Breakpoint::Desktop)),
    ];

    let mut now = Duration::ZERO;
    for (at, event) in script {
        let at = ms(at);
        // Fire any timers that fall due before the next event.
        while let Some(due) = hotspot.next_deadline().filter(|d| *d <= at) {
            now = due;
            println!("== tick @ {}ms ==", now.as_millis());
            let fx = hotspot.tick(now, &mut page);
            page.apply(&mut hotspot, fx);
        }
        now = at;
        println!("== {event:?} @ {}ms ==", now.as_millis());
        let fx = hotspot.handle(now, event, &mut page);
        page.apply(&mut hotspot, fx);
        println!("    phase: {:?}", hotspot.phase());
    }

    println!("== detach ==");
    let fx = hotspot.detach();
    page.apply(&mut hotspot, fx);
    assert!(page.bound.is_empty());
}
