// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_hotspot::{
    AnimationOutcome, Effect, HotspotController, InputEvent, Key, OverlaySurface,
};
use understory_placement::Breakpoint;

struct Page;

impl OverlaySurface for Page {
    type Style = ();

    fn container_rect(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 1200.0, 800.0))
    }
    fn trigger_rect(&self) -> Option<Rect> {
        Some(Rect::new(600.0, 700.0, 640.0, 740.0))
    }
    fn overlay_rect(&self) -> Option<Rect> {
        Some(Rect::new(650.0, 500.0, 950.0, 740.0))
    }
    fn overlay_contains_focus(&self) -> bool {
        false
    }
    fn stash_style(&mut self) -> Option<()> {
        Some(())
    }
    fn apply_measuring_style(&mut self) {}
    fn natural_size(&self) -> Option<Size> {
        Some(Size::new(300.0, 240.0))
    }
    fn restore_style(&mut self, _style: ()) {}
}

// One hover → open → Escape → settle cycle.
fn bench_cycle(c: &mut Criterion) {
    let ms = Duration::from_millis;
    let mut page = Page;
    let mut hotspot = HotspotController::default();
    let _ = hotspot.attach(Breakpoint::Desktop);
    let mut t = 0_u64;
    c.bench_function("hover_open_escape_cycle", |b| {
        b.iter(|| {
            let _ = hotspot.handle(ms(t), InputEvent::TriggerEnter, &mut page);
            let _ = hotspot.tick(ms(t + 120), &mut page);
            let _ = hotspot.tick(ms(t + 220), &mut page);
            let fx = hotspot.handle(ms(t + 300), InputEvent::KeyDown(Key::Escape), &mut page);
            if let Some(Effect::AwaitAnimations(ticket)) = fx.last().copied() {
                black_box(hotspot.finish_close(ticket, [AnimationOutcome::Finished]));
            }
            t += 1_000;
        });
    });
}

criterion_group!(benches, bench_cycle);
criterion_main!(benches);
