// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hotspot --heading-base-level=0

//! Understory Hotspot: a deterministic, `no_std` controller for hover-triggered overlays.
//!
//! ## Overview
//!
//! A hotspot is a trigger (for example a dot on a product image) paired with an
//! overlay that opens when the pointer rests on the trigger. This crate owns
//! the interaction: hover intent, a fresh placement on every show, light
//! dismiss, and breakpoint adaptation. Geometry comes from
//! [`understory_placement`].
//!
//! The controller performs no I/O and reads no clock. The host:
//! - answers geometry and focus queries through [`OverlaySurface`],
//! - delivers [`InputEvent`]s and periodic ticks with a monotonic timestamp,
//! - applies the [`Effect`]s the controller returns, in order.
//!
//! ## Light dismiss
//!
//! While open, the overlay closes when the pointer leaves the trigger without
//! entering the overlay, leaves the overlay without entering the trigger,
//! clicks outside the overlay, presses `Escape`, or releases a key while focus
//! is no longer inside the overlay.
//!
//! ## Closing and reopening
//!
//! A close hides the overlay immediately and then asks the host to wait for
//! exit animations ([`Effect::AwaitAnimations`]). Report completion with
//! [`HotspotController::finish_close`]; failed animations do not abort it. If
//! the overlay reopened in the meantime, the stale completion leaves the new
//! state alone.
//!
//! ## Breakpoints
//!
//! Hover wiring exists only on desktop. On mobile the trigger is expected to be
//! a plain link, so nothing is bound beyond breakpoint observation.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_hotspot::{
//!     AnimationOutcome, Effect, HotspotController, InputEvent, Key, OverlaySurface, Phase,
//! };
//! use understory_placement::{Breakpoint, Horizontal};
//!
//! struct Page;
//! impl OverlaySurface for Page {
//!     type Style = ();
//!     fn container_rect(&self) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 400.0, 400.0)) }
//!     fn trigger_rect(&self) -> Option<Rect> { Some(Rect::new(350.0, 100.0, 390.0, 140.0)) }
//!     fn overlay_rect(&self) -> Option<Rect> { Some(Rect::new(240.0, 100.0, 340.0, 200.0)) }
//!     fn overlay_contains_focus(&self) -> bool { false }
//!     fn stash_style(&mut self) -> Option<()> { Some(()) }
//!     fn apply_measuring_style(&mut self) {}
//!     fn natural_size(&self) -> Option<Size> { Some(Size::new(100.0, 100.0)) }
//!     fn restore_style(&mut self, _: ()) {}
//! }
//!
//! let ms = Duration::from_millis;
//! let mut page = Page;
//! let mut hotspot = HotspotController::default();
//! hotspot.attach(Breakpoint::Desktop);
//!
//! hotspot.handle(ms(0), InputEvent::TriggerEnter, &mut page);
//! assert_eq!(hotspot.phase(), Phase::Pending);
//!
//! // Hover intent fires: placement is published first...
//! let fx = hotspot.tick(ms(120), &mut page);
//! assert!(matches!(fx[0], Effect::Publish(s) if s.placement.horizontal == Horizontal::Left));
//!
//! // ...and the overlay opens after the settle delay.
//! let fx = hotspot.tick(ms(220), &mut page);
//! assert_eq!(fx[0], Effect::Open);
//!
//! // Escape closes it; the host then awaits exit animations.
//! let fx = hotspot.handle(ms(500), InputEvent::KeyDown(Key::Escape), &mut page);
//! let Some(Effect::AwaitAnimations(ticket)) = fx.last().copied() else { unreachable!() };
//! assert_eq!(hotspot.finish_close(ticket, [AnimationOutcome::Finished]), vec![Effect::Clear]);
//! assert_eq!(hotspot.phase(), Phase::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod intent;
pub mod surface;
mod types;

pub use config::{ConfigError, HotspotConfig};
pub use controller::HotspotController;
pub use surface::OverlaySurface;
pub use types::{
    AnimationOutcome, CloseTicket, Effect, InputEvent, Key, Listeners, OverlayState, Phase,
    PlacementSignal, Region,
};
