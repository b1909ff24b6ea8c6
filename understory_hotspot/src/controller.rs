// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hotspot overlay controller.
//!
//! ## Overview
//!
//! Owns one trigger/overlay pair. Consumes input events and host ticks,
//! queries geometry through an [`OverlaySurface`], and emits [`Effect`]s.
//!
//! ## Lifecycle
//!
//! `idle → pending → settling → open → closing → idle`
//!
//! - `idle → pending`: pointer enters the trigger while the overlay is closed.
//!   Arms the hover-intent timer and binds trigger-leave.
//! - `pending → idle`: pointer leaves the trigger first. Cancels the timer and
//!   unbinds trigger-leave.
//! - `pending → settling`: the timer fires and [`show`](HotspotController::show)
//!   measures, places and publishes.
//! - `settling → open`: the settle delay elapses. The overlay opens and the
//!   dismissal listeners are bound.
//! - `open → closing`: a dismissal fires [`close`](HotspotController::close).
//! - `closing → idle`: the host reports settled animations through
//!   [`finish_close`](HotspotController::finish_close).
//!
//! A close that is still settling never clears the state of a show that
//! started after it. `finish_close` re-checks that the overlay is still closed
//! and that its ticket is the latest before clearing anything.
//!
//! ## Breakpoints
//!
//! Hover wiring exists only on desktop. Every breakpoint change drops the hover
//! listeners and any pending timer, then rebinds trigger-enter on desktop. A
//! switch to mobile while a placement is settling closes it before it opens.

use alloc::vec::Vec;
use core::time::Duration;

use understory_placement::{Breakpoint, is_outside, place};

use crate::config::{ConfigError, HotspotConfig};
use crate::intent::HoverIntent;
use crate::surface::{OverlaySurface, measure};
use crate::types::{
    AnimationOutcome, CloseTicket, Effect, InputEvent, Key, Listeners, OverlayState, Phase,
    PlacementSignal, Region,
};

/// Hover-driven overlay controller for a single hotspot.
///
/// ## Usage
///
/// - Call [`attach`](Self::attach) on mount and [`detach`](Self::detach) on unmount.
/// - Feed input through [`handle`](Self::handle) and wake the controller with
///   [`tick`](Self::tick) at or after [`next_deadline`](Self::next_deadline).
/// - Apply the returned [`Effect`]s in order.
/// - After [`Effect::AwaitAnimations`], wait for every animation on the overlay
///   to settle (successfully or not) and call [`finish_close`](Self::finish_close).
#[derive(Clone, Debug)]
pub struct HotspotController {
    config: HotspotConfig,
    breakpoint: Breakpoint,
    listeners: Listeners,
    intent: HoverIntent,
    settle_due: Option<Duration>,
    overlay: OverlayState,
    close_seq: u64,
    pending_close: Option<CloseTicket>,
}

impl Default for HotspotController {
    fn default() -> Self {
        Self::new(HotspotConfig::default())
    }
}

impl HotspotController {
    /// Create a detached controller.
    pub fn new(config: HotspotConfig) -> Self {
        Self {
            config,
            breakpoint: Breakpoint::Desktop,
            listeners: Listeners::empty(),
            intent: HoverIntent::new(),
            settle_due: None,
            overlay: OverlayState::default(),
            close_seq: 0,
            pending_close: None,
        }
    }

    /// Create a detached controller after validating `config`.
    pub fn try_new(config: HotspotConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The configuration in use.
    pub fn config(&self) -> &HotspotConfig {
        &self.config
    }

    /// Listeners currently bound.
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Overlay display state.
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Last observed breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Coarse lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.overlay.open {
            Phase::Open
        } else if self.settle_due.is_some() {
            Phase::Settling
        } else if self.intent.is_pending() {
            Phase::Pending
        } else if self.pending_close.is_some() {
            Phase::Closing
        } else {
            Phase::Idle
        }
    }

    /// The earliest time [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.intent.deadline(), self.settle_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Bind breakpoint observation, plus hover wiring if `breakpoint` is desktop.
    pub fn attach(&mut self, breakpoint: Breakpoint) -> Vec<Effect> {
        let mut out = Vec::new();
        self.breakpoint = breakpoint;
        let mut wanted = Listeners::BREAKPOINT;
        if !breakpoint.is_mobile() {
            wanted |= Listeners::TRIGGER_ENTER;
        }
        self.bind(wanted, &mut out);
        #[cfg(feature = "tracing")]
        tracing::debug!(breakpoint = ?breakpoint, "hotspot attached");
        out
    }

    /// Unbind everything and drop any pending timer.
    ///
    /// An open or settling overlay is closed first, so the host still gets
    /// [`Effect::Hide`] and [`Effect::AwaitAnimations`] and a later
    /// [`attach`](Self::attach) starts from a closed overlay.
    ///
    /// Safe to call when [`attach`](Self::attach) bound nothing but breakpoint
    /// observation (mobile mounts), and safe to call twice.
    pub fn detach(&mut self) -> Vec<Effect> {
        let mut out = self.close();
        self.unbind(Listeners::all(), &mut out);
        #[cfg(feature = "tracing")]
        tracing::debug!("hotspot detached");
        out
    }

    /// Measure, place and publish; the overlay opens once the settle delay elapses.
    ///
    /// Does nothing if the overlay is already open or about to open. If
    /// measurement fails (absent overlay, trigger or container) the show is
    /// abandoned without effects.
    pub fn show<S: OverlaySurface + ?Sized>(
        &mut self,
        now: Duration,
        surface: &mut S,
    ) -> Vec<Effect> {
        let mut out = Vec::new();
        if self.overlay.open || self.settle_due.is_some() {
            return out;
        }
        self.intent.cancel();

        let m = match measure(surface) {
            Ok(m) => m,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "hotspot placement aborted");
                return out;
            }
        };
        let gaps = self.config.gaps;
        let placement = place(&m, gaps);
        let (_, trigger) = m.to_container_space();
        let rect = placement.overlay_rect(trigger, m.overlay, gaps);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            horizontal = placement.horizontal.as_str(),
            vertical = placement.vertical.as_str(),
            offset = placement.offset,
            "hotspot placed"
        );

        self.overlay.placement = Some(placement);
        self.settle_due = Some(now.saturating_add(self.config.settle_delay));
        out.push(Effect::Publish(PlacementSignal { placement, rect }));
        out
    }

    /// Hide the overlay, unbind dismissal listeners and await exit animations.
    ///
    /// Always clears the hover-intent timer. If the overlay was neither open
    /// nor settling, only the timer and trigger-leave are dropped.
    pub fn close(&mut self) -> Vec<Effect> {
        let mut out = Vec::new();
        self.intent.cancel();
        let was_active = self.overlay.open || self.settle_due.take().is_some();
        self.unbind(Listeners::TRIGGER_LEAVE | Listeners::DISMISS, &mut out);
        if !was_active {
            return out;
        }

        self.overlay.open = false;
        self.overlay.closing = true;
        self.close_seq += 1;
        let ticket = CloseTicket(self.close_seq);
        self.pending_close = Some(ticket);
        out.push(Effect::Hide);
        out.push(Effect::AwaitAnimations(ticket));

        #[cfg(feature = "tracing")]
        tracing::debug!(ticket = ticket.0, "hotspot closing");
        out
    }

    /// Complete a close once all its animations have settled.
    ///
    /// Rejected animations do not abort the close. Clears the showing, closing
    /// and placement state only if `ticket` is the latest close and the overlay
    /// has not been reopened since.
    pub fn finish_close<I>(&mut self, ticket: CloseTicket, outcomes: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = AnimationOutcome>,
    {
        let mut out = Vec::new();
        #[cfg(feature = "tracing")]
        {
            let rejected = outcomes
                .into_iter()
                .filter(|o| *o == AnimationOutcome::Rejected)
                .count();
            if rejected > 0 {
                tracing::debug!(ticket = ticket.0, rejected, "exit animations rejected");
            }
        }
        #[cfg(not(feature = "tracing"))]
        drop(outcomes);

        if self.pending_close != Some(ticket) {
            #[cfg(feature = "tracing")]
            tracing::trace!(ticket = ticket.0, "stale close ticket ignored");
            return out;
        }
        self.pending_close = None;
        if self.overlay.open || self.settle_due.is_some() {
            // Reopened while the exit animations ran; the new show owns the state.
            return out;
        }

        self.overlay.showing = false;
        self.overlay.closing = false;
        self.overlay.placement = None;
        out.push(Effect::Clear);
        out
    }

    /// Fire due timers: hover intent first, then the settle delay.
    pub fn tick<S: OverlaySurface + ?Sized>(
        &mut self,
        now: Duration,
        surface: &mut S,
    ) -> Vec<Effect> {
        let mut out = Vec::new();
        if self.intent.fire_if_due(now) {
            out.extend(self.show(now, surface));
        }
        if self.settle_due.is_some_and(|due| now >= due) {
            self.settle_due = None;
            self.open(&mut out);
        }
        out
    }

    /// Deliver one input event.
    ///
    /// Events whose listener is not currently bound are ignored.
    pub fn handle<S: OverlaySurface + ?Sized>(
        &mut self,
        now: Duration,
        event: InputEvent,
        surface: &mut S,
    ) -> Vec<Effect> {
        let mut out = Vec::new();
        if !self.listeners.contains(event.listener()) {
            return out;
        }
        let active = self.overlay.open || self.settle_due.is_some();
        match event {
            InputEvent::TriggerEnter => self.on_trigger_enter(now, &mut out),
            InputEvent::TriggerLeave { to } => {
                if active {
                    if to != Region::Overlay {
                        out.extend(self.close());
                    }
                } else {
                    self.intent.cancel();
                    self.unbind(Listeners::TRIGGER_LEAVE, &mut out);
                }
            }
            InputEvent::OverlayLeave { to } => {
                if self.overlay.open && to != Region::Trigger {
                    out.extend(self.close());
                }
            }
            InputEvent::Click { at } => {
                if self.overlay.open
                    && surface
                        .overlay_rect()
                        .is_some_and(|bounds| is_outside(bounds, at))
                {
                    out.extend(self.close());
                }
            }
            InputEvent::KeyDown(key) => {
                if self.overlay.open && key == Key::Escape {
                    out.extend(self.close());
                }
            }
            InputEvent::KeyUp(_) => {
                if self.overlay.open && !surface.overlay_contains_focus() {
                    out.extend(self.close());
                }
            }
            InputEvent::BreakpointChanged(bp) => self.on_breakpoint(bp, &mut out),
        }
        out
    }

    fn on_trigger_enter(&mut self, now: Duration, out: &mut Vec<Effect>) {
        if self.overlay.open || self.settle_due.is_some() {
            return;
        }
        if self.intent.arm(now, self.config.hover_intent_delay) {
            self.bind(Listeners::TRIGGER_LEAVE, out);
            #[cfg(feature = "tracing")]
            tracing::trace!(due = ?self.intent.deadline(), "hover intent armed");
        }
    }

    fn on_breakpoint(&mut self, bp: Breakpoint, out: &mut Vec<Effect>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.breakpoint, to = ?bp, "breakpoint changed");
        self.breakpoint = bp;
        if bp.is_mobile() && !self.overlay.open && self.settle_due.is_some() {
            // A show already published on desktop must not open on mobile.
            out.extend(self.close());
        }
        self.intent.cancel();
        self.unbind(Listeners::HOVER, out);
        if !bp.is_mobile() {
            self.bind(Listeners::TRIGGER_ENTER, out);
        }
    }

    fn open(&mut self, out: &mut Vec<Effect>) {
        self.overlay.open = true;
        self.overlay.showing = true;
        self.overlay.closing = false;
        out.push(Effect::Open);
        self.bind(Listeners::DISMISS, out);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            horizontal = self.overlay.placement.map(|p| p.horizontal.as_str()),
            "hotspot opened"
        );
    }

    fn bind(&mut self, listeners: Listeners, out: &mut Vec<Effect>) {
        let fresh = listeners.difference(self.listeners);
        if !fresh.is_empty() {
            self.listeners.insert(fresh);
            out.push(Effect::Subscribe(fresh));
        }
    }

    fn unbind(&mut self, listeners: Listeners, out: &mut Vec<Effect>) {
        let held = listeners.intersection(self.listeners);
        if !held.is_empty() {
            self.listeners.remove(held);
            out.push(Effect::Unsubscribe(held));
        }
    }
}
