// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: listeners, input events, effects, and overlay state.
//!
//! ## Overview
//!
//! The controller never touches a host directly except through
//! [`OverlaySurface`](crate::surface::OverlaySurface) queries. Everything it
//! wants the host to do comes back as a sequence of [`Effect`] values.

use kurbo::{Point, Rect};
use understory_placement::{Breakpoint, Placement};

bitflags::bitflags! {
    /// Listener registrations the controller holds on the host.
    ///
    /// The host mirrors these with real event subscriptions. Events for
    /// listeners not currently held are ignored by
    /// [`HotspotController::handle`](crate::HotspotController::handle),
    /// just as an unbound DOM listener never fires.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Breakpoint change notifications. Held for the whole mount.
        const BREAKPOINT     = 0b0000_0001;
        /// Pointer entering the trigger. Desktop only.
        const TRIGGER_ENTER  = 0b0000_0010;
        /// Pointer leaving the trigger.
        const TRIGGER_LEAVE  = 0b0000_0100;
        /// Pointer leaving the overlay.
        const OVERLAY_LEAVE  = 0b0000_1000;
        /// Document-level clicks.
        const OUTSIDE_CLICK  = 0b0001_0000;
        /// Document-level key presses (Escape).
        const ESCAPE_KEYDOWN = 0b0010_0000;
        /// Document-level key releases (focus loss).
        const FOCUS_KEYUP    = 0b0100_0000;

        /// Listeners that exist only while hover wiring is active.
        const HOVER = Self::TRIGGER_ENTER.bits() | Self::TRIGGER_LEAVE.bits();
        /// Listeners registered when the overlay opens.
        const DISMISS = Self::OVERLAY_LEAVE.bits()
            | Self::OUTSIDE_CLICK.bits()
            | Self::ESCAPE_KEYDOWN.bits()
            | Self::FOCUS_KEYUP.bits();
    }
}

/// Where the pointer went when it left an element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    /// Into the trigger.
    Trigger,
    /// Into the overlay.
    Overlay,
    /// Anywhere else, including out of the document.
    Elsewhere,
}

/// Keys the controller distinguishes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// `Escape`.
    Escape,
    /// `Tab`, which usually moves focus.
    Tab,
    /// Any other key.
    Other,
}

/// An input event delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer entered the trigger.
    TriggerEnter,
    /// The pointer left the trigger.
    TriggerLeave {
        /// Where it went.
        to: Region,
    },
    /// The pointer left the overlay.
    OverlayLeave {
        /// Where it went.
        to: Region,
    },
    /// A click anywhere in the document, in viewport coordinates.
    Click {
        /// Click position.
        at: Point,
    },
    /// A key was pressed anywhere in the document.
    KeyDown(Key),
    /// A key was released anywhere in the document.
    KeyUp(Key),
    /// The "large viewport" media query changed.
    BreakpointChanged(Breakpoint),
}

impl InputEvent {
    /// The listener that must be held for this event to be delivered.
    pub fn listener(&self) -> Listeners {
        match self {
            Self::TriggerEnter => Listeners::TRIGGER_ENTER,
            Self::TriggerLeave { .. } => Listeners::TRIGGER_LEAVE,
            Self::OverlayLeave { .. } => Listeners::OVERLAY_LEAVE,
            Self::Click { .. } => Listeners::OUTSIDE_CLICK,
            Self::KeyDown(_) => Listeners::ESCAPE_KEYDOWN,
            Self::KeyUp(_) => Listeners::FOCUS_KEYUP,
            Self::BreakpointChanged(_) => Listeners::BREAKPOINT,
        }
    }
}

/// Identifies one close cycle.
///
/// Returned inside [`Effect::AwaitAnimations`] and handed back to
/// [`HotspotController::finish_close`](crate::HotspotController::finish_close)
/// once the overlay's exit animations have settled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CloseTicket(pub(crate) u64);

/// How a single exit animation ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AnimationOutcome {
    /// Ran to completion.
    Finished,
    /// Was cancelled or rejected. Does not abort the close.
    Rejected,
}

/// Placement published for the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementSignal {
    /// The descriptor to apply.
    pub placement: Placement,
    /// The resolved overlay rectangle, relative to the container origin.
    pub rect: Rect,
}

/// Something the host must do, in order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    /// Bind these listeners.
    Subscribe(Listeners),
    /// Unbind these listeners.
    Unsubscribe(Listeners),
    /// Apply a fresh placement (overlay still hidden).
    Publish(PlacementSignal),
    /// Make the overlay visible and mark it showing.
    Open,
    /// Hide the overlay and mark it closing.
    Hide,
    /// Wait for every animation on the overlay and its descendants to settle,
    /// then call [`finish_close`](crate::HotspotController::finish_close).
    AwaitAnimations(CloseTicket),
    /// Drop the showing/closing flags and the placement from the presentation.
    Clear,
}

/// Display state of the overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    /// Whether the overlay is open (visible).
    pub open: bool,
    /// Set while opened or animating in; cleared once a close settles.
    pub showing: bool,
    /// Set from the start of a close until its animations settle.
    pub closing: bool,
    /// Most recent placement, if any.
    pub placement: Option<Placement>,
}

/// Coarse lifecycle phase, for hosts and tests.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Nothing scheduled and the overlay is closed.
    Idle,
    /// The hover-intent timer is running.
    Pending,
    /// Placement is published; waiting for the settle delay before opening.
    Settling,
    /// The overlay is open.
    Open,
    /// The overlay is hidden and its exit animations have not settled yet.
    Closing,
}
