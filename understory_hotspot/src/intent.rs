// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-intent timer: delay opening until the pointer has rested on the trigger.
//!
//! ## Usage
//!
//! 1) On pointer enter, call [`HoverIntent::arm`] with the current time and the delay.
//! 2) On pointer leave, call [`HoverIntent::cancel`].
//! 3) On every host tick, call [`HoverIntent::fire_if_due`]; it returns `true` exactly once per arm.
//!
//! Time is a monotonic [`Duration`] since an arbitrary host epoch. The timer
//! never reads a clock itself, so it behaves the same under test and in `no_std`.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_hotspot::intent::HoverIntent;
//!
//! let ms = Duration::from_millis;
//! let mut t = HoverIntent::new();
//! assert!(t.arm(ms(0), ms(120)));
//! assert!(!t.arm(ms(10), ms(120)), "only one timer at a time");
//! assert!(!t.fire_if_due(ms(119)));
//! assert!(t.fire_if_due(ms(120)));
//! assert!(!t.fire_if_due(ms(500)));
//! ```

use core::time::Duration;

/// A single cancelable deadline.
///
/// At most one deadline is pending at any time; arming while pending is
/// refused rather than restarting the countdown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverIntent {
    due: Option<Duration>,
}

impl HoverIntent {
    /// Create an idle timer.
    pub const fn new() -> Self {
        Self { due: None }
    }

    /// Start the countdown. Returns `false` (and changes nothing) if one is already pending.
    pub fn arm(&mut self, now: Duration, delay: Duration) -> bool {
        if self.due.is_some() {
            return false;
        }
        self.due = Some(now.saturating_add(delay));
        true
    }

    /// Cancel a pending countdown. Returns whether one was pending.
    ///
    /// Has no effect beyond preventing the scheduled fire.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    /// Consume the deadline if it has passed.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a countdown is pending.
    pub const fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// When the pending countdown fires, if any.
    pub const fn deadline(&self) -> Option<Duration> {
        self.due
    }
}
