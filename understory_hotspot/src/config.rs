// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use core::time::Duration;

use understory_placement::{Breakpoint, Gaps};

/// Tunables for a [`HotspotController`](crate::HotspotController).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HotspotConfig {
    /// Delay between the pointer entering the trigger and the overlay opening (default: 120ms).
    ///
    /// Filters out pointers that merely pass over the trigger.
    pub hover_intent_delay: Duration,
    /// Delay between publishing a placement and making the overlay visible (default: 100ms).
    ///
    /// Gives the presentation layer a chance to apply the placement first.
    pub settle_delay: Duration,
    /// Edge and trigger gaps used by placement.
    pub gaps: Gaps,
    /// Minimum viewport width treated as desktop (default: 990px).
    pub desktop_min_width: f64,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            hover_intent_delay: Duration::from_millis(120),
            settle_delay: Duration::from_millis(100),
            gaps: Gaps::DEFAULT,
            desktop_min_width: Breakpoint::DESKTOP_MIN_WIDTH,
        }
    }
}

impl HotspotConfig {
    /// Set the hover-intent delay.
    #[must_use]
    pub fn hover_intent_delay(mut self, delay: Duration) -> Self {
        self.hover_intent_delay = delay;
        self
    }

    /// Set the settle delay.
    #[must_use]
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the placement gaps.
    #[must_use]
    pub fn gaps(mut self, gaps: Gaps) -> Self {
        self.gaps = gaps;
        self
    }

    /// Set the desktop breakpoint width.
    #[must_use]
    pub fn desktop_min_width(mut self, width: f64) -> Self {
        self.desktop_min_width = width;
        self
    }

    /// Classify a viewport width with this configuration's threshold.
    pub fn breakpoint_for(&self, viewport_width: f64) -> Breakpoint {
        Breakpoint::from_viewport_width(viewport_width, self.desktop_min_width)
    }

    /// Check that gaps and the breakpoint are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (which, value) in [("edge", self.gaps.edge), ("trigger", self.gaps.trigger)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidGap { which, value });
            }
        }
        if !self.desktop_min_width.is_finite() || self.desktop_min_width <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint {
                value: self.desktop_min_width,
            });
        }
        Ok(())
    }
}

/// A [`HotspotConfig`] that cannot drive a controller.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A gap is negative, infinite or NaN.
    #[error("{which} gap must be finite and non-negative, got {value}")]
    InvalidGap {
        /// Which gap (`"edge"` or `"trigger"`).
        which: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The desktop breakpoint width is not a positive finite number.
    #[error("desktop breakpoint width must be finite and positive, got {value}")]
    InvalidBreakpoint {
        /// The rejected value.
        value: f64,
    },
}
