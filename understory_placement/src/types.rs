// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: the descriptor, gaps, raw measurements, and breakpoints.

use kurbo::{Rect, Size, Vec2};

/// Horizontal side of the trigger the overlay is placed on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Horizontal {
    /// Overlay sits to the left of the trigger.
    Left,
    /// Overlay sits to the right of the trigger.
    #[default]
    Right,
    /// Neither side fits; overlay is centered on the trigger and stacked above or below it.
    Center,
}

impl Horizontal {
    /// Lowercase name, as used by presentation layers (`"left"`, `"right"`, `"center"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Vertical direction the overlay extends in.
///
/// The meaning depends on [`Horizontal`]:
/// - Beside the trigger (`Left`/`Right`): `Bottom` aligns the overlay's top
///   edge with the trigger's top edge so it flows downward; `Top` aligns the
///   overlay's bottom edge with the trigger's bottom edge so it flows upward.
/// - `Center`: `Bottom` stacks the overlay below the trigger, `Top` above it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vertical {
    /// Overlay extends upward.
    Top,
    /// Overlay extends downward.
    #[default]
    Bottom,
}

impl Vertical {
    /// Lowercase name (`"top"` or `"bottom"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Placement descriptor: anchor pairing plus an optional vertical correction.
///
/// Produced by [`place`](crate::place). It is only trustworthy immediately
/// after the measurement it was computed from; recompute on every show.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Side of the trigger.
    pub horizontal: Horizontal,
    /// Direction of vertical extension.
    pub vertical: Vertical,
    /// Vertical pixel delta (positive is downward) that clamps an overflowing
    /// overlay back inside the container. `None` when no correction is needed.
    pub offset: Option<f64>,
}

impl Placement {
    /// Create a descriptor without an offset.
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
            offset: None,
        }
    }

    /// Attach a vertical offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Resolve the descriptor into the rectangle the overlay occupies.
    ///
    /// `trigger` and the result share one coordinate space (usually
    /// container-relative, see [`Measurements::to_container_space`]).
    /// Hosts without a style engine can position the overlay with this directly.
    pub fn overlay_rect(&self, trigger: Rect, overlay: Size, gaps: Gaps) -> Rect {
        let x = match self.horizontal {
            Horizontal::Right => trigger.x1 + gaps.trigger,
            Horizontal::Left => trigger.x0 - gaps.trigger - overlay.width,
            Horizontal::Center => trigger.center().x - overlay.width / 2.0,
        };
        let y = match (self.horizontal, self.vertical) {
            (Horizontal::Center, Vertical::Bottom) => trigger.y1 + gaps.trigger,
            (Horizontal::Center, Vertical::Top) => trigger.y0 - gaps.trigger - overlay.height,
            (_, Vertical::Bottom) => trigger.y0,
            (_, Vertical::Top) => trigger.y1 - overlay.height,
        };
        let y = y + self.offset.unwrap_or(0.0);
        Rect::from_origin_size((x, y), overlay)
    }
}

/// Fixed spacing used by the placement algorithm, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaps {
    /// Distance kept between the overlay and the container edges.
    pub edge: f64,
    /// Distance between the trigger and the overlay.
    pub trigger: f64,
}

impl Gaps {
    /// Default gaps: 10 px at the edges and 10 px from the trigger.
    pub const DEFAULT: Self = Self {
        edge: 10.0,
        trigger: 10.0,
    };

    /// No spacing at all.
    pub const ZERO: Self = Self {
        edge: 0.0,
        trigger: 0.0,
    };

    /// Create gaps from an edge and a trigger distance.
    pub const fn new(edge: f64, trigger: f64) -> Self {
        Self { edge, trigger }
    }
}

impl Default for Gaps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw geometry gathered for one placement pass.
///
/// `container` and `trigger` are viewport-relative; `overlay` is the
/// overlay's natural size, measured while it was rendered invisibly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    /// Bounds of the positioning container.
    pub container: Rect,
    /// Bounds of the trigger.
    pub trigger: Rect,
    /// Natural size of the overlay.
    pub overlay: Size,
}

impl Measurements {
    /// Assemble measurements from optional parts, reporting the first one missing.
    pub fn from_parts(
        container: Option<Rect>,
        trigger: Option<Rect>,
        overlay: Option<Size>,
    ) -> Result<Self, PlacementError> {
        let container = container.ok_or(PlacementError::MissingContainer)?;
        let trigger = trigger.ok_or(PlacementError::MissingTrigger)?;
        let overlay = overlay.ok_or(PlacementError::MissingOverlay)?;
        if !(container.width() > 0.0 && container.height() > 0.0) {
            return Err(PlacementError::DegenerateContainer);
        }
        Ok(Self {
            container,
            trigger,
            overlay,
        })
    }

    /// Translate the trigger so the container's origin is `(0, 0)`.
    ///
    /// Returns the container size and the container-relative trigger rect.
    pub fn to_container_space(&self) -> (Size, Rect) {
        let origin = self.container.origin().to_vec2();
        (self.container.size(), self.trigger - origin)
    }

    /// Translate a container-relative rect back into viewport space.
    pub fn to_viewport_space(&self, rect: Rect) -> Rect {
        rect + Vec2::new(self.container.x0, self.container.y0)
    }
}

/// Reasons a placement pass cannot run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PlacementError {
    /// The positioning container could not be measured.
    #[error("positioning container is not available")]
    MissingContainer,
    /// The trigger could not be measured.
    #[error("trigger is not available")]
    MissingTrigger,
    /// The overlay is absent or reported no natural size.
    #[error("overlay is not available")]
    MissingOverlay,
    /// The container has no area, so nothing can be placed inside it.
    #[error("positioning container has no area")]
    DegenerateContainer,
}

/// Viewport class observed from the host's "large viewport" media query.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    /// Below the threshold. Overlays are not hover-driven here.
    Mobile,
    /// At or above the threshold.
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Default minimum viewport width, in CSS pixels, for [`Breakpoint::Desktop`].
    pub const DESKTOP_MIN_WIDTH: f64 = 990.0;

    /// Classify a viewport width against `desktop_min_width`.
    pub fn from_viewport_width(width: f64, desktop_min_width: f64) -> Self {
        if width >= desktop_min_width {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    /// Whether this is [`Breakpoint::Mobile`].
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}
