// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: how the controller reads geometry and focus from the page.
//!
//! ## Measuring
//!
//! Placement needs the overlay's natural size, which is only known once the
//! overlay is laid out. [`measure`] stashes the overlay's current styling,
//! renders it invisibly (no transform, no placement applied), reads the
//! container, trigger and overlay geometry, and restores the stashed styling.
//! Restoration is tied to a guard, so it also happens on early return.

use kurbo::{Rect, Size};
use understory_placement::{Measurements, PlacementError};

/// Geometry and focus queries against the rendered hotspot.
///
/// Any `Option` query returning `None` means the node is absent, which is a
/// valid state (malformed markup, script running before the DOM is ready).
/// The controller treats absence as "do nothing" and never panics on it.
pub trait OverlaySurface {
    /// Opaque snapshot of the overlay's display, visibility and transform styling.
    type Style;

    /// Viewport-relative bounds of the positioning container.
    fn container_rect(&self) -> Option<Rect>;

    /// Viewport-relative bounds of the trigger.
    fn trigger_rect(&self) -> Option<Rect>;

    /// Viewport-relative bounds of the overlay as currently displayed.
    fn overlay_rect(&self) -> Option<Rect>;

    /// Whether focus is on the overlay or one of its descendants.
    fn overlay_contains_focus(&self) -> bool;

    /// Snapshot the overlay's styling, or `None` if there is no overlay.
    fn stash_style(&mut self) -> Option<Self::Style>;

    /// Render the overlay laid out but invisible, with no transform and no placement.
    fn apply_measuring_style(&mut self);

    /// The overlay's natural size under the measuring style.
    fn natural_size(&self) -> Option<Size>;

    /// Put back a snapshot taken by [`stash_style`](Self::stash_style).
    fn restore_style(&mut self, style: Self::Style);
}

/// Restores stashed overlay styling on drop.
struct Restore<'a, S: OverlaySurface + ?Sized> {
    surface: &'a mut S,
    saved: Option<S::Style>,
}

impl<S: OverlaySurface + ?Sized> Drop for Restore<'_, S> {
    fn drop(&mut self) {
        if let Some(style) = self.saved.take() {
            self.surface.restore_style(style);
        }
    }
}

/// Take one set of measurements without leaving residual styling behind.
///
/// Fails with [`PlacementError::MissingOverlay`] before touching anything if
/// the overlay is absent; other missing parts are reported after the styling
/// has been restored.
pub fn measure<S: OverlaySurface + ?Sized>(surface: &mut S) -> Result<Measurements, PlacementError> {
    let saved = surface.stash_style().ok_or(PlacementError::MissingOverlay)?;
    let guard = Restore {
        surface,
        saved: Some(saved),
    };
    guard.surface.apply_measuring_style();
    let container = guard.surface.container_rect();
    let trigger = guard.surface.trigger_rect();
    let overlay = guard.surface.natural_size();
    drop(guard);
    Measurements::from_parts(container, trigger, overlay)
}
