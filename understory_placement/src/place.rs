// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement algorithm.
//!
//! ## Overview
//!
//! Given the container, the trigger and the overlay's natural size, choose a
//! side and a vertical direction for the overlay.
//!
//! ## Horizontal
//!
//! - `Right` when the space right of the trigger, less the edge gap, holds the
//!   overlay width plus the trigger gap.
//! - Otherwise `Left` under the symmetric condition.
//! - Otherwise `Center`.
//!
//! ## Vertical beside the trigger
//!
//! The overlay starts at the trigger's top edge (`Bottom`). If that overflows
//! the container bottom it flips to end at the trigger's bottom edge (`Top`).
//! If the result then overflows the container top, a corrective offset clamps
//! it back inside. The correction is applied once and never re-flips, so a
//! too-tall overlay settles deterministically instead of oscillating.
//!
//! ## Vertical when centered
//!
//! Stack below if it fits, else above if it fits, else toward whichever half
//! of the container has more room, judged by the trigger's midpoint.

use kurbo::{Rect, Size};

use crate::types::{Gaps, Horizontal, Measurements, Placement, PlacementError, Vertical};

/// Compute a placement descriptor from raw (viewport-relative) measurements.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Gaps, Horizontal, Measurements, Vertical, place};
///
/// let m = Measurements {
///     container: Rect::new(0.0, 0.0, 400.0, 400.0),
///     trigger: Rect::new(350.0, 100.0, 390.0, 140.0),
///     overlay: Size::new(100.0, 80.0),
/// };
/// let p = place(&m, Gaps::DEFAULT);
/// assert_eq!(p.horizontal, Horizontal::Left);
/// assert_eq!(p.vertical, Vertical::Bottom);
/// assert_eq!(p.offset, None);
/// ```
pub fn place(measurements: &Measurements, gaps: Gaps) -> Placement {
    let (container, trigger) = measurements.to_container_space();
    place_in_container(container, trigger, measurements.overlay, gaps)
}

/// Like [`place`], but assembles the measurements from optional parts first.
///
/// Any absent part aborts the pass with the matching [`PlacementError`].
pub fn try_place(
    container: Option<Rect>,
    trigger: Option<Rect>,
    overlay: Option<Size>,
    gaps: Gaps,
) -> Result<Placement, PlacementError> {
    let m = Measurements::from_parts(container, trigger, overlay)?;
    Ok(place(&m, gaps))
}

/// Core of [`place`], in container-relative coordinates.
///
/// `trigger` is relative to the container origin; `container` is the size of
/// the container.
pub fn place_in_container(container: Size, trigger: Rect, overlay: Size, gaps: Gaps) -> Placement {
    let horizontal = choose_horizontal(container, trigger, overlay, gaps);
    match horizontal {
        Horizontal::Center => Placement::new(
            horizontal,
            choose_stacked(container, trigger, overlay, gaps),
        ),
        Horizontal::Left | Horizontal::Right => {
            let (vertical, offset) = choose_beside(container, trigger, overlay);
            Placement {
                horizontal,
                vertical,
                offset,
            }
        }
    }
}

/// Space to the right of the trigger, less the edge gap.
pub fn space_right(container: Size, trigger: Rect, gaps: Gaps) -> f64 {
    container.width - trigger.x1 - gaps.edge
}

/// Space to the left of the trigger, less the edge gap.
pub fn space_left(trigger: Rect, gaps: Gaps) -> f64 {
    trigger.x0 - gaps.edge
}

fn choose_horizontal(container: Size, trigger: Rect, overlay: Size, gaps: Gaps) -> Horizontal {
    let needed = overlay.width + gaps.trigger;
    if space_right(container, trigger, gaps) >= needed {
        Horizontal::Right
    } else if space_left(trigger, gaps) >= needed {
        Horizontal::Left
    } else {
        Horizontal::Center
    }
}

fn choose_beside(container: Size, trigger: Rect, overlay: Size) -> (Vertical, Option<f64>) {
    if trigger.y0 + overlay.height > container.height {
        // Flip: the overlay's bottom edge follows the trigger's bottom edge.
        let top = trigger.y1 - overlay.height;
        let offset = (top < 0.0).then_some(-top);
        (Vertical::Top, offset)
    } else {
        let offset = (trigger.y0 < 0.0).then_some(-trigger.y0);
        (Vertical::Bottom, offset)
    }
}

fn choose_stacked(container: Size, trigger: Rect, overlay: Size, gaps: Gaps) -> Vertical {
    let needed = overlay.height + gaps.trigger;
    let below = container.height - trigger.y1 - gaps.edge;
    let above = trigger.y0 - gaps.edge;
    if below >= needed {
        Vertical::Bottom
    } else if above >= needed {
        Vertical::Top
    } else if trigger.center().y < container.height / 2.0 {
        Vertical::Bottom
    } else {
        Vertical::Top
    }
}
