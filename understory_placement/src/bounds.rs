// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-bounds predicates used for light dismiss.

use kurbo::{Point, Rect};

/// Whether `point` lies outside `bounds`.
///
/// Edges count as inside, so a click exactly on the overlay border does not
/// dismiss it. Unlike [`Rect::contains`], the right and bottom edges are
/// inclusive. `bounds` may be given with either corner ordering.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_placement::is_outside;
///
/// let overlay = Rect::new(10.0, 10.0, 110.0, 60.0);
/// assert!(!is_outside(overlay, Point::new(110.0, 60.0)));
/// assert!(is_outside(overlay, Point::new(111.0, 30.0)));
/// ```
pub fn is_outside(bounds: Rect, point: Point) -> bool {
    let b = bounds.abs();
    point.x < b.x0 || point.x > b.x1 || point.y < b.y0 || point.y > b.y1
}
