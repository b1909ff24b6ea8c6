// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native placement for anchored overlays.
//!
//! Given a bounding container, a trigger inside it, and an overlay's natural
//! size, this crate decides which side of the trigger the overlay goes on and
//! which way it extends vertically. The result is a small [`Placement`]
//! descriptor that a presentation layer applies; the algorithm itself is pure
//! and has no notion of time, input, or rendering.
//!
//! ## Where this fits
//!
//! - Measurement is the host's job. Render the overlay invisibly, read its
//!   natural size, read the container and trigger bounds, and put them in
//!   [`Measurements`].
//! - [`place`] turns measurements into a [`Placement`].
//! - [`Placement::overlay_rect`] resolves a descriptor into a concrete
//!   rectangle for hosts that position overlays themselves.
//! - [`is_outside`] is the shared "did this click land outside the overlay" test.
//!
//! Interaction (hover intent, showing, dismissal) lives in `understory_hotspot`.
//!
//! ## Algorithm
//!
//! Horizontal: `right` if it fits, else `left` if it fits, else `center`.
//! "Fits" means the space between the trigger and the container edge, less the
//! edge gap, holds the overlay width plus the trigger gap (see [`Gaps`]).
//!
//! Vertical beside the trigger: start at the trigger's top edge and flip to end
//! at the trigger's bottom edge if that overflows the container bottom. A flip
//! that overflows the container top gets a single corrective offset.
//!
//! Vertical when centered: below if it fits, else above if it fits, else
//! toward the roomier half of the container.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{Gaps, Horizontal, Measurements, Placement, Vertical, place};
//!
//! let m = Measurements {
//!     container: Rect::new(0.0, 0.0, 800.0, 400.0),
//!     trigger: Rect::new(100.0, 330.0, 140.0, 370.0),
//!     overlay: Size::new(200.0, 150.0),
//! };
//!
//! // Plenty of room on the right, but not below: the overlay flips upward.
//! let p = place(&m, Gaps::DEFAULT);
//! assert_eq!(p, Placement::new(Horizontal::Right, Vertical::Top));
//!
//! // Resolve to a container-relative rectangle.
//! let (_, trigger) = m.to_container_space();
//! let rect = p.overlay_rect(trigger, m.overlay, Gaps::DEFAULT);
//! assert_eq!(rect, Rect::new(150.0, 220.0, 350.0, 370.0));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod bounds;
mod place;
mod types;

pub use bounds::is_outside;
pub use place::{place, place_in_container, space_left, space_right, try_place};
pub use types::{Breakpoint, Gaps, Horizontal, Measurements, Placement, PlacementError, Vertical};
