// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: a drag-to-reorder interaction core for lists and grids.
//!
//! The user presses an item, it lifts, they drag it over its neighbors, and on
//! release the item's position in the sequence changes, with the items it
//! passed sliding out of the way and the dropped item gliding into its new
//! slot. This crate is the part of that interaction that has to be right under
//! any interleaving of inputs: the state machine, the index arithmetic, and the
//! per-item displacement. It renders nothing.
//!
//! The pieces, leaves first:
//!
//! - [`geometry`]: the [`Measure`] trait hosts implement to report item bounds,
//!   [`unscaled_bounds`] to hit-test a lifted (scaled) item at its true size, and
//!   a headless [`GridProjection`].
//! - [`layout`]: [`GridLayout`], index ↔ (row, column) mapping and the row-wrap
//!   displacement rule. A plain list is a one-column grid.
//! - [`machine`]: [`Reorder`], the state machine. It owns all interaction state
//!   and advances through [`Phase`]s on pointer and transition inputs.
//! - [`displacement`]: [`style_for`], a pure mapping from machine state to an
//!   [`ItemStyle`] per item, and [`DisplacementCache`] for change tracking.
//! - [`sequence`]: [`move_item`], the one place the item order is mutated.
//! - [`binding`]: [`ReorderList`], which wires pointer ids, pointer capture and
//!   transition-end signals into the machine.
//!
//! ## Design Philosophy
//!
//! - **One tagged phase**: the state is a single enum, not a set of independent
//!   flags, so impossible combinations cannot be represented.
//! - **Event-order tolerant**: out-of-phase and stale inputs are ignored, never
//!   errors. Transition ends are matched by item index, not by position.
//! - **One step per event**: a pointer move shifts the target by at most one
//!   grid step per direction, however far the pointer jumped.
//! - **No hidden layout reads**: hosts pass a [`Measure`] in; the machine never
//!   holds on to it.
//!
//! ## Example
//!
//! Drag the first item of a three-column grid one row down:
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_reorder::binding::{PointerEvent, PointerId, ReorderList};
//! use understory_reorder::{GridLayout, GridProjection, ReorderConfig, ReorderEvent};
//!
//! let config = ReorderConfig::new().with_columns(3);
//! let mut list = ReorderList::new((0..16).collect::<Vec<u32>>(), config, ());
//! let grid = GridProjection::new(
//!     GridLayout::new(3, 16),
//!     Point::ZERO,
//!     Size::new(92.0, 42.0),
//!     config.gutter(),
//! );
//! let pointer = PointerId(1);
//! let start = grid.rest_bounds(0).unwrap().center();
//!
//! list.pointer_down(0, PointerEvent::new(pointer, start), &grid);
//! list.transition_end(0);
//!
//! // Bottom edge just past the middle of row 1.
//! let by = Vec2::new(0.0, 30.0);
//! let event = list.pointer_move(
//!     PointerEvent::new(pointer, start + by),
//!     &grid.lifted(0, by, config.lift_scale()),
//! );
//! assert_eq!(event, Some(ReorderEvent::TargetChanged { from: 0, to: 3 }));
//!
//! // Items 1 and 2 slide left; item 3 wraps up to the end of row 0.
//! assert_eq!(list.style(1).unwrap().offset, Vec2::new(-100.0, 0.0));
//! assert_eq!(list.style(3).unwrap().offset, Vec2::new(200.0, -50.0));
//!
//! list.pointer_up(PointerEvent::new(pointer, start + by));
//! assert_eq!(&list.items()[..5], &[1, 2, 3, 0, 4]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use Kurbo's `libm` backend in `no_std` builds.
//! - `tracing`: log phase transitions, target shifts and ignored inputs with
//!   the `tracing` crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod binding;
mod config;
pub mod displacement;
pub mod drag;
pub mod geometry;
pub mod layout;
mod logging;
pub mod machine;
pub mod sequence;

pub use binding::{PointerCapture, PointerEvent, PointerId, ReorderList};
pub use config::ReorderConfig;
pub use displacement::{DisplacementCache, ItemStyle, Layer, Transition, style_for};
pub use geometry::{GridProjection, Measure, unscaled_bounds};
pub use layout::{GridLayout, Shift};
pub use machine::{Phase, Reorder, ReorderEvent};
pub use sequence::{MoveError, move_item};
