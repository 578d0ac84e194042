// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder state machine: turn pointer and transition signals into a target slot and a commit.
//!
//! ## Phases
//!
//! ```text
//!            press            lift ends             release
//!   Idle ───────────▶ Pressing ─────────▶ Dragging ─────────▶ Releasing ──▶ Settling
//!    ▲                    │                                       (commit)       │
//!    │   release (tap)    │                                                      │
//!    ├────────────────────┘                                         settle ends  │
//!    └───────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - A press is accepted only in [`Phase::Idle`]; there is at most one gesture.
//! - While [`Phase::Dragging`], each pointer move runs four directional checks
//!   (left, right, down a row, up a row) against neighbor slot midpoints. Each
//!   check contributes at most one step, so the target moves at most one grid
//!   step per direction per event, however far the pointer jumped.
//! - Releasing a drag moves the item from the source to the target slot exactly
//!   once, then re-bases the pointer delta onto the new slot so the settle
//!   animation starts from where the item was dropped.
//! - Releasing before the lift finished is a tap: nothing is mutated and the
//!   item springs back from wherever it was nudged.
//! - Transition-end signals are filtered by index; a signal for any item other
//!   than the one being tracked is stale and ignored.
//!
//! [`Phase::Releasing`] is transient. Every input is handled synchronously, so
//! the machine passes through it inside [`Reorder::on_pointer_up`] and is never
//! observed there between calls.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_reorder::{GridLayout, GridProjection, Phase, Reorder, ReorderConfig, ReorderEvent};
//!
//! let mut items: Vec<u32> = (0..4).collect();
//! let mut reorder = Reorder::new(ReorderConfig::new(), items.len());
//! let grid = GridProjection::new(
//!     GridLayout::new(1, items.len()),
//!     Point::ZERO,
//!     Size::new(92.0, 32.0),
//!     ReorderConfig::DEFAULT_GUTTER,
//! );
//!
//! reorder.on_pointer_down(0, Point::new(40.0, 20.0), &grid);
//! reorder.on_lift_transition_end(0);
//! assert_eq!(reorder.phase(), Phase::Dragging);
//!
//! // Drag far enough down that the item's bottom edge passes the middle of slot 1.
//! let pointer = Point::new(40.0, 45.0);
//! let lifted = grid.lifted(0, pointer - reorder.pointer_down_position(), 1.1);
//! assert_eq!(
//!     reorder.on_pointer_move(pointer, &lifted),
//!     Some(ReorderEvent::TargetChanged { from: 0, to: 1 })
//! );
//!
//! assert_eq!(
//!     reorder.on_pointer_up(pointer, &mut items),
//!     Some(ReorderEvent::Committed { from: 0, to: 1 })
//! );
//! assert_eq!(items, [1, 0, 2, 3]);
//! assert_eq!(reorder.pending_settle_index(), Some(1));
//! assert_eq!(reorder.pointer_delta(), Vec2::new(0.0, -15.0));
//!
//! reorder.on_settle_transition_end(1);
//! assert_eq!(reorder.phase(), Phase::Idle);
//! ```

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::ReorderConfig;
use crate::displacement::{ItemStyle, style_for};
use crate::drag::PointerTrack;
use crate::geometry::{Measure, unscaled_bounds};
use crate::layout::GridLayout;
use crate::logging::{debug, trace, warn};
use crate::sequence::move_item;

/// Interaction phase of a [`Reorder`] state machine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No gesture in flight. A one-shot spring-back from a tap may still be pending.
    #[default]
    Idle,
    /// Pointer is down on an item; its lift animation has not finished yet.
    Pressing,
    /// The item is lifted and follows the pointer; moves update the target slot.
    Dragging,
    /// Transient: the pointer went up and the commit is being applied.
    Releasing,
    /// The committed item is animating from its drop point to its new slot.
    Settling,
}

/// Observable outcome of an input to a [`Reorder`] state machine.
///
/// Inputs that were ignored, or that only moved the pointer delta, produce no event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReorderEvent {
    /// A gesture started on `index`.
    Pressed {
        /// Index of the pressed item.
        index: usize,
    },
    /// The pressed item finished lifting and is now being dragged.
    Lifted {
        /// Index of the dragged item.
        index: usize,
    },
    /// The slot the dragged item would drop into changed.
    TargetChanged {
        /// Previous target slot.
        from: usize,
        /// New target slot.
        to: usize,
    },
    /// The pointer went up before the lift finished; nothing was reordered.
    Released {
        /// Index of the item that springs back.
        index: usize,
    },
    /// The item at `from` was moved to `to` in the sequence.
    Committed {
        /// Index the item was dragged from.
        from: usize,
        /// Index the item now occupies.
        to: usize,
    },
    /// The settle animation of `index` finished; the machine is at rest.
    Settled {
        /// Index of the item that came to rest.
        index: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Gesture {
    Idle,
    Pressing { index: usize },
    Dragging { source: usize, target: usize },
    Settling { index: usize },
}

/// Drag-to-reorder state machine for a list or grid of items.
///
/// `Reorder` owns all interaction state but not the items themselves: the item
/// sequence is passed to [`Reorder::on_pointer_up`], the only place it is ever
/// mutated, and layout is read through a caller-supplied [`Measure`].
///
/// See the [module documentation](self) for the phase diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct Reorder {
    config: ReorderConfig,
    layout: GridLayout,
    gesture: Gesture,
    // One-shot spring-back after a tap; only set while `gesture` is `Idle`.
    spring: Option<usize>,
    pointer: PointerTrack,
    extent: Size,
}

impl Reorder {
    /// Creates a machine at rest for `len` items.
    #[must_use]
    pub fn new(config: ReorderConfig, len: usize) -> Self {
        Self {
            config,
            layout: GridLayout::new(config.columns(), len),
            gesture: Gesture::Idle,
            spring: None,
            pointer: PointerTrack::default(),
            extent: Size::ZERO,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Returns the grid layout the machine reasons about.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Updates the number of items.
    ///
    /// Changing the length under an active gesture invalidates every tracked
    /// index, so the machine is reset first.
    pub fn set_len(&mut self, len: usize) {
        if len == self.layout.len() {
            return;
        }
        if !self.is_at_rest() {
            warn!(
                old = self.layout.len(),
                new = len,
                "item count changed mid-gesture; resetting"
            );
            self.reset();
        }
        self.layout.set_len(len);
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.gesture {
            Gesture::Idle => Phase::Idle,
            Gesture::Pressing { .. } => Phase::Pressing,
            Gesture::Dragging { .. } => Phase::Dragging,
            Gesture::Settling { .. } => Phase::Settling,
        }
    }

    /// Returns `true` when no gesture is in flight and nothing is springing back.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.gesture == Gesture::Idle && self.spring.is_none()
    }

    /// Index of the item pressed but not yet lifted.
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Pressing { index } => Some(index),
            _ => None,
        }
    }

    /// Index of the item being dragged.
    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Slot the interacting item would occupy if released now.
    ///
    /// While pressing this is the pressed index; while dragging it is always
    /// within `[0, len - 1]`.
    #[must_use]
    pub fn target_index(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Pressing { index } => Some(index),
            Gesture::Dragging { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Index of the item drawn lifted: pressed or dragged.
    #[must_use]
    pub fn lifted_index(&self) -> Option<usize> {
        self.pressed_index().or(self.source_index())
    }

    /// Index of the item animating back to rest after a commit or a tap.
    #[must_use]
    pub fn pending_settle_index(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Settling { index } => Some(index),
            Gesture::Idle => self.spring,
            _ => None,
        }
    }

    /// Pointer position at press.
    #[must_use]
    pub fn pointer_down_position(&self) -> Point {
        self.pointer.down_pos
    }

    /// Displacement driving the lifted or settling item's transform.
    #[must_use]
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer.delta
    }

    /// Slot extent (item size plus gutter) captured at press.
    #[must_use]
    pub fn item_extent(&self) -> Size {
        self.extent
    }

    /// Visual style for the item at `index` in the current state.
    #[must_use]
    pub fn style_for(&self, index: usize) -> ItemStyle {
        style_for(self, index)
    }

    /// Pointer went down on the item at `index`.
    ///
    /// Ignored unless the machine is [`Phase::Idle`], `index` addresses an item,
    /// and `measure` can report its bounds. Any pending spring-back is dropped.
    pub fn on_pointer_down<M: Measure>(
        &mut self,
        index: usize,
        position: Point,
        measure: &M,
    ) -> Option<ReorderEvent> {
        if self.gesture != Gesture::Idle {
            trace!(index, phase = ?self.phase(), "press ignored: gesture in flight");
            return None;
        }
        if index >= self.layout.len() {
            trace!(index, len = self.layout.len(), "press ignored: no such item");
            return None;
        }
        let Some(bounds) = measure.item_bounds(index) else {
            trace!(index, "press ignored: item has no bounds");
            return None;
        };

        // A spring-back from a tap is still drawn lifted.
        let bounds = if self.spring == Some(index) {
            unscaled_bounds(bounds, self.config.lift_scale())
        } else {
            bounds
        };
        self.extent = bounds.size() + self.config.gutter();
        self.spring = None;
        self.pointer.start(position);
        self.gesture = Gesture::Pressing { index };
        debug!(index, extent = ?self.extent, "pressing");

        if !self.config.animated() {
            self.lift(index);
        }
        Some(ReorderEvent::Pressed { index })
    }

    /// The lift animation of the item at `index` finished.
    ///
    /// Meaningful only while [`Phase::Pressing`] that same item.
    pub fn on_lift_transition_end(&mut self, index: usize) -> Option<ReorderEvent> {
        match self.gesture {
            Gesture::Pressing { index: pressed } if pressed == index => {
                self.lift(index);
                Some(ReorderEvent::Lifted { index })
            }
            _ => {
                trace!(index, phase = ?self.phase(), "stale lift transition end");
                None
            }
        }
    }

    /// Pointer moved to `position`.
    ///
    /// Updates the pointer delta while pressing or dragging. While dragging, it
    /// also hit-tests the dragged item's unscaled bounds against the neighbor
    /// slots around the current target and shifts the target by at most one
    /// step per direction.
    pub fn on_pointer_move<M: Measure>(
        &mut self,
        position: Point,
        measure: &M,
    ) -> Option<ReorderEvent> {
        match self.gesture {
            Gesture::Pressing { .. } => {
                self.pointer.update(position);
                None
            }
            Gesture::Dragging { source, target } => {
                self.pointer.update(position);
                let rendered = measure.item_bounds(source)?;
                let dragged = unscaled_bounds(rendered, self.config.lift_scale());
                let next = self.hit_test(target, dragged, measure.container_origin());
                if next == target {
                    return None;
                }
                trace!(source, from = target, to = next, "target shifted");
                self.gesture = Gesture::Dragging {
                    source,
                    target: next,
                };
                Some(ReorderEvent::TargetChanged {
                    from: target,
                    to: next,
                })
            }
            Gesture::Idle | Gesture::Settling { .. } => None,
        }
    }

    /// Pointer went up at `position`.
    ///
    /// A release while dragging moves the dragged item to the target slot in
    /// `items` and starts the settle. A release while still pressing is a tap:
    /// `items` is left alone and the item springs back. Other phases ignore it.
    pub fn on_pointer_up<T>(&mut self, position: Point, items: &mut [T]) -> Option<ReorderEvent> {
        match self.gesture {
            Gesture::Pressing { index } => {
                self.pointer.update(position);
                debug!(index, phase = ?Phase::Releasing, "released before lift");
                self.gesture = Gesture::Idle;
                if self.config.animated() {
                    self.spring = Some(index);
                } else {
                    self.pointer.end();
                }
                debug!(index, "idle");
                Some(ReorderEvent::Released { index })
            }
            Gesture::Dragging { source, target } => {
                self.pointer.update(position);
                debug!(source, target, phase = ?Phase::Releasing, "committing");
                if move_item(items, source, target).is_err() {
                    warn!(
                        source,
                        target,
                        len = items.len(),
                        "commit skipped: sequence out of sync"
                    );
                    self.reset();
                    return None;
                }
                self.pointer
                    .rebase(self.layout.slot_delta(source, target, self.extent));
                self.gesture = Gesture::Settling { index: target };
                debug!(index = target, delta = ?self.pointer.delta, "settling");
                if !self.config.animated() {
                    self.finish();
                }
                Some(ReorderEvent::Committed {
                    from: source,
                    to: target,
                })
            }
            Gesture::Idle | Gesture::Settling { .. } => {
                trace!(phase = ?self.phase(), "release ignored: no active gesture");
                None
            }
        }
    }

    /// The settle animation of the item at `index` finished.
    ///
    /// Meaningful only for the item that is settling after a commit, or
    /// springing back after a tap.
    pub fn on_settle_transition_end(&mut self, index: usize) -> Option<ReorderEvent> {
        if self.pending_settle_index() != Some(index) {
            trace!(index, phase = ?self.phase(), "stale settle transition end");
            return None;
        }
        self.finish();
        Some(ReorderEvent::Settled { index })
    }

    /// Drops all interaction state and returns to [`Phase::Idle`].
    ///
    /// This is the teardown path: it never touches the item sequence.
    pub fn reset(&mut self) {
        if !self.is_at_rest() {
            debug!(phase = ?self.phase(), "reset");
        }
        self.gesture = Gesture::Idle;
        self.spring = None;
        self.pointer.end();
        self.extent = Size::ZERO;
    }

    fn lift(&mut self, index: usize) {
        self.gesture = Gesture::Dragging {
            source: index,
            target: index,
        };
        debug!(index, "dragging");
    }

    fn finish(&mut self) {
        self.gesture = Gesture::Idle;
        self.spring = None;
        self.pointer.end();
        debug!("idle");
    }

    /// Next target for an item drawn at `dragged` (unscaled) over `target`.
    ///
    /// All four checks read the target as it stood before this event.
    fn hit_test(&self, target: usize, dragged: Rect, origin: Point) -> usize {
        let layout = self.layout;
        let extent = self.extent;
        let row = layout.row_of(target);
        let mut forward = 0;
        let mut backward = 0;

        if let Some(before) = layout
            .neighbor_before(target)
            .filter(|&before| layout.same_row(before, target))
        {
            let mid = layout.slot_origin(before, origin, extent).x + extent.width / 2.0;
            if dragged.x0 < mid {
                backward += 1;
            }
        }

        if let Some(after) = layout
            .neighbor_after(target)
            .filter(|&after| layout.same_row(after, target))
        {
            let mid = layout.slot_origin(after, origin, extent).x + extent.width / 2.0;
            if dragged.x1 >= mid {
                forward += 1;
            }
        }

        if row + 1 < layout.rows() {
            let mid = origin.y + (row + 1) as f64 * extent.height + extent.height / 2.0;
            if dragged.y1 >= mid {
                forward += layout.columns();
            }
        }

        if row > 0 {
            let mid = origin.y + (row - 1) as f64 * extent.height + extent.height / 2.0;
            if dragged.y0 < mid {
                backward += layout.columns();
            }
        }

        layout.step(target, forward, backward)
    }
}
