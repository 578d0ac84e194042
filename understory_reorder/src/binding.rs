// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event binding: route raw pointer and transition signals into a [`Reorder`].
//!
//! [`ReorderList`] is the piece a host wires its item handlers to. It owns the
//! item sequence, the state machine, a [`DisplacementCache`] and the pointer
//! capture handle, and it enforces the per-gesture plumbing the machine does
//! not know about:
//!
//! - Only the pointer that started a gesture can move or release it.
//! - Capture is requested on press and released exactly once: on the release
//!   of the gesture (tap or drag), or on teardown if the list goes away first.
//! - Transition-end signals carry only an item index; the binding routes them
//!   to the lift or settle input by phase.
//! - After every input the style cache is refreshed, so [`ReorderList::changed`]
//!   lists exactly the items to restyle.
//!
//! Capture is best effort. If the host cannot capture, the gesture still works
//! for whatever events the host does deliver.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_reorder::binding::{PointerEvent, PointerId, ReorderList};
//! use understory_reorder::{GridLayout, GridProjection, ReorderConfig, ReorderEvent};
//!
//! let config = ReorderConfig::new();
//! let mut list = ReorderList::new(vec!["a", "b", "c"], config, ());
//! let grid = GridProjection::new(
//!     GridLayout::new(1, 3),
//!     Point::ZERO,
//!     Size::new(92.0, 32.0),
//!     config.gutter(),
//! );
//! let pointer = PointerId(1);
//!
//! // A tap: press and release before the lift animation finishes.
//! list.pointer_down(0, PointerEvent::new(pointer, Point::new(50.0, 20.0)), &grid);
//! let event = list.pointer_up(PointerEvent::new(pointer, Point::new(50.0, 20.0)));
//! assert_eq!(event, Some(ReorderEvent::Released { index: 0 }));
//! assert_eq!(list.items(), &["a", "b", "c"]);
//! ```

use alloc::vec::Vec;

use kurbo::Point;

use crate::config::ReorderConfig;
use crate::displacement::{DisplacementCache, ItemStyle};
use crate::geometry::Measure;
use crate::logging::{debug, trace};
use crate::machine::{Phase, Reorder, ReorderEvent};

/// Host-assigned pointer identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// A pointer sample delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this sample belongs to.
    pub pointer_id: PointerId,
    /// Position in the same space as item bounds.
    pub position: Point,
}

impl PointerEvent {
    /// Creates a pointer sample.
    #[must_use]
    pub const fn new(pointer_id: PointerId, position: Point) -> Self {
        Self {
            pointer_id,
            position,
        }
    }
}

/// Exclusive pointer capture on an item.
///
/// While an item holds capture, the host delivers that pointer's move and up
/// events to it regardless of what is under the pointer.
pub trait PointerCapture {
    /// Requests capture of `pointer` by the item at `item`. Returns `false` if
    /// the host could not capture.
    fn capture(&mut self, item: usize, pointer: PointerId) -> bool;

    /// Releases a capture previously granted by [`PointerCapture::capture`].
    fn release(&mut self, item: usize, pointer: PointerId);
}

/// No capture support; every request is refused.
impl PointerCapture for () {
    fn capture(&mut self, _item: usize, _pointer: PointerId) -> bool {
        false
    }

    fn release(&mut self, _item: usize, _pointer: PointerId) {}
}

impl<C: PointerCapture + ?Sized> PointerCapture for &mut C {
    fn capture(&mut self, item: usize, pointer: PointerId) -> bool {
        (**self).capture(item, pointer)
    }

    fn release(&mut self, item: usize, pointer: PointerId) {
        (**self).release(item, pointer);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ActivePointer {
    item: usize,
    pointer: PointerId,
    captured: bool,
}

/// A reorderable sequence bound to pointer and transition inputs.
#[derive(Debug)]
pub struct ReorderList<T, C: PointerCapture = ()> {
    items: Vec<T>,
    machine: Reorder,
    cache: DisplacementCache,
    capture: C,
    active: Option<ActivePointer>,
    revision: u64,
}

impl<T, C: PointerCapture> ReorderList<T, C> {
    /// Creates a list at rest.
    #[must_use]
    pub fn new(items: Vec<T>, config: ReorderConfig, capture: C) -> Self {
        let machine = Reorder::new(config, items.len());
        let mut cache = DisplacementCache::new();
        cache.refresh(&machine);
        Self {
            items,
            machine,
            cache,
            capture,
            active: None,
            revision: 0,
        }
    }

    /// The item sequence in its current order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The underlying state machine.
    #[must_use]
    pub fn machine(&self) -> &Reorder {
        &self.machine
    }

    /// The capture handle.
    #[must_use]
    pub fn capture_handle(&self) -> &C {
        &self.capture
    }

    /// Current style of every item.
    #[must_use]
    pub fn styles(&self) -> &[ItemStyle] {
        self.cache.styles()
    }

    /// Current style of the item at `index`.
    #[must_use]
    pub fn style(&self, index: usize) -> Option<&ItemStyle> {
        self.cache.get(index)
    }

    /// Items whose style changed in response to the last input.
    #[must_use]
    pub fn changed(&self) -> &[usize] {
        self.cache.changed()
    }

    /// Counter bumped every time a drag changes the order of the sequence.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the sequence, tearing down any gesture in flight.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.teardown();
        self.items = items;
        self.machine.set_len(self.items.len());
        self.cache.refresh(&self.machine);
    }

    /// Takes the sequence out of the list, leaving it empty.
    pub fn take_items(&mut self) -> Vec<T> {
        self.teardown();
        let items = core::mem::take(&mut self.items);
        self.machine.set_len(0);
        self.cache.refresh(&self.machine);
        items
    }

    /// Pointer went down on the item at `index`.
    pub fn pointer_down<M: Measure>(
        &mut self,
        index: usize,
        event: PointerEvent,
        measure: &M,
    ) -> Option<ReorderEvent> {
        let result = self.machine.on_pointer_down(index, event.position, measure);
        if result.is_some() {
            let captured = self.capture.capture(index, event.pointer_id);
            if !captured {
                trace!(index, pointer = event.pointer_id.0, "pointer capture refused");
            }
            self.active = Some(ActivePointer {
                item: index,
                pointer: event.pointer_id,
                captured,
            });
        }
        self.refresh(result)
    }

    /// Pointer moved.
    pub fn pointer_move<M: Measure>(
        &mut self,
        event: PointerEvent,
        measure: &M,
    ) -> Option<ReorderEvent> {
        if !self.is_active_pointer(event.pointer_id) {
            return self.refresh(None);
        }
        let result = self.machine.on_pointer_move(event.position, measure);
        self.refresh(result)
    }

    /// Pointer went up. This ends the gesture and releases capture.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Option<ReorderEvent> {
        if !self.is_active_pointer(event.pointer_id) {
            trace!(pointer = event.pointer_id.0, "release from inactive pointer");
            return self.refresh(None);
        }
        self.release_capture();
        let result = self.machine.on_pointer_up(event.position, &mut self.items);
        if let Some(ReorderEvent::Committed { from, to }) = result {
            if from != to {
                self.revision += 1;
                debug!(from, to, revision = self.revision, "sequence reordered");
            }
        }
        self.refresh(result)
    }

    /// The host cancelled the pointer. Treated as a release.
    pub fn pointer_cancel(&mut self, event: PointerEvent) -> Option<ReorderEvent> {
        self.pointer_up(event)
    }

    /// A transition on the item at `index` finished.
    pub fn transition_end(&mut self, index: usize) -> Option<ReorderEvent> {
        let result = match self.machine.phase() {
            Phase::Pressing => self.machine.on_lift_transition_end(index),
            _ => self.machine.on_settle_transition_end(index),
        };
        self.refresh(result)
    }

    /// Abandons any gesture in flight: releases capture and resets the machine.
    ///
    /// The sequence is never modified here.
    pub fn teardown(&mut self) {
        self.release_capture();
        self.machine.reset();
        self.cache.refresh(&self.machine);
    }

    fn is_active_pointer(&self, pointer: PointerId) -> bool {
        self.active.is_some_and(|active| active.pointer == pointer)
    }

    fn release_capture(&mut self) {
        if let Some(active) = self.active.take() {
            if active.captured {
                self.capture.release(active.item, active.pointer);
            }
        }
    }

    fn refresh(&mut self, result: Option<ReorderEvent>) -> Option<ReorderEvent> {
        self.cache.refresh(&self.machine);
        result
    }
}

impl<T, C: PointerCapture> Drop for ReorderList<T, C> {
    fn drop(&mut self) {
        self.release_capture();
    }
}
