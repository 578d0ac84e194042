// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for a single reorder gesture.
//!
//! A reorder gesture cares about one thing from the pointer stream: how far the
//! pointer has travelled from where it went down. That displacement drives the
//! lifted item's transform, and after a commit it is re-based onto the item's new
//! slot so the settle animation starts where the item was dropped.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_reorder::drag::PointerTrack;
//!
//! let mut track = PointerTrack::default();
//! track.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(track.update(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//!
//! // The new slot is 80 px to the right of the old one.
//! track.rebase(Vec2::new(-80.0, 0.0));
//! assert_eq!(track.delta, Vec2::new(-75.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Press origin and current displacement of the gesture's pointer.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PointerTrack {
    /// Screen position at press.
    pub down_pos: Point,
    /// Displacement of the pointer from `down_pos`, possibly re-based by [`PointerTrack::rebase`].
    pub delta: Vec2,
}

impl PointerTrack {
    /// Start tracking from the given press position with a zero delta.
    pub fn start(&mut self, pos: Point) {
        self.down_pos = pos;
        self.delta = Vec2::ZERO;
    }

    /// Record a new pointer position, returning the displacement from the press origin.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        self.delta = pos - self.down_pos;
        self.delta
    }

    /// Shift the recorded delta without moving the origin.
    ///
    /// Used when the item's resting slot changes underneath it, so the delta
    /// keeps describing the same visual position.
    pub fn rebase(&mut self, by: Vec2) {
        self.delta += by;
    }

    /// Reset to rest.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}
