// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layout model: linear index ↔ (row, column) mapping for uniform slots.
//!
//! Items are laid out row-major in `columns` columns; a plain list is the
//! `columns == 1` case. Every item occupies a slot of the same extent (item
//! size plus gutter), so slot positions are pure arithmetic from a container
//! origin.
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_reorder::layout::{GridLayout, Shift};
//!
//! let grid = GridLayout::new(3, 16);
//! assert_eq!((grid.row_of(4), grid.col_of(4)), (1, 1));
//! assert_eq!(grid.rows(), 6);
//!
//! // The last item of a row wraps down to the start of the next one.
//! let extent = Size::new(100.0, 50.0);
//! assert_eq!(grid.displacement(2, Shift::Forward, extent), Vec2::new(-200.0, 50.0));
//! assert_eq!(grid.displacement(1, Shift::Forward, extent), Vec2::new(100.0, 0.0));
//! ```

use kurbo::{Point, Size, Vec2};

/// Direction an unaffected item is pushed while another item is dragged past it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Toward higher indices (the dragged item moved to a lower index).
    Forward,
    /// Toward lower indices (the dragged item moved to a higher index).
    Backward,
}

/// Row-major grid of `len` items in `columns` columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridLayout {
    columns: usize,
    len: usize,
}

impl GridLayout {
    /// Creates a layout. A column count of zero is treated as one.
    #[must_use]
    pub const fn new(columns: usize, len: usize) -> Self {
        Self {
            columns: if columns == 0 { 1 } else { columns },
            len,
        }
    }

    /// Number of columns (at least one).
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the number of items.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Number of rows, counting a partially filled last row.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Row of `index`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Column of `index`.
    #[must_use]
    pub const fn col_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// The item stored immediately before `index`, if any.
    #[must_use]
    pub fn neighbor_before(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&before| before < self.len)
    }

    /// The item stored immediately after `index`, if any.
    #[must_use]
    pub fn neighbor_after(&self, index: usize) -> Option<usize> {
        index.checked_add(1).filter(|&after| after < self.len)
    }

    /// Returns `true` if `a` and `b` sit on the same row.
    #[must_use]
    pub const fn same_row(&self, a: usize, b: usize) -> bool {
        self.row_of(a) == self.row_of(b)
    }

    /// Clamps `index` into `[0, len - 1]`, or `None` for an empty layout.
    #[must_use]
    pub fn clamp(&self, index: usize) -> Option<usize> {
        self.len.checked_sub(1).map(|last| index.min(last))
    }

    /// Moves `index` forward by `forward` and back by `backward`, clamped to the valid range.
    ///
    /// Returns `index` unchanged for an empty layout.
    #[must_use]
    pub fn step(&self, index: usize, forward: usize, backward: usize) -> usize {
        let moved = index.saturating_add(forward).saturating_sub(backward);
        self.clamp(moved).unwrap_or(index)
    }

    /// Returns `true` if `index` is the last column of its row.
    #[must_use]
    pub const fn wraps_forward(&self, index: usize) -> bool {
        self.col_of(index) == self.columns - 1
    }

    /// Returns `true` if `index` is the first column of its row.
    #[must_use]
    pub const fn wraps_backward(&self, index: usize) -> bool {
        self.col_of(index) == 0
    }

    /// Visual offset that moves the item at `index` one slot along storage order.
    ///
    /// Within a row this is one slot sideways. At a row boundary the item flows
    /// around the wrap: diagonally by `columns - 1` slots across and one row down
    /// (forward) or up (backward).
    #[must_use]
    pub fn displacement(&self, index: usize, shift: Shift, extent: Size) -> Vec2 {
        let across = (self.columns - 1) as f64 * extent.width;
        match shift {
            Shift::Forward if self.wraps_forward(index) => Vec2::new(-across, extent.height),
            Shift::Forward => Vec2::new(extent.width, 0.0),
            Shift::Backward if self.wraps_backward(index) => Vec2::new(across, -extent.height),
            Shift::Backward => Vec2::new(-extent.width, 0.0),
        }
    }

    /// Offset from slot `to` to slot `from`.
    ///
    /// Adding this to an item's delta keeps it visually in place when its resting
    /// slot changes from `from` to `to`.
    #[must_use]
    pub fn slot_delta(&self, from: usize, to: usize, extent: Size) -> Vec2 {
        let cols = self.col_of(from) as f64 - self.col_of(to) as f64;
        let rows = self.row_of(from) as f64 - self.row_of(to) as f64;
        Vec2::new(cols * extent.width, rows * extent.height)
    }

    /// Top-left corner of the slot for `index`.
    #[must_use]
    pub fn slot_origin(&self, index: usize, origin: Point, extent: Size) -> Point {
        origin
            + Vec2::new(
                self.col_of(index) as f64 * extent.width,
                self.row_of(index) as f64 * extent.height,
            )
    }
}
