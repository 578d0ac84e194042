// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry adapter: item measurement and scale compensation.
//!
//! The state machine never reads layout on its own. Hosts implement [`Measure`]
//! over whatever they render into (a DOM, a box tree, a retained scene) and
//! pass it to the pointer handlers. All rectangles live in the same coordinate
//! space as pointer positions.
//!
//! The lifted item is drawn scaled up about its center. Hit-testing it against
//! neighbor midpoints with its rendered size would trigger shifts early, so the
//! machine runs every check on [`unscaled_bounds`] instead.
//!
//! [`GridProjection`] is a headless [`Measure`] for uniform grids. It reports
//! the bounds a faithful renderer would produce, which makes it the measurement
//! source for tests, benchmarks and scripted drags.

use kurbo::{Point, Rect, Size, Vec2};

use crate::layout::GridLayout;

/// Read-only access to rendered item bounds.
pub trait Measure {
    /// Rendered bounds of the item currently drawn at `index`, including any
    /// visual scale or offset applied to it. `None` if the item is not laid out.
    fn item_bounds(&self, index: usize) -> Option<Rect>;

    /// Top-left corner of the list container; slot positions are relative to it.
    fn container_origin(&self) -> Point;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn item_bounds(&self, index: usize) -> Option<Rect> {
        (**self).item_bounds(index)
    }

    fn container_origin(&self) -> Point {
        (**self).container_origin()
    }
}

/// Recomputes `rect` as if a uniform `scale` about its center were not applied.
///
/// A `scale` that is not finite and positive leaves `rect` unchanged.
///
/// ```
/// use kurbo::Rect;
/// use understory_reorder::geometry::unscaled_bounds;
///
/// // 110x55 rendered at 1.1x is a 100x50 item.
/// let rendered = Rect::new(-5.0, -2.5, 105.0, 52.5);
/// let rect = unscaled_bounds(rendered, 1.1);
/// assert!((rect.width() - 100.0).abs() < 1e-9);
/// assert!((rect.x0 - 0.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn unscaled_bounds(rect: Rect, scale: f64) -> Rect {
    if !(scale.is_finite() && scale > 0.0) {
        return rect;
    }
    Rect::from_center_size(rect.center(), rect.size() / scale)
}

/// Headless bounds for items laid out in a uniform grid.
///
/// Each slot is `item_size + gutter`; the item sits centered in its slot. One
/// item may be lifted: drawn at an offset and scaled about its center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridProjection {
    layout: GridLayout,
    origin: Point,
    item_size: Size,
    gutter: Size,
    lift: Option<Lift>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Lift {
    index: usize,
    offset: Vec2,
    scale: f64,
}

impl GridProjection {
    /// Creates a projection with every item at rest.
    #[must_use]
    pub fn new(layout: GridLayout, origin: Point, item_size: Size, gutter: Size) -> Self {
        Self {
            layout,
            origin,
            item_size,
            gutter,
            lift: None,
        }
    }

    /// Draws the item at `index` displaced by `offset` and scaled by `scale`.
    #[must_use]
    pub fn lifted(mut self, index: usize, offset: Vec2, scale: f64) -> Self {
        self.lift = Some(Lift {
            index,
            offset,
            scale,
        });
        self
    }

    /// Returns the layout this projection was built for.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Slot extent: item size plus gutter.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.item_size + self.gutter
    }

    /// Bounds of the item at `index` with no lift applied.
    #[must_use]
    pub fn rest_bounds(&self, index: usize) -> Option<Rect> {
        if index >= self.layout.len() {
            return None;
        }
        let slot = self.layout.slot_origin(index, self.origin, self.extent());
        let inset = Vec2::new(self.gutter.width / 2.0, self.gutter.height / 2.0);
        Some(Rect::from_origin_size(slot + inset, self.item_size))
    }
}

impl Measure for GridProjection {
    fn item_bounds(&self, index: usize) -> Option<Rect> {
        let rest = self.rest_bounds(index)?;
        match self.lift {
            Some(lift) if lift.index == index => Some(Rect::from_center_size(
                rest.center() + lift.offset,
                rest.size() * lift.scale,
            )),
            _ => Some(rest),
        }
    }

    fn container_origin(&self) -> Point {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rect, b: Rect) -> bool {
        (a.x0 - b.x0).abs() < 1e-9
            && (a.y0 - b.y0).abs() < 1e-9
            && (a.x1 - b.x1).abs() < 1e-9
            && (a.y1 - b.y1).abs() < 1e-9
    }

    #[test]
    fn unscaled_keeps_center() {
        let rendered = Rect::new(10.0, 10.0, 120.0, 65.0);
        let rect = unscaled_bounds(rendered, 1.1);
        assert!((rect.center() - rendered.center()).hypot() < 1e-9);
        assert!((rect.width() - 100.0).abs() < 1e-9);
        assert!((rect.height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_scale_is_identity() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(unscaled_bounds(rect, 0.0), rect);
        assert_eq!(unscaled_bounds(rect, f64::NAN), rect);
    }

    #[test]
    fn rest_bounds_sit_inside_slots() {
        let grid = GridProjection::new(
            GridLayout::new(3, 7),
            Point::new(100.0, 200.0),
            Size::new(92.0, 32.0),
            Size::new(8.0, 8.0),
        );
        assert_eq!(grid.extent(), Size::new(100.0, 40.0));
        assert_eq!(
            grid.rest_bounds(4),
            Some(Rect::new(204.0, 244.0, 296.0, 276.0))
        );
        assert_eq!(grid.rest_bounds(7), None);
        assert_eq!(grid.item_bounds(7), None);
    }

    #[test]
    fn lifted_item_is_offset_and_scaled() {
        let grid = GridProjection::new(
            GridLayout::new(1, 3),
            Point::ZERO,
            Size::new(100.0, 50.0),
            Size::ZERO,
        )
        .lifted(1, Vec2::new(0.0, 20.0), 1.1);

        let rendered = grid.item_bounds(1).unwrap();
        assert!(close(rendered, Rect::new(-5.0, 67.5, 105.0, 122.5)));
        // Compensating for the lift recovers the offset rest slot.
        assert!(close(
            unscaled_bounds(rendered, 1.1),
            Rect::new(0.0, 70.0, 100.0, 120.0)
        ));
        // Other items are untouched.
        assert_eq!(grid.item_bounds(0), grid.rest_bounds(0));
    }
}
