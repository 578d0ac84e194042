// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Displacement renderer: per-item visual styles derived from machine state.
//!
//! [`style_for`] is a pure function of a [`Reorder`] and an item index. It never
//! measures anything and has no side effects; the host maps each [`ItemStyle`]
//! onto whatever it renders with (a CSS transform, an [`Affine`] on a scene
//! node, and so on).
//!
//! Rules, first match wins:
//!
//! 1. The pressed item follows the pointer while its scale animates up ([`Transition::Lift`]).
//! 2. The dragged item follows the pointer, scaled, with no transition ([`Transition::Snap`]).
//! 3. The settling item jumps to its drop offset and animates back to rest
//!    ([`Transition::Settle`]). While a settle is pending every other item is
//!    pinned at rest with [`Transition::Snap`]: their storage slots may just have
//!    changed and they must not animate out of stale transforms.
//! 4. While dragging, items between the target and the source move one slot
//!    toward the vacated source, flowing diagonally around row wraps.
//! 5. Everything else is at rest.
//!
//! Pointer moves reach this at pointer-event frequency, so hosts should not
//! re-render every item each time. [`DisplacementCache`] keeps the last style per
//! item and reports only the indices whose style actually changed.

use alloc::vec::Vec;

use kurbo::{Affine, Point, Vec2};
use smallvec::SmallVec;

use crate::layout::Shift;
use crate::machine::Reorder;

/// How the host should get from an item's current transform to a new one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Animate to the new transform.
    #[default]
    Animate,
    /// Apply the new transform immediately.
    Snap,
    /// Apply the offset immediately but animate the scale.
    Lift,
    /// Jump to the new transform, then animate back to rest.
    ///
    /// The host reports the end of that animation through
    /// [`Reorder::on_settle_transition_end`].
    Settle,
}

/// Stacking layer for an item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Normal stacking order.
    #[default]
    Base,
    /// Drawn above its siblings.
    Raised,
}

/// Visual transform and animation hint for one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemStyle {
    /// Translation from the item's resting slot.
    pub offset: Vec2,
    /// Uniform scale about the item's center.
    pub scale: f64,
    /// How to reach this style from the previous one.
    pub transition: Transition,
    /// Stacking layer.
    pub layer: Layer,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self::REST
    }
}

impl ItemStyle {
    /// Identity transform, animated.
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        transition: Transition::Animate,
        layer: Layer::Base,
    };

    /// Identity transform, applied without animation.
    pub const PINNED: Self = Self {
        transition: Transition::Snap,
        ..Self::REST
    };

    /// Returns `true` if the style does not move or scale the item.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.offset == Vec2::ZERO && self.scale == 1.0
    }

    /// The style as an affine transform for an item whose resting center is `center`.
    #[must_use]
    pub fn to_affine(&self, center: Point) -> Affine {
        let center = center.to_vec2();
        Affine::translate(center + self.offset) * Affine::scale(self.scale) * Affine::translate(-center)
    }
}

/// Computes the style of the item at `index`.
#[must_use]
pub fn style_for(state: &Reorder, index: usize) -> ItemStyle {
    let lifted = |transition| ItemStyle {
        offset: state.pointer_delta(),
        scale: state.config().lift_scale(),
        transition,
        layer: Layer::Raised,
    };

    if state.pressed_index() == Some(index) {
        return lifted(Transition::Lift);
    }
    if state.source_index() == Some(index) {
        return lifted(Transition::Snap);
    }
    if let Some(settling) = state.pending_settle_index() {
        return if settling == index {
            lifted(Transition::Settle)
        } else {
            ItemStyle::PINNED
        };
    }

    let (Some(source), Some(target)) = (state.source_index(), state.target_index()) else {
        return ItemStyle::REST;
    };
    let shift = if target <= index && index < source {
        Shift::Forward
    } else if source < index && index <= target {
        Shift::Backward
    } else {
        return ItemStyle::REST;
    };
    ItemStyle {
        offset: state
            .layout()
            .displacement(index, shift, state.item_extent()),
        ..ItemStyle::REST
    }
}

/// Last computed style per item, with change tracking.
///
/// ```
/// use kurbo::Point;
/// use understory_reorder::{DisplacementCache, GridLayout, GridProjection, Reorder, ReorderConfig};
///
/// let config = ReorderConfig::new();
/// let mut reorder = Reorder::new(config, 100);
/// let mut cache = DisplacementCache::new();
/// assert_eq!(cache.refresh(&reorder).len(), 100);
///
/// let grid = GridProjection::new(
///     GridLayout::new(1, 100),
///     Point::ZERO,
///     kurbo::Size::new(92.0, 32.0),
///     config.gutter(),
/// );
/// reorder.on_pointer_down(10, Point::new(50.0, 420.0), &grid);
///
/// // Only the pressed item changed.
/// assert_eq!(cache.refresh(&reorder), &[10]);
/// assert_eq!(cache.refresh(&reorder), &[] as &[usize]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisplacementCache {
    styles: Vec<ItemStyle>,
    changed: SmallVec<[usize; 8]>,
}

impl DisplacementCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Styles from the last refresh, one per item.
    #[must_use]
    pub fn styles(&self) -> &[ItemStyle] {
        &self.styles
    }

    /// Style of the item at `index` from the last refresh.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemStyle> {
        self.styles.get(index)
    }

    /// Indices whose style changed in the last refresh, ascending.
    #[must_use]
    pub fn changed(&self) -> &[usize] {
        &self.changed
    }

    /// Recomputes every style from `state` and returns the indices that changed.
    ///
    /// Unchanged entries are left untouched. If the item count changed, every
    /// index is reported.
    pub fn refresh(&mut self, state: &Reorder) -> &[usize] {
        self.changed.clear();
        let len = state.layout().len();
        let resized = self.styles.len() != len;
        if resized {
            self.styles.clear();
            self.styles.resize(len, ItemStyle::REST);
        }
        for (index, slot) in self.styles.iter_mut().enumerate() {
            let style = style_for(state, index);
            if resized || *slot != style {
                *slot = style;
                self.changed.push(index);
            }
        }
        &self.changed
    }
}
