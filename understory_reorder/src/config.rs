// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder configuration.

use kurbo::Size;

/// Knobs for a [`Reorder`](crate::Reorder) state machine.
///
/// All values are sanitized on the way in, so a `ReorderConfig` is always usable:
/// a column count of zero becomes one, and a lift scale that is not a finite
/// positive number becomes `1.0`.
///
/// ```
/// use kurbo::Size;
/// use understory_reorder::ReorderConfig;
///
/// let config = ReorderConfig::new()
///     .with_columns(3)
///     .with_lift_scale(1.2)
///     .with_gutter(Size::new(4.0, 4.0));
/// assert_eq!(config.columns(), 3);
/// assert_eq!(ReorderConfig::new().with_columns(0).columns(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReorderConfig {
    columns: usize,
    lift_scale: f64,
    gutter: Size,
    animated: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderConfig {
    /// Default visual scale applied to the lifted item.
    pub const DEFAULT_LIFT_SCALE: f64 = 1.1;

    /// Default spacing between neighboring items.
    pub const DEFAULT_GUTTER: Size = Size::new(8.0, 8.0);

    /// A single-column list with the default lift scale and gutter, animated.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: 1,
            lift_scale: Self::DEFAULT_LIFT_SCALE,
            gutter: Self::DEFAULT_GUTTER,
            animated: true,
        }
    }

    /// Sets the number of grid columns. Zero is treated as one.
    #[must_use]
    pub const fn with_columns(mut self, columns: usize) -> Self {
        self.columns = if columns == 0 { 1 } else { columns };
        self
    }

    /// Sets the scale applied to the lifted item while it is pressed or dragged.
    ///
    /// Values that are not finite and positive fall back to `1.0` (no lift).
    #[must_use]
    pub fn with_lift_scale(mut self, scale: f64) -> Self {
        self.lift_scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        self
    }

    /// Sets the gap added to a measured item size to form its slot extent.
    ///
    /// Negative components are clamped to zero.
    #[must_use]
    pub fn with_gutter(mut self, gutter: Size) -> Self {
        self.gutter = Size::new(gutter.width.max(0.0), gutter.height.max(0.0));
        self
    }

    /// Sets whether the host plays lift and settle transitions.
    ///
    /// When `false`, the lift completes inside
    /// [`Reorder::on_pointer_down`](crate::Reorder::on_pointer_down) and the settle
    /// completes inside [`Reorder::on_pointer_up`](crate::Reorder::on_pointer_up),
    /// so the host never has to report transition ends.
    #[must_use]
    pub const fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Number of grid columns (at least one).
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Scale applied to the lifted item.
    #[must_use]
    pub const fn lift_scale(&self) -> f64 {
        self.lift_scale
    }

    /// Spacing added to the measured item size.
    #[must_use]
    pub const fn gutter(&self) -> Size {
        self.gutter
    }

    /// Whether lift and settle wait for transition-end signals.
    #[must_use]
    pub const fn animated(&self) -> bool {
        self.animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_column_list() {
        let config = ReorderConfig::default();
        assert_eq!(config.columns(), 1);
        assert_eq!(config.lift_scale(), 1.1);
        assert_eq!(config.gutter(), Size::new(8.0, 8.0));
        assert!(config.animated());
    }

    #[test]
    fn invalid_lift_scale_falls_back_to_identity() {
        for scale in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let config = ReorderConfig::new().with_lift_scale(scale);
            assert_eq!(config.lift_scale(), 1.0, "scale {scale} should be rejected");
        }
    }

    #[test]
    fn negative_gutter_is_clamped() {
        let config = ReorderConfig::new().with_gutter(Size::new(-3.0, 2.0));
        assert_eq!(config.gutter(), Size::new(0.0, 2.0));
    }
}
