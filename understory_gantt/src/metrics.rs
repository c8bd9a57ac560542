// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Caller-supplied layout constants, in the same units as the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Height of every row, including the period header row.
    pub row_height: f64,
    /// Width of one period column.
    pub period_column_width: f64,
    /// Gap between a task shape and the top and bottom of its row.
    pub vertical_margin: f64,
    /// Corner radius of task shapes.
    pub corner_radius: f64,
    /// Gap between a task shape's edges and its label.
    pub text_horizontal_margin: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: 40.0,
            period_column_width: 100.0,
            vertical_margin: 8.0,
            corner_radius: 8.0,
            text_horizontal_margin: 8.0,
        }
    }
}

impl LayoutMetrics {
    /// Sets [`LayoutMetrics::row_height`].
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Sets [`LayoutMetrics::period_column_width`].
    #[must_use]
    pub fn with_period_column_width(mut self, width: f64) -> Self {
        self.period_column_width = width;
        self
    }

    /// Sets [`LayoutMetrics::vertical_margin`].
    #[must_use]
    pub fn with_vertical_margin(mut self, margin: f64) -> Self {
        self.vertical_margin = margin;
        self
    }

    /// Sets [`LayoutMetrics::corner_radius`].
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets [`LayoutMetrics::text_horizontal_margin`].
    #[must_use]
    pub fn with_text_horizontal_margin(mut self, margin: f64) -> Self {
        self.text_horizontal_margin = margin;
        self
    }

    /// Radius of the circular notch cut from the left edge of task shapes.
    ///
    /// A quarter of the task shape height.
    #[must_use]
    pub fn notch_radius(&self) -> f64 {
        (self.row_height - self.vertical_margin * 2.0) / 4.0
    }

    /// Returns `true` if every field has the same bit pattern as in `other`.
    ///
    /// Unlike `==`, a NaN field matches itself here, so re-applying the same
    /// metrics is recognised as unchanged.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn to_bits(self) -> [u64; 5] {
        [
            self.row_height.to_bits(),
            self.period_column_width.to_bits(),
            self.vertical_margin.to_bits(),
            self.corner_radius.to_bits(),
            self.text_horizontal_margin.to_bits(),
        ]
    }

    /// Height of all task rows plus the header row.
    #[must_use]
    pub fn content_height(&self, task_count: usize) -> f64 {
        self.row_height * (task_count as f64 + 1.0)
    }
}

/// Visible area of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    /// Width of the drawing surface.
    pub width: f64,
    /// Height of the drawing surface.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either side is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns `true` if both sides have the same bit pattern as in `other`.
    ///
    /// Unlike `==`, a NaN side matches itself.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }

    /// Returns the viewport as a kurbo size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
