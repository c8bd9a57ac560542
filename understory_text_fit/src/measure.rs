// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement seam.

use unicode_width::UnicodeWidthStr;

/// Vertical font metrics in a y-down coordinate space.
///
/// `ascent` is the signed distance from the baseline to the top of the
/// tallest glyphs and is therefore negative; `descent` is the distance to the
/// bottom of descenders and is positive. This is the convention used by
/// Skia-style paint metrics.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FontMetrics {
    /// Signed distance above the baseline (negative).
    pub ascent: f64,
    /// Signed distance below the baseline (positive).
    pub descent: f64,
}

impl FontMetrics {
    /// Creates metrics from a signed ascent and descent.
    #[must_use]
    pub const fn new(ascent: f64, descent: f64) -> Self {
        Self { ascent, descent }
    }

    /// Returns the line height `descent - ascent`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.descent - self.ascent
    }
}

/// Measures rendered text.
///
/// Implementations usually wrap a shaping or font library owned by the host.
/// Advances are expected to grow monotonically as a string is extended.
pub trait TextMeasure {
    /// Returns the horizontal advance of `text` when rendered on one line.
    fn advance(&self, text: &str) -> f64;

    /// Returns the vertical metrics of the font used for measuring.
    fn metrics(&self) -> FontMetrics;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn advance(&self, text: &str) -> f64 {
        (**self).advance(text)
    }

    fn metrics(&self) -> FontMetrics {
        (**self).metrics()
    }
}

/// Fixed-pitch measurement based on terminal column widths.
///
/// Each character advances by its Unicode display width (0, 1, or 2 cells)
/// times `cell_width`. Useful for character-cell hosts and for tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    /// Width of one cell.
    pub cell_width: f64,
    /// Vertical metrics reported to callers.
    pub metrics: FontMetrics,
}

impl MonospaceMeasure {
    /// Creates a measure with the given cell width and metrics.
    #[must_use]
    pub const fn new(cell_width: f64, metrics: FontMetrics) -> Self {
        Self {
            cell_width,
            metrics,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn advance(&self, text: &str) -> f64 {
        text.width() as f64 * self.cell_width
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}

/// Adapts a closure returning advances into a [`TextMeasure`].
#[derive(Clone, Copy)]
pub struct FnMeasure<F> {
    advance: F,
    metrics: FontMetrics,
}

impl<F: Fn(&str) -> f64> FnMeasure<F> {
    /// Wraps `advance` together with fixed font metrics.
    #[must_use]
    pub fn new(advance: F, metrics: FontMetrics) -> Self {
        Self { advance, metrics }
    }
}

impl<F> core::fmt::Debug for FnMeasure<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnMeasure")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl<F: Fn(&str) -> f64> TextMeasure for FnMeasure<F> {
    fn advance(&self, text: &str) -> f64 {
        (self.advance)(text)
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}
