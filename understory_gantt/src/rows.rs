// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background row bands and grid separators.

use kurbo::{Line, Rect};
use understory_timeline::PeriodGrid;

use crate::{LayoutMetrics, Viewport};

/// A full-width background band for one row.
///
/// Row `0` is the period header; row `i + 1` holds task `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBand {
    /// Row index, header included.
    pub index: usize,
    /// Band bounds.
    pub rect: Rect,
    /// Alternating stripe, `index % 2`.
    pub stripe: usize,
}

/// Alternating pair of row fills, generic over the host's colour type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RowStripes<C> {
    /// Fill for even rows, including the header.
    pub even: C,
    /// Fill for odd rows.
    pub odd: C,
}

impl<C> RowStripes<C> {
    /// Creates a stripe pair.
    pub const fn new(even: C, odd: C) -> Self {
        Self { even, odd }
    }

    /// Returns the fill for `band`.
    pub fn fill(&self, band: &RowBand) -> &C {
        if band.stripe == 0 {
            &self.even
        } else {
            &self.odd
        }
    }
}

/// Iterates over the bands of `row_count` rows that start inside the viewport.
pub fn row_bands(
    row_count: usize,
    metrics: &LayoutMetrics,
    viewport: Viewport,
) -> impl Iterator<Item = RowBand> {
    let row_height = metrics.row_height;
    (0..row_count)
        .map(move |index| {
            let top = row_height * index as f64;
            RowBand {
                index,
                rect: Rect::new(0.0, top, viewport.width, top + row_height),
                stripe: index % 2,
            }
        })
        .take_while(move |band| band.rect.y0 < viewport.height)
}

/// Horizontal line between the period header and the first task row.
#[must_use]
pub fn header_separator(metrics: &LayoutMetrics, viewport: Viewport) -> Line {
    Line::new(
        (0.0, metrics.row_height),
        (viewport.width, metrics.row_height),
    )
}

/// Vertical lines at the right edge of every period column.
pub fn column_separators<'a>(
    grid: &'a PeriodGrid,
    metrics: &LayoutMetrics,
    viewport: Viewport,
) -> impl Iterator<Item = Line> + 'a {
    let column_width = metrics.period_column_width;
    (0..grid.len()).map(move |index| {
        let x = grid.separator_x(index, column_width);
        Line::new((x, 0.0), (x, viewport.height))
    })
}
