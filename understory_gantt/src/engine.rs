// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Task rectangles over a period grid.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_timeline::{Addressing, DateAxis, PeriodGrid};

use crate::{LayoutMetrics, Task, Viewport};

/// Layout result for one task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaskRect {
    /// Task bounds in viewport coordinates.
    ///
    /// Not normalized: a task that ends before it starts has `x1 < x0`.
    pub rect: Rect,
    /// Whether drawing this task can be worthwhile.
    pub is_on_screen: bool,
}

/// Loose culling test for a task rectangle.
///
/// A rectangle is kept when its top is above the bottom of the viewport and
/// either its right edge is right of the origin or its left edge is less than
/// its own width. The second clause only guards degenerate zero-width rects;
/// this is not a strict intersection test and never skips geometry, only
/// drawing.
#[must_use]
pub fn is_on_screen(rect: Rect, viewport: Viewport) -> bool {
    rect.y0 < viewport.height && (rect.x1 > 0.0 || rect.x0 < rect.width())
}

/// Maps tasks to row-banded rectangles.
///
/// Row `0` is reserved for the period header, so task `i` occupies the band
/// `[row_height * (i + 1), row_height * (i + 2))`, inset vertically by
/// [`LayoutMetrics::vertical_margin`]. Horizontal bounds come from the
/// configured [`Addressing`]. With discrete addressing an unresolvable start
/// becomes `-corner_radius` and an unresolvable end becomes
/// `viewport.width + corner_radius`, so out-of-window tasks bleed off screen
/// with their rounded corners hidden.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TaskLayoutEngine {
    metrics: LayoutMetrics,
    addressing: Addressing,
}

impl TaskLayoutEngine {
    /// Creates an engine with the given metrics and addressing strategy.
    #[must_use]
    pub fn new(metrics: LayoutMetrics, addressing: Addressing) -> Self {
        Self {
            metrics,
            addressing,
        }
    }

    /// Returns the layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Returns the addressing strategy.
    #[must_use]
    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// Lays out every task, preserving order.
    ///
    /// Every rectangle is recomputed from scratch.
    #[must_use]
    pub fn layout(&self, tasks: &[Task], grid: &PeriodGrid, viewport: Viewport) -> Vec<TaskRect> {
        let axis = DateAxis::new(grid, self.metrics.period_column_width);
        tasks
            .iter()
            .enumerate()
            .map(|(index, task)| self.task_rect(index, task, &axis, viewport))
            .collect()
    }

    /// Lays out the task at row `index`.
    #[must_use]
    pub fn task_rect(
        &self,
        index: usize,
        task: &Task,
        axis: &DateAxis<'_>,
        viewport: Viewport,
    ) -> TaskRect {
        let m = &self.metrics;
        let left = axis
            .position(self.addressing, task.date_start)
            .unwrap_or(-m.corner_radius);
        let right = axis
            .position(self.addressing, task.date_end)
            .unwrap_or(viewport.width + m.corner_radius);
        let row = index as f64;
        let rect = Rect::new(
            left,
            m.row_height * (row + 1.0) + m.vertical_margin,
            right,
            m.row_height * (row + 2.0) - m.vertical_margin,
        );
        TaskRect {
            rect,
            is_on_screen: is_on_screen(rect, viewport),
        }
    }
}
