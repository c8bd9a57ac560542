// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable layout results.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Line, Size};
use understory_timeline::{Addressing, PeriodGrid};

use crate::rows::{self, RowBand};
use crate::{LayoutMetrics, Task, TaskLayoutEngine, TaskRect, TaskShape, Viewport};

/// Everything a host needs to measure and draw one layout pass.
///
/// A snapshot is computed in one go from the task list, grid, metrics,
/// addressing strategy, and viewport, and never changes afterwards. The
/// [`revision`](Self::revision) identifies it; a newer snapshot always has a
/// larger revision.
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    revision: u64,
    tasks: Arc<[Task]>,
    grid: Arc<PeriodGrid>,
    engine: TaskLayoutEngine,
    viewport: Viewport,
    rects: Vec<TaskRect>,
}

impl LayoutSnapshot {
    /// Lays out `tasks` and captures the inputs alongside the result.
    #[must_use]
    pub fn compute(
        revision: u64,
        tasks: Arc<[Task]>,
        grid: Arc<PeriodGrid>,
        engine: TaskLayoutEngine,
        viewport: Viewport,
    ) -> Self {
        let rects = engine.layout(&tasks, &grid, viewport);
        Self {
            revision,
            tasks,
            grid,
            engine,
            viewport,
            rects,
        }
    }

    /// Returns the revision of this snapshot.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the tasks, in row order.
    #[must_use]
    pub fn tasks(&self) -> &Arc<[Task]> {
        &self.tasks
    }

    /// Returns the period grid.
    #[must_use]
    pub fn grid(&self) -> &PeriodGrid {
        &self.grid
    }

    /// Returns the layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        self.engine.metrics()
    }

    /// Returns the addressing strategy.
    #[must_use]
    pub fn addressing(&self) -> Addressing {
        self.engine.addressing()
    }

    /// Returns the viewport the layout was computed for.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns one rectangle per task, in task order.
    #[must_use]
    pub fn rects(&self) -> &[TaskRect] {
        &self.rects
    }

    /// Returns `period_column_width * grid.len()`.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.grid.content_width(self.metrics().period_column_width)
    }

    /// Returns `row_height * (tasks.len() + 1)`.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.metrics().content_height(self.tasks.len())
    }

    /// Returns the content width and height together.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width(), self.content_height())
    }

    /// Iterates over tasks that pass the culling test.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Task, &TaskRect)> + '_ {
        self.tasks
            .iter()
            .zip(&self.rects)
            .enumerate()
            .filter(|(_, (_, rect))| rect.is_on_screen)
            .map(|(index, (task, rect))| (index, task, rect))
    }

    /// Returns the shapes of all on-screen tasks, in task order.
    #[must_use]
    pub fn task_shapes(&self) -> Vec<TaskShape> {
        let metrics = self.metrics();
        self.visible()
            .map(|(_, _, rect)| TaskShape::new(rect.rect, metrics))
            .collect()
    }

    /// Iterates over the header and task row bands that start on screen.
    pub fn row_bands(&self) -> impl Iterator<Item = RowBand> + '_ {
        rows::row_bands(self.tasks.len() + 1, self.metrics(), self.viewport)
    }

    /// Returns the line under the period header.
    #[must_use]
    pub fn header_separator(&self) -> Line {
        rows::header_separator(self.metrics(), self.viewport)
    }

    /// Iterates over the vertical separators after each period column.
    pub fn column_separators(&self) -> impl Iterator<Item = Line> + '_ {
        rows::column_separators(&self.grid, self.metrics(), self.viewport)
    }
}
