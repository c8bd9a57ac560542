// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame draw lists derived from a [`LayoutSnapshot`].

use alloc::vec::Vec;

use kurbo::Point;
use understory_text_fit::{TextFitter, TextMeasure};

use crate::{LabelSlot, LayoutSnapshot, Task, TaskRect, TaskShape};

/// Draw instructions for one task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaskDraw<'a> {
    /// Row index of the task.
    pub index: usize,
    /// The task itself.
    pub task: &'a Task,
    /// Rectangle and culling flag.
    pub rect: TaskRect,
    /// Outline to fill.
    pub shape: TaskShape,
    /// Longest prefix of the task name that fits. Empty for culled tasks.
    pub label: &'a str,
    /// Left end of the label baseline.
    pub label_origin: Point,
}

/// Draw instructions for one period header column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderCell<'a> {
    /// Column index.
    pub index: usize,
    /// Period label.
    pub label: &'a str,
    /// Left edge of the column.
    pub column_left: f64,
    /// Left end of the label baseline, centring the label in the column.
    pub label_origin: Point,
    /// X of the separator after this column.
    pub separator_x: f64,
}

impl LayoutSnapshot {
    /// Builds draw instructions for every task, in task order.
    ///
    /// Labels are fitted only for tasks that pass the culling test; culled
    /// tasks get an empty label.
    #[must_use]
    pub fn task_draws<M: TextMeasure>(&self, fitter: &TextFitter<M>) -> Vec<TaskDraw<'_>> {
        let metrics = self.metrics();
        self.tasks()
            .iter()
            .zip(self.rects())
            .enumerate()
            .map(|(index, (task, rect))| {
                let slot = LabelSlot::new(rect.rect, metrics);
                let label = if rect.is_on_screen {
                    fitter.fit(&task.name, slot.available_width)
                } else {
                    ""
                };
                TaskDraw {
                    index,
                    task,
                    rect: *rect,
                    shape: TaskShape::new(rect.rect, metrics),
                    label,
                    label_origin: Point::new(
                        slot.origin_x,
                        fitter.vertical_baseline(slot.center_y),
                    ),
                }
            })
            .collect()
    }

    /// Builds draw instructions for the period header row.
    #[must_use]
    pub fn header_cells<M: TextMeasure>(&self, fitter: &TextFitter<M>) -> Vec<HeaderCell<'_>> {
        let grid = self.grid();
        let column_width = self.metrics().period_column_width;
        let baseline = fitter.vertical_baseline(self.metrics().row_height / 2.0);
        grid.labels()
            .enumerate()
            .map(|(index, label)| HeaderCell {
                index,
                label,
                column_left: grid.column_left(index, column_width),
                label_origin: Point::new(
                    grid.centered_label_x(index, column_width, fitter.advance(label)),
                    baseline,
                ),
                separator_x: grid.separator_x(index, column_width),
            })
            .collect()
    }
}
