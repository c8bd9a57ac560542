// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gantt --heading-base-level=0

//! Understory Gantt: headless Gantt chart layout.
//!
//! This crate turns a list of dated tasks into the geometry a host needs to
//! draw a Gantt chart: a period header, alternating row bands, one rectangle
//! per task, culling flags, task outlines, and fitted labels. It builds on
//! [`understory_timeline`] for the calendar axis and [`understory_text_fit`]
//! for labels.
//!
//! The core concepts are:
//!
//! - [`Task`]: a name with a start and end date.
//! - [`LayoutMetrics`] and [`Viewport`]: caller-supplied sizes.
//! - [`TaskLayoutEngine`]: maps task `i` to a rectangle in row `i + 1` (row
//!   `0` is the period header), with horizontal bounds from an
//!   [`Addressing`] strategy, and flags it with a loose culling test.
//! - [`LayoutSnapshot`]: the immutable result of one layout pass, with row
//!   bands, separators, task shapes, and draw lists.
//! - [`GanttChart`]: a small controller that owns the inputs, tracks whether
//!   they changed, and recomputes a fresh snapshot only when needed.
//! - [`RasterCache`]: keeps a host-rendered raster of task shapes for the
//!   lifetime of one snapshot revision.
//!
//! This crate deliberately does **not** draw anything or own a widget. Host
//! frameworks are responsible for:
//!
//! - Feeding size changes into [`GanttChart::set_viewport`] and replacing the
//!   task list with [`GanttChart::set_tasks`].
//! - Reporting [`LayoutSnapshot::content_size`] from their measure pass.
//! - Filling [`RowBand`]s, stroking separators, and filling [`TaskShape`]s
//!   (directly, or once per revision through a [`ShapeRasterizer`]).
//! - Drawing the labels from [`LayoutSnapshot::task_draws`] and
//!   [`LayoutSnapshot::header_cells`] with the font behind their
//!   [`understory_text_fit::TextMeasure`].
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_gantt::{GanttChart, Task, Viewport};
//! use understory_text_fit::{FontMetrics, MonospaceMeasure, TextFitter};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
//! let mut chart = GanttChart::new(today).unwrap();
//! chart.set_viewport(Viewport::new(500.0, 200.0));
//! chart.set_tasks(
//!     vec![Task::new(
//!         "Release planning",
//!         NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
//!     )]
//!     .into(),
//! );
//!
//! let snapshot = chart.snapshot();
//! let fitter = TextFitter::new(MonospaceMeasure::new(8.0, FontMetrics::new(-10.0, 3.0)));
//!
//! for draw in snapshot.task_draws(&fitter) {
//!     if draw.rect.is_on_screen {
//!         // fill draw.shape, then draw draw.label at draw.label_origin
//!         assert_eq!(draw.label, "Release planning");
//!     }
//! }
//! ```
//!
//! Every recompute lays out all tasks from scratch; task lists are expected
//! to be in the tens, not thousands.
//!
//! Recomputes and raster rebuilds are reported through the `log` facade at
//! `debug` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chart;
mod draw;
mod engine;
mod metrics;
mod raster;
mod rows;
mod shape;
mod snapshot;
mod task;

pub use chart::{GanttChart, LayoutState};
pub use draw::{HeaderCell, TaskDraw};
pub use engine::{TaskLayoutEngine, TaskRect, is_on_screen};
pub use metrics::{LayoutMetrics, Viewport};
pub use raster::{RasterCache, ShapeRasterizer};
pub use rows::{RowBand, RowStripes, column_separators, header_separator, row_bands};
pub use shape::{LabelSlot, TaskShape};
pub use snapshot::LayoutSnapshot;
pub use task::{Task, TaskError};

pub use understory_timeline::{Addressing, GridConfig, GridError, PeriodGrid, PeriodType};
