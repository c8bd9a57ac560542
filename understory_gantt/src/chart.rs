// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout controller: inputs, dirty tracking, and snapshots.

use alloc::sync::Arc;

use chrono::NaiveDate;
use understory_timeline::{Addressing, GridConfig, GridError, PeriodGrid, PeriodType};

use crate::{LayoutMetrics, LayoutSnapshot, Task, TaskLayoutEngine, Viewport};

/// Whether the current snapshot reflects the current inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutState {
    /// The last snapshot is up to date.
    Clean,
    /// An input changed since the last snapshot, or none was computed yet.
    Dirty,
}

/// Owns the inputs of a Gantt chart and hands out layout snapshots.
///
/// Setters compare against the current value and only mark the layout dirty
/// on a real change. [`GanttChart::snapshot`] recomputes every rectangle from
/// scratch when dirty and otherwise returns the cached snapshot, so calling it
/// once per frame is cheap.
///
/// The task list is compared by identity: replacing it with the same
/// [`Arc`] is a no-op, while a new `Arc` always triggers a recompute even if
/// its contents are equal.
///
/// ```rust
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use understory_gantt::{GanttChart, Task, Viewport};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// let mut chart = GanttChart::new(today).unwrap();
/// chart.set_viewport(Viewport::new(500.0, 240.0));
///
/// let tasks: Arc<[Task]> = vec![Task::new(
///     "Design",
///     NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
/// )]
/// .into();
/// chart.set_tasks(tasks.clone());
///
/// let snapshot = chart.snapshot();
/// assert_eq!(snapshot.rects()[0].rect.x0, 100.0);
///
/// // Same list again: nothing to do.
/// assert!(!chart.set_tasks(tasks));
/// assert!(Arc::ptr_eq(&snapshot, &chart.snapshot()));
/// ```
#[derive(Clone, Debug)]
pub struct GanttChart {
    tasks: Arc<[Task]>,
    grid: Arc<PeriodGrid>,
    engine: TaskLayoutEngine,
    viewport: Viewport,
    state: LayoutState,
    revision: u64,
    snapshot: Option<Arc<LayoutSnapshot>>,
}

impl GanttChart {
    /// Creates an empty chart around `today` with default configuration.
    pub fn new(today: NaiveDate) -> Result<Self, GridError> {
        Self::with_config(
            today,
            GridConfig::default(),
            LayoutMetrics::default(),
            Addressing::default(),
        )
    }

    /// Creates an empty chart with explicit configuration.
    pub fn with_config(
        today: NaiveDate,
        config: GridConfig,
        metrics: LayoutMetrics,
        addressing: Addressing,
    ) -> Result<Self, GridError> {
        let grid = PeriodGrid::from_config(config, today)?;
        Ok(Self {
            tasks: Arc::new([]),
            grid: Arc::new(grid),
            engine: TaskLayoutEngine::new(metrics, addressing),
            viewport: Viewport::default(),
            state: LayoutState::Dirty,
            revision: 0,
            snapshot: None,
        })
    }

    /// Returns the current task list.
    #[must_use]
    pub fn tasks(&self) -> &Arc<[Task]> {
        &self.tasks
    }

    /// Replaces the task list.
    ///
    /// Returns `false` and keeps the layout clean if `tasks` is the list
    /// already held.
    pub fn set_tasks(&mut self, tasks: Arc<[Task]>) -> bool {
        if Arc::ptr_eq(&self.tasks, &tasks) {
            log::trace!("ignoring identical task list");
            return false;
        }
        self.tasks = tasks;
        self.state = LayoutState::Dirty;
        true
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sets the viewport, typically from a size-changed notification.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport.is_identical(&viewport) {
            log::trace!("ignoring unchanged viewport {viewport:?}");
            return false;
        }
        self.viewport = viewport;
        self.state = LayoutState::Dirty;
        true
    }

    /// Returns the period grid.
    #[must_use]
    pub fn grid(&self) -> &PeriodGrid {
        &self.grid
    }

    /// Returns the column granularity.
    #[must_use]
    pub fn period_type(&self) -> PeriodType {
        self.grid.period_type()
    }

    /// Switches the column granularity, rebuilding the grid.
    pub fn set_period_type(&mut self, period_type: PeriodType) -> Result<bool, GridError> {
        if self.grid.period_type() == period_type {
            return Ok(false);
        }
        self.rebuild_grid(period_type, self.grid.today(), self.grid.window_months())
    }

    /// Returns the reference date the grid window is centred on.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.grid.today()
    }

    /// Moves the grid window to a new reference date.
    pub fn set_today(&mut self, today: NaiveDate) -> Result<bool, GridError> {
        if self.grid.today() == today {
            return Ok(false);
        }
        self.rebuild_grid(self.grid.period_type(), today, self.grid.window_months())
    }

    /// Returns the months on each side of the reference date.
    #[must_use]
    pub fn window_months(&self) -> u32 {
        self.grid.window_months()
    }

    /// Resizes the grid window.
    pub fn set_window_months(&mut self, window_months: u32) -> Result<bool, GridError> {
        if self.grid.window_months() == window_months {
            return Ok(false);
        }
        self.rebuild_grid(self.grid.period_type(), self.grid.today(), window_months)
    }

    /// Returns the addressing strategy.
    #[must_use]
    pub fn addressing(&self) -> Addressing {
        self.engine.addressing()
    }

    /// Switches between discrete and continuous addressing.
    pub fn set_addressing(&mut self, addressing: Addressing) -> bool {
        if self.engine.addressing() == addressing {
            return false;
        }
        self.engine = TaskLayoutEngine::new(*self.engine.metrics(), addressing);
        self.state = LayoutState::Dirty;
        true
    }

    /// Returns the layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        self.engine.metrics()
    }

    /// Replaces the layout metrics.
    ///
    /// Metrics are compared field by field with
    /// [`LayoutMetrics::is_identical`], so passing the current metrics again
    /// is a no-op even when a field is NaN.
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) -> bool {
        if self.engine.metrics().is_identical(&metrics) {
            return false;
        }
        self.engine = TaskLayoutEngine::new(metrics, self.engine.addressing());
        self.state = LayoutState::Dirty;
        true
    }

    /// Returns whether the next [`GanttChart::snapshot`] will recompute.
    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Returns the revision of the most recent snapshot, `0` before the first.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `period_column_width * grid.len()` for the host's measure pass.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.grid.content_width(self.metrics().period_column_width)
    }

    /// Returns `row_height * (tasks.len() + 1)` for the host's measure pass.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.metrics().content_height(self.tasks.len())
    }

    /// Returns an up-to-date layout, recomputing it if any input changed.
    pub fn snapshot(&mut self) -> Arc<LayoutSnapshot> {
        if let (LayoutState::Clean, Some(snapshot)) = (self.state, &self.snapshot) {
            return Arc::clone(snapshot);
        }
        self.revision += 1;
        log::debug!(
            "recomputing layout revision {}: {} tasks, {:?} periods, {:?} addressing, {:?}",
            self.revision,
            self.tasks.len(),
            self.grid.period_type(),
            self.engine.addressing(),
            self.viewport,
        );
        let snapshot = Arc::new(LayoutSnapshot::compute(
            self.revision,
            Arc::clone(&self.tasks),
            Arc::clone(&self.grid),
            self.engine,
            self.viewport,
        ));
        self.snapshot = Some(Arc::clone(&snapshot));
        self.state = LayoutState::Clean;
        snapshot
    }

    fn rebuild_grid(
        &mut self,
        period_type: PeriodType,
        today: NaiveDate,
        window_months: u32,
    ) -> Result<bool, GridError> {
        let grid = PeriodGrid::build(period_type, today, window_months)?;
        log::debug!(
            "rebuilt {period_type:?} grid around {today}: {} periods",
            grid.len()
        );
        self.grid = Arc::new(grid);
        self.state = LayoutState::Dirty;
        Ok(true)
    }
}
