// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date-to-position mapping over a [`PeriodGrid`].

use chrono::NaiveDate;

use crate::PeriodGrid;

/// Strategy used to turn a date into a horizontal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Addressing {
    /// Period index plus the fraction of the date inside its period.
    ///
    /// Positions line up with column separators. Dates outside the grid
    /// window have no position.
    #[default]
    Discrete,
    /// Days since the window start, scaled to the full content width.
    ///
    /// Every date has a position, but because months differ in length the
    /// positions drift away from column separators.
    Continuous,
}

/// Horizontal axis of a period grid with fixed-width columns.
///
/// ```rust
/// use chrono::NaiveDate;
/// use understory_timeline::{Addressing, DateAxis, PeriodGrid, PeriodType};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
/// let grid = PeriodGrid::build(PeriodType::Month, today, 2).unwrap();
/// let axis = DateAxis::new(&grid, 100.0);
///
/// // March is the third column; the 1st of March sits on its left edge.
/// let march = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert_eq!(axis.position(Addressing::Discrete, march), Some(200.0));
///
/// // Continuous addressing maps the window end to the full content width.
/// assert_eq!(axis.continuous_x(grid.window_end()), axis.content_width());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DateAxis<'a> {
    grid: &'a PeriodGrid,
    column_width: f64,
}

impl<'a> DateAxis<'a> {
    /// Creates an axis over `grid` with columns `column_width` wide.
    #[must_use]
    pub fn new(grid: &'a PeriodGrid, column_width: f64) -> Self {
        Self { grid, column_width }
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &'a PeriodGrid {
        self.grid
    }

    /// Returns the column width.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Returns `column_width * grid.len()`.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.grid.content_width(self.column_width)
    }

    /// Returns the position of `date` using `addressing`.
    ///
    /// `None` is only possible with [`Addressing::Discrete`], for dates
    /// outside the grid window.
    #[must_use]
    pub fn position(&self, addressing: Addressing, date: NaiveDate) -> Option<f64> {
        match addressing {
            Addressing::Discrete => self.discrete_x(date),
            Addressing::Continuous => Some(self.continuous_x(date)),
        }
    }

    /// Returns `column_width * (index + fraction_within_period)` for `date`.
    #[must_use]
    pub fn discrete_x(&self, date: NaiveDate) -> Option<f64> {
        let index = self.grid.index_of_date(date)?;
        let fraction = self.grid.period_type().fraction_within_period(date);
        Some(self.column_width * (index as f64 + fraction))
    }

    /// Returns `content_width * days_since_window_start / total_window_days`.
    ///
    /// Dates outside the window extrapolate linearly. A zero-length window
    /// maps every date to `0.0`.
    #[must_use]
    pub fn continuous_x(&self, date: NaiveDate) -> f64 {
        let total = self.grid.total_window_days();
        if total <= 0 {
            return 0.0;
        }
        let days = (date - self.grid.window_start()).num_days();
        self.content_width() * (days as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Addressing, DateAxis};
    use crate::{PeriodGrid, PeriodType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn discrete_adds_fraction_to_index() {
        let grid = PeriodGrid::build(PeriodType::Month, date(2025, 3, 17), 2).unwrap();
        let axis = DateAxis::new(&grid, 100.0);
        // 17th of March: index 2, fraction 16/31.
        let x = axis.discrete_x(date(2025, 3, 17)).unwrap();
        assert!((x - 100.0 * (2.0 + 16.0 / 31.0)).abs() < 1e-9);
        assert_eq!(axis.discrete_x(date(2025, 6, 1)), None);
        assert_eq!(axis.position(Addressing::Discrete, date(2024, 12, 31)), None);
    }

    #[test]
    fn discrete_weeks_step_by_seventh() {
        let grid = PeriodGrid::build(PeriodType::Week, date(2025, 3, 17), 2).unwrap();
        let axis = DateAxis::new(&grid, 70.0);
        let monday = axis.discrete_x(date(2025, 3, 17)).unwrap();
        let tuesday = axis.discrete_x(date(2025, 3, 18)).unwrap();
        assert!((tuesday - monday - 10.0).abs() < 1e-9);
    }

    #[test]
    fn continuous_spans_content_width_exactly() {
        let grid = PeriodGrid::build(PeriodType::Month, date(2025, 3, 17), 2).unwrap();
        let axis = DateAxis::new(&grid, 100.0);
        assert_eq!(axis.continuous_x(grid.window_start()), 0.0);
        assert_eq!(axis.continuous_x(grid.window_end()), 500.0);
        // Window is 120 days; 60 days in is half way.
        assert_eq!(axis.continuous_x(date(2025, 3, 18)), 250.0);
        assert!(axis.continuous_x(date(2025, 1, 1)) < 0.0);
    }

    #[test]
    fn zero_length_window_maps_to_origin() {
        let grid = PeriodGrid::build(PeriodType::Month, date(2025, 3, 17), 0).unwrap();
        let axis = DateAxis::new(&grid, 100.0);
        assert_eq!(axis.position(Addressing::Continuous, date(2025, 9, 1)), Some(0.0));
    }
}
