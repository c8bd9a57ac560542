// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Period grid spanning a fixed window around a reference date.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chrono::{Months, NaiveDate};

use crate::PeriodType;

/// Default number of months on each side of the reference date.
pub const DEFAULT_WINDOW_MONTHS: u32 = 2;

/// Error returned when a grid window cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Shifting or stepping from `date` left chrono's representable range.
    DateOutOfRange {
        /// The date the failing calendar operation started from.
        date: NaiveDate,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateOutOfRange { date } => {
                write!(f, "period window around {date} is not representable")
            }
        }
    }
}

impl core::error::Error for GridError {}

/// Granularity and window size used to build a [`PeriodGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Column granularity.
    pub period_type: PeriodType,
    /// Months on each side of the reference date.
    pub window_months: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            period_type: PeriodType::default(),
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}

/// One column of a [`PeriodGrid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    /// First day of the period.
    pub start: NaiveDate,
    /// Display label, as produced by [`PeriodType::label`].
    pub label: String,
}

/// Ordered periods covering `[today - N months, today + N months]`.
///
/// The grid is a pure function of its [`PeriodType`], the reference date, and
/// the window size. Periods are aligned to their natural boundaries, so the
/// first column is the period containing the window start and the last column
/// is the period containing the window end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodGrid {
    period_type: PeriodType,
    today: NaiveDate,
    window_months: u32,
    window_start: NaiveDate,
    window_end: NaiveDate,
    periods: Vec<Period>,
}

impl PeriodGrid {
    /// Builds the grid for `period_type` around `today`.
    ///
    /// Iteration starts at the beginning of the period containing
    /// `today - window_months` and repeatedly applies
    /// [`PeriodType::increment`] until it passes `today + window_months`.
    pub fn build(
        period_type: PeriodType,
        today: NaiveDate,
        window_months: u32,
    ) -> Result<Self, GridError> {
        let out_of_range = |date| GridError::DateOutOfRange { date };
        let months = Months::new(window_months);
        let window_start = today
            .checked_sub_months(months)
            .ok_or(out_of_range(today))?;
        let window_end = today
            .checked_add_months(months)
            .ok_or(out_of_range(today))?;

        let mut cursor = period_type
            .period_start(window_start)
            .ok_or(out_of_range(window_start))?;
        let mut periods = Vec::new();
        while cursor <= window_end {
            periods.push(Period {
                start: cursor,
                label: period_type.label(cursor),
            });
            cursor = period_type
                .increment(cursor)
                .ok_or(out_of_range(cursor))?;
        }

        Ok(Self {
            period_type,
            today,
            window_months,
            window_start,
            window_end,
            periods,
        })
    }

    /// Builds the grid described by `config` around `today`.
    pub fn from_config(config: GridConfig, today: NaiveDate) -> Result<Self, GridError> {
        Self::build(config.period_type, today, config.window_months)
    }

    /// Returns the granularity of the grid.
    #[must_use]
    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// Returns the reference date the window is centred on.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the number of months on each side of the reference date.
    #[must_use]
    pub fn window_months(&self) -> u32 {
        self.window_months
    }

    /// Returns `today - window_months`.
    #[must_use]
    pub fn window_start(&self) -> NaiveDate {
        self.window_start
    }

    /// Returns `today + window_months`.
    #[must_use]
    pub fn window_end(&self) -> NaiveDate {
        self.window_end
    }

    /// Returns the number of days between the window start and end.
    #[must_use]
    pub fn total_window_days(&self) -> i64 {
        (self.window_end - self.window_start).num_days()
    }

    /// Returns `true` if `date` lies inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.window_start <= date && date <= self.window_end
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns `true` if the grid has no periods.
    ///
    /// Grids produced by [`PeriodGrid::build`] always hold at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns all periods in chronological order.
    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Iterates over period labels in chronological order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.periods.iter().map(|p| p.label.as_str())
    }

    /// Returns the label of the period at `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.periods.get(index).map(|p| p.label.as_str())
    }

    /// Returns the index of the first period labelled `label`.
    ///
    /// This is a linear scan by string equality. `None` means the label is
    /// not part of the window.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.periods.iter().position(|p| p.label == label)
    }

    /// Returns the index of the period containing `date`.
    ///
    /// Returns `None` when `date` lies outside
    /// [`window_start`](Self::window_start)..=[`window_end`](Self::window_end),
    /// even if the column of its period is part of the grid.
    #[must_use]
    pub fn index_of_date(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        // The first period starts at or before `window_start`, so this is >= 1.
        self.periods
            .partition_point(|p| p.start <= date)
            .checked_sub(1)
    }

    /// Returns the content width for columns `column_width` wide.
    #[must_use]
    pub fn content_width(&self, column_width: f64) -> f64 {
        column_width * self.periods.len() as f64
    }

    /// Returns the left edge of column `index`.
    #[must_use]
    pub fn column_left(&self, index: usize, column_width: f64) -> f64 {
        column_width * index as f64
    }

    /// Returns the x coordinate of the separator after column `index`.
    #[must_use]
    pub fn separator_x(&self, index: usize, column_width: f64) -> f64 {
        column_width * (index as f64 + 1.0)
    }

    /// Returns the x at which a label `label_width` wide is centred in column
    /// `index`.
    #[must_use]
    pub fn centered_label_x(&self, index: usize, column_width: f64, label_width: f64) -> f64 {
        column_width * (index as f64 + 0.5) - label_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use chrono::NaiveDate;

    use super::{DEFAULT_WINDOW_MONTHS, GridConfig, GridError, PeriodGrid};
    use crate::PeriodType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_grid_spans_five_months() {
        let grid = PeriodGrid::build(PeriodType::Month, date(2025, 3, 17), 2).unwrap();
        let labels: Vec<_> = grid.labels().collect();
        assert_eq!(labels, ["January", "February", "March", "April", "May"]);
        assert_eq!(grid.window_start(), date(2025, 1, 17));
        assert_eq!(grid.window_end(), date(2025, 5, 17));
        assert_eq!(grid.periods()[0].start, date(2025, 1, 1));
    }

    #[test]
    fn week_grid_is_monday_aligned() {
        // 2025-01-17 is a Friday; its ISO week starts on 2025-01-13.
        let grid = PeriodGrid::build(PeriodType::Week, date(2025, 3, 17), 2).unwrap();
        assert_eq!(grid.periods()[0].start, date(2025, 1, 13));
        assert_eq!(grid.label(0), Some("3"));
        // 2025-05-17 is a Saturday in ISO week 20.
        assert_eq!(grid.labels().last(), Some("20"));
        assert_eq!(grid.len(), 18);
    }

    #[test]
    fn week_grid_reaches_a_monday_window_end_from_a_sunday_start() {
        // Window 2025-01-19 (Sunday, week 3) ..= 2025-05-19 (Monday, week 21).
        // Stepping a week at a time from the Sunday would stop at 2025-05-18
        // and drop week 21.
        let grid = PeriodGrid::build(PeriodType::Week, date(2025, 3, 19), 2).unwrap();
        assert_eq!(grid.window_start(), date(2025, 1, 19));
        assert_eq!(grid.window_end(), date(2025, 5, 19));
        assert_eq!(grid.periods()[0].start, date(2025, 1, 13));
        assert_eq!(grid.label(0), Some("3"));
        assert_eq!(grid.periods()[grid.len() - 1].start, date(2025, 5, 19));
        assert_eq!(grid.labels().last(), Some("21"));
        assert_eq!(grid.len(), 19);
        assert_eq!(grid.index_of_date(grid.window_end()), Some(18));
    }

    #[test]
    fn index_of_label_and_date() {
        let grid = PeriodGrid::build(PeriodType::Month, date(2025, 3, 17), 2).unwrap();
        assert_eq!(grid.index_of("March"), Some(2));
        assert_eq!(grid.index_of("June"), None);
        assert_eq!(grid.index_of_date(date(2025, 3, 1)), Some(2));
        assert_eq!(grid.index_of_date(date(2025, 5, 17)), Some(4));
        assert_eq!(grid.index_of_date(date(2025, 1, 17)), Some(0));
        // Same column as the window start, but before it.
        assert_eq!(grid.index_of_date(date(2025, 1, 16)), None);
        assert_eq!(grid.index_of_date(date(2025, 5, 18)), None);
    }

    #[test]
    fn zero_window_has_a_single_period() {
        let grid = PeriodGrid::build(PeriodType::Week, date(2025, 3, 19), 0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.total_window_days(), 0);
        assert_eq!(grid.index_of_date(date(2025, 3, 19)), Some(0));
        assert_eq!(grid.index_of_date(date(2025, 3, 17)), None);
    }

    #[test]
    fn column_geometry() {
        let grid = PeriodGrid::build(PeriodType::Month, date(2025, 3, 17), 2).unwrap();
        assert_eq!(grid.content_width(100.0), 500.0);
        assert_eq!(grid.column_left(3, 100.0), 300.0);
        assert_eq!(grid.separator_x(3, 100.0), 400.0);
        assert_eq!(grid.centered_label_x(1, 100.0, 40.0), 130.0);
    }

    #[test]
    fn config_defaults_and_errors() {
        let config = GridConfig::default();
        assert_eq!(config.period_type, PeriodType::Month);
        assert_eq!(config.window_months, DEFAULT_WINDOW_MONTHS);

        let grid = PeriodGrid::from_config(config, date(2025, 3, 17)).unwrap();
        assert_eq!(grid.window_months(), 2);

        let err = PeriodGrid::build(PeriodType::Month, NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(err, GridError::DateOutOfRange { date: NaiveDate::MAX });
    }
}
