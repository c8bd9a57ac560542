// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar period granularities.

use alloc::string::{String, ToString};

use chrono::{Datelike, Days, Months, NaiveDate};

/// Granularity of a timeline column.
///
/// Each variant supplies the same small contract:
/// - [`PeriodType::increment`] advances a date by exactly one period,
/// - [`PeriodType::label`] names the period that contains a date,
/// - [`PeriodType::fraction_within_period`] locates a date inside its period.
///
/// Weeks are ISO weeks: they start on Monday and are labelled with their
/// ISO week number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PeriodType {
    /// One column per calendar month.
    #[default]
    Month,
    /// One column per ISO week.
    Week,
}

impl PeriodType {
    /// All granularities, in declaration order.
    pub const ALL: [Self; 2] = [Self::Month, Self::Week];

    /// Advances `date` by one period.
    ///
    /// Month steps keep the day of month where possible and clamp to the last
    /// day of shorter months. Returns `None` if the result is not
    /// representable.
    #[must_use]
    pub fn increment(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Month => date.checked_add_months(Months::new(1)),
            Self::Week => date.checked_add_days(Days::new(7)),
        }
    }

    /// Returns the display label of the period containing `date`.
    ///
    /// Months are labelled with their English name, weeks with their ISO
    /// week number. Labels repeat across years, so they are only unique
    /// inside windows shorter than a year.
    #[must_use]
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            Self::Month => date.format("%B").to_string(),
            Self::Week => date.iso_week().week().to_string(),
        }
    }

    /// Returns the position of `date` inside its period, in `[0, 1)`.
    ///
    /// The first day of a period maps to `0.0`. Each day advances the
    /// fraction by `1 / days_in_period`.
    #[must_use]
    pub fn fraction_within_period(self, date: NaiveDate) -> f64 {
        match self {
            Self::Month => f64::from(date.day0()) / f64::from(date.num_days_in_month()),
            Self::Week => f64::from(date.weekday().num_days_from_monday()) / 7.0,
        }
    }

    /// Returns the first day of the period containing `date`.
    ///
    /// This is the first of the month for [`PeriodType::Month`] and the ISO
    /// Monday for [`PeriodType::Week`]. Returns `None` only when that Monday
    /// precedes the earliest representable date.
    #[must_use]
    pub fn period_start(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
            Self::Week => date.checked_sub_days(Days::new(u64::from(
                date.weekday().num_days_from_monday(),
            ))),
        }
    }
}
