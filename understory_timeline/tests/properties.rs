// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for period grids and date addressing.
//!
//! Reference dates are drawn from a few decades around the present, and
//! windows from zero to five months, which keeps labels unique.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use understory_timeline::{DateAxis, PeriodGrid, PeriodType};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 plus up to ~60 years.
    (0_u64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn any_period_type() -> impl Strategy<Value = PeriodType> {
    prop_oneof![Just(PeriodType::Month), Just(PeriodType::Week)]
}

proptest! {
    #[test]
    fn grid_is_ordered_and_covers_the_window(
        period_type in any_period_type(),
        today in any_date(),
        window in 0_u32..=5,
    ) {
        let grid = PeriodGrid::build(period_type, today, window).unwrap();
        let periods = grid.periods();
        prop_assert!(!periods.is_empty());

        for pair in periods.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }
        let mut labels: Vec<&str> = grid.labels().collect();
        labels.sort_unstable();
        labels.dedup();
        prop_assert_eq!(labels.len(), grid.len());

        prop_assert_eq!(
            Some(periods[0].start),
            period_type.period_start(grid.window_start())
        );
        prop_assert_eq!(
            Some(periods[grid.len() - 1].start),
            period_type.period_start(grid.window_end())
        );
    }

    #[test]
    fn lookup_is_defined_exactly_inside_the_window(
        period_type in any_period_type(),
        today in any_date(),
        window in 0_u32..=5,
        offset in -200_i64..200,
    ) {
        let grid = PeriodGrid::build(period_type, today, window).unwrap();
        let date = if offset >= 0 {
            today.checked_add_days(Days::new(offset.unsigned_abs())).unwrap()
        } else {
            today.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
        };

        let index = grid.index_of_date(date);
        if grid.contains(date) {
            let index = index.unwrap();
            let expected_label = period_type.label(date);
            prop_assert_eq!(grid.label(index), Some(expected_label.as_str()));
            prop_assert_eq!(grid.index_of(&period_type.label(date)), Some(index));
        } else {
            prop_assert_eq!(index, None);
        }
    }

    #[test]
    fn discrete_positions_are_monotonic(
        period_type in any_period_type(),
        today in any_date(),
        window in 1_u32..=5,
    ) {
        let grid = PeriodGrid::build(period_type, today, window).unwrap();
        let axis = DateAxis::new(&grid, 64.0);

        let mut previous = f64::NEG_INFINITY;
        for day in grid.window_start().iter_days().take_while(|d| *d <= grid.window_end()) {
            let x = axis.discrete_x(day).unwrap();
            prop_assert!(x >= previous);
            previous = x;
        }
    }

    #[test]
    fn continuous_positions_pin_window_ends(
        period_type in any_period_type(),
        today in any_date(),
        window in 1_u32..=5,
        column_width in 1.0_f64..500.0,
    ) {
        let grid = PeriodGrid::build(period_type, today, window).unwrap();
        let axis = DateAxis::new(&grid, column_width);
        prop_assert_eq!(axis.continuous_x(grid.window_start()), 0.0);
        prop_assert_eq!(axis.continuous_x(grid.window_end()), axis.content_width());
    }
}
