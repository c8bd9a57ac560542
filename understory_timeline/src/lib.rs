// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timeline --heading-base-level=0

//! Understory Timeline: calendar period grids and date addressing.
//!
//! This crate provides the horizontal axis of calendar timelines such as Gantt
//! charts. It is headless: it knows nothing about widgets, canvases, or fonts.
//!
//! The core concepts are:
//!
//! - [`PeriodType`]: a column granularity (month or ISO week) with three pure
//!   functions: advance by one period, label the containing period, and locate
//!   a date inside its period.
//! - [`PeriodGrid`]: the ordered periods covering a window of `N` months on
//!   each side of an explicit reference date, with label and date lookup.
//! - [`DateAxis`] and [`Addressing`]: map dates to horizontal positions, either
//!   snapped to the period grid ([`Addressing::Discrete`]) or proportional to
//!   elapsed days ([`Addressing::Continuous`]).
//!
//! The reference date is always passed in explicitly, so a grid is a pure
//! function of its inputs and tests never depend on the wall clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_timeline::{PeriodGrid, PeriodType};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
//! let grid = PeriodGrid::build(PeriodType::Month, today, 2).unwrap();
//!
//! assert_eq!(grid.len(), 5);
//! assert_eq!(grid.index_of("March"), Some(2));
//! assert_eq!(grid.content_width(100.0), 500.0);
//! ```
//!
//! ## Choosing an addressing strategy
//!
//! Discrete addressing lines task edges up with the column separators drawn in
//! a header, but a date outside the window has no position and callers have to
//! clamp. Continuous addressing always yields a position, at the cost of
//! drifting from separators because months differ in length.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod addressing;
mod grid;
mod period;

pub use addressing::{Addressing, DateAxis};
pub use grid::{DEFAULT_WINDOW_MONTHS, GridConfig, GridError, Period, PeriodGrid};
pub use period::PeriodType;
