// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use chrono::NaiveDate;

/// A named span of calendar days.
///
/// Tasks are plain values. The layout never mutates them; it only reads the
/// name for labels and the dates for horizontal placement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    /// Label drawn inside the task shape.
    pub name: String,
    /// First day of the task.
    pub date_start: NaiveDate,
    /// Last day of the task.
    pub date_end: NaiveDate,
}

impl Task {
    /// Creates a task without checking the date order.
    ///
    /// A task whose end precedes its start lays out as an inverted rectangle
    /// (negative width). Use [`Task::try_new`] to reject such input.
    #[must_use]
    pub fn new(name: impl Into<String>, date_start: NaiveDate, date_end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_start,
            date_end,
        }
    }

    /// Creates a task, rejecting `date_end < date_start`.
    pub fn try_new(
        name: impl Into<String>,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<Self, TaskError> {
        if date_end < date_start {
            return Err(TaskError::InvertedRange {
                date_start,
                date_end,
            });
        }
        Ok(Self::new(name, date_start, date_end))
    }

    /// Returns `true` if the task ends before it starts.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.date_end < self.date_start
    }
}

/// Error returned by [`Task::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskError {
    /// The end date precedes the start date.
    InvertedRange {
        /// Requested start.
        date_start: NaiveDate,
        /// Requested end.
        date_end: NaiveDate,
    },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange {
                date_start,
                date_end,
            } => write!(f, "task ends on {date_end}, before it starts on {date_start}"),
        }
    }
}

impl core::error::Error for TaskError {}
