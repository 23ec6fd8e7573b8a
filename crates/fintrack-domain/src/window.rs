//! Reporting windows.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Inclusive calendar range `[start, end]` used for projections.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if start > end {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Window starting at `start` and spanning `days` days, both ends included.
    ///
    /// Fails with [`DateWindowError::OutOfRange`] when the end is not a representable date.
    pub fn from_start(start: NaiveDate, days: u32) -> Result<Self, DateWindowError> {
        let span = i64::from(days.max(1)) - 1;
        let end = start
            .checked_add_signed(Duration::days(span))
            .ok_or(DateWindowError::OutOfRange)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
    OutOfRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => {
                f.write_str("date window start must be on or before end")
            }
            DateWindowError::OutOfRange => {
                f.write_str("date window ends past the supported calendar")
            }
        }
    }
}

impl std::error::Error for DateWindowError {}
