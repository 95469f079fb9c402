//! Calendar date value used by the picker.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::days_in_month;
use crate::error::{PickerError, Result};

/// A Gregorian calendar date.
///
/// The day is always valid for its month. Field setters clamp the day to the
/// month length instead of rolling over into the next month, so moving
/// 2024-01-31 to February yields 2024-02-29.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a date, rejecting impossible combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(month, year) {
            return Err(PickerError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Same date with another day of month, clamped to `1..=month length`.
    pub fn with_day(self, day: u32) -> Self {
        let day = day.clamp(1, days_in_month(self.month, self.year));
        Self { day, ..self }
    }

    /// Same date in another month (clamped to 1-12), day clamped to fit.
    pub fn with_month(self, month: u32) -> Self {
        let month = month.clamp(1, 12);
        Self {
            month,
            day: self.day.min(days_in_month(month, self.year)),
            ..self
        }
    }

    /// Same date in another year, day clamped to fit (Feb 29 -> Feb 28).
    pub fn with_year(self, year: i32) -> Self {
        Self {
            year,
            day: self.day.min(days_in_month(self.month, year)),
            ..self
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = PickerError;

    fn try_from(date: CalendarDate) -> Result<Self> {
        NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or(PickerError::InvalidDate {
            year: date.year,
            month: date.month,
            day: date.day,
        })
    }
}
