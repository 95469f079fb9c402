//! Calendar arithmetic and the label sequences shown by the date wheels.
//!
//! Everything here is pure. The date picker calls [`day_texts`] whenever the
//! month or year changes so the day wheel can be re-ranged.

use chrono::Month;

use crate::error::{PickerError, Result};

/// How month names are rendered on the month wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthLabels {
    /// "January", "February", ...
    #[default]
    Full,
    /// "Jan", "Feb", ...
    Short,
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
///
/// Months outside 1-12 are treated as 31-day months so callers that clamp
/// afterwards never see zero.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Day labels "1".."N" for the given month.
pub fn day_texts(month: u32, year: i32) -> Vec<String> {
    (1..=days_in_month(month, year)).map(|d| d.to_string()).collect()
}

/// The twelve month labels, January first.
pub fn month_texts(labels: MonthLabels) -> Vec<String> {
    (1..=12u8)
        .filter_map(|m| Month::try_from(m).ok())
        .map(|month| match labels {
            MonthLabels::Full => month.name().to_string(),
            MonthLabels::Short => month.name()[..3].to_string(),
        })
        .collect()
}

/// Most years a [`YearRange`] may span. Every year becomes a wheel label.
pub const MAX_YEAR_SPAN: usize = 10_000;

/// A closed, non-empty range of selectable years, at most
/// [`MAX_YEAR_SPAN`] years long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Range used when the caller does not supply one.
    pub const DEFAULT: Self = Self {
        min: 1922,
        max: 2122,
    };

    /// Create a range covering `min..=max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(PickerError::EmptyYearRange { min, max });
        }
        if max.abs_diff(min) as usize >= MAX_YEAR_SPAN {
            return Err(PickerError::YearRangeTooLong {
                min,
                max,
                limit: MAX_YEAR_SPAN,
            });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of years in the range.
    pub fn len(&self) -> usize {
        self.max.abs_diff(self.min) as usize + 1
    }

    /// Always false; an empty range cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `year` is selectable.
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Wheel index of `year`, if it is in range.
    pub fn index_of(&self, year: i32) -> Option<usize> {
        self.contains(year).then(|| year.abs_diff(self.min) as usize)
    }

    /// Year labels in ascending order.
    pub fn texts(&self) -> Vec<String> {
        (self.min..=self.max).map(|y| y.to_string()).collect()
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<std::ops::RangeInclusive<i32>> for YearRange {
    type Error = PickerError;

    fn try_from(range: std::ops::RangeInclusive<i32>) -> Result<Self> {
        Self::new(*range.start(), *range.end())
    }
}
