//! Change notification emitted after a wheel settles.

use crate::date::CalendarDate;

/// One of the three date columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Day,
    Month,
    Year,
}

/// Which wheel settled, the date that resulted, and the index that wheel
/// resolves to.
///
/// The date is the synchronizer's state after the settle, so when a
/// backwards selection was rejected it is the unchanged prior date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnappedDate {
    DayOfMonth { date: CalendarDate, index: usize },
    Month { date: CalendarDate, index: usize },
    Year { date: CalendarDate, index: usize },
}

impl SnappedDate {
    pub fn date(&self) -> CalendarDate {
        match self {
            Self::DayOfMonth { date, .. } | Self::Month { date, .. } | Self::Year { date, .. } => {
                *date
            }
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::DayOfMonth { index, .. }
            | Self::Month { index, .. }
            | Self::Year { index, .. } => *index,
        }
    }

    pub fn field(&self) -> DateField {
        match self {
            Self::DayOfMonth { .. } => DateField::Day,
            Self::Month { .. } => DateField::Month,
            Self::Year { .. } => DateField::Year,
        }
    }
}
