//! Error types for picker construction.

use thiserror::Error;

/// Errors raised while configuring a picker.
///
/// These are configuration mistakes. They are reported before any wheel is
/// laid out or rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The start date's year is not inside the supplied year range.
    #[error("start year {year} is outside the year range {min}..={max}")]
    StartYearOutOfRange {
        /// Year of the start date.
        year: i32,
        /// Lower bound of the range.
        min: i32,
        /// Upper bound of the range.
        max: i32,
    },

    /// A year range whose lower bound exceeds its upper bound.
    #[error("year range {min}..={max} is empty")]
    EmptyYearRange {
        /// Lower bound of the range.
        min: i32,
        /// Upper bound of the range.
        max: i32,
    },

    /// A year range with more years than a wheel will hold.
    #[error("year range {min}..={max} spans more than {limit} years")]
    YearRangeTooLong {
        /// Lower bound of the range.
        min: i32,
        /// Upper bound of the range.
        max: i32,
        /// Largest allowed span.
        limit: usize,
    },

    /// A year/month/day triple that is not a calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}

/// Result alias for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
