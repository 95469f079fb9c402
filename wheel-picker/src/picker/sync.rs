//! Date synchronizer - the single owner of the selected date.
//!
//! The three wheels settle independently and in any order. Each settle is
//! turned into a candidate date, checked against the backwards guard,
//! applied, and reported through the settle callback. Month and year
//! changes also recompute the day labels, which the day wheel must be
//! re-ranged to.

use std::fmt;

use log::{debug, trace, warn};

use crate::calendar::{YearRange, day_texts};
use crate::date::CalendarDate;
use crate::error::{PickerError, Result};

use super::snapped::SnappedDate;

/// Settle callback. Returning `Some(index)` makes the wheel snap there
/// instead of the naturally resolved index.
pub type SnapCallback = Box<dyn FnMut(&SnappedDate) -> Option<usize>>;

pub struct DateSynchronizer {
    start: CalendarDate,
    current: CalendarDate,
    year_range: Option<YearRange>,
    backwards_disabled: bool,
    day_texts: Vec<String>,
    on_snapped: SnapCallback,
}

impl fmt::Debug for DateSynchronizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateSynchronizer")
            .field("start", &self.start)
            .field("current", &self.current)
            .field("year_range", &self.year_range)
            .field("backwards_disabled", &self.backwards_disabled)
            .field("day_count", &self.day_texts.len())
            .finish_non_exhaustive()
    }
}

impl DateSynchronizer {
    /// Create a synchronizer starting at `start`.
    ///
    /// Fails if `year_range` is given and does not contain the start year.
    pub fn new(
        start: CalendarDate,
        year_range: Option<YearRange>,
        backwards_disabled: bool,
    ) -> Result<Self> {
        if let Some(range) = year_range
            && !range.contains(start.year())
        {
            return Err(PickerError::StartYearOutOfRange {
                year: start.year(),
                min: range.min(),
                max: range.max(),
            });
        }

        Ok(Self {
            start,
            current: start,
            year_range,
            backwards_disabled,
            day_texts: day_texts(start.month(), start.year()),
            on_snapped: Box::new(|_| None),
        })
    }

    /// Install the settle callback.
    pub fn on_snapped(
        mut self,
        callback: impl FnMut(&SnappedDate) -> Option<usize> + 'static,
    ) -> Self {
        self.on_snapped = Box::new(callback);
        self
    }

    pub(crate) fn set_callback(&mut self, callback: SnapCallback) {
        self.on_snapped = callback;
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Currently selected date.
    pub fn date(&self) -> CalendarDate {
        self.current
    }

    pub fn year_range(&self) -> Option<YearRange> {
        self.year_range
    }

    pub fn backwards_disabled(&self) -> bool {
        self.backwards_disabled
    }

    /// Day labels for the current month.
    pub fn day_texts(&self) -> &[String] {
        &self.day_texts
    }

    /// Apply `candidate` unless the backwards guard rejects it.
    fn apply(&mut self, candidate: CalendarDate) -> bool {
        if self.backwards_disabled && candidate < self.start {
            debug!(
                "Rejected {} (before start date {}), keeping {}",
                candidate, self.start, self.current
            );
            return false;
        }
        debug!("Date {} -> {}", self.current, candidate);
        self.current = candidate;
        true
    }

    fn notify(&mut self, snapped: SnappedDate) -> usize {
        match (self.on_snapped)(&snapped) {
            Some(index) => {
                debug!(
                    "Settle callback overrode index {} with {}",
                    snapped.index(),
                    index
                );
                index
            }
            None => snapped.index(),
        }
    }

    fn recompute_days(&mut self) {
        self.day_texts = day_texts(self.current.month(), self.current.year());
    }

    /// The day wheel settled at `index`. Returns the index it should snap to.
    pub fn settle_day(&mut self, index: usize) -> usize {
        // A stale index from before a re-range can point past the last day
        let day = if index >= self.day_texts.len() {
            trace!("Day index {} past {} days, clamping", index, self.day_texts.len());
            index
        } else {
            index + 1
        };
        self.apply(self.current.with_day(u32::try_from(day).unwrap_or(u32::MAX)));

        let date = self.current;
        self.notify(SnappedDate::DayOfMonth {
            date,
            index: date.day() as usize - 1,
        })
    }

    /// The month wheel settled at `index`. Returns the index it should snap to.
    pub fn settle_month(&mut self, index: usize) -> usize {
        if index >= 12 {
            trace!("Month index {} out of range, clamping to December", index);
        }
        let month = index.min(11) as u32 + 1;
        self.apply(self.current.with_month(month));
        self.recompute_days();

        let date = self.current;
        self.notify(SnappedDate::Month {
            date,
            index: date.month() as usize - 1,
        })
    }

    /// The year wheel settled at `index`. Returns the index it should snap
    /// to, or `None` when there is no year range (and so no year wheel).
    pub fn settle_year(&mut self, index: usize) -> Option<usize> {
        let range = self.year_range?;
        let year = if index < range.len() {
            range.min() + index as i32
        } else {
            trace!("Year index {} past {:?}, clamping to {}", index, range, range.max());
            range.max()
        };
        self.apply(self.current.with_year(year));
        self.recompute_days();

        let date = self.current;
        let index = range.index_of(date.year()).unwrap_or_else(|| {
            warn!("Year {} not in {:?}, resolving to index 0", date.year(), range);
            0
        });
        Some(self.notify(SnappedDate::Year { date, index }))
    }
}
