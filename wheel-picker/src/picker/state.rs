//! Wheel date picker widget state.

use log::debug;

use crate::calendar::{MonthLabels, month_texts};
use crate::date::CalendarDate;
use crate::error::Result;
use crate::rect::Rect;
use crate::style::SelectorProperties;
use crate::wheel::{Wheel, WheelInput, WheelStyle};

use super::config::{DatePickerConfig, PickerSize};
use super::snapped::DateField;
use super::sync::DateSynchronizer;

/// Three wheels (day, month, optional year) bound to one date.
///
/// Input reaches a wheel, the wheel settles, the synchronizer decides what
/// the date becomes, and the wheel snaps to the resolved index. Month and
/// year settles re-range the day wheel.
///
/// # Example
///
/// ```ignore
/// let mut picker = DatePickerConfig::new(CalendarDate::new(2024, 2, 29)?).build()?;
/// picker.focus(DateField::Year);
/// picker.handle_event(&Event::key(Key::Up));
/// assert_eq!(picker.date().to_string(), "2023-02-28");
/// ```
#[derive(Debug)]
pub struct WheelDatePicker {
    pub(super) sync: DateSynchronizer,
    pub(super) day: Wheel,
    pub(super) month: Wheel,
    pub(super) year: Option<Wheel>,
    pub(super) focused: DateField,
    pub(super) size: PickerSize,
    pub(super) style: WheelStyle,
    pub(super) selector: SelectorProperties,
    pub(super) month_labels: MonthLabels,
    /// Column rectangles from the last render, for hit testing.
    pub(super) columns: Vec<(DateField, Rect)>,
}

impl WheelDatePicker {
    /// Build a picker from `config`. Fails before any wheel exists if the
    /// start year is outside the year range.
    pub fn new(config: DatePickerConfig) -> Result<Self> {
        let DatePickerConfig {
            start_date,
            year_range,
            backwards_disabled,
            size,
            text_style,
            text_color,
            selector,
            row_count,
            on_snapped,
        } = config;

        let mut sync = DateSynchronizer::new(start_date, year_range, backwards_disabled)?;
        if let Some(callback) = on_snapped {
            sync.set_callback(callback);
        }

        // Each wheel draws no highlight of its own; the picker draws one band
        // across all columns.
        let plain = SelectorProperties::disabled();
        let day = Wheel::new(sync.day_texts().to_vec(), start_date.day() as usize - 1)
            .with_row_count(row_count)
            .with_selector(plain);
        let month_labels = size.month_labels();
        let month = Wheel::new(month_texts(month_labels), start_date.month() as usize - 1)
            .with_row_count(row_count)
            .with_selector(plain);
        let year = year_range.map(|range| {
            let start = range.index_of(start_date.year()).unwrap_or_default();
            Wheel::new(range.texts(), start)
                .with_row_count(row_count)
                .with_selector(plain)
        });

        debug!(
            "Date picker created at {} (years {:?}, backwards disabled: {})",
            start_date, year_range, backwards_disabled
        );

        Ok(Self {
            sync,
            day,
            month,
            year,
            focused: DateField::Day,
            size,
            style: WheelStyle {
                text_color,
                text_style,
            },
            selector,
            month_labels,
            columns: Vec::new(),
        })
    }

    /// Currently selected date.
    pub fn date(&self) -> CalendarDate {
        self.sync.date()
    }

    pub fn synchronizer(&self) -> &DateSynchronizer {
        &self.sync
    }

    pub fn day_wheel(&self) -> &Wheel {
        &self.day
    }

    pub fn month_wheel(&self) -> &Wheel {
        &self.month
    }

    /// The year wheel, absent when no year range was configured.
    pub fn year_wheel(&self) -> Option<&Wheel> {
        self.year.as_ref()
    }

    pub fn month_labels(&self) -> MonthLabels {
        self.month_labels
    }

    pub fn size(&self) -> PickerSize {
        self.size
    }

    /// Resize the picker. Month labels switch between full and short names
    /// as the column width crosses the threshold.
    pub fn set_size(&mut self, size: PickerSize) {
        self.size = size;
        let labels = size.month_labels();
        if labels != self.month_labels {
            debug!("Month labels switched to {:?}", labels);
            self.month_labels = labels;
            self.month.set_labels(month_texts(labels));
        }
    }

    /// Columns present, left to right.
    pub fn fields(&self) -> Vec<DateField> {
        let mut fields = vec![DateField::Day, DateField::Month];
        if self.year.is_some() {
            fields.push(DateField::Year);
        }
        fields
    }

    pub fn focused(&self) -> DateField {
        self.focused
    }

    /// Give keyboard focus to a column. Focusing the year column of a picker
    /// without one does nothing.
    pub fn focus(&mut self, field: DateField) {
        if field != DateField::Year || self.year.is_some() {
            self.focused = field;
        }
    }

    /// Move focus one column right, wrapping around.
    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(pos + 1) % fields.len()];
    }

    /// Move focus one column left, wrapping around.
    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(pos + fields.len() - 1) % fields.len()];
    }

    pub(super) fn wheel(&self, field: DateField) -> Option<&Wheel> {
        match field {
            DateField::Day => Some(&self.day),
            DateField::Month => Some(&self.month),
            DateField::Year => self.year.as_ref(),
        }
    }

    /// Move the wheel for `field` and run the settle through the
    /// synchronizer. Returns the index the wheel snapped to, or `None` if it
    /// did not move.
    pub fn settle(&mut self, field: DateField, input: WheelInput) -> Option<usize> {
        let sync = &mut self.sync;
        let resolved = match field {
            DateField::Day => self.day.apply(input, |index| sync.settle_day(index)),
            DateField::Month => self.month.apply(input, |index| sync.settle_month(index)),
            DateField::Year => {
                let wheel = self.year.as_mut()?;
                wheel.apply(input, |index| sync.settle_year(index).unwrap_or(index))
            }
        };

        if resolved.is_some() && field != DateField::Day {
            self.rerange_days();
        }
        resolved
    }

    /// Settle `field` directly at `index`, as a click on a row would.
    pub fn settle_at(&mut self, field: DateField, index: usize) -> Option<usize> {
        let current = self.wheel(field)?.selected();
        let delta = index as isize - current as isize;
        self.settle(field, WheelInput::Step(delta))
    }

    /// Match the day wheel to the synchronizer after a month or year change.
    fn rerange_days(&mut self) {
        let clamped = self.day.set_labels(self.sync.day_texts().to_vec());
        self.day.snap_to(self.sync.date().day() as usize - 1);
        if clamped {
            debug!("Day wheel clamped to {} days", self.day.len());
        }
    }
}
