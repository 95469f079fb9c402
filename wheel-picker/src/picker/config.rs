//! Construction parameters for [`WheelDatePicker`](super::WheelDatePicker).

use std::fmt;

use crate::calendar::{MonthLabels, YearRange};
use crate::date::CalendarDate;
use crate::error::Result;
use crate::style::{Color, SelectorProperties, TextStyle};
use crate::wheel::DEFAULT_ROW_COUNT;

use super::WheelDatePicker;
use super::snapped::SnappedDate;
use super::sync::SnapCallback;

/// Narrowest column that still shows full month names ("September" plus
/// padding). Narrower columns fall back to "Sep".
pub const FULL_MONTH_NAME_MIN_WIDTH: u16 = 10;

/// Picker size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSize {
    pub width: u16,
    pub height: u16,
}

impl PickerSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Month label set for this size.
    pub fn month_labels(&self) -> MonthLabels {
        if self.width / 3 < FULL_MONTH_NAME_MIN_WIDTH {
            MonthLabels::Short
        } else {
            MonthLabels::Full
        }
    }
}

impl Default for PickerSize {
    fn default() -> Self {
        Self::new(36, 9)
    }
}

/// Builder for a wheel date picker.
///
/// # Example
///
/// ```ignore
/// let picker = DatePickerConfig::new(CalendarDate::new(2024, 6, 15)?)
///     .year_range(Some(YearRange::new(2000, 2030)?))
///     .backwards_disabled(true)
///     .on_snapped(|snapped| {
///         log::info!("picked {}", snapped.date());
///         None
///     })
///     .build()?;
/// ```
pub struct DatePickerConfig {
    pub(super) start_date: CalendarDate,
    pub(super) year_range: Option<YearRange>,
    pub(super) backwards_disabled: bool,
    pub(super) size: PickerSize,
    pub(super) text_style: TextStyle,
    pub(super) text_color: Color,
    pub(super) selector: SelectorProperties,
    pub(super) row_count: usize,
    pub(super) on_snapped: Option<SnapCallback>,
}

impl fmt::Debug for DatePickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePickerConfig")
            .field("start_date", &self.start_date)
            .field("year_range", &self.year_range)
            .field("backwards_disabled", &self.backwards_disabled)
            .field("size", &self.size)
            .field("row_count", &self.row_count)
            .finish_non_exhaustive()
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self::new(CalendarDate::today())
    }
}

impl DatePickerConfig {
    /// Defaults: years 1922-2122, backwards selection allowed, 36x9 cells,
    /// three visible rows, highlight enabled.
    pub fn new(start_date: CalendarDate) -> Self {
        Self {
            start_date,
            year_range: Some(YearRange::DEFAULT),
            backwards_disabled: false,
            size: PickerSize::default(),
            text_style: TextStyle::new().bold(),
            text_color: Color::rgb(230, 230, 230),
            selector: SelectorProperties::default(),
            row_count: DEFAULT_ROW_COUNT,
            on_snapped: None,
        }
    }

    pub fn start_date(mut self, date: CalendarDate) -> Self {
        self.start_date = date;
        self
    }

    /// Selectable years. `None` removes the year wheel.
    pub fn year_range(mut self, range: Option<YearRange>) -> Self {
        self.year_range = range;
        self
    }

    /// Reject any selection earlier than the start date.
    pub fn backwards_disabled(mut self, disabled: bool) -> Self {
        self.backwards_disabled = disabled;
        self
    }

    pub fn size(mut self, size: PickerSize) -> Self {
        self.size = size;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn selector(mut self, selector: SelectorProperties) -> Self {
        self.selector = selector;
        self
    }

    pub fn row_count(mut self, rows: usize) -> Self {
        self.row_count = rows;
        self
    }

    /// Called after every settle. Return `Some(index)` to force the settled
    /// wheel to that index.
    pub fn on_snapped(
        mut self,
        callback: impl FnMut(&SnappedDate) -> Option<usize> + 'static,
    ) -> Self {
        self.on_snapped = Some(Box::new(callback));
        self
    }

    /// Validate and build the picker.
    pub fn build(self) -> Result<WheelDatePicker> {
        WheelDatePicker::new(self)
    }
}
