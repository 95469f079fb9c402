//! Wheel date picker for terminal user interfaces.
//!
//! Three snapping wheels (day, month, year) compose into one calendar date.
//! The wheels are independent [`Wheel`]s; a [`DateSynchronizer`] owns the
//! date, keeps the day labels in step with the month and year, and can
//! refuse dates earlier than the start date.
//!
//! ```ignore
//! let mut picker = DatePickerConfig::new(CalendarDate::today())
//!     .backwards_disabled(true)
//!     .build()?;
//!
//! let mut term = Terminal::new()?;
//! term.draw(|buf| picker.render(buf, buf.area()))?;
//! ```

pub mod buffer;
pub mod calendar;
pub mod date;
pub mod error;
pub mod event;
pub mod picker;
pub mod rect;
pub mod style;
pub mod terminal;
pub mod wheel;

pub use buffer::{Buffer, Cell, display_width, truncate_to_width};
pub use calendar::{
    MAX_YEAR_SPAN, MonthLabels, YearRange, day_texts, days_in_month, is_leap_year, month_texts,
};
pub use date::CalendarDate;
pub use error::{PickerError, Result};
pub use event::{Event, EventResult, Key, Modifiers, convert_event};
pub use picker::{
    DateField, DatePickerConfig, DateSynchronizer, PickerSize, SnappedDate, WheelDatePicker,
};
pub use rect::Rect;
pub use style::{BorderStroke, BorderStyle, Color, Rgb, SelectorProperties, Shape, TextStyle};
pub use terminal::Terminal;
pub use wheel::{Wheel, WheelInput, WheelStyle};
