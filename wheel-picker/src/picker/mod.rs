//! Wheel date picker - day, month and year wheels kept in sync.

pub mod config;
mod events;
mod render;
pub mod snapped;
mod state;
pub mod sync;

pub use config::{DatePickerConfig, FULL_MONTH_NAME_MIN_WIDTH, PickerSize};
pub use snapped::{DateField, SnappedDate};
pub use state::WheelDatePicker;
pub use sync::{DateSynchronizer, SnapCallback};
