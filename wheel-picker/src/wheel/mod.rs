//! Scroll-wheel selector - a single snapping column of labels.
//!
//! A wheel knows nothing about what its labels mean. Whenever it comes to
//! rest it hands the settled index to a callback, and the callback answers
//! with the index the wheel should snap to. The date picker uses this to let
//! the date synchronizer veto or redirect a selection.

pub mod events;
pub mod render;
mod state;

pub use events::WheelInput;
pub use render::WheelStyle;
pub use state::{DEFAULT_ROW_COUNT, Wheel};
