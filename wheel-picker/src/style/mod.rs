//! Colors, text attributes and highlight appearance.

mod color;
pub mod selector;
mod text;

pub use color::{Color, Rgb};
pub use selector::{BorderStroke, BorderStyle, SelectorProperties, Shape};
pub use text::TextStyle;
