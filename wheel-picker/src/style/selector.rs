//! Appearance of the highlight band drawn behind the selected row.

use super::Color;

/// Outline shape of the highlight band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    /// Square corners.
    Rectangle,
    /// Rounded corners (`╭╮╰╯`).
    #[default]
    Rounded,
}

/// Line style of the highlight border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Thick,
}

/// A border drawn around the highlight band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStroke {
    pub style: BorderStyle,
    pub color: Color,
}

impl BorderStroke {
    pub fn new(style: BorderStyle, color: Color) -> Self {
        Self { style, color }
    }
}

/// Highlight appearance for a picker's selected row.
///
/// # Example
///
/// ```ignore
/// let props = SelectorProperties::default()
///     .color(Color::oklcha(0.7, 0.15, 150.0, 0.3))
///     .border(None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorProperties {
    pub enabled: bool,
    pub shape: Shape,
    pub color: Color,
    pub border: Option<BorderStroke>,
}

impl SelectorProperties {
    /// Accent used by the default highlight.
    pub const PRIMARY: Color = Color::Oklch {
        l: 0.72,
        c: 0.12,
        h: 265.0,
        a: 1.0,
    };

    /// Properties with the highlight switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn border(mut self, border: Option<BorderStroke>) -> Self {
        self.border = border;
        self
    }
}

impl Default for SelectorProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            shape: Shape::Rounded,
            color: Self::PRIMARY.alpha(0.2),
            border: Some(BorderStroke::new(BorderStyle::Single, Self::PRIMARY)),
        }
    }
}

/// Box-drawing glyphs for a border: (top-left, top-right, bottom-left,
/// bottom-right, horizontal, vertical).
pub(crate) fn border_glyphs(
    shape: Shape,
    style: BorderStyle,
) -> (char, char, char, char, char, char) {
    match (style, shape) {
        (BorderStyle::Single, Shape::Rounded) => ('╭', '╮', '╰', '╯', '─', '│'),
        (BorderStyle::Single, Shape::Rectangle) => ('┌', '┐', '└', '┘', '─', '│'),
        (BorderStyle::Double, _) => ('╔', '╗', '╚', '╝', '═', '║'),
        (BorderStyle::Thick, _) => ('┏', '┓', '┗', '┛', '━', '┃'),
    }
}
