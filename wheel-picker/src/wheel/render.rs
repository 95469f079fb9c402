//! Drawing a wheel into a buffer.

use crate::buffer::{Buffer, display_width, truncate_to_width};
use crate::rect::Rect;
use crate::style::selector::border_glyphs;
use crate::style::{Color, Rgb, SelectorProperties, TextStyle};

use super::Wheel;

/// Label appearance for a wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStyle {
    pub text_color: Color,
    pub text_style: TextStyle,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            text_color: Color::rgb(230, 230, 230),
            text_style: TextStyle::new().bold(),
        }
    }
}

/// Vertical geometry shared by every column of a picker: the rows of the
/// wheel are stacked and centered inside the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowLayout {
    pub top: u16,
    pub row_height: u16,
    pub row_count: u16,
}

impl RowLayout {
    /// Rows that fit in `area`: at most `row_count`, at most the area
    /// height, odd and at least one.
    pub fn new(area: Rect, row_count: usize) -> Self {
        let row_count = fitted_rows(row_count, area.height);
        let row_height = (area.height / row_count).max(1);
        let total = (row_height * row_count).min(area.height);
        Self {
            top: area.y + (area.height - total) / 2,
            row_height,
            row_count,
        }
    }

    /// Band occupied by row `row` across `area`.
    pub fn row_rect(&self, area: Rect, row: u16) -> Rect {
        Rect::new(
            area.x,
            self.top + row * self.row_height,
            area.width,
            self.row_height,
        )
        .intersect(area)
    }

    /// The middle row, where the selected label sits.
    pub fn selected_rect(&self, area: Rect) -> Rect {
        self.row_rect(area, self.row_count / 2)
    }

    /// Which row contains screen line `y`, if any.
    pub fn row_at(&self, y: u16) -> Option<u16> {
        let offset = y.checked_sub(self.top)?;
        let row = offset / self.row_height;
        (row < self.row_count).then_some(row)
    }
}

fn fitted_rows(row_count: usize, height: u16) -> u16 {
    let rows = row_count.min(usize::from(height)).max(1);
    let rows = if rows % 2 == 0 { rows - 1 } else { rows };
    u16::try_from(rows).unwrap_or(1)
}

/// Fade applied to labels `distance` rows away from the selection.
fn fade(distance: usize) -> f32 {
    (1.0 - 0.35 * distance as f32).max(0.25)
}

impl Wheel {
    /// Draw the wheel into `area`.
    ///
    /// The selected label is drawn in the middle row; neighbours fade out
    /// with distance.
    pub fn render(&self, buf: &mut Buffer, area: Rect, style: &WheelStyle) {
        let area = area.intersect(buf.area());
        if area.is_empty() {
            return;
        }
        let rows = RowLayout::new(area, self.row_count());

        if self.selector().enabled {
            draw_highlight(buf, rows.selected_rect(area), self.selector());
        }

        let middle = usize::from(rows.row_count / 2);
        for (row, index) in self.window(rows.row_count.into()).into_iter().enumerate() {
            let Some(label) = index.and_then(|i| self.labels().get(i)) else {
                continue;
            };
            let band = rows.row_rect(area, row as u16);
            if band.is_empty() {
                continue;
            }
            let y = band.y + band.height / 2;
            let distance = row.abs_diff(middle);
            let text_style = if distance == 0 {
                style.text_style
            } else {
                TextStyle {
                    bold: false,
                    underline: false,
                    ..style.text_style
                }
                .dim()
            };
            draw_label(buf, band, y, label, style.text_color, fade(distance), text_style);
        }
    }
}

/// Center `label` horizontally inside `band` on line `y`, keeping one column
/// of padding on each side.
fn draw_label(
    buf: &mut Buffer,
    band: Rect,
    y: u16,
    label: &str,
    color: Color,
    opacity: f32,
    text_style: TextStyle,
) {
    let inner_width = band.width.saturating_sub(2) as usize;
    let text = truncate_to_width(label, inner_width);
    let width = display_width(&text) as u16;
    let x = band.x + 1 + (inner_width as u16 - width) / 2;
    let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::BLACK);
    let fg = color.alpha(color.opacity() * opacity).over(bg);
    buf.put_str(x, y, &text, band.right().saturating_sub(1), fg, text_style);
}

/// Paint the highlight band and its border.
pub(crate) fn draw_highlight(buf: &mut Buffer, rect: Rect, props: &SelectorProperties) {
    let rect = rect.intersect(buf.area());
    if rect.is_empty() {
        return;
    }
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = props.color.over(cell.bg);
            }
        }
    }

    let Some(border) = props.border else {
        return;
    };
    if rect.width < 2 {
        return;
    }
    let (tl, tr, bl, br, h, v) = border_glyphs(props.shape, border.style);
    let style = TextStyle::new();
    let (left, right) = (rect.x, rect.right() - 1);

    if rect.height >= 3 {
        let (top, bottom) = (rect.y, rect.bottom() - 1);
        for x in left + 1..right {
            let fg = border.color.over(bg_at(buf, x, top));
            buf.put_char(x, top, h, fg, style);
            let fg = border.color.over(bg_at(buf, x, bottom));
            buf.put_char(x, bottom, h, fg, style);
        }
        let corners = [
            (left, top, tl),
            (right, top, tr),
            (left, bottom, bl),
            (right, bottom, br),
        ];
        for (x, y, ch) in corners {
            let fg = border.color.over(bg_at(buf, x, y));
            buf.put_char(x, y, ch, fg, style);
        }
        for y in top + 1..bottom {
            for x in [left, right] {
                let fg = border.color.over(bg_at(buf, x, y));
                buf.put_char(x, y, v, fg, style);
            }
        }
    } else {
        // Too short for a box; mark the sides only
        for y in rect.y..rect.bottom() {
            for x in [left, right] {
                let fg = border.color.over(bg_at(buf, x, y));
                buf.put_char(x, y, v, fg, style);
            }
        }
    }
}

fn bg_at(buf: &Buffer, x: u16, y: u16) -> Rgb {
    buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::BLACK)
}
