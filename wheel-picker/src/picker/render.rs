//! Layout and drawing for the date picker.

use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::style::TextStyle;
use crate::wheel::WheelStyle;
use crate::wheel::render::{RowLayout, draw_highlight};

use super::WheelDatePicker;
use super::snapped::DateField;

impl WheelDatePicker {
    /// Column rectangles for a picker occupying `area`.
    ///
    /// With a year wheel the width is split in thirds; without one the day
    /// and month wheels share it in halves. Leftover columns go to the month.
    pub fn layout(&self, area: Rect) -> Vec<(DateField, Rect)> {
        let fields = self.fields();
        let count = fields.len() as u16;
        let base = area.width / count;
        let extra = area.width - base * count;
        let widths: Vec<u16> = fields
            .iter()
            .map(|f| if *f == DateField::Month { base + extra } else { base })
            .collect();
        fields.into_iter().zip(area.split_columns(&widths)).collect()
    }

    /// Draw the picker centered in `area` and remember the column layout
    /// for hit testing.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect) {
        let area = area.centered(self.size.width, self.size.height);
        self.columns = self.layout(area);

        if self.selector.enabled {
            let band = RowLayout::new(area, self.month.row_count()).selected_rect(area);
            draw_highlight(buf, band, &self.selector);
        }

        for (field, rect) in &self.columns {
            let Some(wheel) = self.wheel(*field) else {
                continue;
            };
            let style = if *field == self.focused {
                WheelStyle {
                    text_style: TextStyle {
                        underline: true,
                        ..self.style.text_style
                    },
                    ..self.style
                }
            } else {
                self.style
            };
            wheel.render(buf, *rect, &style);
        }
    }
}
