//! Input routing for the date picker.

use log::trace;

use crate::event::{Event, EventResult, Key};
use crate::wheel::WheelInput;
use crate::wheel::render::RowLayout;

use super::WheelDatePicker;
use super::snapped::DateField;

impl WheelDatePicker {
    /// Column under (x, y) in the last rendered layout.
    pub fn field_at(&self, x: u16, y: u16) -> Option<DateField> {
        self.columns
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(field, _)| *field)
    }

    /// Offer an event to the picker.
    ///
    /// Keys act on the focused column; Left/Right and Tab/BackTab move focus.
    /// Scroll and click events act on the column under the pointer, which
    /// also takes focus. Positional events need a prior `render`.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match *event {
            Event::Key { key, .. } => self.handle_key(key),
            Event::Scroll { x, y, delta } => {
                let Some(field) = self.field_at(x, y) else {
                    return EventResult::Ignored;
                };
                self.focus(field);
                self.settle(field, WheelInput::Step(delta as isize));
                EventResult::Consumed
            }
            Event::Click { x, y } => self.handle_click(x, y),
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Left | Key::BackTab => {
                self.focus_prev();
                EventResult::Consumed
            }
            Key::Right | Key::Tab => {
                self.focus_next();
                EventResult::Consumed
            }
            _ => {
                let rows = self.wheel(self.focused).map(|w| w.row_count()).unwrap_or(1);
                match WheelInput::from_key(key, rows) {
                    Some(input) => {
                        self.settle(self.focused, input);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> EventResult {
        let Some((field, rect)) = self.columns.iter().copied().find(|(_, r)| r.contains(x, y))
        else {
            return EventResult::Ignored;
        };
        self.focus(field);

        let Some(wheel) = self.wheel(field) else {
            return EventResult::Ignored;
        };
        let rows = RowLayout::new(rect, wheel.row_count());
        let Some(row) = rows.row_at(y) else {
            return EventResult::Consumed;
        };
        let window = wheel.window(rows.row_count.into());
        let Some(index) = window.get(usize::from(row)).copied().flatten() else {
            return EventResult::Consumed;
        };
        trace!("Click on {:?} row {} -> index {}", field, row, index);
        self.settle_at(field, index);
        EventResult::Consumed
    }
}
