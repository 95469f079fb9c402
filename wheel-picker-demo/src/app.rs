//! Demo screen: a title, the picker, and a status line with the last settle.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wheel_picker::{
    Buffer, CalendarDate, Color, DatePickerConfig, Event, Key, Rect, Result, SnappedDate,
    TextStyle, WheelDatePicker,
};

const TITLE: &str = "Pick a date";
const HELP: &str = "↑/↓ scroll  ←/→ column  enter confirm  q quit";

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    /// Exit and report the selected date.
    Confirm(CalendarDate),
}

pub struct DemoApp {
    picker: WheelDatePicker,
    last_snap: Rc<RefCell<Option<SnappedDate>>>,
}

impl DemoApp {
    pub fn new(config: DatePickerConfig) -> Result<Self> {
        let last_snap = Rc::new(RefCell::new(None));
        let recorder = Rc::clone(&last_snap);
        let picker = config
            .on_snapped(move |snapped| {
                info!("Snapped {:?} to {}", snapped.field(), snapped.date());
                *recorder.borrow_mut() = Some(*snapped);
                None
            })
            .build()?;
        Ok(Self { picker, last_snap })
    }

    pub fn picker(&self) -> &WheelDatePicker {
        &self.picker
    }

    pub fn last_snap(&self) -> Option<SnappedDate> {
        *self.last_snap.borrow()
    }

    pub fn handle(&mut self, event: Event) -> Control {
        if let Event::Key { key, modifiers } = event {
            match key {
                Key::Char('c') if modifiers.ctrl => return Control::Quit,
                Key::Char('q') | Key::Escape => return Control::Quit,
                Key::Enter => return Control::Confirm(self.picker.date()),
                _ => {}
            }
        }
        self.picker.handle_event(&event);
        Control::Continue
    }

    pub fn render(&mut self, buf: &mut Buffer) {
        let area = buf.area();
        if area.height < 4 {
            self.picker.render(buf, area);
            return;
        }

        let text = Color::rgb(230, 230, 230).to_rgb();
        let muted = Color::rgb(140, 140, 150).to_rgb();

        put_centered(buf, 0, TITLE, text, TextStyle::new().bold());

        let body = Rect::new(area.x, area.y + 1, area.width, area.height - 3);
        self.picker.render(buf, body);

        let status = match self.last_snap() {
            Some(snap) => format!(
                "{}  (last: {:?} #{})",
                self.picker.date(),
                snap.field(),
                snap.index()
            ),
            None => self.picker.date().to_string(),
        };
        put_centered(buf, area.height - 2, &status, text, TextStyle::new());
        put_centered(buf, area.height - 1, HELP, muted, TextStyle::new().dim());
    }
}

fn put_centered(buf: &mut Buffer, y: u16, text: &str, fg: wheel_picker::Rgb, style: TextStyle) {
    let width = wheel_picker::display_width(text) as u16;
    let x = buf.width().saturating_sub(width) / 2;
    buf.put_str(x, y, text, buf.width(), fg, style);
}
