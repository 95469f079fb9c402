//! Keyboard handling for a wheel.

use crate::event::Key;

use super::Wheel;

/// A movement request against a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelInput {
    /// Move by a number of rows; negative is up.
    Step(isize),
    First,
    Last,
}

impl WheelInput {
    /// Map a key to a wheel movement. `page` is the distance for
    /// PageUp/PageDown.
    pub fn from_key(key: Key, page: usize) -> Option<Self> {
        let page = page as isize;
        match key {
            Key::Up | Key::Char('k') => Some(Self::Step(-1)),
            Key::Down | Key::Char('j') => Some(Self::Step(1)),
            Key::PageUp => Some(Self::Step(-page)),
            Key::PageDown => Some(Self::Step(page)),
            Key::Home => Some(Self::First),
            Key::End => Some(Self::Last),
            _ => None,
        }
    }
}

impl Wheel {
    /// Apply a movement and settle. See [`Wheel::scroll_by`].
    pub fn apply<F>(&mut self, input: WheelInput, on_settle: F) -> Option<usize>
    where
        F: FnOnce(usize) -> usize,
    {
        match input {
            WheelInput::Step(delta) => self.scroll_by(delta, on_settle),
            WheelInput::First => self.settle_at(0, on_settle),
            WheelInput::Last => self.settle_at(self.len().saturating_sub(1), on_settle),
        }
    }
}
