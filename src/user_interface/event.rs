#[cfg(test)]
use std::collections::VecDeque;

/// Keys the interaction loop distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Number row or keypad digit 0-9
    Digit(u8),
    Escape,
    Other,
}

/// Input from the window, as seen by the interaction loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Quit,
    KeyPress(Key),
    PointerDown,
    PointerUp,
    /// Pointer movement in pixels since the previous event
    PointerMove { dx: f64, dy: f64 },
    /// Scroll wheel clicks, positive away from the user
    ScrollWheel(f64),
    /// Anything else the backend reports, e.g. right or middle clicks. Always ignored.
    Other,
}

/// Source of input events. `wait_for_next_event` blocks until something happens.
pub trait InputSource {
    fn wait_for_next_event(&mut self) -> anyhow::Result<Event>;
}

/// Replays a fixed list of events, then reports [`Event::Quit`] forever
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<Event>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn wait_for_next_event(&mut self) -> anyhow::Result<Event> {
        Ok(self.events.pop_front().unwrap_or(Event::Quit))
    }
}
