use std::time::Duration;

use anyhow::Result;
pub use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Anything else the terminal reports (focus changes, paste)
    Other,
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Other,
        }
    }
}

/// Wait up to `timeout` for the next terminal event
pub fn next_event(timeout: Duration) -> Result<Option<Event>> {
    if crossterm::event::poll(timeout)? {
        Ok(Some(crossterm::event::read()?.into()))
    } else {
        Ok(None)
    }
}
