#![forbid(unsafe_code)]

//! Event source capability.
//!
//! The program loop is generic over where events come from: a live terminal
//! ([`CrosstermEvents`]) or a fixed script ([`ScriptedEvents`]) for tests and
//! headless runs. Either way the loop only ever sees canonical
//! [`carrousel_core::event::Event`]s.

use carrousel_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Result of polling an event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Polled {
    /// An event is ready.
    Ready(Event),
    /// Nothing arrived within the timeout; poll again.
    Idle,
    /// The source is exhausted and will never produce another event.
    Closed,
}

/// A source of canonical input events.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Polled>;
}

/// Live terminal events via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    /// Create a crossterm-backed event source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Polled> {
        if !crossterm::event::poll(timeout)? {
            return Ok(Polled::Idle);
        }
        let event = crossterm::event::read()?;
        // Events the canonical types can't represent are dropped as idle.
        Ok(from_crossterm(event).map_or(Polled::Idle, Polled::Ready))
    }
}

/// Convert a crossterm event into a canonical event.
///
/// Returns `None` for events outside the canonical vocabulary (key releases,
/// focus and paste reports, unsupported key codes).
fn from_crossterm(event: crossterm::event::Event) -> Option<Event> {
    use crossterm::event as ct;
    match event {
        ct::Event::Key(key) => {
            if key.kind == ct::KeyEventKind::Release {
                return None;
            }
            let code = match key.code {
                ct::KeyCode::Char(c) => KeyCode::Char(c),
                ct::KeyCode::Enter => KeyCode::Enter,
                ct::KeyCode::Esc => KeyCode::Escape,
                ct::KeyCode::Home => KeyCode::Home,
                ct::KeyCode::End => KeyCode::End,
                ct::KeyCode::Up => KeyCode::Up,
                ct::KeyCode::Down => KeyCode::Down,
                ct::KeyCode::Left => KeyCode::Left,
                ct::KeyCode::Right => KeyCode::Right,
                _ => return None,
            };
            Some(Event::Key(
                KeyEvent::new(code).with_modifiers(convert_modifiers(key.modifiers)),
            ))
        }
        ct::Event::Mouse(mouse) => {
            let kind = match mouse.kind {
                ct::MouseEventKind::Down(b) => MouseEventKind::Down(convert_button(b)?),
                ct::MouseEventKind::Up(b) => MouseEventKind::Up(convert_button(b)?),
                ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(convert_button(b)?),
                ct::MouseEventKind::Moved => MouseEventKind::Moved,
                ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
                ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
                _ => return None,
            };
            Some(Event::Mouse(MouseEvent {
                kind,
                x: mouse.column,
                y: mouse.row,
                modifiers: convert_modifiers(mouse.modifiers),
            }))
        }
        ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn convert_modifiers(mods: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers as Km;
    let mut out = Modifiers::NONE;
    if mods.contains(Km::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if mods.contains(Km::ALT) {
        out |= Modifiers::ALT;
    }
    if mods.contains(Km::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if mods.contains(Km::SUPER) {
        out |= Modifiers::SUPER;
    }
    out
}

fn convert_button(button: crossterm::event::MouseButton) -> Option<MouseButton> {
    use crossterm::event::MouseButton as Mb;
    match button {
        Mb::Left => Some(MouseButton::Left),
        Mb::Right => Some(MouseButton::Right),
        Mb::Middle => Some(MouseButton::Middle),
    }
}

/// A fixed sequence of events, for tests and headless runs.
///
/// Once the script runs out the source reports [`Polled::Closed`], which
/// ends the program loop. Scripts that should exercise a clean shutdown path
/// should end with an event the model maps to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    /// Create a scripted source from an event sequence.
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Number of events left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _timeout: Duration) -> io::Result<Polled> {
        Ok(self
            .events
            .pop_front()
            .map_or(Polled::Closed, Polled::Ready))
    }
}
