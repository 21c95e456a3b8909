//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use starter_app::{AppState, InputKey, Message};
use starter_core::prelude::*;
use std::time::Duration;

use crate::render;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event to a selection; only left-button presses on an
/// option count
pub fn mouse_event_to_message(mouse: MouseEvent, state: &AppState, area: Rect) -> Option<Message> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let starter = render::option_at(area, state, mouse.column, mouse.row)?;
    trace!("Click at ({}, {}) on {}", mouse.column, mouse.row, starter);
    Some(Message::Select(starter.clone()))
}

/// Translate one terminal event into a message
pub fn event_to_message(event: Event, state: &AppState, area: Rect) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, state, area),
        Event::Resize(width, height) => Some(Message::ConfigurationChanged { width, height }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// `area` is the terminal area of the last drawn frame, used to resolve
/// mouse clicks.
pub fn poll(state: &AppState, area: Rect) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;
        Ok(event_to_message(event, state, area))
    } else {
        Ok(None)
    }
}
