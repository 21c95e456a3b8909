//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;

/// Convert key events to messages
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Number keys pick a catalog entry directly
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectIndex(index))
        }

        InputKey::Right | InputKey::Char('l') | InputKey::Tab => Some(Message::SelectNext),
        InputKey::Left | InputKey::Char('h') | InputKey::BackTab => {
            Some(Message::SelectPrevious)
        }

        _ => None,
    }
}
