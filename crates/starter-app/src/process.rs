//! Message processing through the TEA update loop

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up on any
/// messages the handlers return until none remain
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        msg = result.message;
    }
}
