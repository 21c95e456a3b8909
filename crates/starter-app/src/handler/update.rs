//! Main update function - handles state transitions (TEA pattern)

use starter_core::catalog;
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::Select(starter) => {
            state.select(starter);
            UpdateResult::none()
        }

        Message::SelectIndex(index) => match catalog().get(index) {
            Some(starter) => UpdateResult::message(Message::Select(starter.clone())),
            None => {
                debug!("No starter at index {}", index);
                UpdateResult::none()
            }
        },

        Message::SelectNext => UpdateResult::message(Message::SelectIndex(step(state, 1))),

        Message::SelectPrevious => {
            UpdateResult::message(Message::SelectIndex(step(state, catalog().len() - 1)))
        }

        // ─────────────────────────────────────────────────────────
        // Host Messages
        // ─────────────────────────────────────────────────────────
        Message::ConfigurationChanged { width, height } => {
            debug!("Display reconfigured to {}x{}", width, height);
            state.recreate_screen();
            UpdateResult::none()
        }
    }
}

/// Catalog index `offset` places after the current selection, wrapping
fn step(state: &AppState, offset: usize) -> usize {
    let len = catalog().len();
    let position = catalog::position_of(state.current()).unwrap_or_else(|| {
        warn!("Current selection {} is not in the catalog", state.current());
        0
    });
    (position + offset) % len
}
