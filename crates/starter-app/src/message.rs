//! Message types for the application (TEA pattern)

use starter_core::Starter;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// An option was activated; carries that option's starter
    Select(Starter),
    /// Select the catalog entry at an index (keyboard shortcut)
    SelectIndex(usize),
    /// Select the next catalog entry, wrapping around
    SelectNext,
    /// Select the previous catalog entry, wrapping around
    SelectPrevious,

    // ─────────────────────────────────────────────────────────
    // Host Messages
    // ─────────────────────────────────────────────────────────
    /// The host reconfigured the display (terminal resize); the screen is
    /// torn down and recomposed from saved state
    ConfigurationChanged { width: u16, height: u16 },
}
