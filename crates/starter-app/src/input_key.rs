//! Abstract input key event, independent of terminal library.
//!
//! The TUI crate converts crossterm key events into `InputKey` at its
//! boundary so that starter-app never depends on terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    /// Left arrow key
    Left,
    /// Right arrow key
    Right,

    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
}
