//! starter-app - Application state and orchestration for Starter Select
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the selection cell and its saved-state registry (Model), messages, the update
//! function, configuration loading and the read-only display environment.
//! It has no terminal dependency; the TUI crate converts terminal input into
//! [`Message`]s and renders [`AppState`].

pub mod config;
pub mod environment;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod saveable;
pub mod selection;
pub mod state;

// Re-export primary types
pub use environment::{ColorScheme, DisplayEnvironment, Orientation};
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use saveable::{RecoveryRegistry, SavedState, Saver};
pub use selection::{SelectionCell, StarterSaver, SELECTION_KEY};
pub use state::{AppPhase, AppState, ScreenState};
