//! starter-tui - Terminal UI for Starter Select
//!
//! This crate provides the ratatui-based terminal interface. It renders the
//! [`starter_app::AppState`] built by starter-app and turns terminal input
//! (keys, mouse clicks, resizes) into [`starter_app::Message`]s.

pub mod assets;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
