//! Configuration file parsing for Starter Select
//!
//! Supports a single TOML settings file, located at an explicit path or at
//! `<config_dir>/starter-select/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
