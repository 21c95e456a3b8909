//! Configuration types for Starter Select
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `LayoutSettings` - Its sections

use serde::{Deserialize, Serialize};

pub use crate::environment::ColorSchemePreference;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub layout: LayoutSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Color scheme: auto (follow terminal), light or dark
    #[serde(default)]
    pub color_scheme: ColorSchemePreference,

    /// Label shown in the screen header
    #[serde(default = "default_header_label")]
    pub header_label: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorSchemePreference::default(),
            header_label: default_header_label(),
        }
    }
}

fn default_header_label() -> String {
    "Choose your starter Pokémon".to_string()
}

/// Layout settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Height of one terminal cell divided by its width, used to derive
    /// the display orientation from the terminal size
    #[serde(default = "default_cell_aspect")]
    pub cell_aspect: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            cell_aspect: default_cell_aspect(),
        }
    }
}

fn default_cell_aspect() -> f32 {
    2.0
}
