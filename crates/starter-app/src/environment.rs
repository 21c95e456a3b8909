//! Read-only display environment
//!
//! Orientation and color scheme belong to the host, not to this program.
//! Both are recomputed on every render pass and never stored in [`crate::AppState`].

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Environment variable set by many terminals as `"<fg>;<bg>"` color indices
const COLORFGBG: &str = "COLORFGBG";

/// Display orientation derived from the terminal's physical aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classify a terminal of `width` x `height` cells.
    ///
    /// `cell_aspect` is the height of one cell divided by its width. The
    /// display is landscape only when it is physically wider than tall, so a
    /// square display counts as portrait.
    pub fn from_size(width: u16, height: u16, cell_aspect: f32) -> Self {
        let physical_height = f32::from(height) * cell_aspect;
        if f32::from(width) > physical_height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_portrait(self) -> bool {
        self == Orientation::Portrait
    }
}

/// Color scheme of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Resolve the scheme for a preference, consulting the terminal for `Auto`
    pub fn resolve(preference: ColorSchemePreference) -> Self {
        match preference {
            ColorSchemePreference::Light => ColorScheme::Light,
            ColorSchemePreference::Dark => ColorScheme::Dark,
            ColorSchemePreference::Auto => {
                Self::from_colorfgbg(std::env::var(COLORFGBG).ok().as_deref())
            }
        }
    }

    /// Parse a `COLORFGBG` value. The last field is the background color
    /// index; 7 (white) and 15 (bright white) are light backgrounds. Missing
    /// or unparseable values fall back to dark.
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(7 | 15) => ColorScheme::Light,
            _ => ColorScheme::Dark,
        }
    }
}

/// Configured color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemePreference {
    /// Follow the terminal
    #[default]
    Auto,
    Light,
    Dark,
}

impl std::str::FromStr for ColorSchemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorSchemePreference::Auto),
            "light" => Ok(ColorSchemePreference::Light),
            "dark" => Ok(ColorSchemePreference::Dark),
            other => Err(format!(
                "unknown color scheme '{}' (expected auto, light or dark)",
                other
            )),
        }
    }
}

/// Snapshot of the host environment for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEnvironment {
    pub orientation: Orientation,
    pub color_scheme: ColorScheme,
}

impl DisplayEnvironment {
    /// Read the environment fresh for a terminal of the given size
    pub fn read(width: u16, height: u16, settings: &Settings) -> Self {
        Self {
            orientation: Orientation::from_size(width, height, settings.layout.cell_aspect),
            color_scheme: ColorScheme::resolve(settings.ui.color_scheme),
        }
    }
}
