//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DARK_BG: Color = Color::Black;
pub const LIGHT_BG: Color = Color::White;

// --- Text ---
pub const DARK_TEXT: Color = Color::White; // Primary text on dark backgrounds
pub const LIGHT_TEXT: Color = Color::Black; // Primary text on light backgrounds
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Sprites ---
pub const LOGO: Color = Color::Yellow;
pub const MARKER_SELECTED: Color = Color::Red;
pub const MARKER_UNSELECTED: Color = Color::DarkGray;
pub const MARKER_DARK_TINT: Color = Color::White; // Unselected marker on dark backgrounds
pub const GRASS: Color = Color::Green;
pub const FIRE: Color = Color::LightRed;
pub const WATER: Color = Color::LightBlue;
