//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use starter_app::ColorScheme;

use super::palette;

// --- Screen ---
/// Base style of the whole screen for a color scheme
pub fn screen(scheme: ColorScheme) -> Style {
    match scheme {
        ColorScheme::Dark => Style::default().fg(palette::DARK_TEXT).bg(palette::DARK_BG),
        ColorScheme::Light => Style::default().fg(palette::LIGHT_TEXT).bg(palette::LIGHT_BG),
    }
}

// --- Text styles ---
pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Block builders ---
pub fn glass_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
}
