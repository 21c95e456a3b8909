//! Image widget: draws the sprite behind an image handle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};
use starter_core::ImageHandle;

use crate::assets;
use crate::theme::styles;

/// Shown in place of a handle with no sprite
const MISSING: &str = "[?]";

/// Draws a sprite horizontally centered at the top of its area
pub struct Image {
    handle: ImageHandle,
    tint: Option<Color>,
}

impl Image {
    pub fn new(handle: ImageHandle) -> Self {
        Self { handle, tint: None }
    }

    /// Replace the sprite's own color
    pub fn tint(mut self, tint: Option<Color>) -> Self {
        self.tint = tint;
        self
    }
}

impl Widget for Image {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let Some(sprite) = assets::sprite(self.handle) else {
            let line = Line::styled(MISSING, styles::text_muted());
            let x = area.x + area.width.saturating_sub(line.width() as u16) / 2;
            buf.set_line(x, area.y, &line, area.right().saturating_sub(x));
            return;
        };

        let style = Style::default().fg(self.tint.unwrap_or(sprite.color));
        let x = area.x + area.width.saturating_sub(sprite.width()) / 2;
        let max_width = area.right().saturating_sub(x);

        for (row, text) in sprite.lines.iter().take(area.height as usize).enumerate() {
            buf.set_stringn(x, area.y + row as u16, text, max_width as usize, style);
        }
    }
}
