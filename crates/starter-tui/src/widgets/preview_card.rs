//! Preview card widget
//!
//! Shows the selected starter's sprite and its upper-cased name inside a
//! rounded border. Purely a function of the starter passed in.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};
use starter_core::Starter;

use crate::assets::CREATURE_HEIGHT;
use crate::theme::styles;
use crate::widgets::Image;

/// Width of the card including borders
pub const CARD_WIDTH: u16 = 24;

/// Height of the card including borders: sprite, blank row, name
pub const CARD_HEIGHT: u16 = CREATURE_HEIGHT + 4;

/// Large preview of one starter
pub struct PreviewCard<'a> {
    starter: &'a Starter,
}

impl<'a> PreviewCard<'a> {
    pub fn new(starter: &'a Starter) -> Self {
        Self { starter }
    }
}

impl Widget for PreviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let [sprite_area, _, name_area] = Layout::vertical([
            Constraint::Length(CREATURE_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Image::new(self.starter.image()).render(sprite_area, buf);

        Paragraph::new(Line::styled(
            self.starter.display_name(),
            styles::accent_bold(),
        ))
        .alignment(Alignment::Center)
        .render(name_area, buf);
    }
}
