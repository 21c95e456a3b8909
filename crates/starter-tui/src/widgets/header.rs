//! Header widget
//!
//! A single centered, bold label. Holds no state.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Screen header showing a fixed label
pub struct Header<'a> {
    label: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(self.label, styles::title()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    #[test]
    fn test_header_renders_label() {
        let mut term = TestTerminal::new();
        term.render_widget(Header::new("Choose your starter"), term.area());

        assert!(term.line_contains(0, "Choose your starter"));
    }

    #[test]
    fn test_header_is_centered() {
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(Header::new("abcd"), term.area());

        assert_eq!(term.find_text("abcd"), Some((8, 0)));
    }

    #[test]
    fn test_header_is_bold() {
        let mut term = TestTerminal::with_size(4, 1);
        term.render_widget(Header::new("abcd"), term.area());

        let cell = &term.buffer()[(0, 0)];
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
}
