//! Option widget: one selectable starter
//!
//! A marker sprite above the starter's name. The marker shows whether this
//! option is the current selection.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Paragraph, Widget},
};
use starter_app::ColorScheme;
use starter_core::{ImageHandle, Starter};

use crate::theme::{palette, styles};
use crate::widgets::Image;

/// Width of one option cell
pub const OPTION_WIDTH: u16 = 11;

/// Height of one option cell: marker row and name row
pub const OPTION_HEIGHT: u16 = 2;

/// Marker image for a selected or unselected option
pub fn marker_for(selected: bool) -> ImageHandle {
    if selected {
        ImageHandle::MARKER_SELECTED
    } else {
        ImageHandle::MARKER_UNSELECTED
    }
}

/// Tint applied to the marker; only an unselected marker on a dark
/// background is recolored
pub fn marker_tint(selected: bool, color_scheme: ColorScheme) -> Option<Color> {
    (!selected && color_scheme.is_dark()).then_some(palette::MARKER_DARK_TINT)
}

pub struct StarterOption<'a> {
    starter: &'a Starter,
    selected: bool,
    color_scheme: ColorScheme,
}

impl<'a> StarterOption<'a> {
    pub fn new(starter: &'a Starter, selected: bool, color_scheme: ColorScheme) -> Self {
        Self {
            starter,
            selected,
            color_scheme,
        }
    }
}

impl Widget for StarterOption<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [marker_area, name_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        Image::new(marker_for(self.selected))
            .tint(marker_tint(self.selected, self.color_scheme))
            .render(marker_area, buf);

        let name_style = if self.selected {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        Paragraph::new(Line::styled(self.starter.name(), name_style))
            .alignment(Alignment::Center)
            .render(name_area, buf);
    }
}
