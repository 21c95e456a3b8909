//! Option list widget
//!
//! The catalog as a centered horizontal row of equally sized options. The
//! same geometry backs both rendering and click hit testing, so a click
//! always resolves to the option drawn under it.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    widgets::Widget,
};
use starter_app::ColorScheme;
use starter_core::Starter;

use super::option::{StarterOption, OPTION_HEIGHT, OPTION_WIDTH};

/// Columns between adjacent options
pub const OPTION_SPACING: u16 = 1;

/// Split `area` into `count` option cells, centered horizontally
pub fn option_areas(area: Rect, count: usize) -> Vec<Rect> {
    let row = Rect {
        height: area.height.min(OPTION_HEIGHT),
        ..area
    };

    Layout::horizontal(vec![Constraint::Length(OPTION_WIDTH); count])
        .flex(Flex::Center)
        .spacing(OPTION_SPACING)
        .split(row)
        .to_vec()
}

/// Resolve a click at (`column`, `row`) to the option drawn there
pub fn option_at<'s>(
    area: Rect,
    options: &'s [Starter],
    column: u16,
    row: u16,
) -> Option<&'s Starter> {
    let position = Position::new(column, row);
    option_areas(area, options.len())
        .into_iter()
        .zip(options)
        .find(|(cell, _)| cell.contains(position))
        .map(|(_, starter)| starter)
}

/// Row of selectable starters
pub struct OptionList<'a> {
    options: &'a [Starter],
    selected: &'a Starter,
    color_scheme: ColorScheme,
}

impl<'a> OptionList<'a> {
    pub fn new(options: &'a [Starter], selected: &'a Starter, color_scheme: ColorScheme) -> Self {
        Self {
            options,
            selected,
            color_scheme,
        }
    }
}

impl Widget for OptionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (cell, starter) in option_areas(area, self.options.len())
            .into_iter()
            .zip(self.options)
        {
            let selected = starter == self.selected;
            StarterOption::new(starter, selected, self.color_scheme).render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use starter_core::STARTERS;

    const AREA: Rect = Rect::new(0, 0, 60, 2);

    #[test]
    fn test_option_areas_equal_width_and_centered() {
        let cells = option_areas(AREA, 3);

        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|c| c.width == OPTION_WIDTH));
        assert_eq!(cells[1].x - cells[0].right(), OPTION_SPACING);

        let left_gap = cells[0].x - AREA.x;
        let right_gap = AREA.right() - cells[2].right();
        assert!(left_gap.abs_diff(right_gap) <= 1);
    }

    #[test]
    fn test_option_at_hits_each_option() {
        let cells = option_areas(AREA, STARTERS.len());

        for (cell, starter) in cells.iter().zip(STARTERS.iter()) {
            assert_eq!(option_at(AREA, &STARTERS, cell.x, cell.y), Some(starter));
            assert_eq!(
                option_at(AREA, &STARTERS, cell.right() - 1, cell.bottom() - 1),
                Some(starter)
            );
        }
    }

    #[test]
    fn test_option_at_misses_gaps() {
        let cells = option_areas(AREA, STARTERS.len());

        assert_eq!(option_at(AREA, &STARTERS, cells[0].right(), AREA.y), None);
        assert_eq!(option_at(AREA, &STARTERS, 0, 0), None);
        assert_eq!(option_at(AREA, &STARTERS, cells[0].x, AREA.bottom()), None);
    }

    #[test]
    fn test_list_marks_exactly_one_selected() {
        let mut term = TestTerminal::with_size(AREA.width, AREA.height);
        term.render_widget(
            OptionList::new(&STARTERS, &STARTERS[2], ColorScheme::Light),
            AREA,
        );

        assert_eq!(term.content().matches('●').count(), 1);
        assert_eq!(term.content().matches('○').count(), 2);

        let (marker_x, _) = term.find_text("●").unwrap();
        let cells = option_areas(AREA, STARTERS.len());
        assert!(cells[2].contains(Position::new(marker_x, 0)));
    }

    #[test]
    fn test_list_shows_all_names() {
        let mut term = TestTerminal::with_size(AREA.width, AREA.height);
        term.render_widget(
            OptionList::new(&STARTERS, &STARTERS[0], ColorScheme::Dark),
            AREA,
        );

        for starter in STARTERS.iter() {
            assert!(term.line_contains(1, starter.name()));
        }
    }
}
