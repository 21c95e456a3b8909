//! Screen layout definitions for the TUI
//!
//! Two arrangements of the same four regions. Portrait terminals stack the
//! regions top to bottom; landscape terminals split the screen into two
//! equal columns. Both fill a [`ScreenAreas`], so rendering and hit testing
//! never need to know which arrangement produced it.

use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};
use starter_app::Orientation;

use crate::widgets::{CARD_HEIGHT, CARD_WIDTH, OPTION_HEIGHT};

/// Height of the logo sprite
const LOGO_HEIGHT: u16 = 4;

/// Height of the header label
const HEADER_HEIGHT: u16 = 1;

/// Gap between header and option list in the paired arrangement
const HEADER_GAP: u16 = 2;

/// How the screen regions are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Single column: logo, header, card, options
    Stacked,

    /// Two equal columns: logo and card | header and options
    Paired,
}

/// Pick the arrangement for an orientation
pub fn arrangement_for(orientation: Orientation) -> Arrangement {
    match orientation {
        Orientation::Portrait => Arrangement::Stacked,
        Orientation::Landscape => Arrangement::Paired,
    }
}

/// Screen areas for the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub logo: Rect,
    pub header: Rect,
    /// Preview card, already sized to the card's fixed width
    pub card: Rect,
    /// Row holding the option list
    pub options: Rect,
}

/// Create the screen layout for an arrangement
pub fn create(area: Rect, arrangement: Arrangement) -> ScreenAreas {
    match arrangement {
        Arrangement::Stacked => stacked(area),
        Arrangement::Paired => paired(area),
    }
}

fn stacked(area: Rect) -> ScreenAreas {
    let inner = area.inner(Margin::new(1, 1));

    let [logo, header, _, card_row, _, options] = Layout::vertical([
        Constraint::Length(LOGO_HEIGHT),
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(OPTION_HEIGHT),
    ])
    .spacing(1)
    .areas(inner);

    ScreenAreas {
        logo,
        header,
        card: center_card(card_row),
        options,
    }
}

fn paired(area: Rect) -> ScreenAreas {
    let inner = area.inner(Margin::new(2, 1));

    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(2)
        .areas(inner);

    let [logo, card_row] = Layout::vertical([
        Constraint::Length(LOGO_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(left);

    let [header, _, options] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(HEADER_GAP),
        Constraint::Length(OPTION_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(right);

    ScreenAreas {
        logo,
        header,
        card: center_card(card_row),
        options,
    }
}

fn center_card(row: Rect) -> Rect {
    let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(row);
    card
}
