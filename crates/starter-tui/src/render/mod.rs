//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Frame;
use starter_app::{AppState, DisplayEnvironment, Orientation};
use starter_core::{catalog, ImageHandle, Starter};

use crate::layout::{self, ScreenAreas};
use crate::theme::styles;
use crate::widgets;

/// Layout for a terminal area under the current settings
fn screen_areas(area: Rect, orientation: Orientation) -> ScreenAreas {
    layout::create(area, layout::arrangement_for(orientation))
}

/// Render the complete UI (View function in TEA)
///
/// The display environment is read fresh on every call; nothing about
/// orientation or color scheme is kept in state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let env = DisplayEnvironment::read(area.width, area.height, &state.settings);
    view_with(frame, state, env);
}

/// Render the UI for an explicit display environment
pub fn view_with(frame: &mut Frame, state: &AppState, env: DisplayEnvironment) {
    let area = frame.area();

    frame.render_widget(Block::default().style(styles::screen(env.color_scheme)), area);

    let areas = screen_areas(area, env.orientation);
    let current = state.current();

    frame.render_widget(widgets::Image::new(ImageHandle::LOGO), areas.logo);
    frame.render_widget(
        widgets::Header::new(&state.settings.ui.header_label),
        areas.header,
    );
    frame.render_widget(widgets::PreviewCard::new(current), areas.card);
    frame.render_widget(
        widgets::OptionList::new(catalog(), current, env.color_scheme),
        areas.options,
    );
}

/// Resolve a click at (`column`, `row`) to the option drawn there.
///
/// Uses the same layout as [`view`] for a terminal of `area`.
pub fn option_at(area: Rect, state: &AppState, column: u16, row: u16) -> Option<&'static Starter> {
    let orientation = Orientation::from_size(
        area.width,
        area.height,
        state.settings.layout.cell_aspect,
    );
    let areas = screen_areas(area, orientation);
    widgets::option_at(areas.options, catalog(), column, row)
}
