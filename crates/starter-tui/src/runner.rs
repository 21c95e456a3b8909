//! Main TUI runner - entry point and event loop

use ratatui::layout::Rect;
use starter_app::config::Settings;
use starter_app::process::process_message;
use starter_app::AppState;
use starter_core::prelude::*;

use super::{event, render, terminal};

/// Run the selection screen until the user quits
pub fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse capture unavailable: {}", e);
    }

    let mut state = AppState::with_settings(settings);
    info!("Starter Select started with {}", state.current());

    let result = run_loop(&mut term, &mut state);

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    info!("Starter Select exiting with {}", state.current());
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    let size = terminal.size()?;
    let mut area = Rect::new(0, 0, size.width, size.height);

    while !state.should_quit() {
        if state.take_needs_render() {
            let frame = terminal.draw(|frame| render::view(frame, state))?;
            area = frame.area;
        }

        // Handle terminal events
        if let Some(message) = event::poll(state, area)? {
            process_message(state, message);
        }
    }

    Ok(())
}
