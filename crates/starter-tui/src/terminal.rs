//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use starter_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_mouse_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start reporting mouse events
pub fn enable_mouse_capture() -> Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)?;
    Ok(())
}

/// Stop reporting mouse events
pub fn disable_mouse_capture() -> Result<()> {
    execute!(std::io::stdout(), DisableMouseCapture)?;
    Ok(())
}
