//! Application state (Model in TEA pattern)
//!
//! Split in two lifetimes:
//! - [`AppState`] lives for the whole process and owns settings and the
//!   [`RecoveryRegistry`].
//! - [`ScreenState`] is everything a composed screen owns. It is dropped and
//!   rebuilt on every host reconfiguration.

use starter_core::prelude::*;
use starter_core::Starter;

use crate::config::Settings;
use crate::saveable::RecoveryRegistry;
use crate::selection::SelectionCell;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// State owned by one composition of the screen
#[derive(Debug)]
pub struct ScreenState {
    /// The selection cell
    pub selection: SelectionCell,

    /// How many times the screen has been composed in this process (1-based)
    pub generation: u32,
}

impl ScreenState {
    /// Compose a screen, restoring saved values from the registry
    pub fn compose(registry: &mut RecoveryRegistry, generation: u32) -> Self {
        Self {
            selection: SelectionCell::remember(registry),
            generation,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Application settings from config file and CLI
    pub settings: Settings,

    /// Current application phase
    pub phase: AppPhase,

    /// Saved values that outlive a screen teardown
    pub registry: RecoveryRegistry,

    /// The currently composed screen
    pub screen: ScreenState,

    /// Set when the view must be redrawn
    needs_render: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with settings
    pub fn with_settings(settings: Settings) -> Self {
        let mut registry = RecoveryRegistry::new();
        let screen = ScreenState::compose(&mut registry, 1);

        Self {
            settings,
            phase: AppPhase::Running,
            registry,
            screen,
            needs_render: true,
        }
    }

    /// The presently selected starter
    pub fn current(&self) -> &Starter {
        self.screen.selection.current()
    }

    /// Replace the selection
    pub fn select(&mut self, starter: Starter) {
        if self.current() == &starter {
            return;
        }
        info!("Selected {}", starter);
        self.screen.selection.select(starter, &mut self.registry);
        self.needs_render = true;
    }

    /// Tear down the composed screen and compose a fresh one.
    ///
    /// Only the registry carries values across; the new screen never reads
    /// from the old one.
    pub fn recreate_screen(&mut self) {
        let generation = self.screen.generation + 1;
        self.screen = ScreenState::compose(&mut self.registry, generation);
        self.needs_render = true;
        debug!(
            "Screen recomposed (generation {}), selection {}",
            generation,
            self.current()
        );
    }

    /// Returns whether a redraw is pending and clears the flag
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
