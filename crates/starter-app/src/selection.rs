//! Selection state cell
//!
//! Holds the single currently selected starter. The cell is part of the
//! screen state and is dropped on every forced teardown; its value survives
//! through the `(name, image_handle)` tuple it writes to the
//! [`RecoveryRegistry`] on every change.

use serde_json::{json, Value};
use starter_core::prelude::*;
use starter_core::{catalog, ImageHandle, Starter};

use crate::saveable::{RecoveryRegistry, SavedState, Saver};

/// Registry slot holding the saved selection
pub const SELECTION_KEY: &str = "starter_selection";

/// Saves a [`Starter`] as `[name, image_handle]`
#[derive(Debug, Clone, Copy, Default)]
pub struct StarterSaver;

impl Saver for StarterSaver {
    type Value = Starter;

    fn save(&self, value: &Starter) -> SavedState {
        vec![json!(value.name()), json!(value.image().raw())]
    }

    fn restore(&self, saved: &[Value]) -> Result<Starter> {
        let [name, image] = saved else {
            return Err(Error::malformed_saved_state(
                SELECTION_KEY,
                format!("expected 2 values, got {}", saved.len()),
            ));
        };

        let name = name.as_str().filter(|n| !n.is_empty()).ok_or_else(|| {
            Error::malformed_saved_state(
                SELECTION_KEY,
                format!("name must be a non-empty string, got {}", name),
            )
        })?;

        let image = image
            .as_u64()
            .and_then(|raw| u16::try_from(raw).ok())
            .ok_or_else(|| {
                Error::malformed_saved_state(
                    SELECTION_KEY,
                    format!("image handle must be a u16, got {}", image),
                )
            })?;

        Ok(Starter::new(name.to_string(), ImageHandle::from_raw(image)))
    }
}

/// The single selected starter of a composed screen
#[derive(Debug, Clone)]
pub struct SelectionCell {
    current: Starter,
    revision: u64,
}

impl SelectionCell {
    /// Compose the cell: restore from the registry slot if one exists,
    /// otherwise start at the first catalog entry. The resulting value is
    /// written back so the slot is always current.
    pub fn remember(registry: &mut RecoveryRegistry) -> Self {
        let current = match registry.consume(SELECTION_KEY) {
            Some(saved) => {
                let starter = Self::restore(&saved);
                debug!("Restored selection: {}", starter);
                starter
            }
            None => catalog::default_starter().clone(),
        };

        let cell = Self {
            current,
            revision: 0,
        };
        registry.save(SELECTION_KEY, cell.serialize());
        cell
    }

    /// The presently selected starter
    pub fn current(&self) -> &Starter {
        &self.current
    }

    /// Number of selections made since this cell was composed
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the selection and persist it to the registry.
    ///
    /// Callers only pass catalog members; that contract is checked in debug
    /// builds only.
    pub fn select(&mut self, starter: Starter, registry: &mut RecoveryRegistry) {
        debug_assert!(
            catalog::contains(&starter),
            "selected starter {:?} is not in the catalog",
            starter
        );

        self.current = starter;
        self.revision += 1;
        registry.save(SELECTION_KEY, self.serialize());
    }

    /// Minimal `(name, image_handle)` form of the current selection
    pub fn serialize(&self) -> SavedState {
        StarterSaver.save(&self.current)
    }

    /// Rebuild a starter from its saved tuple.
    ///
    /// # Panics
    ///
    /// Panics if the tuple is malformed. The tuple is only ever written by
    /// [`SelectionCell::serialize`], so a bad one is a programming error.
    pub fn restore(saved: &[Value]) -> Starter {
        match StarterSaver.restore(saved) {
            Ok(starter) => starter,
            Err(e) => panic!("{}", e),
        }
    }
}
