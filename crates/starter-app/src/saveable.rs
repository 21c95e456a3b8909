//! Saved-state registry for values that must outlive a screen teardown
//!
//! A screen is dropped and recomposed whenever the host reconfigures it
//! (terminal resize). Values that must survive are written, on every change,
//! as a minimal list of JSON scalars into a [`RecoveryRegistry`] owned by the
//! process-level state. On recomposition the value is rebuilt from its slot
//! through a [`Saver`] before any default is considered.

use std::collections::HashMap;

use serde_json::Value;
use starter_core::Result;

/// Minimal serialized form of a saveable value
pub type SavedState = Vec<Value>;

/// Converts a value to and from its [`SavedState`]
pub trait Saver {
    type Value;

    /// Serialize a value into its minimal saved form
    fn save(&self, value: &Self::Value) -> SavedState;

    /// Rebuild a value from a saved form written by [`Saver::save`]
    fn restore(&self, saved: &[Value]) -> Result<Self::Value>;
}

/// Process-scoped store of saved values, keyed by slot name
///
/// Lives for the whole process; never written to disk.
#[derive(Debug, Default)]
pub struct RecoveryRegistry {
    slots: HashMap<String, SavedState>,
}

impl RecoveryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write (or overwrite) the saved form for a slot
    pub fn save(&mut self, key: &str, state: SavedState) {
        tracing::trace!("Saving slot '{}': {:?}", key, state);
        self.slots.insert(key.to_string(), state);
    }

    /// Take the saved form for a slot, leaving it empty
    pub fn consume(&mut self, key: &str) -> Option<SavedState> {
        self.slots.remove(key)
    }

    /// Peek at the saved form for a slot
    pub fn get(&self, key: &str) -> Option<&SavedState> {
        self.slots.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
