//! The fixed starter catalog
//!
//! Exactly three entries, defined once and never mutated. The first entry is
//! the initial selection of a freshly composed screen.

use crate::types::{ImageHandle, Starter};

/// Number of entries in the catalog
pub const CATALOG_LEN: usize = 3;

/// Ordered starter catalog
pub static STARTERS: [Starter; CATALOG_LEN] = [
    Starter::from_static("Bulbasaur", ImageHandle::BULBASAUR),
    Starter::from_static("Charmander", ImageHandle::CHARMANDER),
    Starter::from_static("Squirtle", ImageHandle::SQUIRTLE),
];

/// The full catalog in display order
pub fn catalog() -> &'static [Starter] {
    &STARTERS
}

/// Initial selection for a screen composed without saved state
pub fn default_starter() -> &'static Starter {
    &STARTERS[0]
}

/// Index of a starter in the catalog, by value
pub fn position_of(starter: &Starter) -> Option<usize> {
    STARTERS.iter().position(|s| s == starter)
}

/// Whether a starter is a catalog member, by value
pub fn contains(starter: &Starter) -> bool {
    position_of(starter).is_some()
}
