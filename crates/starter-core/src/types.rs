//! Core domain types

use std::borrow::Cow;
use std::fmt;

/// Opaque reference to a visual asset.
///
/// The numeric value is meaningful only to the asset table of the frontend
/// that draws it. Equality and ordering are by raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageHandle(u16);

impl ImageHandle {
    pub const LOGO: ImageHandle = ImageHandle(1);
    pub const MARKER_SELECTED: ImageHandle = ImageHandle(2);
    pub const MARKER_UNSELECTED: ImageHandle = ImageHandle(3);
    pub const BULBASAUR: ImageHandle = ImageHandle(10);
    pub const CHARMANDER: ImageHandle = ImageHandle(11);
    pub const SQUIRTLE: ImageHandle = ImageHandle(12);

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One selectable starter creature.
///
/// Immutable once constructed. Two starters with the same name and image
/// handle are interchangeable: equality is structural, never by identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Starter {
    name: Cow<'static, str>,
    image: ImageHandle,
}

impl Starter {
    /// Build a starter from a static name (usable in `static` items)
    pub const fn from_static(name: &'static str, image: ImageHandle) -> Self {
        Self {
            name: Cow::Borrowed(name),
            image,
        }
    }

    /// Build a starter from an owned or borrowed name
    pub fn new(name: impl Into<Cow<'static, str>>, image: ImageHandle) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "starter name must not be empty");
        Self { name, image }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> ImageHandle {
        self.image
    }

    /// Name as shown on the preview card
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

impl fmt::Display for Starter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
