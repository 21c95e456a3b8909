//! # starter-core - Core Domain Types
//!
//! Foundation crate for Starter Select. Provides the selectable entity type,
//! the fixed starter catalog, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Starter`] - One selectable creature (name + image handle)
//! - [`ImageHandle`] - Opaque reference to a visual asset
//!
//! ### Catalog (`catalog`)
//! - [`catalog()`] - The ordered, immutable list of three starters
//! - [`default_starter()`] - The first catalog entry (initial selection)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use starter_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Starter Select crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{catalog, contains, default_starter, position_of, CATALOG_LEN, STARTERS};
pub use error::{Error, Result, ResultExt};
pub use types::{ImageHandle, Starter};
