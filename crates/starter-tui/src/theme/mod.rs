//! Centralized theme system.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions

pub mod palette;
pub mod styles;
