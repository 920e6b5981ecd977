//! Palette types and nearest-color matching
//!
//! This module provides the [`Palette`] type, the free-standing
//! [`nearest()`] / [`nearest_many()`] matchers, and the error type shared by
//! everything that needs a non-empty candidate set.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{nearest, nearest_many, Palette};
