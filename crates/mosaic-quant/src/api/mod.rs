//! Public API for the mosaic-quant crate.
//!
//! This module provides the high-level API: the [`Pixelizer`] builder that
//! runs the whole per-frame pipeline, and the [`PixelizeError`] unified
//! error type.

mod builder;
mod error;

pub use builder::{PixelizedFrame, Pixelizer, RenderMode, MAX_OUTPUT_SIDE};
pub use error::PixelizeError;
