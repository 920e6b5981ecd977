//! Color types and pixel storage
//!
//! This module provides the value types every other stage works on:
//!
//! - [`Rgb8`]: an 8-bit RGB triple with distance and averaging arithmetic
//! - [`ColorCube`]: an axis-aligned box in RGB space, the unit of median-cut
//! - [`PixelGrid`]: a row-major image of [`Rgb8`] pixels
//!
//! # Example
//!
//! ```
//! use mosaic_quant::{ColorCube, Rgb8};
//!
//! let cube = ColorCube::bounding(&[Rgb8::new(0, 10, 20), Rgb8::new(40, 10, 0)]).unwrap();
//! assert!(cube.contains(Rgb8::new(20, 10, 10)));
//! assert!(!cube.contains(Rgb8::new(20, 11, 10)));
//! ```

mod cube;
mod grid;
mod rgb;

pub use cube::ColorCube;
pub use grid::PixelGrid;
pub use rgb::{Axis, Rgb8};
