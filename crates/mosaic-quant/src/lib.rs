//! mosaic-quant: Median-cut palettes and checkerboard dithering for
//! pixel-art frames
//!
//! This library turns a single video frame into a low-resolution,
//! limited-palette mosaic. It has no I/O; frames go in and come out as
//! [`PixelGrid`]s.
//!
//! # Quick Start
//!
//! The [`Pixelizer`] builder is the primary entry point:
//!
//! ```
//! use mosaic_quant::{PixelGrid, Pixelizer, Rgb8};
//!
//! let frame = PixelGrid::new(64, 48, Rgb8::new(40, 120, 200));
//! let pixelizer = Pixelizer::new().pixel_size(8).color_number(8);
//! let out = pixelizer.pixelize(&frame).unwrap();
//!
//! assert_eq!(out.width(), 64 / 8 * 5);
//! assert_eq!(out.height(), 48 / 8 * 5);
//! ```
//!
//! # Building Blocks
//!
//! Each stage is usable on its own:
//!
//! - [`MedianCut`]: adaptive palette from an image (color-cube splitting)
//! - [`Palette`]: ordered colors with nearest-color matching and the fixed
//!   tone grid
//! - [`DitherTileSet`]: all two-color pairs of a palette, rendered as a
//!   checkerboard
//! - [`preprocess`]: median filter, area resize, enhancement and upscale
//!
//! ```
//! use mosaic_quant::{DitherTileSet, MedianCut, Palette, PixelGrid, Rgb8};
//!
//! let image = PixelGrid::from_pixels(
//!     2,
//!     2,
//!     vec![
//!         Rgb8::new(255, 0, 0),
//!         Rgb8::new(0, 0, 255),
//!         Rgb8::new(0, 0, 255),
//!         Rgb8::new(255, 0, 0),
//!     ],
//! )
//! .unwrap();
//!
//! let palette = MedianCut::new(16).palette(&image).unwrap();
//! assert_eq!(palette.len(), 2);
//!
//! let snapped = palette.snap_to(&Palette::tone_grid(8).unwrap());
//! let tiles = DitherTileSet::new(&snapped);
//! assert_eq!(tiles.len(), 3);
//!
//! let out = tiles.map_image(&image);
//! assert_eq!(out.get(0, 0), Rgb8::new(223, 0, 0));
//! ```
//!
//! # Matching
//!
//! All color comparisons use squared Euclidean distance on the raw 8-bit
//! channels. Every nearest search is a linear scan where the first
//! candidate with a strictly smaller distance wins, so results depend on
//! candidate order and nothing else. Palettes are small (at most a few
//! hundred entries for the tone grid, 136 tiles for 16 colors) and the
//! images are post-downsample, so linear scans are cheap.

pub mod api;
pub mod color;
pub mod dither;
pub mod palette;
pub mod preprocess;
pub mod quantize;


pub use api::{PixelizeError, PixelizedFrame, Pixelizer, RenderMode, MAX_OUTPUT_SIDE};
pub use color::{Axis, ColorCube, PixelGrid, Rgb8};
pub use dither::{DitherTile, DitherTileSet};
pub use palette::{nearest, nearest_many, Palette, PaletteError};
pub use preprocess::PreprocessOptions;
pub use quantize::{ColorHistogram, MedianCut};
