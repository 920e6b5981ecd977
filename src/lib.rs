//! Pixelizer - video to pixel-art GIF
//!
//! Samples frames from a video, renders each one as a dithered low-color
//! mosaic with `mosaic-quant`, and writes the result as an animated GIF.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
