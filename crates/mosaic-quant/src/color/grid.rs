//! Row-major pixel storage.

use image::{Rgb, RgbImage};
use rayon::prelude::*;

use super::rgb::Rgb8;

/// A width × height image of [`Rgb8`] pixels in row-major order.
///
/// Pipeline stages never mutate a grid they were handed; each stage
/// returns a fresh grid (see [`map_pixels()`](PixelGrid::map_pixels)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb8>,
}

impl PixelGrid {
    /// Create a grid filled with a single color.
    pub fn new(width: usize, height: usize, fill: Rgb8) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb8,
    {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap existing row-major pixels.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb8>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// Returns `None` if `bytes.len() != width * height * 3`.
    pub fn from_raw_rgb(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width * height * 3 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy an `image` RGB buffer into a grid.
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        Self::from_fn(image.width() as usize, image.height() as usize, |x, y| {
            Rgb8::from_bytes(image.get_pixel(x as u32, y as u32).0)
        })
    }

    /// Copy the grid into an `image` RGB buffer.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgb(self.get(x as usize, y as usize).to_bytes())
        })
    }

    /// Packed `[R, G, B, ...]` bytes, row-major.
    pub fn to_raw_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the grid has no pixels (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgb8> {
        self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, color: Rgb8) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// Produce a new grid where each pixel is `f(x, y, original)`.
    ///
    /// `f` sees only its own pixel, so rows are evaluated in parallel; the
    /// result does not depend on evaluation order.
    pub fn map_pixels<F>(&self, f: F) -> PixelGrid
    where
        F: Fn(usize, usize, Rgb8) -> Rgb8 + Sync,
    {
        let width = self.width;
        let mut out = vec![Rgb8::default(); self.pixels.len()];
        if width > 0 {
            out.par_chunks_mut(width)
                .zip(self.pixels.par_chunks(width))
                .enumerate()
                .for_each(|(y, (dst, src))| {
                    for (x, (d, &s)) in dst.iter_mut().zip(src).enumerate() {
                        *d = f(x, y, s);
                    }
                });
        }
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: out,
        }
    }
}
