//! Pixelizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Pixelizer`] wraps the per-frame pipeline with fluent configuration.

use crate::color::PixelGrid;
use crate::dither::DitherTileSet;
use crate::palette::{Palette, PaletteError};
use crate::preprocess::{
    enhance_contrast, enhance_saturation, median_filter, resize_area, upscale_nearest,
    PreprocessOptions,
};
use crate::quantize::MedianCut;

use super::error::PixelizeError;

/// Largest output side in pixels; GIF stores dimensions as 16-bit values.
pub const MAX_OUTPUT_SIDE: usize = u16::MAX as usize;

/// How the enhanced low-resolution image is mapped onto the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Nearest two-color tile, rendered as a checkerboard (default).
    #[default]
    Dither,
    /// Nearest single palette color, no dithering.
    Flat,
}

/// Result of [`Pixelizer::pixelize_detailed`]: the output frame plus the
/// intermediate palettes, for logging and inspection.
#[derive(Debug, Clone)]
pub struct PixelizedFrame {
    /// Finished, upscaled frame.
    pub image: PixelGrid,
    /// Median-cut palette of the downsampled frame.
    pub base_palette: Palette,
    /// `base_palette` snapped onto the tone grid, in the same order.
    pub snapped_palette: Palette,
    /// Number of dither tiles built (`None` in [`RenderMode::Flat`]).
    pub tile_count: Option<usize>,
}

/// Per-frame pixel-art pipeline.
///
/// # Pipeline
///
/// ```text
/// frame
///   |  median filter (median_size)
///   v
/// smoothed
///   |  area downsample to (w / pixel_size, h / pixel_size)
///   v
/// small ---------------------------+
///   |  saturation, contrast        |  median-cut (color_number)
///   v                              v
/// enhanced                    base palette
///   |                              |  snap to tone grid (tone_number)
///   |                              v
///   |                         snapped palette
///   |                              |  all pairs -> dither tiles
///   v                              v
/// nearest tile per pixel, rendered by (x + y) parity
///   |  nearest-neighbour upscale (upscale)
///   v
/// output frame
/// ```
///
/// Configuration methods consume and return `self`;
/// [`pixelize()`](Self::pixelize) takes `&self`, so one `Pixelizer` serves
/// every frame of a video and can be shared across threads.
///
/// # Example
///
/// ```
/// use mosaic_quant::{PixelGrid, Pixelizer, Rgb8};
///
/// let frame = PixelGrid::new(40, 40, Rgb8::new(255, 0, 0));
/// let out = Pixelizer::new().pixelize(&frame).unwrap();
///
/// // 40 / 20 = 2 cells, upscaled x5
/// assert_eq!((out.width(), out.height()), (10, 10));
/// // pure red snaps to the brightest red on the 8-level tone grid
/// assert!(out.pixels().iter().all(|&p| p == Rgb8::new(223, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pixelizer {
    pixel_size: usize,
    color_number: usize,
    tone_number: u32,
    /// Built once per `tone_number`; `None` when the count is out of range.
    tone_grid: Option<Palette>,
    upscale: usize,
    preprocess: PreprocessOptions,
    mode: RenderMode,
}

impl Default for Pixelizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pixelizer {
    /// Create a pixelizer with the default settings: pixel size 20,
    /// 16 colors, 8 tones per channel, x5 upscale, 3x3 median filter,
    /// saturation and contrast 2.0, dithered rendering.
    pub fn new() -> Self {
        Self {
            pixel_size: 20,
            color_number: 16,
            tone_number: 8,
            tone_grid: Palette::tone_grid(8).ok(),
            upscale: 5,
            preprocess: PreprocessOptions::default(),
            mode: RenderMode::Dither,
        }
    }

    /// Edge length of one mosaic cell in source pixels.
    #[inline]
    pub fn pixel_size(mut self, size: usize) -> Self {
        self.pixel_size = size;
        self
    }

    /// Target size of the adaptive palette.
    #[inline]
    pub fn color_number(mut self, colors: usize) -> Self {
        self.color_number = colors;
        self
    }

    /// Tone grid levels per channel.
    #[inline]
    pub fn tone_number(mut self, tones: u32) -> Self {
        self.tone_number = tones;
        self.tone_grid = Palette::tone_grid(tones).ok();
        self
    }

    /// Integer upscale factor applied to the mosaic.
    #[inline]
    pub fn upscale(mut self, factor: usize) -> Self {
        self.upscale = factor;
        self
    }

    #[inline]
    pub fn median_size(mut self, size: usize) -> Self {
        self.preprocess = self.preprocess.median_size(size);
        self
    }

    #[inline]
    pub fn saturation(mut self, factor: f32) -> Self {
        self.preprocess = self.preprocess.saturation(factor);
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.preprocess = self.preprocess.contrast(factor);
        self
    }

    /// Replace all preprocessing options at once.
    #[inline]
    pub fn preprocess(mut self, options: PreprocessOptions) -> Self {
        self.preprocess = options;
        self
    }

    #[inline]
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Size of the mosaic (before upscaling) for a `width × height` frame.
    pub fn mosaic_size(&self, width: usize, height: usize) -> (usize, usize) {
        match self.pixel_size {
            0 => (0, 0),
            ps => (width / ps, height / ps),
        }
    }

    /// Size of the output frame for a `width × height` input.
    ///
    /// Saturates at `usize::MAX`; [`pixelize()`](Self::pixelize) rejects
    /// anything above [`MAX_OUTPUT_SIDE`].
    pub fn output_size(&self, width: usize, height: usize) -> (usize, usize) {
        let (w, h) = self.mosaic_size(width, height);
        (w.saturating_mul(self.upscale), h.saturating_mul(self.upscale))
    }

    /// Run the pipeline on one frame.
    ///
    /// # Errors
    ///
    /// - [`PixelizeError::InvalidOption`] if pixel size, tone count or
    ///   upscale factor is zero
    /// - [`PixelizeError::InvalidFrame`] if the frame is empty or smaller
    ///   than one mosaic cell in either dimension
    /// - [`PixelizeError::OutputTooLarge`] if the upscaled frame would exceed
    ///   [`MAX_OUTPUT_SIDE`] on either side
    /// - [`PixelizeError::Palette`] if the tone count exceeds 256
    pub fn pixelize(&self, frame: &PixelGrid) -> Result<PixelGrid, PixelizeError> {
        self.pixelize_detailed(frame).map(|result| result.image)
    }

    /// Like [`pixelize()`](Self::pixelize), also returning the palettes.
    pub fn pixelize_detailed(&self, frame: &PixelGrid) -> Result<PixelizedFrame, PixelizeError> {
        let tone_grid = self.validate()?;

        let (width, height) = self.mosaic_size(frame.width(), frame.height());
        if frame.is_empty() || width == 0 || height == 0 {
            return Err(PixelizeError::InvalidFrame {
                width: frame.width(),
                height: frame.height(),
                pixel_size: self.pixel_size,
            });
        }
        let (out_width, out_height) = self.output_size(frame.width(), frame.height());
        if out_width > MAX_OUTPUT_SIDE || out_height > MAX_OUTPUT_SIDE {
            return Err(PixelizeError::OutputTooLarge {
                width,
                height,
                upscale: self.upscale,
            });
        }

        let smoothed = median_filter(frame, self.preprocess.median_size);
        let small = resize_area(&smoothed, width, height);
        let enhanced = enhance_contrast(
            &enhance_saturation(&small, self.preprocess.saturation),
            self.preprocess.contrast,
        );

        // Palette comes from the un-enhanced mosaic.
        let base_palette = MedianCut::new(self.color_number).palette(&small)?;
        let snapped_palette = base_palette.snap_to(tone_grid);

        let (mapped, tile_count) = match self.mode {
            RenderMode::Dither => {
                let tiles = DitherTileSet::new(&snapped_palette);
                (tiles.map_image(&enhanced), Some(tiles.len()))
            }
            RenderMode::Flat => (snapped_palette.map_image(&enhanced), None),
        };

        Ok(PixelizedFrame {
            image: upscale_nearest(&mapped, self.upscale),
            base_palette,
            snapped_palette,
            tile_count,
        })
    }

    /// Check the settings before any pixel work; yields the tone grid.
    fn validate(&self) -> Result<&Palette, PixelizeError> {
        if self.pixel_size == 0 {
            return Err(PixelizeError::InvalidOption("pixel_size"));
        }
        if self.tone_number == 0 {
            return Err(PixelizeError::InvalidOption("tone_number"));
        }
        if self.upscale == 0 {
            return Err(PixelizeError::InvalidOption("upscale"));
        }
        self.tone_grid
            .as_ref()
            .ok_or(PixelizeError::Palette(PaletteError::InvalidToneCount))
    }
}
