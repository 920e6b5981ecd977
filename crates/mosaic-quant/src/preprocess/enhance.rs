//! Saturation and contrast enhancement.
//!
//! Both operations blend each pixel away from (or toward) a "degenerate"
//! reference color: `out = reference + factor * (pixel - reference)`.
//! Saturation uses the pixel's own luma as reference, contrast the mean
//! luma of the whole image. Results are clamped to 0..=255 and truncated.

use crate::color::{PixelGrid, Rgb8};

/// ITU-R 601-2 luma, `(299 r + 587 g + 114 b) / 1000` in 16.16 fixed point
/// with rounding.
#[inline]
pub fn luma(c: Rgb8) -> u8 {
    ((c.r as u32 * 19595 + c.g as u32 * 38470 + c.b as u32 * 7471 + 0x8000) >> 16) as u8
}

#[inline]
fn blend_channel(reference: u8, value: u8, factor: f32) -> u8 {
    let v = reference as f32 + factor * (value as f32 - reference as f32);
    v.clamp(0.0, 255.0) as u8
}

#[inline]
fn blend(reference: Rgb8, value: Rgb8, factor: f32) -> Rgb8 {
    Rgb8::new(
        blend_channel(reference.r, value.r, factor),
        blend_channel(reference.g, value.g, factor),
        blend_channel(reference.b, value.b, factor),
    )
}

/// Scale each pixel's distance from its gray (luma) value by `factor`.
pub fn enhance_saturation(image: &PixelGrid, factor: f32) -> PixelGrid {
    if factor == 1.0 {
        return image.clone();
    }
    image.map_pixels(|_, _, c| {
        let l = luma(c);
        blend(Rgb8::new(l, l, l), c, factor)
    })
}

/// Scale each pixel's distance from the image's mean luma by `factor`.
pub fn enhance_contrast(image: &PixelGrid, factor: f32) -> PixelGrid {
    if factor == 1.0 || image.is_empty() {
        return image.clone();
    }
    let sum: u64 = image.pixels().iter().map(|&c| luma(c) as u64).sum();
    let mean = (sum as f64 / image.pixels().len() as f64 + 0.5) as u8;
    let reference = Rgb8::new(mean, mean, mean);
    image.map_pixels(|_, _, c| blend(reference, c, factor))
}
