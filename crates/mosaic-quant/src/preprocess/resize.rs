//! Area downsampling and nearest-neighbour upscaling via `image::imageops`.

use image::imageops::{self, FilterType};

use crate::color::{PixelGrid, Rgb8};

/// Resize by box (area) averaging.
///
/// Meant for shrinking: output pixel `(x, y)` averages the source block
/// `[x*W/w, (x+1)*W/w) × [y*H/h, (y+1)*H/h)`, rounded to nearest
/// (`imageops::thumbnail`). A zero target dimension yields an empty grid.
pub fn resize_area(image: &PixelGrid, new_width: usize, new_height: usize) -> PixelGrid {
    if new_width == 0 || new_height == 0 || image.is_empty() {
        return PixelGrid::new(new_width, new_height, Rgb8::default());
    }
    if image.width() == new_width && image.height() == new_height {
        return image.clone();
    }

    let small = imageops::thumbnail(&image.to_rgb_image(), new_width as u32, new_height as u32);
    PixelGrid::from_rgb_image(&small)
}

/// Integer nearest-neighbour upscale: every pixel becomes a
/// `factor × factor` block. No smoothing, so mosaic edges stay hard.
///
/// # Panics
///
/// Panics if the upscaled size does not fit in `u32`. Callers bound it
/// first (see [`MAX_OUTPUT_SIDE`](crate::MAX_OUTPUT_SIDE)).
pub fn upscale_nearest(image: &PixelGrid, factor: usize) -> PixelGrid {
    if factor == 1 || image.is_empty() {
        return image.clone();
    }
    let side = |len: usize| {
        len.checked_mul(factor)
            .and_then(|v| u32::try_from(v).ok())
    };
    let (Some(width), Some(height)) = (side(image.width()), side(image.height())) else {
        panic!(
            "upscaling {}x{} by {factor} overflows the image size",
            image.width(),
            image.height()
        );
    };

    let big = imageops::resize(&image.to_rgb_image(), width, height, FilterType::Nearest);
    PixelGrid::from_rgb_image(&big)
}
