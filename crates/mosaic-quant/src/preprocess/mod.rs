//! Image preprocessing around the quantizer.
//!
//! These are the plain image operations the pixelizer wraps around the
//! palette and dither stages:
//!
//! 1. **Median filter** - suppresses sensor noise before downsampling
//! 2. **Area resize** - box-averaging downsample to the mosaic resolution
//! 3. **Saturation boost** - blend away from per-pixel luma
//! 4. **Contrast boost** - blend away from the image's mean luma
//! 5. **Nearest upscale** - integer block replication, keeps hard edges
//!
//! Every function takes a [`PixelGrid`](crate::PixelGrid) by reference and
//! returns a new one.
//!
//! # Processing Order
//!
//! The palette is extracted from the downsampled image *before*
//! enhancement, while the enhanced copy is what gets dithered. Boosting
//! saturation and contrast on the dithered copy pushes pixels toward the
//! palette extremes, which gives the characteristic punchy look.
//!
//! # Example
//!
//! ```
//! use mosaic_quant::{PixelGrid, Rgb8};
//! use mosaic_quant::preprocess::{median_filter, resize_area, upscale_nearest};
//!
//! let frame = PixelGrid::new(40, 40, Rgb8::new(255, 0, 0));
//! let small = resize_area(&median_filter(&frame, 3), 2, 2);
//! assert_eq!(small.get(1, 1), Rgb8::new(255, 0, 0));
//!
//! let big = upscale_nearest(&small, 5);
//! assert_eq!((big.width(), big.height()), (10, 10));
//! ```

mod enhance;
mod filter;
mod options;
mod resize;

pub use enhance::{enhance_contrast, enhance_saturation, luma};
pub use filter::median_filter;
pub use options::PreprocessOptions;
pub use resize::{resize_area, upscale_nearest};
