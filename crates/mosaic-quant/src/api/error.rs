//! Unified error type for the mosaic-quant public API.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the mosaic-quant public API.
///
/// # Example
///
/// ```
/// use mosaic_quant::{PixelGrid, Pixelizer, PixelizeError, Rgb8};
///
/// // 10x10 frame with 20px mosaic cells downsamples to nothing
/// let frame = PixelGrid::new(10, 10, Rgb8::new(0, 0, 0));
/// let err = Pixelizer::new().pixelize(&frame).unwrap_err();
/// assert!(matches!(err, PixelizeError::InvalidFrame { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PixelizeError {
    /// The frame has no pixels, or shrinks to zero width or height at the
    /// configured pixel size.
    InvalidFrame {
        /// Input frame width
        width: usize,
        /// Input frame height
        height: usize,
        /// Mosaic cell size the frame was divided by
        pixel_size: usize,
    },
    /// A pipeline parameter that must be positive was zero
    InvalidOption(&'static str),
    /// The upscaled frame would exceed
    /// [`MAX_OUTPUT_SIDE`](crate::api::MAX_OUTPUT_SIDE) on a side
    OutputTooLarge {
        /// Mosaic width before upscaling
        width: usize,
        /// Mosaic height before upscaling
        height: usize,
        upscale: usize,
    },
    /// Palette extraction or matching failed
    Palette(PaletteError),
}

impl fmt::Display for PixelizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelizeError::InvalidFrame {
                width,
                height,
                pixel_size,
            } => write!(
                f,
                "invalid frame: {}x{} is empty at pixel size {}",
                width, height, pixel_size
            ),
            PixelizeError::InvalidOption(name) => {
                write!(f, "invalid option: {} must be at least 1", name)
            }
            PixelizeError::OutputTooLarge {
                width,
                height,
                upscale,
            } => write!(
                f,
                "output too large: {}x{} mosaic at upscale {} exceeds {} pixels per side",
                width,
                height,
                upscale,
                crate::api::MAX_OUTPUT_SIDE
            ),
            PixelizeError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for PixelizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixelizeError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for PixelizeError {
    fn from(err: PaletteError) -> Self {
        PixelizeError::Palette(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_invalid_frame() {
        let err = PixelizeError::InvalidFrame {
            width: 10,
            height: 0,
            pixel_size: 20,
        };
        assert_eq!(
            err.to_string(),
            "invalid frame: 10x0 is empty at pixel size 20"
        );
    }

    #[test]
    fn test_display_invalid_option() {
        assert_eq!(
            PixelizeError::InvalidOption("upscale").to_string(),
            "invalid option: upscale must be at least 1"
        );
    }

    #[test]
    fn test_display_output_too_large() {
        let err = PixelizeError::OutputTooLarge {
            width: 96,
            height: 54,
            upscale: 1000,
        };
        assert_eq!(
            err.to_string(),
            "output too large: 96x54 mosaic at upscale 1000 exceeds 65535 pixels per side"
        );
    }

    #[test]
    fn test_from_palette_error_keeps_source() {
        let err: PixelizeError = PaletteError::EmptyCandidateSet.into();
        assert_eq!(
            err.to_string(),
            "palette error: no candidate colors to match against"
        );
        assert!(err.source().is_some());
    }
}
