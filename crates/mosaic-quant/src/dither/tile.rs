//! A single two-color dither tile.

use crate::color::Rgb8;

/// A pair of colors rendered as a checkerboard.
///
/// The pair is conceptually unordered but the slots are fixed: `color1`
/// occupies even-parity pixels, `color2` odd-parity pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherTile {
    color1: Rgb8,
    color2: Rgb8,
    average: Rgb8,
}

impl DitherTile {
    pub fn new(color1: Rgb8, color2: Rgb8) -> Self {
        Self {
            color1,
            color2,
            average: color1.average(color2),
        }
    }

    #[inline]
    pub fn color1(&self) -> Rgb8 {
        self.color1
    }

    #[inline]
    pub fn color2(&self) -> Rgb8 {
        self.color2
    }

    /// Componentwise floor average of the two colors; the color this tile
    /// stands for when matching pixels.
    #[inline]
    pub fn average(&self) -> Rgb8 {
        self.average
    }

    /// True if both slots hold the same color.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.color1 == self.color2
    }

    /// Rendered color at pixel `(x, y)`: `color1` on even `x + y`,
    /// `color2` on odd.
    #[inline]
    pub fn color_at(&self, x: usize, y: usize) -> Rgb8 {
        if (x + y) % 2 == 0 {
            self.color1
        } else {
            self.color2
        }
    }
}
