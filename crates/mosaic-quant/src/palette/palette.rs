//! Ordered color palette with nearest-color matching.

use super::error::PaletteError;
use crate::color::{PixelGrid, Rgb8};

/// Largest tone count accepted by [`Palette::tone_grid`]; beyond this the
/// grid only repeats values.
const MAX_TONES: u32 = 256;

/// An ordered, non-empty sequence of colors.
///
/// Order matters: every nearest-color search resolves ties in favor of the
/// entry that comes first, so the same palette always produces the same
/// output. Duplicate entries are allowed; snapping an adaptive palette onto
/// a coarse tone grid routinely collapses two entries onto one grid color.
///
/// # Example
///
/// ```
/// use mosaic_quant::{Palette, Rgb8};
///
/// let palette = Palette::new(vec![Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)]).unwrap();
/// let (idx, _) = palette.find_nearest(Rgb8::new(200, 200, 200));
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    /// Create a palette from colors in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyCandidateSet`] if `colors` is empty.
    pub fn new(colors: Vec<Rgb8>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyCandidateSet);
        }
        Ok(Self { colors })
    }

    /// The evenly spaced tone grid: every combination of
    /// `255 * i / tone_number` for `i in 0..tone_number` on each channel,
    /// red-major, then green, then blue.
    ///
    /// `tone_number = 8` yields 512 colors with channel values
    /// 0, 31, 63, 95, 127, 159, 191, 223.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidToneCount`] unless
    /// `1 <= tone_number <= 256`.
    pub fn tone_grid(tone_number: u32) -> Result<Self, PaletteError> {
        if tone_number == 0 || tone_number > MAX_TONES {
            return Err(PaletteError::InvalidToneCount);
        }
        let levels: Vec<u8> = (0..tone_number)
            .map(|i| (255 * i / tone_number) as u8)
            .collect();

        let mut colors = Vec::with_capacity(levels.len().pow(3));
        for &r in &levels {
            for &g in &levels {
                for &b in &levels {
                    colors.push(Rgb8::new(r, g, b));
                }
            }
        }
        Ok(Self { colors })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn color(&self, idx: usize) -> Rgb8 {
        self.colors[idx]
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Index and squared distance of the entry nearest to `color`.
    ///
    /// Linear scan; the first entry with a strictly smaller distance wins,
    /// so among equidistant entries the earliest one is returned.
    #[inline]
    pub fn find_nearest(&self, color: Rgb8) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &candidate) in self.colors.iter().enumerate() {
            let dist = candidate.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }

    /// Replace every entry with its nearest color in `grid`.
    ///
    /// Entry order is preserved; duplicates produced by the snap are kept.
    pub fn snap_to(&self, grid: &Palette) -> Palette {
        let colors = self
            .colors
            .iter()
            .map(|&c| grid.color(grid.find_nearest(c).0))
            .collect();
        Palette { colors }
    }

    /// Plain quantization: replace every pixel with its nearest palette
    /// color, without dithering.
    pub fn map_image(&self, image: &PixelGrid) -> PixelGrid {
        image.map_pixels(|_, _, c| self.color(self.find_nearest(c).0))
    }
}

/// Nearest color to `color` among `candidates`.
///
/// Same tie-break as [`Palette::find_nearest`]: first strictly smaller
/// distance wins.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyCandidateSet`] if `candidates` is empty.
pub fn nearest(color: Rgb8, candidates: &[Rgb8]) -> Result<Rgb8, PaletteError> {
    let mut best: Option<(Rgb8, u32)> = None;
    for &candidate in candidates {
        let dist = candidate.distance_squared(color);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(c, _)| c).ok_or(PaletteError::EmptyCandidateSet)
}

/// Apply [`nearest()`] to each target independently.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyCandidateSet`] if `candidates` is empty,
/// even when `targets` is empty too.
pub fn nearest_many(targets: &[Rgb8], candidates: &[Rgb8]) -> Result<Vec<Rgb8>, PaletteError> {
    if candidates.is_empty() {
        return Err(PaletteError::EmptyCandidateSet);
    }
    targets.iter().map(|&t| nearest(t, candidates)).collect()
}
