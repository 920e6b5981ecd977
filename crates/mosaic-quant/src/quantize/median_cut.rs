//! Median-cut color partitioning.

use super::histogram::ColorHistogram;
use crate::color::{ColorCube, PixelGrid};
use crate::palette::{Palette, PaletteError};

/// Median-cut palette extraction.
///
/// Starting from the bounding cube of the image's colors, repeatedly takes
/// the most populous cube, splits it in half along its longest axis, and
/// keeps the halves that still contain pixels, until `target` cubes exist.
/// Each final cube contributes the floor average of its pixels.
///
/// Fewer than `target` colors come back when the image runs out of
/// distinct colors: a cube covering a single color cannot be split, and once
/// no splittable cube is left the partition is final. A solid image
/// therefore always yields exactly one color.
///
/// Tie-breaks:
/// - among equally populous cubes, the earliest in the working list wins;
/// - among equally long axes, red beats green beats blue.
///
/// # Example
///
/// ```
/// use mosaic_quant::{MedianCut, PixelGrid, Rgb8};
///
/// let image = PixelGrid::from_pixels(
///     2,
///     1,
///     vec![Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)],
/// )
/// .unwrap();
/// let palette = MedianCut::new(16).palette(&image).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedianCut {
    target: usize,
}

impl MedianCut {
    /// Create a partitioner aiming for `target` colors (0 is treated as 1).
    pub fn new(target: usize) -> Self {
        Self {
            target: target.max(1),
        }
    }

    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Extract a palette of at most `target` colors from `image`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyCandidateSet`] if the image has no
    /// pixels.
    pub fn palette(&self, image: &PixelGrid) -> Result<Palette, PaletteError> {
        self.palette_from_histogram(&ColorHistogram::from_image(image))
    }

    /// Same as [`palette()`](Self::palette) for a precomputed histogram.
    pub fn palette_from_histogram(&self, hist: &ColorHistogram) -> Result<Palette, PaletteError> {
        let cubes = self.partition(hist)?;
        let colors = cubes
            .iter()
            .map(|cube| hist.average(cube).ok_or(PaletteError::EmptyCandidateSet))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(colors)
    }

    /// The final cubes, in working-list order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyCandidateSet`] for an empty histogram.
    pub fn partition(&self, hist: &ColorHistogram) -> Result<Vec<ColorCube>, PaletteError> {
        let initial = hist.bounds().ok_or(PaletteError::EmptyCandidateSet)?;
        let mut cubes = vec![(initial, hist.population(&initial))];

        while cubes.len() < self.target {
            let Some(idx) = most_populous_splittable(&cubes) else {
                break;
            };
            let (cube, _) = cubes.remove(idx);
            let (lower, upper) = cube.split();

            for half in std::iter::once(lower).chain(upper) {
                let count = hist.population(&half);
                if count > 0 {
                    cubes.push((half, count));
                }
            }
        }

        Ok(cubes.into_iter().map(|(cube, _)| cube).collect())
    }
}

/// Index of the cube with the largest population among those that can
/// still be split; first strictly greater count wins.
fn most_populous_splittable(cubes: &[(ColorCube, u64)]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, (cube, count)) in cubes.iter().enumerate() {
        if !cube.is_splittable() {
            continue;
        }
        if best.map_or(true, |(_, c)| *count > c) {
            best = Some((i, *count));
        }
    }
    best.map(|(i, _)| i)
}
