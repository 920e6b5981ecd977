//! Distinct-color histogram.

use std::collections::HashMap;

use crate::color::{ColorCube, PixelGrid, Rgb8};

/// Every distinct color of an image with its pixel count.
///
/// Entries are sorted by color so iteration order never depends on hash
/// state. Population and average queries weight each entry by its count,
/// which gives the same answer as scanning every pixel.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    entries: Vec<(Rgb8, u64)>,
    total: u64,
}

impl ColorHistogram {
    pub fn from_image(image: &PixelGrid) -> Self {
        Self::from_colors(image.pixels().iter().copied())
    }

    pub fn from_colors<I: IntoIterator<Item = Rgb8>>(colors: I) -> Self {
        let mut counts: HashMap<Rgb8, u64> = HashMap::new();
        for c in colors {
            *counts.entry(c).or_insert(0) += 1;
        }
        let mut entries: Vec<(Rgb8, u64)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        let total = entries.iter().map(|&(_, n)| n).sum();
        Self { entries, total }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total number of pixels counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Rgb8, u64)] {
        &self.entries
    }

    /// Bounding cube of all colors present, or `None` when empty.
    pub fn bounds(&self) -> Option<ColorCube> {
        ColorCube::bounding_iter(self.entries.iter().map(|&(c, _)| c))
    }

    /// Number of pixels whose color lies inside `cube`.
    pub fn population(&self, cube: &ColorCube) -> u64 {
        self.entries
            .iter()
            .filter(|(c, _)| cube.contains(*c))
            .map(|&(_, n)| n)
            .sum()
    }

    /// Floor average of all pixels inside `cube`, or `None` if it holds none.
    pub fn average(&self, cube: &ColorCube) -> Option<Rgb8> {
        let (mut r, mut g, mut b, mut n) = (0u64, 0u64, 0u64, 0u64);
        for &(c, count) in self.entries.iter().filter(|(c, _)| cube.contains(*c)) {
            r += c.r as u64 * count;
            g += c.g as u64 * count;
            b += c.b as u64 * count;
            n += count;
        }
        if n == 0 {
            return None;
        }
        Some(Rgb8::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
    }
}
