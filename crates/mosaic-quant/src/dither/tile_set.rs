//! The set of all dither tiles for a palette.

use crate::color::{PixelGrid, Rgb8};
use crate::palette::Palette;

use super::tile::DitherTile;

/// Every unordered pair of palette colors as a [`DitherTile`].
///
/// For a palette of `k` colors the set holds `k * (k + 1) / 2` tiles:
/// pairs `(i, j)` with `i <= j`, ordered by `i` then `j`. This order is the
/// tie-break when two tiles have equally near averages.
///
/// # Example
///
/// ```
/// use mosaic_quant::{DitherTileSet, Palette, PixelGrid, Rgb8};
///
/// let black = Rgb8::new(0, 0, 0);
/// let white = Rgb8::new(254, 254, 254);
/// let tiles = DitherTileSet::new(&Palette::new(vec![black, white]).unwrap());
/// assert_eq!(tiles.len(), 3);
///
/// // mid gray is nearest to the black/white tile's average
/// let gray = PixelGrid::new(2, 2, Rgb8::new(127, 127, 127));
/// let out = tiles.map_image(&gray);
/// assert_eq!(out.get(0, 0), black);
/// assert_eq!(out.get(1, 0), white);
/// ```
#[derive(Debug, Clone)]
pub struct DitherTileSet {
    tiles: Vec<DitherTile>,
}

impl DitherTileSet {
    /// Build all combinations with repetition of two palette colors.
    pub fn new(palette: &Palette) -> Self {
        let colors = palette.colors();
        let k = colors.len();
        let mut tiles = Vec::with_capacity(k * (k + 1) / 2);
        for i in 0..k {
            for j in i..k {
                tiles.push(DitherTile::new(colors[i], colors[j]));
            }
        }
        Self { tiles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Never true for a set built from a [`Palette`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[DitherTile] {
        &self.tiles
    }

    /// Tile whose average is nearest to `color`; first strictly smaller
    /// distance wins.
    pub fn nearest_tile(&self, color: Rgb8) -> &DitherTile {
        let mut best = &self.tiles[0];
        let mut best_dist = u32::MAX;
        for tile in &self.tiles {
            let dist = tile.average().distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best = tile;
                if dist == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Replace every pixel with its nearest tile rendered at the pixel's
    /// own coordinates.
    ///
    /// Each output pixel depends only on the matching input pixel and its
    /// position, so rows are processed in parallel.
    pub fn map_image(&self, image: &PixelGrid) -> PixelGrid {
        image.map_pixels(|x, y, c| self.nearest_tile(c).color_at(x, y))
    }
}
