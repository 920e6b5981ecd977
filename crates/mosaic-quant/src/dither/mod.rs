//! Two-color checkerboard dithering.
//!
//! A [`DitherTile`] pairs two palette colors and renders them in a
//! checkerboard: `color1` where `x + y` is even, `color2` where it is odd.
//! At viewing distance the pattern reads as the average of the pair, which
//! lets a 16-color palette suggest far more shades than it contains.
//!
//! [`DitherTileSet`] holds every unordered pair of a palette (including each
//! color paired with itself) and maps an image by sending each pixel to the
//! tile whose average is nearest to it.
//!
//! ```text
//!   x: 0 1 2 3
//! y 0: A B A B
//!   1: B A B A      tile (A, B)
//!   2: A B A B
//! ```

mod tile;
mod tile_set;

pub use tile::DitherTile;
pub use tile_set::DitherTileSet;
