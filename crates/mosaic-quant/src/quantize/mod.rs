//! Adaptive palette extraction (median-cut).
//!
//! [`MedianCut`] partitions the colors of an image into population-weighted
//! [`ColorCube`](crate::ColorCube)s and reports one average color per cube.
//! Population counts come from a [`ColorHistogram`] built once per image, so
//! each split costs a pass over the distinct colors instead of every pixel.

mod histogram;
mod median_cut;

pub use histogram::ColorHistogram;
pub use median_cut::MedianCut;
