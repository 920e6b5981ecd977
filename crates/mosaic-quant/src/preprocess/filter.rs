//! Median smoothing filter.

use crate::color::{PixelGrid, Rgb8};

/// Per-channel median over a `size × size` window centered on each pixel.
///
/// Pixels outside the image are taken from the nearest edge. Even sizes are
/// rounded up to the next odd size; `size <= 1` returns a copy.
pub fn median_filter(image: &PixelGrid, size: usize) -> PixelGrid {
    if size <= 1 || image.is_empty() {
        return image.clone();
    }
    let half = (size / 2) as isize;
    let (width, height) = (image.width() as isize, image.height() as isize);
    let window = ((2 * half + 1) * (2 * half + 1)) as usize;

    image.map_pixels(|x, y, _| {
        let mut r = Vec::with_capacity(window);
        let mut g = Vec::with_capacity(window);
        let mut b = Vec::with_capacity(window);

        for dy in -half..=half {
            let ny = (y as isize + dy).clamp(0, height - 1) as usize;
            for dx in -half..=half {
                let nx = (x as isize + dx).clamp(0, width - 1) as usize;
                let p = image.get(nx, ny);
                r.push(p.r);
                g.push(p.g);
                b.push(p.b);
            }
        }

        let mid = window / 2;
        Rgb8::new(
            *r.select_nth_unstable(mid).1,
            *g.select_nth_unstable(mid).1,
            *b.select_nth_unstable(mid).1,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_isolated_speck() {
        let mut image = PixelGrid::new(5, 5, Rgb8::new(10, 20, 30));
        image.put(2, 2, Rgb8::new(255, 255, 255));
        let out = median_filter(&image, 3);
        assert!(out.pixels().iter().all(|&p| p == Rgb8::new(10, 20, 30)));
    }

    #[test]
    fn test_channels_are_independent() {
        // Column of three pixels; the median of each channel comes from a
        // different source pixel.
        let image = PixelGrid::from_pixels(
            1,
            3,
            vec![Rgb8::new(0, 9, 5), Rgb8::new(5, 0, 9), Rgb8::new(9, 5, 0)],
        )
        .unwrap();
        let out = median_filter(&image, 3);
        // center window (edge-replicated in x) holds each row three times
        assert_eq!(out.get(0, 1), Rgb8::new(5, 5, 5));
    }

    #[test]
    fn test_edges_replicate() {
        let image = PixelGrid::from_pixels(
            3,
            1,
            vec![Rgb8::new(0, 0, 0), Rgb8::new(100, 100, 100), Rgb8::new(200, 200, 200)],
        )
        .unwrap();
        let out = median_filter(&image, 3);
        // left window: 0,0,100 (x3 rows) -> 0
        assert_eq!(out.get(0, 0), Rgb8::new(0, 0, 0));
        assert_eq!(out.get(1, 0), Rgb8::new(100, 100, 100));
        assert_eq!(out.get(2, 0), Rgb8::new(200, 200, 200));
    }

    #[test]
    fn test_size_one_is_identity() {
        let image = PixelGrid::from_pixels(2, 1, vec![Rgb8::new(1, 2, 3), Rgb8::new(4, 5, 6)])
            .unwrap();
        assert_eq!(median_filter(&image, 1), image);
        assert_eq!(median_filter(&image, 0), image);
    }
}
