//! Axis-aligned boxes in RGB space.

use super::rgb::{Axis, Rgb8};

/// An axis-aligned box in RGB space, bounded inclusively by two corners.
///
/// Invariant: `min <= max` on every axis. [`ColorCube::new`] refuses
/// inverted corners, so a `ColorCube` value is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCube {
    min: Rgb8,
    max: Rgb8,
}

impl ColorCube {
    /// Create a cube from its corners, or `None` if `min > max` on any axis.
    pub fn new(min: Rgb8, max: Rgb8) -> Option<Self> {
        let ordered = Axis::ALL
            .iter()
            .all(|&axis| min.channel(axis) <= max.channel(axis));
        ordered.then_some(Self { min, max })
    }

    /// Smallest cube containing every color in `colors`.
    ///
    /// Returns `None` for an empty slice.
    pub fn bounding(colors: &[Rgb8]) -> Option<Self> {
        Self::bounding_iter(colors.iter().copied())
    }

    /// Like [`bounding()`](Self::bounding) over any color iterator.
    pub fn bounding_iter<I: IntoIterator<Item = Rgb8>>(colors: I) -> Option<Self> {
        let mut iter = colors.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), c| {
            (
                Rgb8::new(min.r.min(c.r), min.g.min(c.g), min.b.min(c.b)),
                Rgb8::new(max.r.max(c.r), max.g.max(c.g), max.b.max(c.b)),
            )
        });
        Some(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> Rgb8 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Rgb8 {
        self.max
    }

    /// True if `color` lies within the bounds on all axes (inclusive).
    #[inline]
    pub fn contains(&self, color: Rgb8) -> bool {
        self.min.r <= color.r
            && self.min.g <= color.g
            && self.min.b <= color.b
            && self.max.r >= color.r
            && self.max.g >= color.g
            && self.max.b >= color.b
    }

    /// Size of the cube along one axis (`max - min`).
    #[inline]
    pub fn extent(&self, axis: Axis) -> u8 {
        self.max.channel(axis) - self.min.channel(axis)
    }

    /// Axis of greatest extent. Ties go to the lowest axis index.
    pub fn longest_axis(&self) -> Axis {
        let mut best = Axis::Red;
        for axis in [Axis::Green, Axis::Blue] {
            if self.extent(axis) > self.extent(best) {
                best = axis;
            }
        }
        best
    }

    /// True if the cube covers more than one color.
    #[inline]
    pub fn is_splittable(&self) -> bool {
        self.min != self.max
    }

    /// Split along the longest axis at `min + extent / 2`.
    ///
    /// The lower half spans `[min, split]` and the upper half
    /// `[split + 1, max]` on that axis; other axes are unchanged. The upper
    /// half is `None` when the cube has zero extent on the chosen axis.
    pub fn split(&self) -> (ColorCube, Option<ColorCube>) {
        let axis = self.longest_axis();
        let lo = self.min.channel(axis);
        let split = lo + self.extent(axis) / 2;

        let lower = ColorCube {
            min: self.min,
            max: self.max.with_channel(axis, split),
        };
        let upper = split
            .checked_add(1)
            .and_then(|start| ColorCube::new(self.min.with_channel(axis, start), self.max));

        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(min: (u8, u8, u8), max: (u8, u8, u8)) -> ColorCube {
        ColorCube::new(min.into(), max.into()).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_corners() {
        assert!(ColorCube::new(Rgb8::new(10, 0, 0), Rgb8::new(9, 5, 5)).is_none());
        assert!(ColorCube::new(Rgb8::new(0, 0, 0), Rgb8::new(0, 0, 0)).is_some());
    }

    #[test]
    fn test_bounding_contains_corner_colors() {
        let colors = [
            Rgb8::new(10, 200, 30),
            Rgb8::new(250, 5, 30),
            Rgb8::new(100, 100, 31),
        ];
        let c = ColorCube::bounding(&colors).unwrap();
        assert_eq!(c.min(), Rgb8::new(10, 5, 30));
        assert_eq!(c.max(), Rgb8::new(250, 200, 31));
        for color in colors {
            assert!(c.contains(color), "{color:?} should be inside");
        }
        assert!(c.contains(c.min()));
        assert!(c.contains(c.max()));
    }

    #[test]
    fn test_bounding_empty_is_none() {
        assert!(ColorCube::bounding(&[]).is_none());
    }

    #[test]
    fn test_contains_is_inclusive_and_strict_outside() {
        let c = cube((10, 10, 10), (20, 20, 20));
        assert!(c.contains(Rgb8::new(10, 20, 15)));
        assert!(!c.contains(Rgb8::new(9, 15, 15)));
        assert!(!c.contains(Rgb8::new(15, 21, 15)));
    }

    #[test]
    fn test_longest_axis_picks_largest_extent() {
        assert_eq!(cube((0, 0, 0), (5, 9, 2)).longest_axis(), Axis::Green);
        assert_eq!(cube((0, 0, 0), (5, 9, 200)).longest_axis(), Axis::Blue);
    }

    /// Equal extents resolve to the lowest axis index.
    #[test]
    fn test_longest_axis_tie_prefers_lowest_index() {
        assert_eq!(cube((0, 0, 0), (8, 8, 8)).longest_axis(), Axis::Red);
        assert_eq!(cube((0, 0, 0), (1, 8, 8)).longest_axis(), Axis::Green);
    }

    #[test]
    fn test_split_halves() {
        let (lower, upper) = cube((0, 0, 0), (255, 10, 10)).split();
        let upper = upper.unwrap();
        assert_eq!(lower, cube((0, 0, 0), (127, 10, 10)));
        assert_eq!(upper, cube((128, 0, 0), (255, 10, 10)));
    }

    #[test]
    fn test_split_odd_extent() {
        // extent 3 -> split at 1 + 3 / 2 = 2
        let (lower, upper) = cube((1, 0, 0), (4, 0, 0)).split();
        assert_eq!(lower, cube((1, 0, 0), (2, 0, 0)));
        assert_eq!(upper.unwrap(), cube((3, 0, 0), (4, 0, 0)));
    }

    #[test]
    fn test_split_extent_one() {
        let (lower, upper) = cube((7, 7, 7), (8, 7, 7)).split();
        assert_eq!(lower, cube((7, 7, 7), (7, 7, 7)));
        assert_eq!(upper.unwrap(), cube((8, 7, 7), (8, 7, 7)));
    }

    #[test]
    fn test_split_single_color_has_no_upper_half() {
        let single = cube((255, 255, 255), (255, 255, 255));
        assert!(!single.is_splittable());
        let (lower, upper) = single.split();
        assert_eq!(lower, single);
        assert!(upper.is_none());
    }
}
