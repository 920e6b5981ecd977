//! 8-bit RGB color type

/// One of the three RGB channels.
///
/// Variants are declared in index order; [`Axis::ALL`] iterates them
/// red first, which is also the tie-break order used when choosing a
/// split axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Red,
    Green,
    Blue,
}

impl Axis {
    /// All axes in index order (r, g, b).
    pub const ALL: [Axis; 3] = [Axis::Red, Axis::Green, Axis::Blue];

    /// Channel index (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::Red => 0,
            Axis::Green => 1,
            Axis::Blue => 2,
        }
    }
}

/// A color as three 8-bit channels.
///
/// `Rgb8` is an immutable value type. Colors are compared through
/// [`distance_squared()`](Rgb8::distance_squared) and combined through
/// [`average()`](Rgb8::average); there is no gamma handling, all arithmetic
/// happens directly on the stored channel values.
///
/// # Example
///
/// ```
/// use mosaic_quant::Rgb8;
///
/// let a = Rgb8::new(0, 0, 0);
/// let b = Rgb8::new(3, 4, 0);
/// assert_eq!(a.distance_squared(b), 25);
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(a.average(b), Rgb8::new(1, 2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Value of a single channel.
    #[inline]
    pub fn channel(self, axis: Axis) -> u8 {
        match axis {
            Axis::Red => self.r,
            Axis::Green => self.g,
            Axis::Blue => self.b,
        }
    }

    /// Copy of this color with one channel replaced.
    #[inline]
    pub fn with_channel(mut self, axis: Axis, value: u8) -> Self {
        match axis {
            Axis::Red => self.r = value,
            Axis::Green => self.g = value,
            Axis::Blue => self.b = value,
        }
        self
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Monotonic in [`distance()`](Self::distance), so nearest-color searches
    /// compare this value and skip the square root.
    #[inline]
    pub fn distance_squared(self, other: Rgb8) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Rgb8) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Componentwise floor average of two colors.
    #[inline]
    pub fn average(self, other: Rgb8) -> Rgb8 {
        Rgb8::new(
            ((self.r as u16 + other.r as u16) / 2) as u8,
            ((self.g as u16 + other.g as u16) / 2) as u8,
            ((self.b as u16 + other.b as u16) / 2) as u8,
        )
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Rgb8::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb8::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)),
            (Rgb8::new(12, 200, 7), Rgb8::new(99, 3, 180)),
            (Rgb8::new(255, 0, 0), Rgb8::new(0, 0, 255)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_squared(b), b.distance_squared(a));
            assert_eq!(a.distance(b), b.distance(a));
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = Rgb8::new(17, 34, 51);
        assert_eq!(c.distance_squared(c), 0);
        assert_eq!(c.distance(c), 0.0);
    }

    #[test]
    fn test_distance_extremes_do_not_overflow() {
        let black = Rgb8::new(0, 0, 0);
        let white = Rgb8::new(255, 255, 255);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    }

    #[test]
    fn test_average_floors() {
        let a = Rgb8::new(255, 0, 1);
        let b = Rgb8::new(254, 1, 2);
        assert_eq!(a.average(b), Rgb8::new(254, 0, 1));
    }

    #[test]
    fn test_average_of_self_is_self() {
        let c = Rgb8::new(223, 31, 95);
        assert_eq!(c.average(c), c);
    }

    #[test]
    fn test_channel_access() {
        let c = Rgb8::new(1, 2, 3);
        assert_eq!(c.channel(Axis::Red), 1);
        assert_eq!(c.channel(Axis::Green), 2);
        assert_eq!(c.channel(Axis::Blue), 3);
        assert_eq!(c.with_channel(Axis::Green, 9), Rgb8::new(1, 9, 3));
    }

    #[test]
    fn test_axis_order() {
        let indices: Vec<usize> = Axis::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
