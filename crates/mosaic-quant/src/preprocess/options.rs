//! Preprocessing options and configuration.

/// Configuration for the filter and enhancement steps.
///
/// # Defaults
///
/// - Median filter: 3×3 window
/// - Saturation: 2.0 (double the distance from luma)
/// - Contrast: 2.0 (double the distance from mean luma)
///
/// # Example
///
/// ```
/// use mosaic_quant::preprocess::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .median_size(5)
///     .saturation(1.5)
///     .contrast(1.2);
/// assert_eq!(options.median_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessOptions {
    /// Median filter window edge length (0 or 1 disables the filter).
    pub median_size: usize,

    /// Saturation multiplier.
    ///
    /// - 1.0 = no change
    /// - 0.0 = grayscale
    /// - 2.0 = default
    pub saturation: f32,

    /// Contrast multiplier around the mean luma.
    ///
    /// - 1.0 = no change
    /// - 0.0 = flat mean gray
    /// - 2.0 = default
    pub contrast: f32,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            median_size: 3,
            saturation: 2.0,
            contrast: 2.0,
        }
    }
}

impl PreprocessOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that leave pixels untouched.
    pub fn identity() -> Self {
        Self {
            median_size: 1,
            saturation: 1.0,
            contrast: 1.0,
        }
    }

    #[inline]
    pub fn median_size(mut self, size: usize) -> Self {
        self.median_size = size;
        self
    }

    #[inline]
    pub fn saturation(mut self, factor: f32) -> Self {
        self.saturation = factor;
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = PreprocessOptions::default();
        assert_eq!(opts.median_size, 3);
        assert!(
            (opts.saturation - 2.0).abs() < f32::EPSILON,
            "saturation should default to 2.0"
        );
        assert!(
            (opts.contrast - 2.0).abs() < f32::EPSILON,
            "contrast should default to 2.0"
        );
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(PreprocessOptions::new(), PreprocessOptions::default());
    }

    #[test]
    fn test_builder_chain() {
        let opts = PreprocessOptions::new()
            .median_size(1)
            .saturation(0.5)
            .contrast(3.0);
        assert_eq!(opts.median_size, 1);
        assert!((opts.saturation - 0.5).abs() < f32::EPSILON);
        assert!((opts.contrast - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_identity() {
        let opts = PreprocessOptions::identity();
        assert_eq!(opts.median_size, 1);
        assert!((opts.saturation - 1.0).abs() < f32::EPSILON);
        assert!((opts.contrast - 1.0).abs() < f32::EPSILON);
    }
}
