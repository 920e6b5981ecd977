//! Error types for palette operations

use std::fmt;

/// Error type for palette construction and color matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A nearest-color search or median-cut was asked to work without any
    /// colors: an empty candidate list, or an image with zero pixels.
    EmptyCandidateSet,
    /// Tone grid requested with zero levels per channel
    InvalidToneCount,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyCandidateSet => {
                write!(f, "no candidate colors to match against")
            }
            PaletteError::InvalidToneCount => {
                write!(f, "tone count must be at least 1")
            }
        }
    }
}

impl std::error::Error for PaletteError {}
