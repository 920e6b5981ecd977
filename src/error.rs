use mosaic_quant::PixelizeError;
use thiserror::Error;

use crate::models::ConfigError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Decode failure at sample {sample} (frame {frame}): {reason}")]
    Decode {
        sample: usize,
        frame: u64,
        reason: String,
    },

    #[error("Pixelize error on sample {sample}: {source}")]
    Pixelize {
        sample: usize,
        #[source]
        source: PixelizeError,
    },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SourceError> for PipelineError {
    fn from(e: SourceError) -> Self {
        PipelineError::Input(e.to_string())
    }
}

/// Errors raised by a video frame source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot open video {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Cannot read frame {index}: {reason}")]
    Read { index: u64, reason: String },

    #[error("Backend not available: {0}")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
