use image::RgbImage;
use std::path::Path;

use crate::error::SourceError;
use crate::models::Backend;

/// Random access to the decoded frames of one video
///
/// Frame indices are zero-based. `read_frame` returns `Ok(None)` when the
/// stream ends before `index`, which is distinct from a decode failure.
pub trait FrameSource {
    /// Total number of frames the container reports
    fn frame_count(&self) -> u64;

    /// Native frame rate in frames per second
    fn fps(&self) -> f64;

    fn read_frame(&mut self, index: u64) -> Result<Option<RgbImage>, SourceError>;
}

/// Open `path` with the requested decoding backend
pub fn open_source(backend: Backend, path: &Path) -> Result<Box<dyn FrameSource>, SourceError> {
    if !path.exists() {
        return Err(SourceError::Open {
            path: path.display().to_string(),
            reason: "file does not exist".to_string(),
        });
    }

    match backend {
        Backend::Ffmpeg => Ok(Box::new(super::FfmpegSource::open(path)?)),
        #[cfg(feature = "opencv")]
        Backend::Opencv => Ok(Box::new(super::OpenCvSource::open(path)?)),
        #[cfg(not(feature = "opencv"))]
        Backend::Opencv => Err(SourceError::Unsupported(
            "opencv (rebuild with --features opencv)",
        )),
    }
}
