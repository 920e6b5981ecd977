//! In-memory frame sources standing in for decoded video.

use image::{Rgb, RgbImage};
use pixelizer::error::SourceError;
use pixelizer::services::FrameSource;

/// Deterministic video: a diagonal color sweep that drifts with the frame index
pub struct SyntheticSource {
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub fps: f64,
    /// Frames actually available; reads past this hit end of stream
    pub decodable: u64,
    pub reads: Vec<u64>,
}

impl SyntheticSource {
    pub fn new(width: u32, height: u32, frames: u64, fps: f64) -> Self {
        Self {
            width,
            height,
            frames,
            fps,
            decodable: frames,
            reads: Vec::new(),
        }
    }

    /// Reports `frames` but the stream ends after `decodable`
    pub fn truncated(mut self, decodable: u64) -> Self {
        self.decodable = decodable;
        self
    }

    pub fn frame(&self, index: u64) -> RgbImage {
        let shift = (index * 9) as u32;
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb([
                ((x * 255 / self.width.max(1) + shift) % 256) as u8,
                ((y * 255 / self.height.max(1)) % 256) as u8,
                (((x + y) * 4 + shift) % 256) as u8,
            ])
        })
    }
}

impl FrameSource for SyntheticSource {
    fn frame_count(&self) -> u64 {
        self.frames
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn read_frame(&mut self, index: u64) -> Result<Option<RgbImage>, SourceError> {
        self.reads.push(index);
        if index >= self.decodable {
            return Ok(None);
        }
        Ok(Some(self.frame(index)))
    }
}

/// Source whose decoder breaks at one frame
pub struct FailingSource {
    pub inner: SyntheticSource,
    pub fail_at: u64,
}

impl FrameSource for FailingSource {
    fn frame_count(&self) -> u64 {
        self.inner.frame_count()
    }

    fn fps(&self) -> f64 {
        self.inner.fps()
    }

    fn read_frame(&mut self, index: u64) -> Result<Option<RgbImage>, SourceError> {
        if index == self.fail_at {
            return Err(SourceError::Read {
                index,
                reason: "corrupt packet".to_string(),
            });
        }
        self.inner.read_frame(index)
    }
}
