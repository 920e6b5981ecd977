use image::RgbImage;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::{imgproc, videoio};
use std::path::Path;

use super::FrameSource;
use crate::error::SourceError;

/// Frame source backed by OpenCV's `VideoCapture`
pub struct OpenCvSource {
    capture: videoio::VideoCapture,
    frame_count: u64,
    fps: f64,
    /// Index the next sequential `read` will return
    position: u64,
}

impl OpenCvSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let open_err = |reason: String| SourceError::Open {
            path: path.display().to_string(),
            reason,
        };

        let name = path
            .to_str()
            .ok_or_else(|| open_err("path is not valid UTF-8".to_string()))?;
        let capture = videoio::VideoCapture::from_file(name, videoio::CAP_ANY)
            .map_err(|e| open_err(e.to_string()))?;
        if !capture.is_opened().map_err(|e| open_err(e.to_string()))? {
            return Err(open_err("no decoder accepted the file".to_string()));
        }

        let frame_count = capture
            .get(videoio::CAP_PROP_FRAME_COUNT)
            .map_err(|e| open_err(e.to_string()))?;
        let fps = capture
            .get(videoio::CAP_PROP_FPS)
            .map_err(|e| open_err(e.to_string()))?;
        tracing::debug!(path = %path.display(), fps, frames = frame_count, "Opened video");

        Ok(Self {
            capture,
            frame_count: frame_count.max(0.0) as u64,
            fps,
            position: 0,
        })
    }
}

impl FrameSource for OpenCvSource {
    fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn read_frame(&mut self, index: u64) -> Result<Option<RgbImage>, SourceError> {
        let read_err = |e: opencv::Error| SourceError::Read {
            index,
            reason: e.to_string(),
        };

        if index != self.position {
            self.capture
                .set(videoio::CAP_PROP_POS_FRAMES, index as f64)
                .map_err(read_err)?;
        }

        let mut frame = Mat::default();
        if !self.capture.read(&mut frame).map_err(read_err)? || frame.rows() <= 0 {
            return Ok(None);
        }
        self.position = index + 1;

        let mut rgb = Mat::default();
        imgproc::cvt_color(&frame, &mut rgb, imgproc::COLOR_BGR2RGB, 0).map_err(read_err)?;
        let bytes = rgb.data_bytes().map_err(read_err)?.to_vec();

        RgbImage::from_raw(rgb.cols() as u32, rgb.rows() as u32, bytes)
            .map(Some)
            .ok_or_else(|| SourceError::Read {
                index,
                reason: "frame buffer size mismatch".to_string(),
            })
    }
}
