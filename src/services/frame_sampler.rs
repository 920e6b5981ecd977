use crate::error::PipelineError;

/// Which source frames become animation frames
///
/// `capture_count = floor(frame_count / video_fps * sample_fps)` samples,
/// spread evenly: sample `i` reads frame `floor(frame_count * i / capture_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    frame_count: u64,
    capture_count: u64,
}

impl SamplePlan {
    pub fn new(frame_count: u64, video_fps: f64, sample_fps: u32) -> Result<Self, PipelineError> {
        if !video_fps.is_finite() || video_fps <= 0.0 {
            return Err(PipelineError::Input(format!(
                "video reports an invalid frame rate ({video_fps})"
            )));
        }
        if sample_fps == 0 {
            return Err(PipelineError::Input(
                "sampling rate must be at least 1 fps".to_string(),
            ));
        }

        let capture_count = (frame_count as f64 / video_fps * f64::from(sample_fps)).floor() as u64;
        if capture_count == 0 {
            return Err(PipelineError::Input(format!(
                "nothing to sample: {frame_count} frames at {video_fps:.3} fps is shorter than one sample at {sample_fps} fps"
            )));
        }

        Ok(Self {
            frame_count,
            capture_count,
        })
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn capture_count(&self) -> u64 {
        self.capture_count
    }

    /// Source frame index of sample `i`
    pub fn frame_index(&self, sample: u64) -> u64 {
        (u128::from(self.frame_count) * u128::from(sample) / u128::from(self.capture_count)) as u64
    }

    /// `(sample, frame_index)` pairs in playback order
    pub fn indices(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        (0..self.capture_count).map(|i| (i as usize, self.frame_index(i)))
    }
}
