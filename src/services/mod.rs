pub mod ffmpeg_source;
pub mod frame_sampler;
#[cfg(feature = "opencv")]
pub mod opencv_source;
pub mod pipeline;
pub mod video_source;

pub use ffmpeg_source::{FfmpegSource, ProbeInfo};
pub use frame_sampler::SamplePlan;
#[cfg(feature = "opencv")]
pub use opencv_source::OpenCvSource;
pub use pipeline::{PipelineDriver, RunSummary};
pub use video_source::{open_source, FrameSource};
