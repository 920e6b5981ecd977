use image::RgbImage;
use mosaic_quant::{PixelGrid, Pixelizer};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

use super::{open_source, FrameSource, SamplePlan};
use crate::error::PipelineError;
use crate::models::PixelizerConfig;
use crate::rendering::write_gif;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub width: u32,
    pub height: u32,
    pub delay_ms: u32,
}

/// Video → sampled frames → pixelized frames → animated GIF
///
/// Frames are decoded sequentially in batches; each batch is pixelized in
/// parallel on a dedicated pool. Output order always matches sample order.
pub struct PipelineDriver {
    config: PixelizerConfig,
    pixelizer: Pixelizer,
    pool: rayon::ThreadPool,
}

impl PipelineDriver {
    pub fn new(config: PixelizerConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("pixelizer-{i}"));
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| PipelineError::Input(format!("cannot start worker pool: {e}")))?;

        Ok(Self {
            pixelizer: config.pixelizer(),
            config,
            pool,
        })
    }

    pub fn config(&self) -> &PixelizerConfig {
        &self.config
    }

    /// Frames decoded before each parallel step
    fn batch_size(&self) -> usize {
        self.pool.current_num_threads().max(1) * 2
    }

    /// Convert `input` and write the animation to `output`
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, PipelineError> {
        tracing::info!(
            input = %input.display(),
            backend = ?self.config.backend,
            "Opening video"
        );
        let mut source = open_source(self.config.backend, input)?;
        self.run_with_source(source.as_mut(), output)
    }

    /// Same as [`run`](Self::run) with an already opened source
    pub fn run_with_source(
        &self,
        source: &mut dyn FrameSource,
        output: &Path,
    ) -> Result<RunSummary, PipelineError> {
        let start = Instant::now();
        let frames = self.process_source(source)?;
        let (width, height) = frames
            .first()
            .map(RgbImage::dimensions)
            .ok_or_else(|| PipelineError::Input("no frames were produced".to_string()))?;

        let delay_ms = self.config.frame_delay_ms();
        write_gif(output, &frames, delay_ms, self.config.loop_count)?;

        tracing::info!(
            output = %output.display(),
            frames = frames.len(),
            width,
            height,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Wrote animation"
        );

        Ok(RunSummary {
            frames: frames.len(),
            width,
            height,
            delay_ms,
        })
    }

    /// Sample and pixelize every planned frame, in playback order
    pub fn process_source(
        &self,
        source: &mut dyn FrameSource,
    ) -> Result<Vec<RgbImage>, PipelineError> {
        let plan = SamplePlan::new(source.frame_count(), source.fps(), self.config.fps)?;
        tracing::info!(
            frames = plan.frame_count(),
            video_fps = source.fps(),
            samples = plan.capture_count(),
            "Sampling video"
        );

        let batch_size = self.batch_size();
        let mut results = Vec::with_capacity(plan.capture_count() as usize);
        let mut batch = Vec::with_capacity(batch_size);
        let mut indices = plan.indices().peekable();

        while indices.peek().is_some() {
            batch.clear();
            for (sample, frame) in indices.by_ref().take(batch_size) {
                let image = match source.read_frame(frame) {
                    Ok(Some(image)) => image,
                    Ok(None) => {
                        return Err(PipelineError::Decode {
                            sample,
                            frame,
                            reason: "end of stream".to_string(),
                        })
                    }
                    Err(e) => {
                        return Err(PipelineError::Decode {
                            sample,
                            frame,
                            reason: e.to_string(),
                        })
                    }
                };
                tracing::debug!(sample, frame, "Decoded frame");
                batch.push((sample, image));
            }

            let pixelized: Vec<RgbImage> = self.pool.install(|| {
                batch
                    .par_iter()
                    .map(|(sample, image)| self.pixelize_image(*sample, image))
                    .collect::<Result<_, _>>()
            })?;
            results.extend(pixelized);
            tracing::debug!(done = results.len(), total = plan.capture_count(), "Batch finished");
        }

        Ok(results)
    }

    /// Pixelize one decoded frame
    pub fn pixelize_image(&self, sample: usize, image: &RgbImage) -> Result<RgbImage, PipelineError> {
        let grid = PixelGrid::from_rgb_image(image);
        let out = self
            .pixelizer
            .pixelize(&grid)
            .map_err(|source| PipelineError::Pixelize { sample, source })?;
        Ok(out.to_rgb_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use image::Rgb;

    /// In-memory source producing a horizontal gradient that shifts per frame
    struct GradientSource {
        frames: u64,
        fps: f64,
        reads: Vec<u64>,
    }

    impl FrameSource for GradientSource {
        fn frame_count(&self) -> u64 {
            self.frames
        }

        fn fps(&self) -> f64 {
            self.fps
        }

        fn read_frame(&mut self, index: u64) -> Result<Option<RgbImage>, SourceError> {
            self.reads.push(index);
            if index >= self.frames {
                return Ok(None);
            }
            Ok(Some(RgbImage::from_fn(40, 20, |x, y| {
                Rgb([(x * 6) as u8, (y * 12) as u8, (index * 10) as u8])
            })))
        }
    }

    fn small_config() -> PixelizerConfig {
        PixelizerConfig {
            pixel_size: 4,
            upscale: 2,
            fps: 2,
            threads: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_process_source_reads_planned_frames_in_order() {
        let driver = PipelineDriver::new(small_config()).unwrap();
        let mut source = GradientSource {
            frames: 30,
            fps: 10.0,
            reads: Vec::new(),
        };

        let frames = driver.process_source(&mut source).unwrap();

        // 30 frames at 10 fps sampled at 2 fps
        assert_eq!(frames.len(), 6);
        assert_eq!(source.reads, vec![0, 5, 10, 15, 20, 25]);
        for frame in &frames {
            assert_eq!(frame.dimensions(), (20, 10));
        }
    }

    #[test]
    fn test_output_order_matches_sequential_run() {
        let parallel = PipelineDriver::new(small_config()).unwrap();
        let sequential = PipelineDriver::new(PixelizerConfig {
            threads: Some(1),
            ..small_config()
        })
        .unwrap();

        let mut a = GradientSource {
            frames: 50,
            fps: 10.0,
            reads: Vec::new(),
        };
        let mut b = GradientSource {
            frames: 50,
            fps: 10.0,
            reads: Vec::new(),
        };

        assert_eq!(
            parallel.process_source(&mut a).unwrap(),
            sequential.process_source(&mut b).unwrap()
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = PipelineDriver::new(PixelizerConfig {
            upscale: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_frame_smaller_than_cell_is_pixelize_error() {
        let driver = PipelineDriver::new(PixelizerConfig {
            pixel_size: 64,
            ..small_config()
        })
        .unwrap();
        let image = RgbImage::new(40, 20);
        match driver.pixelize_image(3, &image) {
            Err(PipelineError::Pixelize { sample, .. }) => assert_eq!(sample, 3),
            other => panic!("Expected Pixelize error, got {other:?}"),
        }
    }
}
