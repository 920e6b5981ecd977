use mosaic_quant::{Pixelizer, PreprocessOptions, RenderMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0} must be at least 1")]
    Invalid(&'static str),
}

/// How the snapped palette is applied to each mosaic cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeConfig {
    /// Two-color checkerboard tiles
    #[default]
    Dither,
    /// Nearest palette color, no dithering
    Flat,
}

impl From<ModeConfig> for RenderMode {
    fn from(mode: ModeConfig) -> Self {
        match mode {
            ModeConfig::Dither => RenderMode::Dither,
            ModeConfig::Flat => RenderMode::Flat,
        }
    }
}

/// Video decoding backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// External `ffmpeg`/`ffprobe` binaries
    #[default]
    Ffmpeg,
    /// OpenCV `VideoCapture` (needs the `opencv` cargo feature)
    Opencv,
}

/// Pixelizer configuration loaded from a YAML file
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PixelizerConfig {
    /// Side of one mosaic cell in source pixels
    pub pixel_size: usize,

    /// Target size of the median-cut palette
    pub color_number: usize,

    /// Levels per channel of the tone grid
    pub tone_number: u32,

    /// Frames sampled per second of video
    pub fps: u32,

    /// Nearest-neighbor upscale factor of the mosaic
    pub upscale: usize,

    /// Median filter window (1 disables)
    pub median_size: usize,

    /// Saturation factor (1.0 = unchanged)
    pub saturation: f32,

    /// Contrast factor (1.0 = unchanged)
    pub contrast: f32,

    /// GIF loop count, 0 = forever
    pub loop_count: u16,

    /// Worker threads, None = all cores
    pub threads: Option<usize>,

    pub mode: ModeConfig,

    pub backend: Backend,
}

impl Default for PixelizerConfig {
    fn default() -> Self {
        let preprocess = PreprocessOptions::default();
        Self {
            pixel_size: 20,
            color_number: 16,
            tone_number: 8,
            fps: 4,
            upscale: 5,
            median_size: preprocess.median_size,
            saturation: preprocess.saturation,
            contrast: preprocess.contrast,
            loop_count: 0,
            threads: None,
            mode: ModeConfig::default(),
            backend: Backend::default(),
        }
    }
}

impl PixelizerConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reject settings that would make the pipeline meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_size == 0 {
            return Err(ConfigError::Invalid("pixel_size"));
        }
        if self.tone_number == 0 {
            return Err(ConfigError::Invalid("tone_number"));
        }
        if self.upscale == 0 {
            return Err(ConfigError::Invalid("upscale"));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps"));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Invalid("threads"));
        }
        Ok(())
    }

    /// Delay between GIF frames in milliseconds
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    /// Build the per-frame transform described by this configuration
    pub fn pixelizer(&self) -> Pixelizer {
        Pixelizer::new()
            .pixel_size(self.pixel_size)
            .color_number(self.color_number)
            .tone_number(self.tone_number)
            .upscale(self.upscale)
            .preprocess(
                PreprocessOptions::new()
                    .median_size(self.median_size)
                    .saturation(self.saturation)
                    .contrast(self.contrast),
            )
            .mode(self.mode.into())
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub pixel_size: Option<usize>,
    pub color_number: Option<usize>,
    pub tone_number: Option<u32>,
    pub fps: Option<u32>,
    pub upscale: Option<usize>,
    pub threads: Option<usize>,
    pub mode: Option<ModeConfig>,
    pub backend: Option<Backend>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut PixelizerConfig) {
        if let Some(v) = self.pixel_size {
            config.pixel_size = v;
        }
        if let Some(v) = self.color_number {
            config.color_number = v;
        }
        if let Some(v) = self.tone_number {
            config.tone_number = v;
        }
        if let Some(v) = self.fps {
            config.fps = v;
        }
        if let Some(v) = self.upscale {
            config.upscale = v;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if let Some(v) = self.mode {
            config.mode = v;
        }
        if let Some(v) = self.backend {
            config.backend = v;
        }
    }
}
