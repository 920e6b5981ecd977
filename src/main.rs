use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelizer::models::{Backend, ConfigOverrides, ModeConfig, PixelizerConfig};
use pixelizer::services::PipelineDriver;

#[derive(Parser)]
#[command(name = "pixelizer")]
#[command(version, about = "Turn a video into a dithered pixel-art GIF")]
struct Cli {
    /// Input video file
    input: PathBuf,

    /// Output GIF file
    output: PathBuf,

    /// YAML configuration file (falls back to $CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mosaic cell size in source pixels
    #[arg(short, long)]
    pixel_size: Option<usize>,

    /// Palette size before tone snapping
    #[arg(long)]
    colors: Option<usize>,

    /// Tone levels per channel
    #[arg(long)]
    tones: Option<u32>,

    /// Frames sampled per second of video
    #[arg(long)]
    fps: Option<u32>,

    /// Upscale factor of the mosaic
    #[arg(short, long)]
    scale: Option<usize>,

    /// Worker threads (default: all cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Rendering mode
    #[arg(long, value_enum)]
    mode: Option<ModeConfig>,

    /// Video decoding backend
    #[arg(long, value_enum)]
    backend: Option<Backend>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            pixel_size: self.pixel_size,
            color_number: self.colors,
            tone_number: self.tones,
            fps: self.fps,
            upscale: self.scale,
            threads: self.threads,
            mode: self.mode,
            backend: self.backend,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelizer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let mut config = match config_file {
        Some(path) => PixelizerConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PixelizerConfig::default(),
    };
    cli.overrides().apply(&mut config);

    let driver = PipelineDriver::new(config).context("Invalid settings")?;
    let summary = driver
        .run(&cli.input, &cli.output)
        .with_context(|| format!("Failed to pixelize {}", cli.input.display()))?;

    println!(
        "Wrote {} ({} frames, {}x{}, {} ms/frame)",
        cli.output.display(),
        summary.frames,
        summary.width,
        summary.height,
        summary.delay_ms
    );
    Ok(())
}
