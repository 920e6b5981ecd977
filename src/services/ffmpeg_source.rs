use image::RgbImage;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::FrameSource;
use crate::error::SourceError;

fn ffmpeg_bin() -> String {
    std::env::var("FFMPEG_BIN").unwrap_or_else(|_| "ffmpeg".to_string())
}

fn ffprobe_bin() -> String {
    std::env::var("FFPROBE_BIN").unwrap_or_else(|_| "ffprobe".to_string())
}

/// Stream facts reported by `ffprobe`
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub frame_count: u64,
}

impl ProbeInfo {
    /// Parse `key=value` lines from
    /// `ffprobe -show_entries stream=...:format=duration -of default=noprint_wrappers=1`.
    ///
    /// Containers that do not store `nb_frames` fall back to
    /// `floor(duration * fps)`.
    pub fn parse(output: &str) -> Result<Self, String> {
        let mut width = None;
        let mut height = None;
        let mut fps = None;
        let mut nb_frames = None;
        let mut duration = None;

        for line in output.lines() {
            let Some((key, value)) = line.trim().split_once('=') else {
                continue;
            };
            match key {
                "width" => width = value.parse::<u32>().ok(),
                "height" => height = value.parse::<u32>().ok(),
                "r_frame_rate" => fps = parse_rate(value),
                "nb_frames" => nb_frames = value.parse::<u64>().ok(),
                "duration" => duration = duration.or(value.parse::<f64>().ok()),
                _ => {}
            }
        }

        let width = width.filter(|&w| w > 0).ok_or("missing video width")?;
        let height = height.filter(|&h| h > 0).ok_or("missing video height")?;
        let fps = fps.ok_or("missing or zero frame rate")?;
        let frame_count = match (nb_frames, duration) {
            (Some(n), _) if n > 0 => n,
            (_, Some(d)) if d > 0.0 => (d * fps).floor() as u64,
            _ => return Err("cannot determine frame count".to_string()),
        };

        Ok(Self {
            width,
            height,
            fps,
            frame_count,
        })
    }
}

/// "30000/1001" or "25" → frames per second
fn parse_rate(value: &str) -> Option<f64> {
    let rate = match value.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => value.parse().ok()?,
    };
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

/// Frame source backed by the `ffmpeg` and `ffprobe` executables
///
/// Every read seeks by timestamp and decodes exactly one frame to raw
/// RGB24 on stdout.
pub struct FfmpegSource {
    path: PathBuf,
    info: ProbeInfo,
}

impl FfmpegSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let open_err = |reason: String| SourceError::Open {
            path: path.display().to_string(),
            reason,
        };

        let output = Command::new(ffprobe_bin())
            .args(["-v", "error", "-select_streams", "v:0", "-show_entries"])
            .arg("stream=width,height,r_frame_rate,nb_frames:format=duration")
            .args(["-of", "default=noprint_wrappers=1"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| open_err(format!("cannot run ffprobe: {e}")))?;

        if !output.status.success() {
            return Err(open_err(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let info = ProbeInfo::parse(&String::from_utf8_lossy(&output.stdout)).map_err(open_err)?;
        tracing::debug!(
            path = %path.display(),
            width = info.width,
            height = info.height,
            fps = info.fps,
            frames = info.frame_count,
            "Probed video"
        );

        Ok(Self {
            path: path.to_path_buf(),
            info,
        })
    }

    pub fn info(&self) -> &ProbeInfo {
        &self.info
    }
}

impl FrameSource for FfmpegSource {
    fn frame_count(&self) -> u64 {
        self.info.frame_count
    }

    fn fps(&self) -> f64 {
        self.info.fps
    }

    fn read_frame(&mut self, index: u64) -> Result<Option<RgbImage>, SourceError> {
        if index >= self.info.frame_count {
            return Ok(None);
        }

        let timestamp = index as f64 / self.info.fps;
        let output = Command::new(ffmpeg_bin())
            .args(["-v", "error", "-nostdin", "-ss"])
            .arg(format!("{timestamp:.6}"))
            // keep the stored orientation so the size matches ffprobe's
            .args(["-noautorotate", "-i"])
            .arg(&self.path)
            .args(["-frames:v", "1", "-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(SourceError::Read {
                index,
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Seeking past the last decodable frame yields no bytes
        if output.stdout.is_empty() {
            return Ok(None);
        }

        frame_from_rgb24(index, self.info.width, self.info.height, output.stdout).map(Some)
    }
}

/// Wrap one raw RGB24 frame; any length other than `width * height * 3`
/// means the decoder disagreed with the probed geometry.
fn frame_from_rgb24(
    index: u64,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
) -> Result<RgbImage, SourceError> {
    let expected = width as usize * height as usize * 3;
    if bytes.len() != expected {
        return Err(SourceError::Read {
            index,
            reason: format!(
                "frame is {} bytes, expected {expected} for {width}x{height}",
                bytes.len()
            ),
        });
    }
    RgbImage::from_raw(width, height, bytes).ok_or_else(|| SourceError::Read {
        index,
        reason: "frame buffer size mismatch".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_probe_output() {
        let output = "width=640\nheight=360\nr_frame_rate=30000/1001\nnb_frames=300\nduration=10.010000\n";
        let info = ProbeInfo::parse(output).unwrap();
        assert_eq!(info.width, 640);
        assert_eq!(info.height, 360);
        assert!((info.fps - 29.97).abs() < 0.01);
        assert_eq!(info.frame_count, 300);
    }

    #[test]
    fn test_parse_probe_falls_back_to_duration() {
        let output = "width=320\nheight=240\nr_frame_rate=25/1\nnb_frames=N/A\nduration=2.500000\n";
        let info = ProbeInfo::parse(output).unwrap();
        assert_eq!(info.fps, 25.0);
        assert_eq!(info.frame_count, 62);
    }

    #[test]
    fn test_parse_probe_rejects_zero_rate() {
        let output = "width=320\nheight=240\nr_frame_rate=0/0\nnb_frames=10\n";
        assert_eq!(
            ProbeInfo::parse(output),
            Err("missing or zero frame rate".to_string())
        );
    }

    #[test]
    fn test_parse_probe_missing_dimensions() {
        let output = "r_frame_rate=25/1\nnb_frames=10\n";
        assert_eq!(ProbeInfo::parse(output), Err("missing video width".to_string()));
    }

    #[test]
    fn test_frame_from_rgb24_exact_length() {
        let image = frame_from_rgb24(0, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(image.get_pixel(1, 0).0, [4, 5, 6]);
    }

    #[test]
    fn test_frame_from_rgb24_rejects_oversized_frame() {
        // a rotated 2x3 frame decoded where 3x2 was probed, plus trailing bytes
        let result = frame_from_rgb24(7, 3, 2, vec![0; 21]);
        match result {
            Err(SourceError::Read { index, reason }) => {
                assert_eq!(index, 7);
                assert_eq!(reason, "frame is 21 bytes, expected 18 for 3x2");
            }
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_frame_from_rgb24_rejects_short_frame() {
        assert!(matches!(
            frame_from_rgb24(1, 3, 2, vec![0; 12]),
            Err(SourceError::Read { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rate_forms() {
        assert_eq!(parse_rate("25"), Some(25.0));
        assert_eq!(parse_rate("24/1"), Some(24.0));
        assert_eq!(parse_rate("1/0"), None);
        assert_eq!(parse_rate("abc"), None);
    }
}
