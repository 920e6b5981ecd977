use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use std::io::Write;
use std::path::Path;

use crate::error::PipelineError;

/// Encode `frames` as an animated GIF into `writer`.
///
/// Each frame carries its own local palette. `loop_count` 0 loops forever.
/// All frames must share the first frame's dimensions.
pub fn encode_gif<W: Write>(
    writer: W,
    frames: &[RgbImage],
    delay_ms: u32,
    loop_count: u16,
) -> Result<(), PipelineError> {
    let first = frames
        .first()
        .ok_or_else(|| PipelineError::Encode("no frames to encode".to_string()))?;
    let (width, height) = first.dimensions();
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(PipelineError::Encode(format!(
            "{width}x{height} exceeds the GIF size limit"
        )));
    }
    if let Some((i, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (width, height))
    {
        let (w, h) = frame.dimensions();
        return Err(PipelineError::Encode(format!(
            "frame {i} is {w}x{h}, expected {width}x{height}"
        )));
    }

    let repeat = match loop_count {
        0 => Repeat::Infinite,
        n => Repeat::Finite(n),
    };
    let delay = Delay::from_numer_denom_ms(delay_ms, 1);

    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(repeat)?;
    encoder.encode_frames(frames.iter().map(|image| {
        let rgba = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
        Frame::from_parts(rgba, 0, 0, delay)
    }))?;
    Ok(())
}

/// Encode in memory, then write `path` in one go
///
/// Nothing is created on disk if encoding fails.
pub fn write_gif(
    path: &Path,
    frames: &[RgbImage],
    delay_ms: u32,
    loop_count: u16,
) -> Result<(), PipelineError> {
    let mut buffer = Vec::new();
    encode_gif(&mut buffer, frames, delay_ms, loop_count)?;
    std::fs::write(path, &buffer)?;
    tracing::debug!(path = %path.display(), bytes = buffer.len(), "Wrote GIF");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgb};
    use std::io::Cursor;
    use std::time::Duration;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_round_trip_frames_and_delay() {
        let frames = vec![
            solid(6, 4, [255, 0, 0]),
            solid(6, 4, [0, 255, 0]),
            solid(6, 4, [0, 0, 255]),
        ];
        let mut buffer = Vec::new();
        encode_gif(&mut buffer, &frames, 250, 0).unwrap();

        let decoder = GifDecoder::new(Cursor::new(buffer)).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();

        assert_eq!(decoded.len(), 3);
        for (frame, expected) in decoded.iter().zip(&frames) {
            assert_eq!(frame.buffer().dimensions(), (6, 4));
            assert_eq!(Duration::from(frame.delay()), Duration::from_millis(250));
            let px = frame.buffer().get_pixel(3, 2);
            assert_eq!([px[0], px[1], px[2]], expected.get_pixel(3, 2).0);
        }
    }

    #[test]
    fn test_checkerboard_colors_survive() {
        let a = [223, 31, 0];
        let b = [0, 95, 191];
        let frame = RgbImage::from_fn(4, 4, |x, y| Rgb(if (x + y) % 2 == 0 { a } else { b }));
        let mut buffer = Vec::new();
        encode_gif(&mut buffer, std::slice::from_ref(&frame), 100, 1).unwrap();

        let decoder = GifDecoder::new(Cursor::new(buffer)).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();
        let image = decoded[0].buffer();
        for (x, y, px) in image.enumerate_pixels() {
            let expected = if (x + y) % 2 == 0 { a } else { b };
            assert_eq!([px[0], px[1], px[2]], expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_empty_frame_list_is_error() {
        let result = encode_gif(Vec::new(), &[], 100, 0);
        assert!(matches!(result, Err(PipelineError::Encode(_))));
    }

    #[test]
    fn test_mismatched_dimensions_is_error() {
        let frames = vec![solid(4, 4, [0, 0, 0]), solid(5, 4, [0, 0, 0])];
        match encode_gif(Vec::new(), &frames, 100, 0) {
            Err(PipelineError::Encode(msg)) => {
                assert_eq!(msg, "frame 1 is 5x4, expected 4x4")
            }
            other => panic!("Expected Encode error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_gif_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        write_gif(&path, &[solid(2, 2, [9, 9, 9])], 500, 0).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..6], b"GIF89a");
    }
}
