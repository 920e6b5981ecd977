//! Assertion helpers for tests.

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Frame, RgbaImage};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

/// Decode every frame of a GIF file
pub fn decode_gif(path: &Path) -> Vec<Frame> {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Cannot read {}: {e}", path.display()));
    assert_eq!(&bytes[..6], b"GIF89a", "Expected a GIF89a header");
    let decoder = GifDecoder::new(Cursor::new(bytes)).expect("valid GIF");
    decoder.into_frames().collect_frames().expect("decodable frames")
}

/// Assert frame count, dimensions and delay of an animation
pub fn assert_animation(frames: &[Frame], count: usize, width: u32, height: u32, delay_ms: u64) {
    assert_eq!(frames.len(), count, "frame count");
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(
            frame.buffer().dimensions(),
            (width, height),
            "dimensions of frame {i}"
        );
        assert_eq!(
            Duration::from(frame.delay()),
            Duration::from_millis(delay_ms),
            "delay of frame {i}"
        );
    }
}

/// Assert every channel of every pixel lies on the `tones`-level grid
pub fn assert_on_tone_grid(image: &RgbaImage, tones: u32) {
    let levels: Vec<u8> = (0..tones).map(|i| (255 * i / tones) as u8).collect();
    for (x, y, px) in image.enumerate_pixels() {
        for c in 0..3 {
            assert!(
                levels.contains(&px[c]),
                "pixel ({x}, {y}) channel {c} = {} is not a tone level {levels:?}",
                px[c]
            );
        }
    }
}

/// Assert the image consists of uniform `block`×`block` squares
pub fn assert_blocky(image: &RgbaImage, block: u32) {
    for (x, y, px) in image.enumerate_pixels() {
        let anchor = image.get_pixel(x - x % block, y - y % block);
        assert_eq!(px, anchor, "pixel ({x}, {y}) differs from its block");
    }
}
