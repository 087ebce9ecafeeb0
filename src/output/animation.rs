//! Animated PNG writer for bug-walk snapshot sequences.
//!
//! APNG keeps the animation on the same `png` stack as the stills. The file
//! is created once per run and finished explicitly; on any encode error the
//! partially written file is left to the caller's cleanup (no handle leaks).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use colorgrid::Grid;

use crate::error::OutputError;
use crate::output::scaled_rgb_bytes;

/// Write a snapshot sequence to `path` as an animated PNG.
///
/// One APNG frame per snapshot, in order, each shown for `delay_ms`
/// milliseconds, looping forever. All snapshots share the dimensions of the
/// first; `scale` upscales with nearest-neighbor sampling like the stills.
pub fn write_apng(
    path: &Path,
    frames: &[Grid],
    scale: u32,
    delay_ms: u16,
) -> Result<(), OutputError> {
    let first = frames.first().ok_or(OutputError::NoFrames)?;
    let width = first.width() as u32 * scale;
    let height = first.height() as u32 * scale;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder
        .set_animated(frames.len() as u32, 0)
        .map_err(|e| OutputError::Encode(e.to_string()))?;
    encoder
        .set_frame_delay(delay_ms, 1000)
        .map_err(|e| OutputError::Encode(e.to_string()))?;

    let mut writer = encoder
        .write_header()
        .map_err(|e| OutputError::Encode(e.to_string()))?;

    for frame in frames {
        debug_assert_eq!(frame.width(), first.width());
        debug_assert_eq!(frame.height(), first.height());
        let data = scaled_rgb_bytes(frame, scale)?;
        writer
            .write_image_data(&data)
            .map_err(|e| OutputError::Encode(e.to_string()))?;
    }

    writer
        .finish()
        .map_err(|e| OutputError::Encode(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorgrid::{BugWalker, Rgb};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_sequence_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.apng");
        assert!(matches!(
            write_apng(&path, &[], 1, 100),
            Err(OutputError::NoFrames)
        ));
    }

    #[test]
    fn test_apng_has_one_frame_per_snapshot() {
        let colors = vec![Rgb::new(200, 10, 10); 6];
        let run = BugWalker::new(3, 3)
            .seed(4)
            .snapshots(true)
            .generate(&colors)
            .unwrap();
        assert_eq!(run.snapshots.len(), 6);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.apng");
        write_apng(&path, &run.snapshots, 2, 50).unwrap();

        let decoder = png::Decoder::new(std::fs::File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.width, 6);
        assert_eq!(info.height, 6);
        let animation = info.animation_control.unwrap();
        assert_eq!(animation.num_frames, 6);
    }
}
