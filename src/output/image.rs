//! Still-image PNG writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use colorgrid::Grid;

use crate::error::OutputError;
use crate::output::scaled_rgb_bytes;

/// Write a grid to `path` as an RGB8 PNG, upscaled by `scale` with
/// nearest-neighbor sampling. Empty cells come out black.
pub fn write_png(path: &Path, grid: &Grid, scale: u32) -> Result<(), OutputError> {
    let data = scaled_rgb_bytes(grid, scale)?;
    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| OutputError::Encode(e.to_string()))?;
    writer
        .write_image_data(&data)
        .map_err(|e| OutputError::Encode(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| OutputError::Encode(e.to_string()))?;

    Ok(())
}
