//! Image and animation writers.
//!
//! The engines hand over finished grids; these modules serialize them. All
//! output is PNG-based: stills as plain RGB8 PNGs, animations as APNG.

pub mod animation;
pub mod image;

pub use animation::write_apng;
pub use image::write_png;

use colorgrid::Grid;

use crate::error::OutputError;

/// Expand a grid to flat RGB bytes, upscaled by an integer factor with
/// nearest-neighbor sampling.
///
/// Each source cell becomes a `scale` x `scale` block, so the placed color
/// multiset is preserved per block; smoothing filters would blend colors
/// away. A scale of 1 is the identity.
pub(crate) fn scaled_rgb_bytes(grid: &Grid, scale: u32) -> Result<Vec<u8>, OutputError> {
    if scale == 0 {
        return Err(OutputError::ZeroScale);
    }
    let scale = scale as usize;
    let bytes = grid.to_rgb_bytes();
    if scale == 1 {
        return Ok(bytes);
    }

    let width = grid.width();
    let height = grid.height();
    let out_width = width * scale;
    let mut out = Vec::with_capacity(bytes.len() * scale * scale);

    for row in 0..height * scale {
        let src_row = row / scale;
        for col in 0..out_width {
            let src_col = col / scale;
            let src = (src_row * width + src_col) * 3;
            out.extend_from_slice(&bytes[src..src + 3]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorgrid::Rgb;
    use pretty_assertions::assert_eq;

    fn checker() -> Grid {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(0, Rgb::new(10, 20, 30));
        grid.set(1, Rgb::new(40, 50, 60));
        grid
    }

    #[test]
    fn test_scale_one_is_identity() {
        let grid = checker();
        assert_eq!(scaled_rgb_bytes(&grid, 1).unwrap(), grid.to_rgb_bytes());
    }

    #[test]
    fn test_scale_zero_rejected() {
        let grid = checker();
        assert!(matches!(
            scaled_rgb_bytes(&grid, 0),
            Err(OutputError::ZeroScale)
        ));
    }

    #[test]
    fn test_scale_two_duplicates_blocks() {
        let grid = checker();
        let bytes = scaled_rgb_bytes(&grid, 2).unwrap();

        // 2x1 grid scaled 2x -> 4x2 pixels
        assert_eq!(bytes.len(), 4 * 2 * 3);
        let expected_row = [10, 20, 30, 10, 20, 30, 40, 50, 60, 40, 50, 60];
        assert_eq!(&bytes[..12], &expected_row);
        assert_eq!(&bytes[12..], &expected_row);
    }
}
