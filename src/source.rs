//! Color sources.
//!
//! The engines consume an ordered list of colors; this module produces one,
//! either by enumerating the full 15-bit color space, by reading the pixels
//! of a PNG (duplicates preserved, so the generated image keeps the source's
//! color distribution), or by parsing a comma-separated hex list.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use colorgrid::Rgb;

use crate::error::SourceError;

/// Canvas width paired with the 15-bit palette.
pub const FIFTEEN_BIT_WIDTH: usize = 256;
/// Canvas height paired with the 15-bit palette.
pub const FIFTEEN_BIT_HEIGHT: usize = 128;

/// An ordered color list together with the canvas it is sized for.
#[derive(Debug, Clone)]
pub struct ColorList {
    /// The colors, in source order, duplicates preserved.
    pub colors: Vec<Rgb>,
    /// Canvas width whose cell count matches `colors.len()`.
    pub width: usize,
    /// Canvas height whose cell count matches `colors.len()`.
    pub height: usize,
}

/// Enumerate all 32768 15-bit colors: every combination of the three
/// channels stepping by 8, sized for the 256x128 canvas.
pub fn fifteen_bit_colors() -> ColorList {
    let mut colors = Vec::with_capacity(FIFTEEN_BIT_WIDTH * FIFTEEN_BIT_HEIGHT);
    for r in 0..32u16 {
        for g in 0..32u16 {
            for b in 0..32u16 {
                colors.push(Rgb::new((r * 8) as u8, (g * 8) as u8, (b * 8) as u8));
            }
        }
    }
    ColorList {
        colors,
        width: FIFTEEN_BIT_WIDTH,
        height: FIFTEEN_BIT_HEIGHT,
    }
}

/// Read the pixels of a PNG file as an ordered color list, row-major,
/// duplicates preserved. The canvas dimensions are the image's own.
///
/// Accepts 8-bit RGB, RGBA, grayscale, and grayscale-alpha images (palette
/// images are expanded by the decoder); alpha is dropped.
pub fn colors_from_png(path: &Path) -> Result<ColorList, SourceError> {
    let mut decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| SourceError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| SourceError::Decode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(SourceError::UnsupportedFormat(format!(
            "bit depth {:?}",
            info.bit_depth
        )));
    }

    let bytes = &buf[..info.buffer_size()];
    let colors: Vec<Rgb> = match info.color_type {
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Rgba => bytes
            .chunks_exact(4)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Grayscale => bytes.iter().map(|&v| Rgb::new(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .map(|p| Rgb::new(p[0], p[0], p[0]))
            .collect(),
        other => {
            return Err(SourceError::UnsupportedFormat(format!(
                "color type {:?}",
                other
            )))
        }
    };

    Ok(ColorList {
        colors,
        width: info.width as usize,
        height: info.height as usize,
    })
}

/// Parse a comma-separated list of hex colors, e.g.
/// `"#000000,#FFFFFF,#FF0000"`.
///
/// There is no canvas naturally attached to a hex list, so only the colors
/// are returned; the caller supplies dimensions.
pub fn colors_from_hex_list(list: &str) -> Result<Vec<Rgb>, SourceError> {
    let colors: Result<Vec<Rgb>, SourceError> = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Rgb>().map_err(|e| SourceError::InvalidColor {
                value: s.to_string(),
                source: e,
            })
        })
        .collect();

    let colors = colors?;
    if colors.is_empty() {
        return Err(SourceError::EmptyColorList);
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fifteen_bit_palette_shape() {
        let list = fifteen_bit_colors();

        assert_eq!(list.colors.len(), 32768);
        assert_eq!(list.width * list.height, list.colors.len());
        assert_eq!(list.colors[0], Rgb::new(0, 0, 0));
        assert_eq!(list.colors[1], Rgb::new(0, 0, 8));
        assert_eq!(list.colors[32767], Rgb::new(248, 248, 248));
    }

    #[test]
    fn test_fifteen_bit_palette_has_no_duplicates() {
        let list = fifteen_bit_colors();
        let unique: std::collections::HashSet<Rgb> = list.colors.iter().copied().collect();
        assert_eq!(unique.len(), list.colors.len());
    }

    #[test]
    fn test_hex_list_parses_in_order() {
        let colors = colors_from_hex_list("#000000, #FFFFFF ,#FF0000").unwrap();
        assert_eq!(
            colors,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 255),
                Rgb::new(255, 0, 0),
            ]
        );
    }

    #[test]
    fn test_hex_list_rejects_bad_entries() {
        let result = colors_from_hex_list("#000000,#NOPE");
        assert!(matches!(result, Err(SourceError::InvalidColor { .. })));
    }

    #[test]
    fn test_hex_list_rejects_empty() {
        assert!(matches!(
            colors_from_hex_list(" , ,"),
            Err(SourceError::EmptyColorList)
        ));
        assert!(matches!(
            colors_from_hex_list(""),
            Err(SourceError::EmptyColorList)
        ));
    }

    #[test]
    fn test_missing_png_is_an_io_error() {
        let result = colors_from_png(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
