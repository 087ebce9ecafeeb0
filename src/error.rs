use std::path::PathBuf;

use thiserror::Error;

/// Errors while obtaining a color list or source image.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("unsupported PNG format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid color '{value}': {source}")]
    InvalidColor {
        value: String,
        source: colorgrid::ParseColorError,
    },

    #[error("color list is empty")]
    EmptyColorList,
}

/// Errors while writing generated images.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("no frames to write")]
    NoFrames,

    #[error("scale factor must be at least 1")]
    ZeroScale,
}

/// Errors for a whole recipe run, from parsing to the final write.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to read recipe {}: {source}", path.display())]
    RecipeRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse recipe: {0}")]
    RecipeParse(#[from] serde_yaml::Error),

    #[error("color source error: {0}")]
    Source(#[from] SourceError),

    #[error("placement error: {0}")]
    Place(#[from] colorgrid::PlaceError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_messages() {
        let error = SourceError::Decode("bad chunk".to_string());
        assert_eq!(error.to_string(), "PNG decode error: bad chunk");

        let error = SourceError::EmptyColorList;
        assert_eq!(error.to_string(), "color list is empty");

        let error = SourceError::InvalidColor {
            value: "#ZZZ".to_string(),
            source: colorgrid::ParseColorError::InvalidLength,
        };
        assert!(error.to_string().starts_with("invalid color '#ZZZ'"));
    }

    #[test]
    fn test_output_error_messages() {
        assert_eq!(OutputError::NoFrames.to_string(), "no frames to write");
        assert_eq!(
            OutputError::ZeroScale.to_string(),
            "scale factor must be at least 1"
        );
    }

    #[test]
    fn test_run_error_wraps_place_error() {
        let place = colorgrid::PlaceError::DegenerateGrid;
        let error: RunError = place.into();
        assert_eq!(
            error.to_string(),
            "placement error: a 1x1 grid has no cell to walk to"
        );
    }
}
