//! Declarative generation jobs, loaded from YAML.
//!
//! A recipe names an engine, a color source, a canvas, and where the output
//! goes. The CLI subcommands build the same structure from flags, so a flag
//! run and a recipe run go down one code path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RunError;

/// Which placement engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Nearest-color region growth; fills the whole canvas.
    Nearest,
    /// Chained random walks; fills the whole canvas.
    Walk,
    /// Bounded random walk with revisits; may leave cells empty.
    Bug,
}

/// Where the color list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// All 32768 15-bit colors, sized for a 256x128 canvas.
    #[default]
    FifteenBit,
    /// The pixels of a PNG, row-major, duplicates preserved.
    Image {
        /// Path to the source image
        path: PathBuf,
    },
    /// An explicit list of hex colors.
    List {
        /// Colors as `#RRGGBB` / `#RGB` strings
        colors: Vec<String>,
    },
}

/// One generation job.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    /// Engine to run
    pub mode: Mode,

    /// Color source (defaults to the 15-bit palette)
    #[serde(default)]
    pub source: ColorSource,

    /// Canvas width; defaults to the source's own canvas (or 128 for bug
    /// walks over sources without one)
    #[serde(default)]
    pub width: Option<usize>,

    /// Canvas height; same defaulting as `width`
    #[serde(default)]
    pub height: Option<usize>,

    /// Random seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,

    /// Explicit start cell as `[row, col]` (random if omitted)
    #[serde(default)]
    pub start: Option<[usize; 2]>,

    /// Explicit start color as an index into the color list (random if
    /// omitted)
    #[serde(default)]
    pub start_color: Option<usize>,

    /// Use the 8-neighborhood for the nearest engine
    #[serde(default)]
    pub full_neighborhood: bool,

    /// Output PNG path
    pub output: PathBuf,

    /// Integer nearest-neighbor upscale factor
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Step cap for the bug walk (defaults to the color count)
    #[serde(default)]
    pub maxiters: Option<usize>,

    /// Sort the bug's colors by distance to a start color (as the fill
    /// engines do) rather than walking the list as given
    #[serde(default = "default_true")]
    pub shuffle_colors: bool,

    /// Write an animated PNG of the bug walk to this path
    #[serde(default)]
    pub animation: Option<PathBuf>,

    /// Capture every n-th step in the animation
    #[serde(default = "default_snapshot_every")]
    pub snapshot_every: usize,

    /// Animation frame delay in milliseconds
    #[serde(default = "default_frame_delay")]
    pub frame_delay_ms: u16,
}

fn default_scale() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_snapshot_every() -> usize {
    1
}

fn default_frame_delay() -> u16 {
    100
}

impl Recipe {
    /// Parse a recipe from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Load a recipe from a YAML file.
    pub fn load(path: &Path) -> Result<Self, RunError> {
        let text = std::fs::read_to_string(path).map_err(|source| RunError::RecipeRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_yaml(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_recipe_gets_defaults() {
        let yaml = r#"
mode: nearest
output: out.png
"#;
        let recipe = Recipe::from_yaml(yaml).unwrap();

        assert_eq!(recipe.mode, Mode::Nearest);
        assert_eq!(recipe.source, ColorSource::FifteenBit);
        assert_eq!(recipe.width, None);
        assert_eq!(recipe.seed, None);
        assert_eq!(recipe.scale, 1);
        assert!(recipe.shuffle_colors);
        assert_eq!(recipe.snapshot_every, 1);
        assert_eq!(recipe.frame_delay_ms, 100);
        assert_eq!(recipe.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_full_bug_recipe() {
        let yaml = r##"
mode: bug
source:
  list:
    colors: ["#000000", "#FFFFFF", "#FF0000"]
width: 32
height: 16
seed: 99
start: [4, 7]
maxiters: 2
shuffle_colors: false
output: bug.png
animation: bug.apng
snapshot_every: 5
frame_delay_ms: 40
scale: 4
"##;
        let recipe = Recipe::from_yaml(yaml).unwrap();

        assert_eq!(recipe.mode, Mode::Bug);
        assert_eq!(
            recipe.source,
            ColorSource::List {
                colors: vec![
                    "#000000".to_string(),
                    "#FFFFFF".to_string(),
                    "#FF0000".to_string(),
                ]
            }
        );
        assert_eq!(recipe.width, Some(32));
        assert_eq!(recipe.height, Some(16));
        assert_eq!(recipe.seed, Some(99));
        assert_eq!(recipe.start, Some([4, 7]));
        assert_eq!(recipe.maxiters, Some(2));
        assert!(!recipe.shuffle_colors);
        assert_eq!(recipe.animation, Some(PathBuf::from("bug.apng")));
        assert_eq!(recipe.snapshot_every, 5);
        assert_eq!(recipe.frame_delay_ms, 40);
        assert_eq!(recipe.scale, 4);
    }

    #[test]
    fn test_image_source() {
        let yaml = r#"
mode: walk
source:
  image:
    path: photo.png
output: walked.png
"#;
        let recipe = Recipe::from_yaml(yaml).unwrap();
        assert_eq!(
            recipe.source,
            ColorSource::Image {
                path: PathBuf::from("photo.png")
            }
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let yaml = r#"
mode: scribble
output: out.png
"#;
        assert!(Recipe::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_missing_output_rejected() {
        let yaml = "mode: nearest\n";
        assert!(Recipe::from_yaml(yaml).is_err());
    }
}
