//! Recipe execution: resolve the color source, run the engine, write the
//! output files.

use colorgrid::{BugWalker, ColorOrder, NearestPlacer, Neighborhood, Rgb, WalkFiller};

use crate::error::{RunError, SourceError};
use crate::output;
use crate::recipe::{ColorSource, Mode, Recipe};
use crate::source;

/// Square side used for bug walks when neither the recipe nor the source
/// provides a canvas.
const BUG_DEFAULT_SIZE: usize = 128;

/// Execute one recipe from start to finish.
pub fn run_recipe(recipe: &Recipe) -> Result<(), RunError> {
    let (colors, canvas) = resolve_colors(&recipe.source)?;
    let (width, height) = dimensions(recipe, canvas);

    tracing::info!(
        mode = ?recipe.mode,
        width,
        height,
        colors = colors.len(),
        seed = ?recipe.seed,
        "starting generation"
    );

    match recipe.mode {
        Mode::Nearest => {
            let mut placer = NearestPlacer::new(width, height);
            if recipe.full_neighborhood {
                placer = placer.neighborhood(Neighborhood::Full);
            }
            if let Some(seed) = recipe.seed {
                placer = placer.seed(seed);
            }
            if let Some([row, col]) = recipe.start {
                placer = placer.start_at(row, col);
            }
            if let Some(index) = recipe.start_color {
                placer = placer.start_color(index);
            }

            let grid = placer.generate(&colors)?;
            output::write_png(&recipe.output, &grid, recipe.scale)?;
        }
        Mode::Walk => {
            let mut filler = WalkFiller::new(width, height);
            if let Some(seed) = recipe.seed {
                filler = filler.seed(seed);
            }
            if let Some([row, col]) = recipe.start {
                filler = filler.start_at(row, col);
            }
            if let Some(index) = recipe.start_color {
                filler = filler.start_color(index);
            }

            let grid = filler.generate(&colors)?;
            output::write_png(&recipe.output, &grid, recipe.scale)?;
        }
        Mode::Bug => {
            let mut walker = BugWalker::new(width, height)
                .snapshots(recipe.animation.is_some())
                .snapshot_every(recipe.snapshot_every);
            if !recipe.shuffle_colors {
                walker = walker.order(ColorOrder::AsGiven);
            }
            if let Some(maxiters) = recipe.maxiters {
                walker = walker.maxiters(maxiters);
            }
            if let Some(seed) = recipe.seed {
                walker = walker.seed(seed);
            }
            if let Some([row, col]) = recipe.start {
                walker = walker.start_at(row, col);
            }
            if let Some(index) = recipe.start_color {
                walker = walker.start_color(index);
            }

            let run = walker.generate(&colors)?;
            tracing::info!(
                steps = run.steps,
                filled = run.grid.filled_count(),
                "walk finished"
            );

            output::write_png(&recipe.output, &run.grid, recipe.scale)?;
            if let Some(animation) = &recipe.animation {
                output::write_apng(animation, &run.snapshots, recipe.scale, recipe.frame_delay_ms)?;
                tracing::info!(
                    path = %animation.display(),
                    frames = run.snapshots.len(),
                    "wrote animation"
                );
            }
        }
    }

    tracing::info!(path = %recipe.output.display(), "wrote image");
    Ok(())
}

/// Resolve a color source to its list and, where it has one, its natural
/// canvas.
fn resolve_colors(
    source: &ColorSource,
) -> Result<(Vec<Rgb>, Option<(usize, usize)>), RunError> {
    match source {
        ColorSource::FifteenBit => {
            let list = source::fifteen_bit_colors();
            Ok((list.colors, Some((list.width, list.height))))
        }
        ColorSource::Image { path } => {
            let list = source::colors_from_png(path)?;
            Ok((list.colors, Some((list.width, list.height))))
        }
        ColorSource::List { colors } => {
            let parsed: Result<Vec<Rgb>, SourceError> = colors
                .iter()
                .map(|s| {
                    s.parse::<Rgb>().map_err(|e| SourceError::InvalidColor {
                        value: s.clone(),
                        source: e,
                    })
                })
                .collect();
            let parsed = parsed?;
            if parsed.is_empty() {
                return Err(SourceError::EmptyColorList.into());
            }
            Ok((parsed, None))
        }
    }
}

/// Canvas dimensions for a run: explicit recipe values win, then the
/// source's own canvas, then (bug walks only) a 128x128 square. The engines
/// validate whatever comes out.
fn dimensions(recipe: &Recipe, canvas: Option<(usize, usize)>) -> (usize, usize) {
    let fallback = canvas.unwrap_or(match recipe.mode {
        Mode::Bug => (BUG_DEFAULT_SIZE, BUG_DEFAULT_SIZE),
        _ => (0, 0),
    });
    (
        recipe.width.unwrap_or(fallback.0),
        recipe.height.unwrap_or(fallback.1),
    )
}
