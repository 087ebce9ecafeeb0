//! The three placement engines.
//!
//! Each engine owns its configuration as a fluent builder, validates it up
//! front, and runs to completion as one sequential computation over a single
//! run-scoped RNG.

mod bug;
mod nearest;
mod walk;

pub use bug::{BugRun, BugWalker, ColorOrder};
pub use nearest::NearestPlacer;
pub use walk::WalkFiller;

use rand::Rng;

use crate::color::Rgb;
use crate::error::PlaceError;
use crate::grid::Grid;

/// One placement made during a run, in order. Recorded by the fill engines
/// so the invariant tests can recompute each step's candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) cell: usize,
    pub(crate) color: Rgb,
}

/// Resolve a configured or random start cell to a flat index.
pub(crate) fn resolve_start_cell<R: Rng>(
    grid: &Grid,
    start: Option<(usize, usize)>,
    rng: &mut R,
) -> Result<usize, PlaceError> {
    match start {
        Some((row, col)) => grid
            .index(row, col)
            .ok_or(PlaceError::InvalidStart { row, col }),
        None => Ok(rng.gen_range(0..grid.len())),
    }
}

/// Resolve a configured or random start color to an index into the list.
pub(crate) fn resolve_start_color<R: Rng>(
    len: usize,
    start: Option<usize>,
    rng: &mut R,
) -> Result<usize, PlaceError> {
    match start {
        Some(index) if index < len => Ok(index),
        Some(index) => Err(PlaceError::InvalidStartColor { index, len }),
        None => Ok(rng.gen_range(0..len)),
    }
}

/// Check the fill-engine contract: exactly one color per cell.
pub(crate) fn check_color_count(grid: &Grid, colors: usize) -> Result<(), PlaceError> {
    if colors != grid.len() {
        return Err(PlaceError::ColorCountMismatch {
            expected: grid.len(),
            actual: colors,
        });
    }
    Ok(())
}
