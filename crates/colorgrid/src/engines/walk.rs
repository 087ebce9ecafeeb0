//! Sequential random-walk fill: cover the whole grid with chained walks.
//!
//! One start color is chosen and every other color is sorted once by
//! distance to it; that order is then consumed strictly in sequence. The
//! walk steps to a uniformly random empty neighbor and drops the next color
//! there. When no empty neighbor exists the walk jumps to a uniformly random
//! empty cell anywhere on the grid and continues from there; the jump target
//! itself receives the next color, so isolated pockets always get filled and
//! the number of jumps is bounded by the number of placements.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{sort_by_distance_from, Rgb};
use crate::engines::{check_color_count, resolve_start_cell, resolve_start_color, Placement};
use crate::error::PlaceError;
use crate::grid::{Grid, Neighborhood};
use crate::rng;

/// Builder for the sequential random-walk fill engine.
///
/// Requires exactly `width * height` colors. The walk itself is random but
/// the color consumption order is fixed up front: ascending distance from
/// the start color, stable for ties, never re-sorted mid-run.
///
/// # Example
/// ```
/// use colorgrid::{Rgb, WalkFiller};
///
/// let colors = vec![
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 255, 255),
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 255, 0),
/// ];
/// let grid = WalkFiller::new(2, 2).seed(7).generate(&colors).unwrap();
///
/// assert!(grid.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct WalkFiller {
    width: usize,
    height: usize,
    seed: Option<u64>,
    start_cell: Option<(usize, usize)>,
    start_color: Option<usize>,
}

impl WalkFiller {
    /// Create a filler for a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
            start_cell: None,
            start_color: None,
        }
    }

    /// Seed the run for reproducible output.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from an explicit cell instead of a random one.
    #[inline]
    pub fn start_at(mut self, row: usize, col: usize) -> Self {
        self.start_cell = Some((row, col));
        self
    }

    /// Start with an explicit color (an index into the input list) instead
    /// of a random one.
    #[inline]
    pub fn start_color(mut self, index: usize) -> Self {
        self.start_color = Some(index);
        self
    }

    /// Run the engine, producing a fully filled grid.
    pub fn generate(&self, colors: &[Rgb]) -> Result<Grid, PlaceError> {
        let mut rng = rng::for_run(self.seed);
        self.generate_with(colors, &mut rng)
    }

    /// Run the engine against a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, colors: &[Rgb], rng: &mut R) -> Result<Grid, PlaceError> {
        self.generate_traced(colors, rng).map(|(grid, _)| grid)
    }

    /// Run and also record every placement in order.
    pub(crate) fn generate_traced<R: Rng>(
        &self,
        colors: &[Rgb],
        rng: &mut R,
    ) -> Result<(Grid, Vec<Placement>), PlaceError> {
        let mut grid = Grid::new(self.width, self.height)?;
        check_color_count(&grid, colors.len())?;

        let start = resolve_start_cell(&grid, self.start_cell, rng)?;
        let first = resolve_start_color(colors.len(), self.start_color, rng)?;

        let mut remaining = colors.to_vec();
        let start_color = remaining.remove(first);
        sort_by_distance_from(&mut remaining, start_color);

        grid.set(start, start_color);
        let mut trace = Vec::with_capacity(colors.len());
        trace.push(Placement {
            cell: start,
            color: start_color,
        });
        let mut current = start;

        for color in remaining {
            let open: Vec<usize> = grid
                .neighbors(current, Neighborhood::Orthogonal)
                .filter(|&n| grid.is_cell_empty(n))
                .collect();

            let next = match open.choose(rng) {
                Some(&cell) => cell,
                // Dead end: relocate to a random empty cell. One placement
                // per color keeps the walk finite even when every remaining
                // empty cell is walled off.
                None => {
                    let empty = grid.empty_cells();
                    match empty.choose(rng) {
                        Some(&cell) => cell,
                        None => {
                            debug_assert!(false, "colors remaining but grid is full");
                            break;
                        }
                    }
                }
            };

            grid.set(next, color);
            trace.push(Placement { cell: next, color });
            current = next;
        }

        debug_assert!(grid.is_full());
        Ok((grid, trace))
    }
}
