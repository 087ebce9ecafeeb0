//! Nearest-color placement: grow one region, always choosing the best
//! (cell, color) pair.
//!
//! Starting from a seed cell and color, the engine repeatedly scores every
//! pairing of a frontier cell (an empty cell touching the filled region)
//! with a remaining color, and places the pair whose color is closest to the
//! cell's already-filled neighbors. The score of a pair is the minimum
//! distance from the candidate color to any filled neighbor of the cell.
//!
//! Scoring is a full scan of frontier x remaining at every step. That is
//! quadratic and slow for large palettes (minutes for the full 15-bit set);
//! the scan order is what pins tie-breaking, so any internal speedup must
//! select the exact same pair.

use rand::Rng;

use crate::color::Rgb;
use crate::engines::{check_color_count, resolve_start_cell, resolve_start_color, Placement};
use crate::error::PlaceError;
use crate::grid::{Grid, Neighborhood};
use crate::rng;

/// Builder for the nearest-color placement engine.
///
/// Requires exactly `width * height` colors. Every option defaults to the
/// random choice; a seeded run is fully reproducible.
///
/// # Example
/// ```
/// use colorgrid::{NearestPlacer, Rgb};
///
/// let colors = vec![
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 255, 255),
///     Rgb::new(255, 0, 0),
///     Rgb::new(0, 255, 0),
/// ];
/// let grid = NearestPlacer::new(2, 2).seed(7).generate(&colors).unwrap();
///
/// assert!(grid.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct NearestPlacer {
    width: usize,
    height: usize,
    neighborhood: Neighborhood,
    seed: Option<u64>,
    start_cell: Option<(usize, usize)>,
    start_color: Option<usize>,
}

impl NearestPlacer {
    /// Create a placer for a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            neighborhood: Neighborhood::default(),
            seed: None,
            start_cell: None,
            start_color: None,
        }
    }

    /// Select the adjacency used for both the frontier and the distance
    /// metric. Defaults to [`Neighborhood::Orthogonal`].
    #[inline]
    pub fn neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
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
    ///
    /// Fails before touching the grid if the dimensions are invalid, the
    /// color count does not equal the cell count, or a configured start is
    /// out of range.
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
        let seed_color = remaining.remove(first);
        grid.set(start, seed_color);
        let mut trace = Vec::with_capacity(colors.len());
        trace.push(Placement {
            cell: start,
            color: seed_color,
        });

        let mut frontier = Frontier::new(grid.len());
        for neighbor in grid.neighbors(start, self.neighborhood) {
            frontier.push(neighbor);
        }

        while !remaining.is_empty() {
            let Some((cell, color_index)) = self.best_pair(&grid, &frontier, &remaining) else {
                // The filled region always touches an empty cell while
                // colors remain, so the frontier cannot run dry.
                debug_assert!(false, "frontier exhausted with colors remaining");
                break;
            };

            let color = remaining.remove(color_index);
            grid.set(cell, color);
            trace.push(Placement { cell, color });

            frontier.remove(cell);
            for neighbor in grid.neighbors(cell, self.neighborhood) {
                if grid.is_cell_empty(neighbor) {
                    frontier.push(neighbor);
                }
            }
        }

        debug_assert!(grid.is_full());
        Ok((grid, trace))
    }

    /// Scan every (frontier cell, remaining color) pair and return the one
    /// whose color is closest to the cell's filled neighbors.
    ///
    /// The frontier is visited in insertion order and colors in list order;
    /// a strictly smaller distance is required to displace the incumbent, so
    /// the first-encountered pair wins ties.
    fn best_pair(&self, grid: &Grid, frontier: &Frontier, remaining: &[Rgb]) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, u32)> = None;

        for &cell in frontier.iter() {
            let filled: Vec<Rgb> = grid
                .neighbors(cell, self.neighborhood)
                .filter_map(|n| grid.get(n))
                .collect();
            debug_assert!(!filled.is_empty(), "frontier cell with no filled neighbor");

            for (color_index, &color) in remaining.iter().enumerate() {
                let distance = filled
                    .iter()
                    .map(|&f| f.distance_squared(color))
                    .min()
                    .unwrap_or(u32::MAX);

                if best.map_or(true, |(_, _, d)| distance < d) {
                    best = Some((cell, color_index, distance));
                }
            }
        }

        best.map(|(cell, color_index, _)| (cell, color_index))
    }
}

/// The set of empty cells adjacent to the filled region.
///
/// Kept as an insertion-ordered list with a membership mask: a cell enters
/// the frontier once, when first exposed, and leaves it only by being
/// filled. The stable order makes the tie-break deterministic.
#[derive(Debug)]
struct Frontier {
    order: Vec<usize>,
    member: Vec<bool>,
}

impl Frontier {
    fn new(cells: usize) -> Self {
        Self {
            order: Vec::new(),
            member: vec![false; cells],
        }
    }

    fn push(&mut self, cell: usize) {
        if !self.member[cell] {
            self.member[cell] = true;
            self.order.push(cell);
        }
    }

    fn remove(&mut self, cell: usize) {
        if self.member[cell] {
            self.member[cell] = false;
            self.order.retain(|&c| c != cell);
        }
    }

    fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.order.iter()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }
}
