//! Bounded random walk with revisits: the "bug".
//!
//! A single walker writes one color per step into whatever cell it stands
//! on, filled or not, then steps to a uniformly random in-bounds neighbor.
//! The walk stops when the colors run out or the iteration budget is
//! reached, whichever comes first, and can capture a snapshot of the grid
//! after each step for animation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{sort_by_distance_from, Rgb};
use crate::engines::{resolve_start_cell, resolve_start_color};
use crate::error::PlaceError;
use crate::grid::{Grid, Neighborhood};
use crate::rng;

/// How the bug consumes its color list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    /// Pull out a start color (random or configured) and sort the rest by
    /// ascending distance to it.
    #[default]
    NearestFirst,
    /// Walk the list exactly as given.
    AsGiven,
}

/// The outcome of a bug walk.
#[derive(Debug, Clone)]
pub struct BugRun {
    /// Final grid state. Not necessarily full, and cells may have been
    /// overwritten along the way.
    pub grid: Grid,
    /// One grid copy per captured step, in step order. Empty when
    /// snapshotting is off.
    pub snapshots: Vec<Grid>,
    /// Number of steps taken: `min(maxiters, colors.len())`.
    pub steps: usize,
}

/// Builder for the bounded random walk.
///
/// Unlike the fill engines, the color count is unconstrained: the walk ends
/// early when colors run out, and revisited cells are simply overwritten.
///
/// # Example
/// ```
/// use colorgrid::{BugWalker, Rgb};
///
/// let colors = vec![Rgb::new(255, 0, 0); 5];
/// let run = BugWalker::new(3, 3)
///     .seed(7)
///     .maxiters(3)
///     .snapshots(true)
///     .generate(&colors)
///     .unwrap();
///
/// assert_eq!(run.steps, 3);
/// assert_eq!(run.snapshots.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BugWalker {
    width: usize,
    height: usize,
    maxiters: Option<usize>,
    order: ColorOrder,
    seed: Option<u64>,
    start_cell: Option<(usize, usize)>,
    start_color: Option<usize>,
    snapshots: bool,
    snapshot_every: usize,
}

impl BugWalker {
    /// Create a walker on a `width` x `height` grid.
    ///
    /// Defaults: iterate through the whole color list, nearest-first
    /// ordering, random start cell and color, no snapshots.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            maxiters: None,
            order: ColorOrder::default(),
            seed: None,
            start_cell: None,
            start_color: None,
            snapshots: false,
            snapshot_every: 1,
        }
    }

    /// Cap the number of steps. Zero is rejected at run time; the default
    /// is the length of the color list.
    #[inline]
    pub fn maxiters(mut self, maxiters: usize) -> Self {
        self.maxiters = Some(maxiters);
        self
    }

    /// Select the color consumption order.
    #[inline]
    pub fn order(mut self, order: ColorOrder) -> Self {
        self.order = order;
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
    /// of a random one. Only meaningful with [`ColorOrder::NearestFirst`].
    #[inline]
    pub fn start_color(mut self, index: usize) -> Self {
        self.start_color = Some(index);
        self
    }

    /// Capture a grid snapshot after each step.
    #[inline]
    pub fn snapshots(mut self, enabled: bool) -> Self {
        self.snapshots = enabled;
        self
    }

    /// Capture only every `n`-th step (the final state is always captured).
    /// The default of 1 snapshots every step.
    #[inline]
    pub fn snapshot_every(mut self, n: usize) -> Self {
        self.snapshot_every = n.max(1);
        self
    }

    /// Run the walk.
    ///
    /// Fails before touching the grid on invalid dimensions, a 1x1 grid
    /// (the walker would have nowhere to step), a zero iteration budget, or
    /// an out-of-range configured start.
    pub fn generate(&self, colors: &[Rgb]) -> Result<BugRun, PlaceError> {
        let mut rng = rng::for_run(self.seed);
        self.generate_with(colors, &mut rng)
    }

    /// Run the walk against a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, colors: &[Rgb], rng: &mut R) -> Result<BugRun, PlaceError> {
        let mut grid = Grid::new(self.width, self.height)?;
        if grid.len() == 1 {
            return Err(PlaceError::DegenerateGrid);
        }
        if self.maxiters == Some(0) {
            return Err(PlaceError::InvalidIterationBudget);
        }

        let start = resolve_start_cell(&grid, self.start_cell, rng)?;

        let sequence = match self.order {
            ColorOrder::AsGiven => colors.to_vec(),
            ColorOrder::NearestFirst if colors.is_empty() => Vec::new(),
            ColorOrder::NearestFirst => {
                let first = resolve_start_color(colors.len(), self.start_color, rng)?;
                let mut rest = colors.to_vec();
                let start_color = rest.remove(first);
                sort_by_distance_from(&mut rest, start_color);
                rest.insert(0, start_color);
                rest
            }
        };

        let steps = self.maxiters.unwrap_or(sequence.len()).min(sequence.len());
        let mut snapshots = Vec::new();
        let mut last_captured = None;
        let mut current = start;

        for (step, &color) in sequence.iter().take(steps).enumerate() {
            grid.set(current, color);

            if self.snapshots && step % self.snapshot_every == 0 {
                snapshots.push(grid.clone());
                last_captured = Some(step);
            }

            let next: Vec<usize> = grid.neighbors(current, Neighborhood::Orthogonal).collect();
            current = next.choose(rng).copied().unwrap_or(current);
        }

        // Always end on the final state when sampling skipped it.
        if self.snapshots && steps > 0 && last_captured != Some(steps - 1) {
            snapshots.push(grid.clone());
        }

        Ok(BugRun {
            grid,
            snapshots,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn five_colors() -> Vec<Rgb> {
        vec![
            Rgb::new(0, 0, 0),
            Rgb::new(50, 50, 50),
            Rgb::new(100, 100, 100),
            Rgb::new(150, 150, 150),
            Rgb::new(200, 200, 200),
        ]
    }

    #[test]
    fn test_budget_caps_steps_and_snapshots() {
        let run = BugWalker::new(3, 3)
            .seed(1)
            .maxiters(3)
            .snapshots(true)
            .generate(&five_colors())
            .unwrap();

        assert_eq!(run.steps, 3);
        assert_eq!(run.snapshots.len(), 3);
        // Three writes can cover at most three cells, fewer on revisit.
        assert!(run.grid.filled_count() <= 3);
        assert!(run.grid.filled_count() >= 1);
    }

    #[test]
    fn test_color_exhaustion_ends_walk() {
        let run = BugWalker::new(4, 4)
            .seed(2)
            .maxiters(1000)
            .generate(&five_colors())
            .unwrap();

        assert_eq!(run.steps, 5);
    }

    #[test]
    fn test_default_budget_runs_all_colors() {
        let run = BugWalker::new(4, 4).seed(3).generate(&five_colors()).unwrap();
        assert_eq!(run.steps, 5);
    }

    #[test]
    fn test_zero_maxiters_rejected() {
        let result = BugWalker::new(3, 3).maxiters(0).generate(&five_colors());
        assert!(matches!(result, Err(PlaceError::InvalidIterationBudget)));
    }

    #[test]
    fn test_one_by_one_grid_rejected() {
        let result = BugWalker::new(1, 1).generate(&five_colors());
        assert!(matches!(result, Err(PlaceError::DegenerateGrid)));
    }

    #[test]
    fn test_empty_color_list_takes_no_steps() {
        let run = BugWalker::new(3, 3).seed(4).generate(&[]).unwrap();

        assert_eq!(run.steps, 0);
        assert_eq!(run.grid.filled_count(), 0);
        assert!(run.snapshots.is_empty());
    }

    #[test]
    fn test_snapshots_off_by_default() {
        let run = BugWalker::new(3, 3).seed(5).generate(&five_colors()).unwrap();
        assert!(run.snapshots.is_empty());
    }

    #[test]
    fn test_snapshots_differ_by_at_most_one_cell() {
        let colors: Vec<Rgb> = (0..40)
            .map(|i| Rgb::new((i * 6) as u8, (i * 2) as u8, 9))
            .collect();
        let run = BugWalker::new(5, 5)
            .seed(6)
            .snapshots(true)
            .generate(&colors)
            .unwrap();

        assert_eq!(run.snapshots.len(), run.steps);
        for pair in run.snapshots.windows(2) {
            let changed = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1, "snapshots differ in {} cells", changed);
        }
        assert_eq!(run.snapshots.last().unwrap(), &run.grid);
    }

    #[test]
    fn test_snapshot_sampling_keeps_final_state() {
        let colors: Vec<Rgb> = (0..25).map(|i| Rgb::new(i as u8, 0, 0)).collect();
        let run = BugWalker::new(5, 5)
            .seed(7)
            .snapshots(true)
            .snapshot_every(10)
            .generate(&colors)
            .unwrap();

        // Steps 0, 10, 20 are sampled, plus the final state at step 24.
        assert_eq!(run.snapshots.len(), 4);
        assert_eq!(run.snapshots.last().unwrap(), &run.grid);
    }

    #[test]
    fn test_as_given_order_writes_first_color_first() {
        let colors = five_colors();
        let run = BugWalker::new(3, 3)
            .seed(8)
            .order(ColorOrder::AsGiven)
            .start_at(1, 1)
            .maxiters(1)
            .snapshots(true)
            .generate(&colors)
            .unwrap();

        assert_eq!(run.grid.get(4), Some(colors[0]));
        assert_eq!(run.snapshots.len(), 1);
    }

    #[test]
    fn test_nearest_first_starts_with_chosen_color() {
        let colors = vec![
            Rgb::new(200, 0, 0),
            Rgb::new(0, 200, 0),
            Rgb::new(0, 0, 200),
        ];
        let run = BugWalker::new(2, 3)
            .seed(9)
            .start_at(0, 0)
            .start_color(2)
            .maxiters(1)
            .generate(&colors)
            .unwrap();

        assert_eq!(run.grid.get(0), Some(Rgb::new(0, 0, 200)));
    }

    #[test]
    fn test_walker_stays_in_bounds() {
        // A 2x1 grid only ever allows vertical moves; every write must land
        // on one of its two cells.
        let colors: Vec<Rgb> = (0..30).map(|i| Rgb::new(i as u8, i as u8, 0)).collect();
        let run = BugWalker::new(1, 2).seed(10).generate(&colors).unwrap();

        assert_eq!(run.steps, 30);
        assert_eq!(run.grid.filled_count(), 2);
    }

    #[test]
    fn test_same_seed_same_run() {
        let colors: Vec<Rgb> = (0..50)
            .map(|i| Rgb::new((i * 5) as u8, (i * 3) as u8, (i * 2) as u8))
            .collect();

        let a = BugWalker::new(6, 6)
            .seed(123)
            .snapshots(true)
            .generate(&colors)
            .unwrap();
        let b = BugWalker::new(6, 6)
            .seed(123)
            .snapshots(true)
            .generate(&colors)
            .unwrap();

        assert_eq!(a.grid, b.grid);
        assert_eq!(a.snapshots.len(), b.snapshots.len());
        for (x, y) in a.snapshots.iter().zip(&b.snapshots) {
            assert_eq!(x, y);
        }
    }
}
