//! colorgrid: color placement engines on 2-D pixel grids.
//!
//! This crate generates raster images in which a fixed multiset of colors is
//! placed onto a pixel grid, one placement per color, under three different
//! heuristics:
//!
//! - [`NearestPlacer`] grows a single connected region from a seed pixel,
//!   always placing the remaining color that best matches the filled
//!   neighbors of some frontier cell. Needs exactly one color per cell and
//!   fills the grid completely.
//! - [`WalkFiller`] covers the grid with chained random walks, consuming
//!   colors in ascending distance from a start color. Also needs exactly one
//!   color per cell.
//! - [`BugWalker`] sends a single walker across the grid writing one color
//!   per step, revisits allowed, until the colors or an iteration budget run
//!   out. Can capture a snapshot after every step for animation.
//!
//! # Quick start
//!
//! ```
//! use colorgrid::{NearestPlacer, Rgb};
//!
//! let colors = vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(255, 255, 255),
//!     Rgb::new(255, 0, 0),
//!     Rgb::new(0, 255, 0),
//! ];
//!
//! let grid = NearestPlacer::new(2, 2).seed(42).generate(&colors).unwrap();
//!
//! assert!(grid.is_full());
//! assert_eq!(grid.to_rgb_bytes().len(), 2 * 2 * 3);
//! ```
//!
//! # Determinism
//!
//! Each run draws from a single run-scoped RNG. Every engine takes an
//! optional `u64` seed; a seeded run is byte-for-byte reproducible across
//! invocations with the same configuration. Distance comparisons are done on
//! squared Euclidean distances in integer arithmetic, so selection and sort
//! order never depend on floating-point rounding.
//!
//! # Scope
//!
//! The crate is deliberately a reference implementation: the nearest-color
//! engine rescans all (frontier cell, remaining color) pairs at every step,
//! which is what pins its tie-breaking order. Image decoding and encoding
//! live with the caller; the engines only consume an ordered `Vec<Rgb>` and
//! produce a [`Grid`] (plus snapshot grids for the bug walker).

pub mod color;
pub mod engines;
pub mod error;
pub mod grid;
pub mod rng;


pub use color::{sort_by_distance_from, Rgb};
pub use engines::{BugRun, BugWalker, ColorOrder, NearestPlacer, WalkFiller};
pub use error::{ParseColorError, PlaceError};
pub use grid::{Grid, Neighborhood, Neighbors};
