//! allcolors - generative raster images that spend every color in a
//! palette exactly once.
//!
//! The placement engines live in the `colorgrid` crate; this library wraps
//! them with color sources (the full 15-bit palette, PNG pixels, hex
//! lists), PNG/APNG output writers, and a declarative recipe layer the CLI
//! drives. This library exposes modules for integration testing.

pub mod error;
pub mod output;
pub mod recipe;
pub mod run;
pub mod source;

pub use colorgrid;
