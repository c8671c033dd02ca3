//! Binary-tree maze generation and wave-expansion solving.
//!
//! A maze is built in four value-in, value-out stages:
//!
//! 1. [`carve`] allocates a wall-filled [`Grid`], opens a perfect maze over its odd lattice and
//!    stamps two boundary cells as exits.
//! 2. [`find_exits`] and [`is_sealed`] locate the exits and reject those with no way inward.
//! 3. [`solve`] grows distance labels from one exit and walks them back from the other, yielding a
//!    shortest [`Path`].
//! 4. [`paint`] overlays that path onto the grid.
//!
//! The [`app`] module drives the same stages from the `wavemaze` command-line binary, reading and
//! writing grids through [`map_file`].

pub mod app;
pub mod builder;
pub mod cli;
pub mod exits;
pub mod grid;
pub mod logging;
pub mod map_file;
pub mod painter;
#[cfg(test)]
mod scratch;
pub mod solver;
pub mod types;

pub use builder::{carve, carve_with, create};
pub use exits::{find_exits, is_sealed};
pub use grid::Grid;
pub use painter::paint;
pub use solver::{find_path, solve, Path, Unsolvable};
pub use types::{Cell, Coord, Direction};
