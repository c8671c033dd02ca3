//! Path overlay.

use crate::{grid::Grid, solver::Path, types::Cell};

/// Marks every cell on `path` as [`Cell::Path`] and returns the grid.
///
/// Cells off the path, exits included, keep their state. A missing or empty path hands the grid
/// back unchanged.
#[must_use]
pub fn paint(mut grid: Grid, path: Option<&Path>) -> Grid {
    for coord in path.into_iter().flatten() {
        grid.set(*coord, Cell::Path);
    }

    grid
}
