//! Exit location and validation.
//!
//! This module finds the boundary openings of a maze and decides whether an opening is sealed off
//! from the interior, which makes the maze unsolvable before any search is attempted.

use crate::{
    grid::Grid,
    types::{Cell, Coord, Direction},
};

/// Maximum number of exits the locator reports.
pub const MAX_EXITS: usize = 2;

/// Collects the coordinates of the first [`MAX_EXITS`] exit cells in row-major order.
///
/// The scan stops as soon as the limit is reached, so any further exit cells are never reported.
pub fn find_exits(grid: &Grid) -> Vec<Coord> {
    grid.cells()
        .filter(|(_, cell)| *cell == Cell::Exit)
        .map(|(coord, _)| coord)
        .take(MAX_EXITS)
        .collect()
}

/// Returns the direction pointing out of the grid from a non-corner boundary coordinate.
///
/// Bottom and top rows take precedence over the side columns, which only matters for grids one
/// cell high or wide.
const fn outward(grid: &Grid, coord: Coord) -> Option<Direction> {
    if coord.row + 1 == grid.rows() {
        Some(Direction::Down)
    } else if coord.row == 0 {
        Some(Direction::Up)
    } else if coord.col + 1 == grid.cols() {
        Some(Direction::Right)
    } else if coord.col == 0 {
        Some(Direction::Left)
    } else {
        None
    }
}

/// Returns whether an exit at `coord` is sealed off from the maze interior.
///
/// Corners are always sealed. Any other boundary coordinate is sealed unless the single cell
/// immediately inward of it is a [`Cell::Passage`]. Interior coordinates are never sealed, and
/// coordinates outside the grid always are.
pub fn is_sealed(grid: &Grid, coord: Coord) -> bool {
    if !grid.contains(coord) || grid.is_corner(coord) {
        return true;
    }

    let Some(edge) = outward(grid, coord) else {
        return false;
    };

    grid.neighbor(coord, edge.opposite())
        .and_then(|inward| grid.get(inward))
        != Some(Cell::Passage)
}
