//! Maze construction.
//!
//! This module allocates wall-filled grids and carves them into perfect mazes with the binary-tree
//! algorithm. Logical maze cells sit on the odd lattice, where both the row and the column index
//! are odd; every other cell starts as wall and is only opened when it separates two lattice cells
//! joined by the carving, or when an exit is stamped onto the boundary.

use log::{debug, trace};
use rand::{thread_rng, Rng};

use crate::{
    grid::Grid,
    types::{Cell, Coord, Direction},
};

/// Allocates a `rows` by `cols` grid where every cell is a wall.
pub fn create(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}

/// Carves a perfect maze using the thread-local random number generator.
///
/// See [`carve_with`] for the carving rules.
pub fn carve(rows: usize, cols: usize, random_exit: bool) -> Grid {
    carve_with(rows, cols, random_exit, &mut thread_rng())
}

/// Carves a perfect maze, drawing every random choice from `rng`.
///
/// Every lattice cell is opened, then each one independently flips a coin between knocking down
/// the wall above it and the wall to its right. When the chosen wall would open onto the outer
/// ring, the other direction is used instead; the top-right lattice cell has neither and stays as
/// it is. The result is a spanning tree over the lattice.
///
/// Two boundary cells are then stamped as exits. With `random_exit` both are drawn uniformly from
/// the boundary and redrawn until distinct, as long as the grid has at least two boundary cells.
/// Otherwise the entry is `(0, cols - 2)` and the exit `(rows - 1, 1)`, with both columns clamped
/// into range on grids narrower than three columns.
pub fn carve_with<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    random_exit: bool,
    rng: &mut R,
) -> Grid {
    let mut grid = create(rows, cols);
    if grid.is_empty() {
        debug!("refusing to carve an empty {rows}x{cols} grid");
        return grid;
    }

    let lattice: Vec<Coord> = grid
        .cells()
        .map(|(coord, _)| coord)
        .filter(|coord| coord.is_lattice())
        .collect();

    for cell in &lattice {
        grid.set(*cell, Cell::Passage);
    }
    for cell in lattice {
        carve_cell(&mut grid, cell, rng);
    }

    let (entry, exit) = if random_exit {
        random_exits(&grid, rng)
    } else {
        fixed_exits(&grid)
    };
    grid.set(entry, Cell::Exit);
    grid.set(exit, Cell::Exit);

    debug!("carved {rows}x{cols} maze with exits at {entry} and {exit}");

    grid
}

/// Opens the wall above or to the right of a single lattice cell.
fn carve_cell<R: Rng + ?Sized>(grid: &mut Grid, cell: Coord, rng: &mut R) {
    let may_go_up = cell.row > 1;
    let may_go_right = cell.col + 2 < grid.cols();

    let chosen = if rng.gen_bool(0.5) {
        Direction::Up
    } else {
        Direction::Right
    };
    let direction = match chosen {
        Direction::Up if may_go_up => Some(Direction::Up),
        Direction::Right if may_go_right => Some(Direction::Right),
        _ if may_go_up => Some(Direction::Up),
        _ if may_go_right => Some(Direction::Right),
        _ => None,
    };

    if let Some(wall) = direction.and_then(|direction| grid.neighbor(cell, direction)) {
        trace!("opening {wall} next to {cell}");
        grid.set(wall, Cell::Passage);
    }
}

/// Returns the deterministic entry and exit of a non-empty grid.
fn fixed_exits(grid: &Grid) -> (Coord, Coord) {
    let last_col = grid.cols().saturating_sub(1);

    (
        Coord::new(0, grid.cols().saturating_sub(2)),
        Coord::new(grid.rows().saturating_sub(1), last_col.min(1)),
    )
}

/// Draws two boundary coordinates, redrawing the second while it repeats the first.
fn random_exits<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (Coord, Coord) {
    let entry = random_boundary(grid, rng);
    let mut exit = random_boundary(grid, rng);

    while exit == entry && grid.boundary_len() > 1 {
        trace!("exit {exit} repeats the entry, drawing again");
        exit = random_boundary(grid, rng);
    }

    (entry, exit)
}

/// Draws a uniformly random coordinate on a uniformly chosen edge of a non-empty grid.
fn random_boundary<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Coord {
    let last_row = grid.rows().saturating_sub(1);
    let last_col = grid.cols().saturating_sub(1);

    if rng.gen_bool(0.5) {
        let row = if rng.gen_bool(0.5) { 0 } else { last_row };
        Coord::new(row, rng.gen_range(0..=last_col))
    } else {
        let col = if rng.gen_bool(0.5) { 0 } else { last_col };
        Coord::new(rng.gen_range(0..=last_row), col)
    }
}

/// Knocks down one standing wall above or to the right of `coord`.
///
/// The candidates are the wall above, when `coord` is below the second row, and the wall to the
/// right, when `coord` is left of the last two columns. Only candidates that are still walls are
/// considered, and one is picked uniformly. The grid is returned untouched when there is none.
#[must_use]
pub fn open_wall<R: Rng + ?Sized>(mut grid: Grid, coord: Coord, rng: &mut R) -> Grid {
    let mut candidates = Vec::with_capacity(2);

    if coord.row > 1 {
        candidates.extend(grid.neighbor(coord, Direction::Up));
    }
    if coord.col + 2 < grid.cols() {
        candidates.extend(grid.neighbor(coord, Direction::Right));
    }
    candidates.retain(|candidate| grid.get(*candidate) == Some(Cell::Wall));

    if candidates.is_empty() {
        return grid;
    }

    if let Some(wall) = candidates.get(rng.gen_range(0..candidates.len())).copied() {
        grid.set(wall, Cell::Passage);
    }

    grid
}
