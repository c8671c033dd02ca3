//! Maze grid storage.
//!
//! This module contains the [`Grid`] type, a fixed-size rectangular array of [`Cell`]s together
//! with the bounds-checked accessors and neighbor arithmetic every other stage relies on.

use std::fmt;

use color_eyre::eyre::{ensure, Result};

use crate::types::{Cell, Coord, Direction};

/// Rectangular maze grid.
///
/// This structure stores its cells in a single row-major vector, which makes a jagged grid
/// unrepresentable. Its dimensions are fixed at construction; every stage of the pipeline takes a
/// grid by value or by shared reference and hands back a new one, so no two stages ever alias the
/// same storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows in the grid.
    rows: usize,
    /// Number of columns in the grid.
    cols: usize,
    /// Cell states stored row after row.
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid of the given dimensions with every cell a [`Cell::Wall`].
    ///
    /// A zero dimension yields an empty grid. It holds no cells and is trivially all-wall.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Cell::Wall)
    }

    /// Allocates a grid of the given dimensions with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        let (rows, cols) = if rows == 0 || cols == 0 {
            (0, 0)
        } else {
            (rows, cols)
        };

        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// Builds a grid from a sequence of rows.
    ///
    /// # Errors
    ///
    /// This function returns an error if the rows do not all share the length of the first one.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();

        for (index, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == cols,
                "row {index} has {} cells, expected {cols}",
                row.len()
            );
        }

        if cols == 0 {
            return Ok(Self::new(0, 0));
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns whether the grid holds no cells at all.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns whether the coordinate lies within the grid.
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Converts a coordinate into an index into the flat cell storage.
    const fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Returns the cell at the given coordinate, or [`None`] when it is out of range.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Overwrites the cell at the given coordinate. Out-of-range coordinates are ignored.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self
            .index(coord)
            .and_then(|index| self.cells.get_mut(index))
        {
            *slot = cell;
        }
    }

    /// Returns the grid with the cell at the given coordinate overwritten.
    #[must_use]
    pub fn with(mut self, coord: Coord, cell: Cell) -> Self {
        self.set(coord, cell);
        self
    }

    /// Returns a single row of cells.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.iter_rows().nth(index)
    }

    /// Iterates over the rows of the grid from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterates over every coordinate paired with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols.max(1);

        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Coord::new(index / cols, index % cols), *cell))
    }

    /// Counts the cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    /// Returns the in-range coordinate one step away from `coord` in the given direction.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.contains(coord) {
            return None;
        }

        coord
            .step(direction)
            .filter(|neighbor| self.contains(*neighbor))
    }

    /// Iterates over the in-range orthogonal neighbors of `coord`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(coord, direction))
    }

    /// Returns whether the coordinate lies on the outermost ring of the grid.
    pub const fn is_boundary(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.row == 0
                || coord.col == 0
                || coord.row + 1 == self.rows
                || coord.col + 1 == self.cols)
    }

    /// Returns whether the coordinate is one of the four corners of the grid.
    pub const fn is_corner(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.row == 0 || coord.row + 1 == self.rows)
            && (coord.col == 0 || coord.col + 1 == self.cols)
    }

    /// Returns the number of distinct boundary cells.
    pub const fn boundary_len(&self) -> usize {
        if self.rows <= 2 || self.cols <= 2 {
            self.rows * self.cols
        } else {
            2 * (self.rows + self.cols) - 4
        }
    }
}

impl fmt::Display for Grid {
    /// Renders the grid one row per line using the map file glyphs, without a trailing newline.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            for cell in row {
                write!(formatter, "{}", cell.glyph())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_wall() {
        let grid = Grid::new(3, 4);

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count(Cell::Wall), 12);
        assert!(grid.iter_rows().all(|row| row.len() == 4));
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
            let grid = Grid::new(rows, cols);

            assert!(grid.is_empty(), "{rows}x{cols} should be empty");
            assert_eq!(grid.cells().count(), 0);
            assert_eq!(grid.get(Coord::new(0, 0)), None);
            assert_eq!(grid.to_string(), "");
        }
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut grid = Grid::new(2, 2);

        grid.set(Coord::new(1, 0), Cell::Passage);
        grid.set(Coord::new(5, 5), Cell::Passage);

        assert_eq!(grid.get(Coord::new(1, 0)), Some(Cell::Passage));
        assert_eq!(grid.get(Coord::new(0, 2)), None);
        assert_eq!(grid.count(Cell::Passage), 1);
    }

    #[test]
    fn test_from_rows_rejects_jagged_input() {
        let jagged = vec![vec![Cell::Wall; 3], vec![Cell::Wall; 2]];

        assert!(Grid::from_rows(jagged).is_err());
    }

    #[test]
    fn test_from_rows_preserves_layout() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Wall, Cell::Exit],
            vec![Cell::Passage, Cell::Path],
        ])
        .expect("rectangular rows should build a grid");

        assert_eq!(grid.get(Coord::new(0, 1)), Some(Cell::Exit));
        assert_eq!(grid.get(Coord::new(1, 0)), Some(Cell::Passage));
        assert_eq!(grid.row(1), Some([Cell::Passage, Cell::Path].as_slice()));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::new(2, 3);
        let coords: Vec<Coord> = grid.cells().map(|(coord, _)| coord).collect();

        assert_eq!(coords.first(), Some(&Coord::new(0, 0)));
        assert_eq!(coords.get(3), Some(&Coord::new(1, 0)));
        assert_eq!(coords.last(), Some(&Coord::new(1, 2)));
    }

    #[test]
    fn test_neighbors_respect_bounds() {
        let grid = Grid::new(3, 3);

        assert_eq!(grid.neighbors(Coord::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors(Coord::new(0, 1)).count(), 3);
        assert_eq!(grid.neighbors(Coord::new(1, 1)).count(), 4);
        assert_eq!(grid.neighbor(Coord::new(2, 2), Direction::Down), None);
        assert_eq!(grid.neighbor(Coord::new(2, 2), Direction::Right), None);
        assert_eq!(grid.neighbor(Coord::new(9, 9), Direction::Up), None);
    }

    #[test]
    fn test_boundary_and_corner_predicates() {
        let grid = Grid::new(4, 5);

        assert!(grid.is_corner(Coord::new(0, 0)));
        assert!(grid.is_corner(Coord::new(0, 4)));
        assert!(grid.is_corner(Coord::new(3, 0)));
        assert!(grid.is_corner(Coord::new(3, 4)));
        assert!(!grid.is_corner(Coord::new(0, 2)));

        assert!(grid.is_boundary(Coord::new(0, 2)));
        assert!(grid.is_boundary(Coord::new(2, 4)));
        assert!(!grid.is_boundary(Coord::new(1, 1)));
        assert!(!grid.is_boundary(Coord::new(4, 0)), "out of range is not boundary");
    }

    #[test]
    fn test_boundary_len_matches_predicate() {
        for (rows, cols) in [(1, 1), (1, 4), (2, 2), (3, 3), (5, 7), (4, 2)] {
            let grid = Grid::new(rows, cols);
            let counted = grid
                .cells()
                .filter(|(coord, _)| grid.is_boundary(*coord))
                .count();

            assert_eq!(grid.boundary_len(), counted, "{rows}x{cols}");
        }
    }

    #[test]
    fn test_display_uses_glyphs() {
        let grid = Grid::new(2, 3)
            .with(Coord::new(0, 1), Cell::Exit)
            .with(Coord::new(1, 1), Cell::Passage)
            .with(Coord::new(1, 2), Cell::Path);

        assert_eq!(grid.to_string(), "#X#\n#.*");
    }
}
