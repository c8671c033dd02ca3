//! Value types shared by the maze builder, the exit locator and the wave solver.

use std::fmt;

/// State of a single maze cell.
///
/// This enumeration holds the four discrete states a cell can take once a maze leaves the builder.
/// Distance labels computed while solving are never stored here; they live in the solver's own
/// label grid and are discarded once a path has been traced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Uncarved or permanent wall.
    ///
    /// This variant represents a cell that no path may cross. Every cell starts out as a wall.
    Wall,
    /// Carved open cell.
    ///
    /// This variant represents a cell the wave may expand into and a path may traverse.
    Passage,
    /// Boundary opening.
    ///
    /// This variant represents one of the two endpoints of the maze, stamped on the boundary by the
    /// builder.
    Exit,
    /// Painted path marker.
    ///
    /// This variant represents a cell overlaid by a solution path after painting.
    Path,
}

impl Cell {
    /// Returns the glyph used for this cell in map files.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Passage => '.',
            Self::Exit => 'X',
            Self::Path => '*',
        }
    }

    /// Returns the cell matching a map file glyph, if the glyph is known.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Passage),
            'X' => Some(Self::Exit),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

/// Address of a cell within a grid.
///
/// Coordinates are ordered row-major, so sorting a collection of them yields the same order in
/// which the exit locator scans a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index, counted from the top edge.
    pub row: usize,
    /// Zero-based column index, counted from the left edge.
    pub col: usize,
}

impl Coord {
    /// Builds a coordinate from a row and a column index.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns whether both indices are odd, i.e. whether the coordinate sits on the carving
    /// lattice.
    pub const fn is_lattice(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Returns the coordinate one step away in the given direction, without any upper bound
    /// checking.
    ///
    /// This function returns [`None`] only when the step would leave the grid through the top or
    /// the left edge. Callers that know the grid dimensions should prefer
    /// [`Grid::neighbor`](crate::grid::Grid::neighbor).
    pub const fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => match self.row.checked_sub(1) {
                Some(row) => Some(Self::new(row, self.col)),
                None => None,
            },
            Direction::Down => Some(Self::new(self.row.saturating_add(1), self.col)),
            Direction::Left => match self.col.checked_sub(1) {
                Some(col) => Some(Self::new(self.row, col)),
                None => None,
            },
            Direction::Right => Some(Self::new(self.row, self.col.saturating_add(1))),
        }
    }

    /// Returns whether the two coordinates are exactly one orthogonal step apart.
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal grid directions.
///
/// Diagonal moves do not exist anywhere in this crate; both the wave and the traced path move
/// strictly along rows and columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Order in which the wave visits the neighbors of a labelled cell.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Order in which the back-trace prefers neighbors when several share the wanted label.
    ///
    /// Fixing this order makes the traced path a pure function of the grid.
    pub const TRACE_ORDER: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
