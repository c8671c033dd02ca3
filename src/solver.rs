//! Wave-expansion maze solver.
//!
//! This module labels every reachable open cell with its distance from one exit, growing the
//! labels one frontier at a time, then walks strictly decreasing labels back from the other exit to
//! recover a shortest path between the two.

use std::fmt;

use log::{debug, warn};

use crate::{
    exits::{find_exits, is_sealed, MAX_EXITS},
    grid::Grid,
    types::{Cell, Coord, Direction},
};

/// Reason a grid could not be solved.
///
/// None of these are failures of the solver itself; they describe mazes that simply have no path
/// to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsolvable {
    /// The grid does not hold exactly two exits.
    ///
    /// This variant carries the number of exits found, which never exceeds [`MAX_EXITS`] because
    /// the locator stops scanning once it has found that many.
    ExitCount(usize),
    /// One of the exits has no open cell leading inward.
    ///
    /// This variant carries the coordinate of the first sealed exit in scan order.
    SealedExit(Coord),
    /// The wave died out before reaching the second exit.
    Disconnected,
}

impl fmt::Display for Unsolvable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExitCount(count) => {
                write!(formatter, "expected {MAX_EXITS} exits, found {count}")
            }
            Self::SealedExit(coord) => write!(formatter, "exit at {coord} is sealed"),
            Self::Disconnected => write!(formatter, "exits are not connected"),
        }
    }
}

impl std::error::Error for Unsolvable {}

/// Shortest path between the two exits of a maze.
///
/// This structure holds the path from the destination exit back to the source exit, both
/// inclusive. Consecutive coordinates are always one orthogonal step apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    /// Coordinates ordered from the destination to the source.
    coords: Vec<Coord>,
}

impl Path {
    /// Returns the number of cells on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns whether the path holds no cells.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the coordinates ordered from the destination to the source.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterates over the coordinates from the destination to the source.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    /// Returns whether the coordinate lies on the path.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Returns the exit the path starts from.
    pub fn destination(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    /// Returns the exit the wave was grown from.
    pub fn source(&self) -> Option<Coord> {
        self.coords.last().copied()
    }
}

impl<'path> IntoIterator for &'path Path {
    type Item = &'path Coord;
    type IntoIter = std::slice::Iter<'path, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Distance labels grown by the wave.
///
/// Blocked cells hold [`None`]. Open cells hold zero until the wave reaches them, and the distance
/// from the source plus one afterwards, so the source itself is labelled one.
struct Labels {
    /// Number of columns of the labelled grid.
    cols: usize,
    /// Labels stored row after row.
    values: Vec<Option<usize>>,
}

impl Labels {
    /// Builds the initial labels for a wave grown from `source` towards `destination`.
    ///
    /// Passages and the destination start at zero and the source at one. Everything else,
    /// including exits beyond the first two, is blocked.
    fn seed(grid: &Grid, source: Coord, destination: Coord) -> Self {
        let mut labels = Self {
            cols: grid.cols(),
            values: grid
                .cells()
                .map(|(_, cell)| (cell == Cell::Passage).then_some(0))
                .collect(),
        };
        labels.set(source, 1);
        labels.set(destination, 0);
        labels
    }

    /// Converts a coordinate into an index into the label storage.
    const fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Returns the label of an in-range coordinate, or [`None`] when it is blocked.
    fn get(&self, coord: Coord) -> Option<usize> {
        self.values.get(self.index(coord)).copied().flatten()
    }

    /// Overwrites the label of an in-range coordinate.
    fn set(&mut self, coord: Coord, label: usize) {
        let index = self.index(coord);
        if let Some(slot) = self.values.get_mut(index) {
            *slot = Some(label);
        }
    }
}

/// Grows labels outward from the source until the destination is reached.
///
/// This function returns the destination's label, or [`None`] when a round labels no new cell
/// before the destination has been reached.
fn spread(grid: &Grid, labels: &mut Labels, source: Coord, destination: Coord) -> Option<usize> {
    let mut frontier = vec![source];
    let mut label = 1;

    while labels.get(destination) == Some(0) {
        let mut next = Vec::new();

        for coord in frontier {
            for neighbor in grid.neighbors(coord) {
                if labels.get(neighbor) == Some(0) {
                    labels.set(neighbor, label + 1);
                    next.push(neighbor);
                }
            }
        }

        if next.is_empty() {
            return None;
        }

        frontier = next;
        label += 1;
    }

    labels.get(destination)
}

/// Walks strictly decreasing labels from the destination back to the source.
///
/// The walk stops early, returning what it has so far, if no neighbor carries the next label.
fn trace_back(grid: &Grid, labels: &Labels, destination: Coord, label: usize) -> Path {
    let mut coords = vec![destination];
    let mut current = destination;
    let mut label = label;

    while label > 1 {
        label -= 1;

        let previous = Direction::TRACE_ORDER
            .into_iter()
            .filter_map(|direction| grid.neighbor(current, direction))
            .find(|neighbor| labels.get(*neighbor) == Some(label));

        let Some(previous) = previous else {
            warn!("label trail broke at {current}, returning a partial path");
            break;
        };

        coords.push(previous);
        current = previous;
    }

    Path { coords }
}

/// Finds a shortest path between the two exits of a grid.
///
/// The first exit in row-major order is the source of the wave and the second one the destination;
/// the returned path runs from the destination back to the source. The grid is never modified.
///
/// # Errors
///
/// This function returns an [`Unsolvable`] reason when the grid does not hold exactly two exits,
/// when either exit is sealed, or when the exits are not connected.
pub fn find_path(grid: &Grid) -> Result<Path, Unsolvable> {
    let exits = find_exits(grid);
    let [source, destination] = exits.as_slice() else {
        return Err(Unsolvable::ExitCount(exits.len()));
    };
    let (source, destination) = (*source, *destination);

    if let Some(sealed) = [source, destination]
        .into_iter()
        .find(|exit| is_sealed(grid, *exit))
    {
        return Err(Unsolvable::SealedExit(sealed));
    }

    let mut labels = Labels::seed(grid, source, destination);
    let label = spread(grid, &mut labels, source, destination).ok_or(Unsolvable::Disconnected)?;
    debug!("wave reached {destination} from {source} with label {label}");

    Ok(trace_back(grid, &labels, destination, label))
}

/// Solves a grid, handing it back together with the path if there is one.
///
/// This is the value-in, value-out form of [`find_path`]: the reason a grid is unsolvable is
/// logged and then dropped.
pub fn solve(grid: Grid) -> (Grid, Option<Path>) {
    match find_path(&grid) {
        Ok(path) => (grid, Some(path)),
        Err(reason) => {
            debug!("no path: {reason}");
            (grid, None)
        }
    }
}
