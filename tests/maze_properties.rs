//! Property checks over many seeded mazes: spanning-tree shape, solvability with fixed exits, paint
//! round trip and solver determinism.

#![expect(
    unused_crate_dependencies,
    reason = "Integration tests only exercise the public maze API."
)]

use std::collections::{HashMap, VecDeque};

use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use wavemaze::{
    carve_with, find_exits, find_path, is_sealed, paint, solve, Cell, Coord, Grid, Path,
};

/// Number of random mazes each property is checked against.
const N_GRIDS: usize = 300;

/// Returns the breadth-first distance from `start` to every cell reachable through non-wall cells.
fn bfs_distances(grid: &Grid, start: Coord) -> HashMap<Coord, usize> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(coord) = queue.pop_front() {
        let distance = distances.get(&coord).copied().unwrap_or_default();
        for neighbor in grid.neighbors(coord) {
            if grid.get(neighbor) != Some(Cell::Wall) && !distances.contains_key(&neighbor) {
                let _ = distances.insert(neighbor, distance + 1);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// Returns the breadth-first distance between two cells through non-wall cells.
fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
    bfs_distances(grid, start).get(&goal).copied()
}

/// Prints a grid when a property fails, to make the failing maze easy to inspect.
fn visualize_grid(grid: &Grid) {
    println!("{grid}");
}

#[test]
fn spanning_tree_over_lattice() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..N_GRIDS {
        let rows = 2 * rng.gen_range(1..12) + 1;
        let cols = 2 * rng.gen_range(1..12) + 1;
        let grid = carve_with(rows, cols, true, &mut rng);

        let lattice: Vec<Coord> = grid
            .cells()
            .map(|(coord, _)| coord)
            .filter(|coord| coord.is_lattice())
            .collect();
        let carved_walls = grid
            .cells()
            .filter(|(coord, cell)| {
                *cell == Cell::Passage && !coord.is_lattice() && !grid.is_boundary(*coord)
            })
            .count();

        if carved_walls + 1 != lattice.len() {
            visualize_grid(&grid);
        }
        assert_eq!(carved_walls + 1, lattice.len(), "a tree has one edge fewer than nodes");

        let reachable = bfs_distances(&grid, Coord::new(1, 1));
        for cell in &lattice {
            assert!(
                reachable.contains_key(cell),
                "{cell} unreachable in {rows}x{cols}"
            );
        }
    }
}

#[test]
fn fixed_exits_on_odd_grids_are_always_solvable() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..N_GRIDS {
        let rows = 2 * rng.gen_range(1..15) + 1;
        let cols = 2 * rng.gen_range(1..15) + 1;
        let grid = carve_with(rows, cols, false, &mut rng);
        let entry = Coord::new(0, cols - 2);
        let exit = Coord::new(rows - 1, 1);

        assert_eq!(find_exits(&grid), vec![entry, exit]);
        assert!(!is_sealed(&grid, entry) && !is_sealed(&grid, exit));

        let path = find_path(&grid).unwrap_or_else(|reason| {
            visualize_grid(&grid);
            panic!("{rows}x{cols} maze should be solvable: {reason}")
        });

        assert_eq!(path.destination(), Some(exit));
        assert_eq!(path.source(), Some(entry));
        assert_eq!(Some(path.len() - 1), bfs_distance(&grid, entry, exit));
        assert!(path
            .coords()
            .windows(2)
            .all(|pair| matches!(pair, [first, second] if first.is_adjacent(*second))));
    }
}

#[test]
fn random_exits_either_solve_or_are_sealed() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(3..20);
        let cols = rng.gen_range(3..20);
        let grid = carve_with(rows, cols, true, &mut rng);
        let exits = find_exits(&grid);
        let sealed = exits.iter().any(|exit| is_sealed(&grid, *exit));

        let (_, path) = solve(grid.clone());

        if sealed {
            assert_eq!(path, None);
        } else if let Some(path) = path {
            let [source, destination] = exits.as_slice() else {
                panic!("a solved maze has two exits");
            };
            assert_eq!(
                Some(path.len() - 1),
                bfs_distance(&grid, *source, *destination)
            );
        }
    }
}

#[test]
fn paint_marks_only_the_path() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..N_GRIDS {
        let grid = carve_with(11, 13, false, &mut rng);
        let (grid, path) = solve(grid);
        let path = path.expect("fixed exits of an odd grid are connected");

        let painted = paint(grid.clone(), Some(&path));

        assert_eq!(painted.count(Cell::Path), path.len());
        for (coord, cell) in painted.cells() {
            if path.contains(coord) {
                assert_eq!(cell, Cell::Path);
            } else {
                assert_eq!(Some(cell), grid.get(coord));
            }
        }
    }
}

#[test]
fn solving_twice_gives_the_same_path() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..N_GRIDS {
        let grid = carve_with(9, 17, true, &mut rng);

        let (grid, first) = solve(grid);
        let (_, second) = solve(grid);

        assert_eq!(first, second);
    }
}

#[test]
fn minimal_corridor_has_three_cells() {
    let grid = Grid::new(3, 3)
        .with(Coord::new(0, 1), Cell::Exit)
        .with(Coord::new(1, 1), Cell::Passage)
        .with(Coord::new(2, 1), Cell::Exit);

    let (returned, path) = solve(grid.clone());

    assert_eq!(returned, grid);
    assert_eq!(path.as_ref().map(Path::len), Some(3));
}
