//! Command-line driver tying the builder, the solver and the map files together.

use std::{io::Write, path::Path};

use color_eyre::eyre::{ensure, Result};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    builder,
    cli::{Cli, Command, GenerateArgs, SolveArgs},
    grid::Grid,
    map_file, painter, solver,
};

/// Runs the operation selected on the command line, writing grids and reports to `out`.
///
/// # Errors
///
/// This function returns an error if a map file cannot be read or written, or if writing to `out`
/// fails.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Generate(args) => generate(args, out),
        Command::Solve(args) => solve(args, out),
    }
}

/// Carves a maze, optionally solving and painting it, and emits it.
fn generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<()> {
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let grid = builder::carve_with(args.rows, args.cols, !args.fixed_exits, &mut rng);
    info!("generated a {}x{} maze", grid.rows(), grid.cols());

    let grid = if args.solve {
        solve_and_report(grid, "generated maze", false, out)?
    } else {
        grid
    };

    emit(&grid, args.output.as_deref(), out)
}

/// Solves a single map file or every map file of a directory.
///
/// In a directory, maps that fail to load are reported and skipped.
fn solve<W: Write>(args: &SolveArgs, out: &mut W) -> Result<()> {
    if !args.input.is_dir() {
        let grid = map_file::load(&args.input)?;
        let name = args.input.display().to_string();
        let grid = solve_and_report(grid, &name, args.plain, out)?;

        return emit(&grid, args.output.as_deref(), out);
    }

    ensure!(
        args.output.is_none(),
        "an output file can only be given for a single map"
    );

    let maps = map_file::fetch_files(&args.input)?;
    info!("found {} map files in {}", maps.len(), args.input.display());

    for path in maps {
        let name = path.display().to_string();
        let grid = match map_file::load(&path) {
            Ok(grid) => grid,
            Err(error) => {
                warn!("skipping {name}: {error:#}");
                writeln!(out, "{name}: invalid map, {error:#}")?;
                continue;
            }
        };

        let grid = solve_and_report(grid, &name, args.plain, out)?;
        emit(&grid, None, out)?;
    }

    Ok(())
}

/// Solves a grid, writes a one-line report and returns the grid, painted unless `plain` is set.
fn solve_and_report<W: Write>(grid: Grid, name: &str, plain: bool, out: &mut W) -> Result<Grid> {
    match solver::find_path(&grid) {
        Ok(path) => {
            writeln!(out, "{name}: path of {} cells", path.len())?;
            Ok(if plain {
                grid
            } else {
                painter::paint(grid, Some(&path))
            })
        }
        Err(reason) => {
            warn!("{name} cannot be solved: {reason}");
            writeln!(out, "{name}: unsolvable, {reason}")?;
            Ok(grid)
        }
    }
}

/// Writes a grid to a map file when a path is given, and to `out` otherwise.
fn emit<W: Write>(grid: &Grid, path: Option<&Path>, out: &mut W) -> Result<()> {
    if let Some(path) = path {
        map_file::save(grid, path)?;
        info!("wrote maze to {}", path.display());
    } else {
        writeln!(out, "{grid}")?;
    }

    Ok(())
}
