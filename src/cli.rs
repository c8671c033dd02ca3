//! Command-line configuration.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Default number of rows and columns of a generated maze.
pub const DEFAULT_SIZE: usize = 15;

/// Binary-tree maze generator and wave-expansion solver.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Raise the log level by one step per occurrence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command-line front end.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Carve a new maze.
    Generate(GenerateArgs),
    /// Solve a map file, or every map file in a directory.
    Solve(SolveArgs),
}

/// Options of the `generate` operation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of rows of the grid.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub rows: usize,
    /// Number of columns of the grid.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub cols: usize,
    /// Place the entry at the top right and the exit at the bottom left instead of at random.
    #[arg(long)]
    pub fixed_exits: bool,
    /// Seed for the random number generator, for reproducible mazes.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Solve the maze and paint the path before writing it out. Painting covers the exits, so a
    /// painted maze cannot be solved again.
    #[arg(long)]
    pub solve: bool,
    /// Write the maze to this file instead of standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options of the `solve` operation.
#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Map file, or directory whose map files are all solved.
    pub input: PathBuf,
    /// Report the path length without painting the path onto the grid. Use this when the written
    /// map will be solved again, since painting covers the exits.
    #[arg(long)]
    pub plain: bool,
    /// Write the solved grid to this file instead of standard output. Only valid for a single map.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
