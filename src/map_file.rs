//! Reading and writing maze map files.
//!
//! A map file holds one line per grid row and one glyph per cell: `#` for walls, `.` for passages,
//! `X` for exits and `*` for painted path cells.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use color_eyre::eyre::{ensure, eyre, Report, Result, WrapErr as _};
use log::debug;

use crate::{grid::Grid, types::Cell};

/// File extension of maze map files, without the leading dot.
pub const EXTENSION: &str = "maze";

/// Parses the contents of a map file into a grid.
///
/// Trailing whitespace at the end of the input is ignored; anything else must be a known glyph.
///
/// # Errors
///
/// This function returns an error if:
/// - The input holds no rows
/// - A row contains a character that is not a cell glyph
/// - The rows do not all have the same length
pub fn parse(input: &str) -> Result<Grid> {
    let input = input.trim_end();
    ensure!(!input.is_empty(), "map holds no rows");

    let rows = input
        .lines()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(col, glyph)| {
                    Cell::from_glyph(glyph)
                        .ok_or_else(|| eyre!("unknown glyph {glyph:?} at row {row}, column {col}"))
                })
                .collect::<Result<Vec<Cell>>>()
        })
        .collect::<Result<Vec<Vec<Cell>>>>()?;

    Grid::from_rows(rows).wrap_err("map rows are not rectangular")
}

impl FromStr for Grid {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        parse(input)
    }
}

/// Loads and parses a single map file.
///
/// # Errors
///
/// This function returns an error if the file cannot be read or does not hold a valid map.
pub fn load(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read map file {}", path.display()))?;
    let grid =
        parse(&contents).wrap_err_with(|| format!("invalid map file {}", path.display()))?;

    debug!(
        "loaded {}x{} map from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );

    Ok(grid)
}

/// Writes a grid to a map file, terminated by a newline.
///
/// # Errors
///
/// This function returns an error if the file cannot be written.
pub fn save(grid: &Grid, path: &Path) -> Result<()> {
    fs::write(path, format!("{grid}\n"))
        .wrap_err_with(|| format!("failed to write map file {}", path.display()))
}

/// Lists the map files directly inside a directory, sorted by path.
///
/// Subdirectories are skipped even when their name carries the map extension.
///
/// # Errors
///
/// This function returns an error if the directory or one of its entries cannot be read.
pub fn fetch_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut maps = Vec::new();

    for entry in fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_dir()
            && path.extension().is_some_and(|extension| extension == EXTENSION)
        {
            maps.push(path);
        }
    }

    maps.sort();
    Ok(maps)
}
