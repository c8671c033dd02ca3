//! Logger installation for the command-line front end.

use std::env;

use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::Builder;
use log::LevelFilter;

/// Environment variable holding `env_logger` filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Maps the number of `-v` flags onto a log level, starting from warnings.
pub const fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Prepares a logger builder from the `-v` count and the directives read from [`FILTER_ENV`].
///
/// Without `-v`, the directives apply on top of the default warning level. Each `-v` sets the
/// global level explicitly; per-module directives are kept either way.
pub fn builder(verbose: u8, directives: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    let _ = builder.filter_level(level(0));

    if let Some(directives) = directives {
        let _ = builder.parse_filters(directives);
    }
    if verbose > 0 {
        let _ = builder.filter_level(level(verbose));
    }

    builder
}

/// Installs `env_logger` as the global logger.
///
/// # Errors
///
/// This function returns an error if a global logger was already installed.
pub fn init(verbose: u8) -> Result<()> {
    let directives = env::var(FILTER_ENV).ok();

    builder(verbose, directives.as_deref())
        .try_init()
        .wrap_err("failed to install the logger")
}
