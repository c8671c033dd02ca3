//! This crate contains the source code for the `wavemaze` command-line binary.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use wavemaze::{app, cli::Cli, logging};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    app::run(&cli, &mut io::stdout().lock())
}
