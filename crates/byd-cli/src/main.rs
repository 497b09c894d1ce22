//! BYD CLI
//!
//! Build Your Dictionary: a terminal vocabulary trainer.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use byd_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    byd_cli::commands::run(cli)?;
    Ok(())
}
