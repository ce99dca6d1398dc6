// src/main.rs
use anyhow::Result;
use clap::Parser;

use parastat::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
