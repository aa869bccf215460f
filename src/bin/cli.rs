// src/bin/cli.rs
use clap::Parser;
use dex_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    dex_scrape::log::init(args.verbose);
    cli::run(&args)?;
    Ok(())
}
