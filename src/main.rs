//! CLI entry point for the dungeon entrance map generator

use clap::Parser;
use dungeontiles::io::cli::{Cli, MapProcessor};
use dungeontiles::io::logging::init_logging;

fn main() -> dungeontiles::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut processor = MapProcessor::new(cli);
    processor.process().map(|_| ())
}
