//! CLI entry point for seeded hexagonal board generation

use clap::Parser;
use pairleroy::io::cli::{Cli, GenerationProcessor};

fn main() -> pairleroy::Result<()> {
    let cli = Cli::parse();
    let mut processor = GenerationProcessor::new(cli);
    processor.run()
}
