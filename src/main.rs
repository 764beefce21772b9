//! CLI entry point for the safe dial simulator

use clap::Parser;
use safedial::io::cli::{Cli, FileProcessor};
use safedial::io::logging::init_logging;

fn main() -> safedial::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
