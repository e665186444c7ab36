//! CLI entry point for synthetic layered series generation

use clap::Parser;
use stratagen::io::cli::{BatchProcessor, Cli, setup_logging};

fn main() -> stratagen::Result<()> {
    let cli = Cli::parse();
    if let Err(error) = setup_logging(cli.verbose) {
        // The subscriber already installed receives this warning
        tracing::warn!(%error, "keeping existing log subscriber");
    }
    let mut processor = BatchProcessor::new(cli);
    processor.process().map(drop)
}
