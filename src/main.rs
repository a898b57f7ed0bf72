//! CLI entry point for the face-aware glyph tile renderer

use clap::Parser;
use faceglyph::io::cli::{Cli, TextProcessor};

fn main() -> faceglyph::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();
    TextProcessor::new(cli).process().map(|_| ())
}
