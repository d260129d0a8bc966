//! DirTally: one-shot directory inventory.
//!
//! Thin binary entry point. All logic lives in the `dirtally-core`
//! and `dirtally-cli` crates.
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = dirtally_cli::Cli::parse();

    // Diagnostics go to stderr so CSV/JSON on stdout stay machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("DirTally starting");

    dirtally_cli::run(&cli)
}
