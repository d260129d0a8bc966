//! DirTally command-line frontend.
//!
//! Parses arguments, runs the analysis from `dirtally-core`, and writes the
//! report to stdout or a file in the requested format.
pub mod args;
pub mod render;

pub use args::{Cli, OutputFormat};

use anyhow::Context;
use dirtally_core::export::{write_csv, write_json};
use dirtally_core::model::ReportTable;
use dirtally_core::run_analysis;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Run one analysis as described by `cli` and emit the report.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.analysis_options();
    info!("Reading inclusions from {}", options.inclusion_file.display());

    let table = run_analysis(&options).context("analysis failed")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_report(&table, cli.format, BufWriter::new(file))?;
            info!("Report written to {}", path.display());
        }
        None => write_report(&table, cli.format, io::stdout().lock())?,
    }
    Ok(())
}

/// Write `table` to `writer` in `format`.
pub fn write_report<W: Write>(
    table: &ReportTable,
    format: OutputFormat,
    mut writer: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => writer.write_all(render::render_table(table).as_bytes())?,
        OutputFormat::Csv => write_csv(table, &mut writer)?,
        OutputFormat::Json => write_json(table, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}
