//! Command-line arguments.
use clap::{Parser, ValueEnum};
use dirtally_core::config::{AnalysisOptions, DEFAULT_INCLUSION_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dirtally",
    version,
    about = "Inventory the top level of a list of directories",
    long_about = None
)]
pub struct Cli {
    /// File listing one directory per line
    #[arg(short, long, default_value = DEFAULT_INCLUSION_FILE)]
    pub inclusions: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lowercase extension labels so `.TXT` and `.txt` share a column
    #[arg(long)]
    pub fold_case: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Table,
    Csv,
    Json,
}

impl Cli {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            inclusion_file: self.inclusions.clone(),
            fold_extension_case: self.fold_case,
        }
    }
}
