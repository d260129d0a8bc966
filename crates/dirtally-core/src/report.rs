//! Report assembly: run the analyzer over every included directory.
//!
//! Directories are processed one at a time in inclusion-set order. Entries
//! that do not exist or are not directories are logged and skipped; only a
//! failure to list an accessible directory aborts the run.
use crate::analysis::analyze_directory;
use crate::config::{load_inclusions, AnalysisOptions, InclusionSet};
use crate::error::Result;
use crate::model::ReportTable;
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::{Instant, SystemTime};
use tracing::{info, warn};

/// Load the inclusion file named in `options` and analyze every entry.
pub fn run_analysis(options: &AnalysisOptions) -> Result<ReportTable> {
    let inclusions = load_inclusions(&options.inclusion_file)?;
    analyze_inclusions(&inclusions, SystemTime::now(), options)
}

/// Analyze an already-loaded inclusion set against the instant `now`.
pub fn analyze_inclusions(
    inclusions: &InclusionSet,
    now: SystemTime,
    options: &AnalysisOptions,
) -> Result<ReportTable> {
    let start = Instant::now();
    let mut table = ReportTable::new(DateTime::<Local>::from(now));

    for included in inclusions {
        if !is_accessible_dir(Path::new(included)) {
            warn!("Path is not a directory or not accessible: {included}");
            table.skipped.push(included.clone());
            continue;
        }

        let analysis = analyze_directory(included, now, options)?;
        table.file_errors += analysis.file_errors;
        table.push(analysis.record);
    }

    table.duration = start.elapsed();
    info!(
        "Analyzed {} director{} ({} skipped, {} file error(s)) in {:?}",
        table.len(),
        if table.len() == 1 { "y" } else { "ies" },
        table.skipped.len(),
        table.file_errors,
        table.duration
    );
    Ok(table)
}

/// `true` if `path` resolves (following symlinks) to a directory we can stat.
fn is_accessible_dir(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
