//! Single-directory analysis over the top-level listing only.
//!
//! Only entries that are themselves regular files count. Symlinks,
//! subdirectories, and special files are skipped without being followed.
//! A per-file stat failure is logged and excluded from size and age; the
//! file still counts towards the total and the extension histogram. Failing
//! to list the directory aborts the run.
use super::age::{file_age_days, AgeRange};
use super::file_types::label_for;
use crate::config::AnalysisOptions;
use crate::error::{AnalysisError, Result};
use crate::model::{DirectoryRecord, ExtensionHistogram};
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, warn};

/// A directory's record plus how many of its files could not be stat'ed.
#[derive(Debug, Clone)]
pub struct DirectoryAnalysis {
    pub record: DirectoryRecord,
    pub file_errors: u64,
}

/// Analyze the immediate children of `directory`, measuring ages against `now`.
pub fn analyze_directory(
    directory: &str,
    now: SystemTime,
    options: &AnalysisOptions,
) -> Result<DirectoryAnalysis> {
    let path = Path::new(directory);
    let list_error = |source: io::Error| AnalysisError::ListDirectory {
        path: path.to_path_buf(),
        source,
    };

    let mut tally = DirectoryTally::new(now, options.fold_extension_case);

    for entry in fs::read_dir(path).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let entry_path = entry.path();

        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(err) => {
                warn!("Error reading file type for {}: {err}", entry_path.display());
                tally.file_errors += 1;
                continue;
            }
        };
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        tally.record_file(&entry_path, &name.to_string_lossy(), entry.metadata());
    }

    let analysis = tally.finish(directory);
    debug!(
        "{}: {} file(s), {} bytes, ages {}..{} days",
        directory,
        analysis.record.total_files,
        analysis.record.size_bytes,
        analysis.record.newest_age_days,
        analysis.record.oldest_age_days
    );
    Ok(analysis)
}

/// Accumulates statistics for the regular files of one directory.
#[derive(Debug)]
pub(crate) struct DirectoryTally {
    now: SystemTime,
    fold_case: bool,
    total_files: u64,
    size_bytes: u64,
    ages: AgeRange,
    extensions: ExtensionHistogram,
    file_errors: u64,
}

impl DirectoryTally {
    pub(crate) fn new(now: SystemTime, fold_case: bool) -> Self {
        Self {
            now,
            fold_case,
            total_files: 0,
            size_bytes: 0,
            ages: AgeRange::default(),
            extensions: ExtensionHistogram::new(),
            file_errors: 0,
        }
    }

    /// Count one regular file. `metadata` is the result of stat'ing it.
    pub(crate) fn record_file(&mut self, path: &Path, name: &str, metadata: io::Result<Metadata>) {
        self.total_files += 1;
        self.extensions.add(&label_for(name, self.fold_case));

        let meta = match metadata {
            Ok(meta) => meta,
            Err(err) => {
                warn!("Error accessing file {}: {err}", path.display());
                self.file_errors += 1;
                return;
            }
        };

        self.size_bytes += meta.len();
        match meta.modified() {
            Ok(modified) => self.ages.observe(file_age_days(modified, self.now)),
            Err(err) => {
                warn!("Error reading modification time for {}: {err}", path.display());
                self.file_errors += 1;
            }
        }
    }

    pub(crate) fn finish(self, directory: &str) -> DirectoryAnalysis {
        DirectoryAnalysis {
            record: DirectoryRecord {
                directory: directory.to_owned(),
                total_files: self.total_files,
                size_bytes: self.size_bytes,
                newest_age_days: self.ages.newest_days(),
                oldest_age_days: self.ages.oldest_days(),
                extensions: self.extensions,
            },
            file_errors: self.file_errors,
        }
    }
}
