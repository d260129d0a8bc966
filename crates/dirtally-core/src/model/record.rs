//! Per-directory statistics.
//!
//! A record has a fixed schema plus a separate extension histogram. The two
//! are only joined into one row when a [`ReportTable`](super::ReportTable)
//! is rendered or exported.
use super::size::bytes_to_mb;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::BTreeMap;

/// Label used for files whose name has no extension.
pub const NO_EXTENSION_LABEL: &str = "no_ext";

/// Ordered mapping from extension label (e.g. `.txt`) to file count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtensionHistogram {
    counts: BTreeMap<CompactString, u64>,
}

impl ExtensionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more file under `label`.
    pub fn add(&mut self, label: &str) {
        *self.counts.entry(CompactString::new(label)).or_insert(0) += 1;
    }

    /// Count for `label`, or `None` if no file carried it.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.counts.get(label).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(label, count)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One row of the report: statistics for the top level of a single directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRecord {
    /// The directory exactly as written in the inclusion list.
    pub directory: String,
    /// Number of top-level regular files.
    pub total_files: u64,
    /// Sum of the sizes that could be read, in bytes.
    pub size_bytes: u64,
    /// Age in days of the most recently modified file (0 if none).
    pub newest_age_days: u64,
    /// Age in days of the least recently modified file (0 if none).
    pub oldest_age_days: u64,
    /// File count per extension label.
    pub extensions: ExtensionHistogram,
}

impl DirectoryRecord {
    /// Folder size in megabytes, rounded to two decimals.
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size_bytes)
    }

    /// String cells for this row: the fixed fields, then one cell per label
    /// in `extension_columns` (empty when this directory has none).
    ///
    /// Callers compute the column list once per table and reuse it.
    pub fn cells(&self, extension_columns: &[&str]) -> Vec<String> {
        let mut cells = Vec::with_capacity(5 + extension_columns.len());
        cells.push(self.directory.clone());
        cells.push(self.total_files.to_string());
        cells.push(format!("{:.2}", self.size_mb()));
        cells.push(self.newest_age_days.to_string());
        cells.push(self.oldest_age_days.to_string());
        cells.extend(extension_columns.iter().map(|label| {
            self.extensions
                .get(label)
                .map(|n| n.to_string())
                .unwrap_or_default()
        }));
        cells
    }
}
