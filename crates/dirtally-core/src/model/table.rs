//! The assembled report: rows plus run metadata.
//!
//! Columns are the fixed record fields followed by the sorted union of
//! every extension label seen in any row. A row without a given label has
//! an empty cell in that column.
use super::record::DirectoryRecord;
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::time::Duration;

/// Header labels for the fixed part of every row, in column order.
pub const FIXED_COLUMNS: [&str; 5] = [
    "Directory",
    "Total Files",
    "Folder Size (MB)",
    "Newest File Age (Days)",
    "Oldest File Age (Days)",
];

/// Result of one analysis run.
#[derive(Debug, Clone)]
pub struct ReportTable {
    rows: Vec<DirectoryRecord>,
    /// The analysis instant every file age was measured against.
    pub generated_at: DateTime<Local>,
    /// Inclusion entries that were missing or not directories.
    pub skipped: Vec<String>,
    /// Per-file stat failures across all rows.
    pub file_errors: u64,
    /// Wall time spent building the report.
    pub duration: Duration,
}

impl ReportTable {
    pub fn new(generated_at: DateTime<Local>) -> Self {
        Self {
            rows: Vec::new(),
            generated_at,
            skipped: Vec::new(),
            file_errors: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn push(&mut self, record: DirectoryRecord) {
        self.rows.push(record);
    }

    pub fn rows(&self) -> &[DirectoryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted union of extension labels across all rows.
    pub fn extension_columns(&self) -> Vec<&str> {
        let labels: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.extensions.iter().map(|(label, _)| label))
            .collect();
        labels.into_iter().collect()
    }

    /// Full header: fixed columns then extension columns.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = FIXED_COLUMNS.to_vec();
        columns.extend(self.extension_columns());
        columns
    }

    /// Total regular files across all rows.
    pub fn total_files(&self) -> u64 {
        self.rows.iter().map(|r| r.total_files).sum()
    }

    /// Total bytes across all rows.
    pub fn total_bytes(&self) -> u64 {
        self.rows.iter().map(|r| r.size_bytes).sum()
    }
}
