//! Report sinks: CSV and JSON.
//!
//! CSV flattens each record into the table's column layout, with empty cells
//! for extensions a directory does not have. JSON keeps the histogram as a
//! nested object and includes the run metadata.
use crate::error::Result;
use crate::model::{DirectoryRecord, ExtensionHistogram, ReportTable};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

/// Write `table` as CSV: a header row followed by one row per directory.
pub fn write_csv<W: Write>(table: &ReportTable, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.columns())?;
    let extensions = table.extension_columns();
    for row in table.rows() {
        csv.write_record(row.cells(&extensions))?;
    }
    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: &'a DateTime<Local>,
    duration_ms: u128,
    file_errors: u64,
    skipped: &'a [String],
    directories: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    directory: &'a str,
    total_files: u64,
    size_bytes: u64,
    size_mb: f64,
    newest_age_days: u64,
    oldest_age_days: u64,
    extensions: &'a ExtensionHistogram,
}

impl<'a> From<&'a DirectoryRecord> for JsonRow<'a> {
    fn from(r: &'a DirectoryRecord) -> Self {
        Self {
            directory: &r.directory,
            total_files: r.total_files,
            size_bytes: r.size_bytes,
            size_mb: r.size_mb(),
            newest_age_days: r.newest_age_days,
            oldest_age_days: r.oldest_age_days,
            extensions: &r.extensions,
        }
    }
}

/// Write `table` as pretty-printed JSON.
pub fn write_json<W: Write>(table: &ReportTable, mut writer: W) -> Result<()> {
    let report = JsonReport {
        generated_at: &table.generated_at,
        duration_ms: table.duration.as_millis(),
        file_errors: table.file_errors,
        skipped: &table.skipped,
        directories: table.rows().iter().map(JsonRow::from).collect(),
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ReportTable {
        let mut table = ReportTable::new(Local::now());
        let mut a = ExtensionHistogram::new();
        a.add(".rs");
        a.add(".rs");
        table.push(DirectoryRecord {
            directory: "/src".into(),
            total_files: 2,
            size_bytes: 1_572_864,
            newest_age_days: 0,
            oldest_age_days: 4,
            extensions: a,
        });
        let mut b = ExtensionHistogram::new();
        b.add("no_ext");
        table.push(DirectoryRecord {
            directory: "/bin".into(),
            total_files: 1,
            size_bytes: 0,
            newest_age_days: 2,
            oldest_age_days: 2,
            extensions: b,
        });
        table.skipped.push("/missing".into());
        table
    }

    #[test]
    fn csv_has_header_and_empty_cells_for_absent_extensions() {
        let mut out = Vec::new();
        write_csv(&sample_table(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Directory,Total Files,Folder Size (MB),Newest File Age (Days),Oldest File Age (Days),.rs,no_ext"
        );
        assert_eq!(lines[1], "/src,2,1.50,0,4,2,");
        assert_eq!(lines[2], "/bin,1,0.00,2,2,,1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_of_empty_table_is_header_only() {
        let mut out = Vec::new();
        write_csv(&ReportTable::new(Local::now()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn json_nests_histogram_and_metadata() {
        let mut out = Vec::new();
        write_json(&sample_table(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let dirs = value["directories"].as_array().unwrap();
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0]["directory"], "/src");
        assert_eq!(dirs[0]["size_mb"], 1.5);
        assert_eq!(dirs[0]["extensions"][".rs"], 2);
        assert!(dirs[0]["extensions"].get("no_ext").is_none());
        assert_eq!(dirs[1]["extensions"]["no_ext"], 1);
        assert_eq!(value["skipped"][0], "/missing");
        assert!(value["generated_at"].is_string());
    }
}
