//! Extension labels for the file type histogram.
//!
//! A label is the suffix from the last `.` of the file name, separator
//! included (`report.tar.gz` → `.gz`). Leading dots belong to the name, so
//! dotfiles such as `.bashrc` have no extension. Extensionless files are
//! bucketed under [`NO_EXTENSION_LABEL`].
use crate::model::NO_EXTENSION_LABEL;
use compact_str::CompactString;

/// Extension of `file_name` as written, or the sentinel label.
pub fn extension_label(file_name: &str) -> &str {
    let stem = file_name.trim_start_matches('.');
    let offset = file_name.len() - stem.len();
    match stem.rfind('.') {
        Some(dot) => &file_name[offset + dot..],
        None => NO_EXTENSION_LABEL,
    }
}

/// Histogram key for `file_name`, optionally ASCII-lowercased.
pub fn label_for(file_name: &str, fold_case: bool) -> CompactString {
    let label = extension_label(file_name);
    if fold_case {
        CompactString::new(label.to_ascii_lowercase())
    } else {
        CompactString::new(label)
    }
}
