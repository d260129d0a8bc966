//! Inclusion list loading.
//!
//! The inclusion file is plain text: one directory path per line, blank
//! lines ignored, no comments and no escaping.
use crate::error::{AnalysisError, Result};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Deduplicated set of directory paths to inventory.
///
/// Ordered so that reports come out in a stable, lexicographic order.
pub type InclusionSet = BTreeSet<String>;

/// Parse the contents of an inclusion file.
pub fn parse_inclusions(contents: &str) -> InclusionSet {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Load the inclusion set from `path`.
///
/// A missing file is not an error: it is reported and an empty set is
/// returned. Any other read failure is fatal.
pub fn load_inclusions(path: &Path) -> Result<InclusionSet> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let set = parse_inclusions(&contents);
            debug!("Loaded {} inclusion(s) from {}", set.len(), path.display());
            Ok(set)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(
                "No inclusion file found at {}. Proceeding with no inclusions.",
                path.display()
            );
            Ok(InclusionSet::new())
        }
        Err(source) => Err(AnalysisError::ReadInclusions {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored_and_entries_trimmed() {
        let set = parse_inclusions("  /srv/data  \n\n\t\n/var/log\n");
        let expected: Vec<&str> = vec!["/srv/data", "/var/log"];
        assert_eq!(set.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn duplicates_collapse_after_trimming() {
        let set = parse_inclusions("/tmp\n/tmp  \n  /tmp\n");
        assert_eq!(set.len(), 1);
        assert!(set.contains("/tmp"));
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let set = parse_inclusions("C:\\Data\r\nD:\\Logs\r\n");
        assert!(set.contains("C:\\Data"));
        assert!(set.contains("D:\\Logs"));
    }

    /// No comment syntax: a leading `#` is part of the path.
    #[test]
    fn hash_lines_are_paths_not_comments() {
        let set = parse_inclusions("# not a comment\n");
        assert!(set.contains("# not a comment"));
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(parse_inclusions("").is_empty());
        assert!(parse_inclusions("\n\n   \n").is_empty());
    }

    #[test]
    fn missing_file_yields_empty_set() {
        let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
        let set = load_inclusions(&tmp.path().join("absent.txt")).expect("must not fail");
        assert!(set.is_empty());
    }

    #[test]
    fn existing_file_is_loaded() {
        let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
        let file = tmp.path().join("inclusions.txt");
        std::fs::write(&file, "/a\n/b\n/a\n").unwrap();

        let set = load_inclusions(&file).unwrap();
        assert_eq!(set.len(), 2);
    }

    /// Reading a directory as if it were the inclusion file is an I/O error
    /// other than NotFound and must propagate.
    #[cfg(unix)]
    #[test]
    fn unreadable_inclusion_file_is_fatal() {
        let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
        let err = load_inclusions(tmp.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::ReadInclusions { .. }));
    }
}
