//! Run configuration and the inclusion list loader.
pub mod inclusions;

pub use inclusions::{load_inclusions, parse_inclusions, InclusionSet};

use std::path::PathBuf;

/// Default name of the inclusion file, resolved against the working directory.
pub const DEFAULT_INCLUSION_FILE: &str = "inclusions.txt";

/// Options for a single analysis run.
///
/// Built once by the frontend and passed down explicitly; nothing in the
/// engine reads configuration from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Newline-delimited list of directories to inventory.
    pub inclusion_file: PathBuf,
    /// Lowercase extension labels so `.TXT` and `.txt` share a column.
    pub fold_extension_case: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            inclusion_file: PathBuf::from(DEFAULT_INCLUSION_FILE),
            fold_extension_case: false,
        }
    }
}

impl AnalysisOptions {
    pub fn with_inclusion_file(path: impl Into<PathBuf>) -> Self {
        Self {
            inclusion_file: path.into(),
            ..Self::default()
        }
    }
}
