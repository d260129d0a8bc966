//! Error taxonomy for the inventory engine.
//!
//! Only conditions that abort a run live here. A missing inclusion file,
//! a per-file stat failure, or an inclusion entry that is not a directory
//! is logged and recovered where it happens.
use std::io;
use std::path::PathBuf;

/// Fatal errors raised while building or exporting a report.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The inclusion file exists but could not be read.
    #[error("failed to read inclusion file {}: {source}", path.display())]
    ReadInclusions { path: PathBuf, source: io::Error },

    /// Listing a directory (or reading one of its entries) failed.
    #[error("failed to list directory {}: {source}", path.display())]
    ListDirectory { path: PathBuf, source: io::Error },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
