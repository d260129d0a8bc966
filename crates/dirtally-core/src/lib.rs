//! DirTally Core: directory inventory, analysis, and report export.
//!
//! This crate contains all business logic with no terminal dependencies.
//! It is designed to be reusable across different frontends.
//!
//! # Modules
//!
//! - [`config`]: run options and the inclusion list loader.
//! - [`analysis`]: top-level size, age, and extension statistics for one directory.
//! - [`report`]: runs the analysis over every included directory.
//! - [`model`]: directory records, the extension histogram, and the report table.
//! - [`export`]: CSV and JSON sinks for a finished report.
//! - [`error`]: fatal error types.
pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod report;

#[cfg(test)]
pub(crate) mod test_log;

pub use config::AnalysisOptions;
pub use error::AnalysisError;
pub use report::{analyze_inclusions, run_analysis};
