//! Directory analysis: per-directory size, age, and file type statistics.

pub mod age;
pub mod directory;
pub mod file_types;

pub use age::{file_age_days, AgeRange};
pub use directory::{analyze_directory, DirectoryAnalysis};
pub use file_types::{extension_label, label_for};
