//! Data model for DirTally reports.
//!
//! Re-exports the per-directory record, the extension histogram, and the
//! assembled report table.
pub mod record;
pub mod size;
pub mod table;

pub use record::{DirectoryRecord, ExtensionHistogram, NO_EXTENSION_LABEL};
pub use table::{ReportTable, FIXED_COLUMNS};
