//! File age: whole days since a file was last modified.
use std::time::SystemTime;

pub const SECS_PER_DAY: u64 = 24 * 3600;

/// Whole days elapsed between `modified` and `now`, floored.
///
/// A timestamp in the future (clock skew, files from another machine)
/// counts as age 0 rather than going negative.
pub fn file_age_days(modified: SystemTime, now: SystemTime) -> u64 {
    now.duration_since(modified)
        .map(|age| age.as_secs() / SECS_PER_DAY)
        .unwrap_or(0)
}

/// Running newest/oldest ages over the files of one directory.
///
/// Starts empty rather than at a sentinel, so a directory where no age
/// could be read reports 0 for both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeRange {
    bounds: Option<(u64, u64)>,
}

impl AgeRange {
    pub fn observe(&mut self, age_days: u64) {
        self.bounds = Some(match self.bounds {
            Some((newest, oldest)) => (newest.min(age_days), oldest.max(age_days)),
            None => (age_days, age_days),
        });
    }

    /// Smallest age observed, or 0.
    pub fn newest_days(&self) -> u64 {
        self.bounds.map_or(0, |(newest, _)| newest)
    }

    /// Largest age observed, or 0.
    pub fn oldest_days(&self) -> u64 {
        self.bounds.map_or(0, |(_, oldest)| oldest)
    }
}
