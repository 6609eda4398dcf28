//! Invocation timestamps.

use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;

/// Timestamp format used in artifact names. Fixed width and zero padded,
/// so lexicographic order of file names is chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Local wall-clock time at which a scan was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScanTimestamp(NaiveDateTime);

impl ScanTimestamp {
    /// The current local time, truncated to seconds.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        Self(now.with_nanosecond(0).unwrap_or(now))
    }
}

impl From<NaiveDateTime> for ScanTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScanTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}
