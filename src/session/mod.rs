//! Scan sessions.
//!
//! A session groups related scan artifacts in one directory:
//! `<sessions root>/<name>/scan_<timestamp>.{nmap,xml,html}`.

mod store;
mod timestamp;

pub use store::{validate_session_name, Session, SessionStore, ARTIFACT_PREFIX};
pub use timestamp::{ScanTimestamp, TIMESTAMP_FORMAT};

/// Sessions root used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_SESSIONS_ROOT: &str = "redeye_sessions";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_relative() {
        assert!(std::path::Path::new(DEFAULT_SESSIONS_ROOT).is_relative());
    }
}
