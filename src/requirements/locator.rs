//! Finding the external tools RedEye drives.
//!
//! ```no_run
//! use redeye::requirements::ToolLocator;
//!
//! let report = ToolLocator::from_env().check(&["nmap", "ndiff", "xsltproc"]);
//! for name in &report.missing {
//!     println!("{} is not installed", name);
//! }
//! ```

use std::path::{Path, PathBuf};

/// Which of the requested tools were found, both lists in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolReport {
    pub found: Vec<(String, PathBuf)>,
    pub missing: Vec<String>,
}

impl ToolReport {
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn found_names(&self) -> Vec<&str> {
        self.found.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Looks tools up the way a shell would, without spawning one.
///
/// A name containing a path separator (e.g. a configured
/// `/opt/nmap/bin/nmap`) is checked as given; a bare name is searched in
/// the directory list captured at construction.
#[derive(Debug, Clone)]
pub struct ToolLocator {
    search: Vec<PathBuf>,
}

impl ToolLocator {
    pub fn new(search: Vec<PathBuf>) -> Self {
        Self { search }
    }

    /// Search the current `PATH`.
    pub fn from_env() -> Self {
        let search = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        Self::new(search)
    }

    pub fn locate(&self, tool: &str) -> Option<PathBuf> {
        if tool.contains(std::path::MAIN_SEPARATOR) || tool.contains('/') {
            let path = PathBuf::from(tool);
            return runnable(&path).then_some(path);
        }
        self.search
            .iter()
            .map(|dir| dir.join(tool))
            .find(|candidate| runnable(candidate))
    }

    pub fn is_present(&self, tool: &str) -> bool {
        self.locate(tool).is_some()
    }

    pub fn check<S: AsRef<str>>(&self, required: &[S]) -> ToolReport {
        let mut report = ToolReport::default();
        for tool in required.iter().map(AsRef::as_ref) {
            match self.locate(tool) {
                Some(path) => report.found.push((tool.to_string(), path)),
                None => report.missing.push(tool.to_string()),
            }
        }
        report
    }
}

/// A regular file with at least one execute bit.
#[cfg(unix)]
fn runnable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn runnable(path: &Path) -> bool {
    path.is_file()
}
