//! Session storage.
//!
//! A session is a directory under the sessions root. Scan artifacts are
//! written into it as `scan_<timestamp>.<ext>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{RedeyeError, Result};

use super::ScanTimestamp;

/// Prefix of every scan artifact file name.
pub const ARTIFACT_PREFIX: &str = "scan_";

/// A named output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session name (never empty, no path separators).
    pub name: String,
    /// Directory holding the session's artifacts.
    pub dir: PathBuf,
}

impl Session {
    /// Full path of a file inside this session.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

/// Storage for sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

/// Check a user supplied session name.
///
/// Returns the trimmed name.
pub fn validate_session_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RedeyeError::EmptyInput {
            field: "Session name".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(RedeyeError::InvalidSessionName {
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

/// Normalise an extension filter to start with a dot.
fn dotted(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

impl SessionStore {
    /// Create a new session store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the sessions root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the sessions root if it does not exist.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create sessions root at {:?}", self.root))?;
        Ok(())
    }

    /// Session handle for `name` without touching the filesystem.
    pub fn session(&self, name: &str) -> Result<Session> {
        let name = validate_session_name(name)?;
        let dir = self.root.join(&name);
        Ok(Session { name, dir })
    }

    /// Create a session directory, or select it if it already exists.
    pub fn create_or_select(&self, name: &str) -> Result<Session> {
        let session = self.session(name)?;
        fs::create_dir_all(&session.dir)
            .with_context(|| format!("Failed to create session directory {:?}", session.dir))?;
        tracing::debug!("Session '{}' at {:?}", session.name, session.dir);
        Ok(session)
    }

    /// File names in `session` ending with `extension`, sorted.
    ///
    /// Artifact names embed a fixed-width timestamp, so the order is also
    /// chronological.
    pub fn list_files(&self, session: &Session, extension: &str) -> Result<Vec<String>> {
        if !session.dir.is_dir() {
            return Err(RedeyeError::SessionNotFound {
                path: session.dir.clone(),
            });
        }

        let extension = dotted(extension);
        let mut files = Vec::new();
        for entry in fs::read_dir(&session.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(&extension) {
                files.push(name);
            }
        }

        if files.is_empty() {
            return Err(RedeyeError::NoMatchingFiles {
                session: session.name.clone(),
                extension,
            });
        }

        files.sort();
        Ok(files)
    }

    /// Names of existing sessions, sorted.
    ///
    /// A missing root is treated as having no sessions.
    pub fn list_sessions(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Artifact path without extension: `<dir>/scan_<timestamp>`.
    pub fn artifact_base(&self, session: &Session, timestamp: &ScanTimestamp) -> PathBuf {
        session
            .dir
            .join(format!("{}{}", ARTIFACT_PREFIX, timestamp))
    }
}
