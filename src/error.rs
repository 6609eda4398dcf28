//! Error types for RedEye operations.
//!
//! This module defines [`RedeyeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Dependency setup failures (`NoPackageManager`, `StillMissing`) are fatal
//!   at startup and come with manual installation instructions
//! - Everything else is recoverable: the interactive shell reports it and
//!   returns to the menu
//! - Use `anyhow::Error` (via `RedeyeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for RedEye operations.
#[derive(Debug, Error)]
pub enum RedeyeError {
    /// No supported package manager could be resolved on this host.
    #[error("No supported package manager detected; cannot install automatically")]
    NoPackageManager,

    /// Installation was attempted but some tools are still absent.
    #[error("Could not install: {}", tools.join(", "))]
    StillMissing { tools: Vec<String> },

    /// The session directory does not exist.
    #[error("Session directory not found: {}", path.display())]
    SessionNotFound { path: PathBuf },

    /// The session exists but holds no files with the requested extension.
    #[error("No '{extension}' files found in session '{session}'")]
    NoMatchingFiles { session: String, extension: String },

    /// Too few scan files to perform an operation.
    #[error("Need at least {needed} '{extension}' scans in session '{session}', found {found}")]
    InsufficientScans {
        session: String,
        extension: String,
        needed: usize,
        found: usize,
    },

    /// Malformed numeric input or out-of-range index.
    #[error("Invalid selection: '{input}'")]
    InvalidSelection { input: String },

    /// A required field was left blank.
    #[error("{field} cannot be empty")]
    EmptyInput { field: String },

    /// Session name would escape the sessions root.
    #[error("Invalid session name '{name}': must not contain path separators")]
    InvalidSessionName { name: String },

    /// Port specification does not match the accepted grammar.
    #[error("Invalid port specification '{ports}': {reason}")]
    InvalidPorts { ports: String, reason: String },

    /// Scan profile id is not in the catalog.
    #[error("Unknown scan profile: {id}")]
    UnknownProfile { id: String },

    /// A raw scanner command was rejected before execution.
    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    /// External tool exited non-zero or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// External tool could not be started at all.
    #[error("Could not run {command}: {message}")]
    SpawnFailed { command: String, message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RedeyeError {
    /// Whether the interactive shell can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            RedeyeError::NoPackageManager | RedeyeError::StillMissing { .. }
        )
    }

    /// A short suggestion for the user, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            RedeyeError::NoMatchingFiles { .. } | RedeyeError::InsufficientScans { .. } => {
                Some("Run a scan while a session is active to save XML output.")
            }
            RedeyeError::InvalidPorts { .. } => {
                Some("Use forms like 22, 1-1000, 22,80-100,443 or U:53,T:21-25.")
            }
            RedeyeError::SessionNotFound { .. } => Some("Select or create the session again."),
            RedeyeError::UnknownProfile { .. } => Some("Run 'redeye profiles' to list profile ids."),
            RedeyeError::SpawnFailed { .. } => {
                Some("Check the tool is installed, or run 'redeye --test-deps'.")
            }
            RedeyeError::NoPackageManager | RedeyeError::StillMissing { .. } => {
                Some("Install the tools manually, then run 'redeye --test-deps'.")
            }
            _ => None,
        }
    }
}

/// Result type alias for RedEye operations.
pub type Result<T> = std::result::Result<T, RedeyeError>;
