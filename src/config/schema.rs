//! Configuration schema for `.redeye.yml` and `~/.redeye/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::session::DEFAULT_SESSIONS_ROOT;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedeyeConfig {
    /// Directory holding all session directories.
    pub sessions_root: PathBuf,

    /// External tool names or paths.
    pub tools: ToolsConfig,

    /// Command placed before privileged scans and installs.
    pub escalation: String,

    /// Install missing tools at startup.
    #[serde(skip_serializing_if = "is_true")]
    pub auto_install: bool,

    /// Default output mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl Default for RedeyeConfig {
    fn default() -> Self {
        Self {
            sessions_root: PathBuf::from(DEFAULT_SESSIONS_ROOT),
            tools: ToolsConfig::default(),
            escalation: default_escalation(),
            auto_install: true,
            output: None,
        }
    }
}

/// The three external tools RedEye drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub scanner: String,
    pub diff: String,
    pub transform: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            scanner: "nmap".to_string(),
            diff: "ndiff".to_string(),
            transform: "xsltproc".to_string(),
        }
    }
}

impl ToolsConfig {
    /// Tool names in the order they are checked.
    pub fn required(&self) -> Vec<String> {
        vec![
            self.scanner.clone(),
            self.diff.clone(),
            self.transform.clone(),
        ]
    }
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn default_escalation() -> String {
    "sudo".to_string()
}

fn is_true(v: &bool) -> bool {
    *v
}
