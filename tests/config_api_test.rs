//! Integration tests for config module public API.

use redeye::config::{load_config, OutputMode, RedeyeConfig, ToolsConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = RedeyeConfig::default();
    assert_eq!(config.tools, ToolsConfig::default());
    assert_eq!(config.sessions_root, PathBuf::from("redeye_sessions"));
    let _mode = OutputMode::Verbose;
}

#[test]
fn project_and_explicit_layers_merge() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".redeye.yml"),
        r#"
sessions_root: engagements
tools:
  scanner: /usr/local/bin/nmap
escalation: doas
"#,
    )
    .unwrap();
    let extra = temp.path().join("ci.yml");
    fs::write(
        &extra,
        r#"
tools:
  transform: saxon
auto_install: false
output: quiet
"#,
    )
    .unwrap();

    let config = load_config(temp.path(), Some(&extra)).unwrap();

    assert_eq!(config.sessions_root, PathBuf::from("engagements"));
    assert_eq!(config.tools.scanner, "/usr/local/bin/nmap");
    assert_eq!(config.tools.diff, "ndiff");
    assert_eq!(config.tools.transform, "saxon");
    assert_eq!(config.escalation, "doas");
    assert!(!config.auto_install);
    assert_eq!(config.output, Some(OutputMode::Quiet));
}

#[test]
fn missing_explicit_config_is_error() {
    let temp = TempDir::new().unwrap();
    let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
    assert!(err.to_string().contains("file not found"));
}
