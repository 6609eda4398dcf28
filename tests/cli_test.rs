//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `redeye` command isolated from the user's home config.
fn redeye(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("redeye"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env_remove("REDEYE_SESSIONS_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("session-aware front end for nmap"))
        .stdout(predicate::str::contains("--test-deps"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_terminal_refuses_menu() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("needs a terminal"));
    Ok(())
}

#[test]
fn cli_profiles_lists_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Scans"))
        .stdout(predicate::str::contains("smb-vuln"))
        .stdout(predicate::str::contains("os-all-tcp"));
    Ok(())
}

#[test]
fn cli_profiles_basic_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["profiles", "--basic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intense"))
        .stdout(predicate::str::contains("heartbleed").not());
    Ok(())
}

#[test]
fn cli_scan_dry_run_prints_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["scan", "fast", "10.0.0.5", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nmap -F -T4 10.0.0.5"))
        .stdout(predicate::str::contains("-oN").not());
    Ok(())
}

#[test]
fn cli_scan_dry_run_with_session_and_ports() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args([
            "scan", "smb-vuln", "10.0.0.9", "--ports", "445", "--session", "proj", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-p 445 10.0.0.9 -oN"))
        .stdout(predicate::str::contains("-oN redeye_sessions/proj/scan_"))
        .stdout(predicate::str::contains(temp.path().to_string_lossy().as_ref()).not());
    assert!(!temp.path().join("redeye_sessions").join("proj").exists());
    Ok(())
}

#[test]
fn cli_scan_ping_never_captures() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["scan", "ping", "10.0.0.0/24", "-s", "proj", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nmap -sn 10.0.0.0/24"))
        .stdout(predicate::str::contains("-oX").not());
    Ok(())
}

#[test]
fn cli_scan_idle_needs_zombie() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["scan", "idle", "10.0.0.5", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Zombie host cannot be empty"));

    redeye(&temp)
        .args(["scan", "idle", "10.0.0.5", "--extra", "10.0.0.7", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-Pn -sI 10.0.0.7 10.0.0.5"));
    Ok(())
}

#[test]
fn cli_scan_rejects_bad_ports() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["scan", "fast", "host", "--ports", "80-22", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid port specification"))
        .stdout(predicate::str::contains("Hint:"));
    Ok(())
}

#[test]
fn cli_scan_unknown_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["scan", "warp-speed", "host"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown scan profile: warp-speed"));
    Ok(())
}

#[test]
fn cli_scan_exploit_cancelled() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["scan", "exploit", "host"])
        .env("REDEYE_PROMPT_CONFIRM", "no")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dangerous"))
        .stderr(predicate::str::contains("Scan cancelled."));
    Ok(())
}

#[test]
fn cli_config_changes_scanner() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".redeye.yml"),
        "tools:\n  scanner: /opt/nmap/bin/nmap\n",
    )?;
    redeye(&temp)
        .args(["scan", "fast", "host", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/nmap/bin/nmap -F -T4 host"));
    Ok(())
}

#[test]
fn cli_silent_config_keeps_only_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".redeye.yml"), "output: silent\n")?;
    redeye(&temp)
        .args(["guide", "timing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    redeye(&temp)
        .args(["scan", "warp-speed", "host"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown scan profile: warp-speed"));
    Ok(())
}

#[test]
fn cli_verbose_flag_overrides_silent_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".redeye.yml"), "output: silent\n")?;
    redeye(&temp)
        .args(["--verbose", "guide", "timing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T4 is recommended"));
    Ok(())
}

#[test]
fn cli_bad_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".redeye.yml"), "tools: [unclosed")?;
    redeye(&temp)
        .arg("profiles")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_sessions_lists_directories() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let root = temp.path().join("scans");
    fs::create_dir_all(root.join("alpha"))?;
    fs::create_dir_all(root.join("beta"))?;
    fs::write(root.join("beta").join("scan_2024-01-02_03-04-05.xml"), "<nmaprun/>")?;

    redeye(&temp)
        .args(["sessions", "--sessions-dir", "scans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha\nbeta"));

    redeye(&temp)
        .args(["sessions", "beta"])
        .env("REDEYE_SESSIONS_DIR", &root)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. scan_2024-01-02_03-04-05.xml"));
    Ok(())
}

#[test]
fn cli_sessions_missing_session() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["sessions", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Session directory not found"));
    Ok(())
}

#[test]
fn cli_guide_topic() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["guide", "nse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nmap Scripting Engine (NSE)"));

    redeye(&temp)
        .args(["guide", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid selection"));
    Ok(())
}

#[test]
fn cli_quiet_conflicts_with_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["--quiet", "--verbose", "profiles"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redeye"));
    Ok(())
}

#[test]
fn cli_completions_offer_profile_ids() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    redeye(&temp)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--test-deps"))
        .stdout(predicate::str::contains("smb-vuln"));
    Ok(())
}
