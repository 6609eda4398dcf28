//! Scan execution.
//!
//! A [`ScanInvocation`] is one run of the scanner. When a session is active
//! and the invocation is a real scan, normal and XML output flags pointing
//! into the session directory are appended before the child starts.

use std::path::PathBuf;

use crate::error::Result;
use crate::session::{ScanTimestamp, Session, SessionStore};
use crate::shell::{display_command, CommandOptions, ProcessRunner};
use crate::ui::UserInterface;

use super::builder::CommandLine;
use super::catalog::ScanProfile;

/// Flags that make the scanner skip port scanning entirely.
const NON_SCAN_FLAGS: &[&str] = &["-sn", "-sP", "-sL"];

/// One scanner run.
#[derive(Debug, Clone)]
pub struct ScanInvocation {
    /// Profile the command came from, `None` for a raw command.
    pub profile: Option<&'static ScanProfile>,
    pub command: CommandLine,
    pub session: Option<Session>,
    /// Taken when the invocation is created.
    pub timestamp: ScanTimestamp,
}

/// What happened when a scan ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Exit code of the child, `None` if killed by a signal.
    pub exit_code: Option<i32>,
    /// Artifact paths written, when output capture was on.
    pub artifacts: Option<(PathBuf, PathBuf)>,
}

impl ScanOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl ScanInvocation {
    /// Invocation for a catalog profile.
    pub fn from_profile(profile: &'static ScanProfile, command: CommandLine) -> Self {
        Self {
            profile: Some(profile),
            command,
            session: None,
            timestamp: ScanTimestamp::now(),
        }
    }

    /// Invocation for a raw command.
    pub fn raw(command: CommandLine) -> Self {
        Self {
            profile: None,
            command,
            session: None,
            timestamp: ScanTimestamp::now(),
        }
    }

    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    pub fn with_timestamp(mut self, timestamp: ScanTimestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether this run scans ports and should keep output.
    ///
    /// Host discovery and list-only runs do not, nor does anything that is
    /// not the scanner.
    pub fn is_real_scan(&self, scanner: &str) -> bool {
        self.command.runs(scanner) && !NON_SCAN_FLAGS.iter().any(|f| self.command.has_arg(f))
    }

    /// `.nmap` and `.xml` paths for this run, if output is captured.
    pub fn output_paths(&self, store: &SessionStore, scanner: &str) -> Option<(PathBuf, PathBuf)> {
        let session = self.session.as_ref()?;
        if !self.is_real_scan(scanner) {
            return None;
        }
        let base = store.artifact_base(session, &self.timestamp);
        Some((base.with_extension("nmap"), base.with_extension("xml")))
    }

    /// The argument vector that will actually run.
    pub fn argv(&self, store: &SessionStore, scanner: &str) -> Vec<String> {
        let mut argv = self.command.argv();
        if let Some((normal, xml)) = self.output_paths(store, scanner) {
            argv.push("-oN".to_string());
            argv.push(normal.to_string_lossy().into_owned());
            argv.push("-oX".to_string());
            argv.push(xml.to_string_lossy().into_owned());
        }
        argv
    }
}

/// Runs scan invocations with live output.
pub struct ScanRunner<'a> {
    runner: &'a dyn ProcessRunner,
    store: &'a SessionStore,
    scanner: &'a str,
}

impl<'a> ScanRunner<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, store: &'a SessionStore, scanner: &'a str) -> Self {
        Self {
            runner,
            store,
            scanner,
        }
    }

    /// Run `invocation` and wait for it.
    ///
    /// A non-zero exit is reported as a warning and returned in the outcome;
    /// only a spawn failure is an error.
    pub fn execute(
        &self,
        invocation: &ScanInvocation,
        ui: &mut dyn UserInterface,
    ) -> Result<ScanOutcome> {
        let argv = invocation.argv(self.store, self.scanner);
        let artifacts = invocation.output_paths(self.store, self.scanner);

        if let Some(profile) = invocation.profile {
            tracing::info!(profile = profile.id, "Starting scan");
        }
        ui.show_header(&format!("Executing: {}", display_command(&argv)));

        let result = self.runner.run(&argv, &CommandOptions::inherit())?;

        if result.success {
            ui.success("Command finished.");
        } else {
            match result.exit_code {
                Some(code) => ui.warning(&format!("Command exited with code {}", code)),
                None => ui.warning("Command was terminated by a signal"),
            }
        }

        if let Some((normal, _)) = &artifacts {
            if result.success {
                ui.message(&format!(
                    "Results saved in: {}.nmap/.xml",
                    normal.with_extension("").display()
                ));
            }
        }

        Ok(ScanOutcome {
            exit_code: result.exit_code,
            artifacts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{catalog::find, CommandBuilder};
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use chrono::NaiveDate;

    fn ts() -> ScanTimestamp {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
            .into()
    }

    fn invocation(id: &str, session: Option<Session>) -> ScanInvocation {
        let profile = find(id).unwrap();
        let cmd = CommandBuilder::new("nmap")
            .build(profile, "10.0.0.5", None, None)
            .unwrap();
        ScanInvocation::from_profile(profile, cmd)
            .with_session(session)
            .with_timestamp(ts())
    }

    fn store() -> SessionStore {
        SessionStore::new("redeye_sessions")
    }

    #[test]
    fn no_session_no_output_flags() {
        let inv = invocation("fast", None);
        assert_eq!(
            inv.argv(&store(), "nmap"),
            vec!["nmap", "-F", "-T4", "10.0.0.5"]
        );
    }

    #[test]
    fn session_adds_output_flags() {
        let store = store();
        let session = store.session("proj").unwrap();
        let inv = invocation("fast", Some(session));

        assert_eq!(
            inv.argv(&store, "nmap"),
            vec![
                "nmap",
                "-F",
                "-T4",
                "10.0.0.5",
                "-oN",
                "redeye_sessions/proj/scan_2024-01-02_03-04-05.nmap",
                "-oX",
                "redeye_sessions/proj/scan_2024-01-02_03-04-05.xml",
            ]
        );
    }

    #[test]
    fn discovery_scans_never_capture() {
        let store = store();
        for id in ["ping", "aggressive-discovery", "network-sweep"] {
            let inv = invocation(id, Some(store.session("proj").unwrap()));
            assert!(!inv.is_real_scan("nmap"), "{id}");
            assert!(inv.output_paths(&store, "nmap").is_none(), "{id}");
        }
    }

    #[test]
    fn list_only_raw_command_never_captures() {
        let store = store();
        let cmd = CommandBuilder::new("nmap").custom("nmap -sL 10.0.0.0/24").unwrap();
        let inv = ScanInvocation::raw(cmd).with_session(Some(store.session("proj").unwrap()));
        assert!(inv.output_paths(&store, "nmap").is_none());
    }

    #[test]
    fn raw_scan_captures_with_session() {
        let store = store();
        let cmd = CommandBuilder::new("nmap").custom("nmap -sV 10.0.0.1").unwrap();
        let inv = ScanInvocation::raw(cmd)
            .with_session(Some(store.session("proj").unwrap()))
            .with_timestamp(ts());
        let argv = inv.argv(&store, "nmap");
        assert_eq!(argv[argv.len() - 4], "-oN");
        assert!(inv.profile.is_none());
    }

    #[test]
    fn escalated_scanner_is_still_a_real_scan() {
        let profile = find("os-all-tcp").unwrap();
        let cmd = CommandBuilder::new("nmap")
            .with_escalation("sudo")
            .build(profile, "h", None, None)
            .unwrap();
        let inv = ScanInvocation::from_profile(profile, cmd);
        assert!(inv.is_real_scan("nmap"));
    }

    #[test]
    fn execute_reports_success_and_artifacts() {
        let store = store();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let inv = invocation("fast", Some(store.session("proj").unwrap()));

        let outcome = ScanRunner::new(&runner, &store, "nmap")
            .execute(&inv, &mut ui)
            .unwrap();

        assert!(outcome.success());
        assert!(outcome.artifacts.is_some());
        assert_eq!(runner.last_call().unwrap(), inv.argv(&store, "nmap"));
        assert!(ui.has_success("Command finished."));
        assert!(ui.has_message(
            "Results saved in: redeye_sessions/proj/scan_2024-01-02_03-04-05.nmap/.xml"
        ));
    }

    #[test]
    fn execute_passes_exit_code_through() {
        let store = store();
        let runner = MockRunner::failing(3);
        let mut ui = MockUI::new();
        let inv = invocation("fast", None);

        let outcome = ScanRunner::new(&runner, &store, "nmap")
            .execute(&inv, &mut ui)
            .unwrap();

        assert_eq!(outcome.exit_code, Some(3));
        assert!(!outcome.success());
        assert!(ui.has_warning("exited with code 3"));
        assert!(!ui.has_message("Results saved in:"));
    }
}
