//! Sessions command implementation.
//!
//! `redeye sessions` lists session directories; `redeye sessions <name>`
//! lists the artifacts saved in one of them.

use crate::cli::args::SessionsArgs;
use crate::error::{RedeyeError, Result};
use crate::session::SessionStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sessions command implementation.
pub struct SessionsCommand {
    store: SessionStore,
    args: SessionsArgs,
}

impl SessionsCommand {
    /// Create a new sessions command.
    pub fn new(store: SessionStore, args: SessionsArgs) -> Self {
        Self { store, args }
    }

    fn list_sessions(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let names = self.store.list_sessions()?;
        if names.is_empty() {
            ui.message(&format!("No sessions under {}", self.store.root().display()));
            return Ok(CommandResult::success());
        }
        for name in names {
            ui.message(&name);
        }
        Ok(CommandResult::success())
    }
}

impl Command for SessionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = &self.args.name else {
            return self.list_sessions(ui);
        };

        let session = self.store.session(name)?;
        match self.store.list_files(&session, &self.args.ext) {
            Ok(files) => {
                for (i, file) in files.iter().enumerate() {
                    ui.message(&format!("{}. {}", i + 1, file));
                }
                Ok(CommandResult::success())
            }
            Err(e @ RedeyeError::NoMatchingFiles { .. }) => {
                ui.warning(&e.to_string());
                Ok(CommandResult::success())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn args(name: Option<&str>, ext: &str) -> SessionsArgs {
        SessionsArgs {
            name: name.map(String::from),
            ext: ext.to_string(),
        }
    }

    #[test]
    fn empty_root_reports_no_sessions() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = SessionsCommand::new(SessionStore::new(temp.path().join("none")), args(None, ".xml"));

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.has_message("No sessions"));
    }

    #[test]
    fn lists_sessions_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("beta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        let mut ui = MockUI::new();
        let cmd = SessionsCommand::new(SessionStore::new(temp.path()), args(None, ".xml"));

        cmd.execute(&mut ui).unwrap();
        assert_eq!(ui.messages(), &["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn lists_numbered_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("proj");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("scan_2024-01-02_00-00-00.xml"), "").unwrap();
        fs::write(dir.join("scan_2024-01-01_00-00-00.xml"), "").unwrap();
        fs::write(dir.join("scan_2024-01-01_00-00-00.nmap"), "").unwrap();
        let mut ui = MockUI::new();
        let cmd = SessionsCommand::new(SessionStore::new(temp.path()), args(Some("proj"), "xml"));

        cmd.execute(&mut ui).unwrap();
        assert_eq!(
            ui.messages(),
            &[
                "1. scan_2024-01-01_00-00-00.xml".to_string(),
                "2. scan_2024-01-02_00-00-00.xml".to_string()
            ]
        );
    }

    #[test]
    fn empty_session_warns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("proj")).unwrap();
        let mut ui = MockUI::new();
        let cmd = SessionsCommand::new(SessionStore::new(temp.path()), args(Some("proj"), ".xml"));

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.has_warning("proj"));
    }

    #[test]
    fn missing_session_is_error() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = SessionsCommand::new(SessionStore::new(temp.path()), args(Some("nope"), ".xml"));

        assert!(matches!(
            cmd.execute(&mut ui),
            Err(RedeyeError::SessionNotFound { .. })
        ));
    }
}
