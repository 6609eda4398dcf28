//! Session report tools: scan comparison and HTML rendering.
//!
//! Both operate on the XML artifacts of a session and delegate the actual
//! work to external tools (a diff utility and an XSLT processor).

use std::path::PathBuf;

use crate::error::{RedeyeError, Result};
use crate::session::{Session, SessionStore};
use crate::shell::{display_command, CommandOptions, CommandResult, ProcessRunner};
use crate::ui::UserInterface;

/// Extension of machine-readable scan output.
pub const XML_EXTENSION: &str = ".xml";

/// Shown when the transform tool fails.
pub const TRANSFORM_HINT: &str =
    "Make sure 'xsltproc' is installed and Nmap's XSL file is in its search path.";

/// Parse a 1-based selection out of `count` items into a 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let invalid = || RedeyeError::InvalidSelection {
        input: input.to_string(),
    };
    let n: usize = input.trim().parse().map_err(|_| invalid())?;
    if n == 0 || n > count {
        return Err(invalid());
    }
    Ok(n - 1)
}

/// Runs the diff and transform tools against session artifacts.
pub struct ReportTools<'a> {
    runner: &'a dyn ProcessRunner,
    store: &'a SessionStore,
    diff: &'a str,
    transform: &'a str,
}

impl<'a> ReportTools<'a> {
    pub fn new(
        runner: &'a dyn ProcessRunner,
        store: &'a SessionStore,
        diff: &'a str,
        transform: &'a str,
    ) -> Self {
        Self {
            runner,
            store,
            diff,
            transform,
        }
    }

    /// XML scans in `session`, oldest first.
    pub fn scans(&self, session: &Session) -> Result<Vec<String>> {
        self.store.list_files(session, XML_EXTENSION)
    }

    /// XML scans in `session`, failing with `InsufficientScans` below `needed`.
    pub fn require_scans(&self, session: &Session, needed: usize) -> Result<Vec<String>> {
        let files = match self.scans(session) {
            Ok(files) => files,
            Err(RedeyeError::NoMatchingFiles { .. }) => Vec::new(),
            Err(e) => return Err(e),
        };
        if files.len() < needed {
            return Err(RedeyeError::InsufficientScans {
                session: session.name.clone(),
                extension: XML_EXTENSION.to_string(),
                needed,
                found: files.len(),
            });
        }
        Ok(files)
    }

    /// Diff two scans chosen by 1-based selection.
    ///
    /// The diff tool writes straight to the terminal. Its exit code is
    /// returned as is; `1` conventionally means the scans differ.
    pub fn compare(
        &self,
        session: &Session,
        first: &str,
        second: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let files = self.require_scans(session, 2)?;

        let a = parse_selection(first, files.len())?;
        let b = parse_selection(second, files.len())?;

        let argv = vec![
            self.diff.to_string(),
            session.file_path(&files[a]).to_string_lossy().into_owned(),
            session.file_path(&files[b]).to_string_lossy().into_owned(),
        ];
        ui.show_header(&format!("Executing: {}", display_command(&argv)));
        let result = self.runner.run(&argv, &CommandOptions::inherit())?;

        match result.exit_code {
            Some(0) => ui.success("No differences between the selected scans."),
            Some(1) => ui.success("Command finished."),
            Some(code) => ui.warning(&format!("Command exited with code {}", code)),
            None => ui.warning("Command was terminated by a signal"),
        }
        Ok(result)
    }

    /// Render the selected XML scan to HTML next to it.
    ///
    /// On failure the tool's stderr is shown with an installation hint and
    /// the failure is returned.
    pub fn render_html(
        &self,
        session: &Session,
        choice: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<PathBuf> {
        let files = self.scans(session)?;
        let index = parse_selection(choice, files.len())?;

        let xml = session.file_path(&files[index]);
        let html = xml.with_extension("html");
        let argv = vec![
            self.transform.to_string(),
            "-o".to_string(),
            html.to_string_lossy().into_owned(),
            xml.to_string_lossy().into_owned(),
        ];

        ui.message("Generating HTML report...");
        let result = self.runner.run(&argv, &CommandOptions::captured())?;

        if result.success {
            ui.success(&format!(
                "Successfully generated HTML report: {}",
                html.display()
            ));
            Ok(html)
        } else {
            let command = display_command(&argv);
            ui.error("Error generating report:");
            ui.show_error_block(&command, &result.stderr, Some(TRANSFORM_HINT));
            Err(RedeyeError::CommandFailed {
                command,
                code: result.exit_code,
            })
        }
    }
}
