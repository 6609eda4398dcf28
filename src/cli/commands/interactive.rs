//! Interactive menu.
//!
//! Running `redeye` with no subcommand opens a numbered menu loop. The
//! loop owns a [`ShellState`] (target, ports, session) and passes it to
//! each handler. Recoverable errors are reported and the menu is shown
//! again.

use std::io;

use crate::config::ToolsConfig;
use crate::error::{RedeyeError, Result};
use crate::reports::ReportTools;
use crate::scan::{
    catalog, guide, CommandBuilder, PortSpec, ProfileGroup, ScanInvocation, ScanProfile,
    ScanRunner,
};
use crate::session::{Session, SessionStore};
use crate::shell::ProcessRunner;
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::guide::print_topic;
use super::scan::{confirm_profile, warn_profile};

const BANNER: &str = "\
░▒▓███████▓▒░░▒▓████████▓▒░▒▓███████▓▒░░▒▓████████▓▒░▒▓█▓▒░░▒▓█▓▒░▒▓████████▓▒░
░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░     ░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░     ░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░
░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░     ░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░     ░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░
░▒▓███████▓▒░░▒▓██████▓▒░ ░▒▓█▓▒░░▒▓█▓▒░▒▓██████▓▒░  ░▒▓██████▓▒░░▒▓██████▓▒░
░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░     ░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░         ░▒▓█▓▒░   ░▒▓█▓▒░
░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░     ░▒▓█▓▒░░▒▓█▓▒░▒▓█▓▒░         ░▒▓█▓▒░   ░▒▓█▓▒░
░▒▓█▓▒░░▒▓█▓▒░▒▓████████▓▒░▒▓███████▓▒░░▒▓████████▓▒░  ░▒▓█▓▒░   ░▒▓████████▓▒░";

const GOODBYE: &str = "Exiting RedEye. Goodbye!";

const NO_TARGET: &str = "No target has been set. Please use option '1' first.";
const NO_SESSION: &str = "Please set a session first (Option 8).";

/// Print the start-up banner.
pub fn show_banner(ui: &mut dyn UserInterface) {
    ui.message(BANNER);
    ui.message("Welcome to the RedEye Nmap Scanner - Professional Edition");
}

/// Mutable state of one interactive run.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub target: Option<String>,
    pub ports: Option<PortSpec>,
    pub session: Option<Session>,
}

impl ShellState {
    /// Lines shown above the main menu.
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            match &self.session {
                Some(s) => format!("Active Session: {}", s.name),
                None => "No Active Session (scans will not be saved)".to_string(),
            },
            match &self.target {
                Some(t) => format!("Current Target: {}", t),
                None => "No Target Set".to_string(),
            },
            match &self.ports {
                Some(p) => format!("Custom Ports: {}", p),
                None => "Ports: Default".to_string(),
            },
        ]
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Whether the prompt stream has ended.
fn is_eof(e: &RedeyeError) -> bool {
    matches!(e, RedeyeError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
}

fn report(e: &RedeyeError, ui: &mut dyn UserInterface) {
    ui.error(&e.to_string());
    if let Some(hint) = e.hint() {
        ui.show_hint(hint);
    }
}

/// The interactive menu implementation.
pub struct InteractiveCommand<'a> {
    runner: &'a dyn ProcessRunner,
    store: SessionStore,
    tools: ToolsConfig,
    builder: CommandBuilder,
}

impl<'a> InteractiveCommand<'a> {
    /// Create the menu over `store`, running tools through `runner`.
    pub fn new(
        runner: &'a dyn ProcessRunner,
        store: SessionStore,
        tools: ToolsConfig,
        builder: CommandBuilder,
    ) -> Self {
        Self {
            runner,
            store,
            tools,
            builder,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run_loop(&self, state: &mut ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        loop {
            ui.show_header("RedEye Nmap Scanner Menu");
            for line in state.status_lines() {
                ui.message(&line);
            }

            let choice = match ui.prompt(&self.main_menu()) {
                Ok(choice) => choice,
                Err(e) if is_eof(&e) => break,
                Err(e) => return Err(e),
            };

            match self.handle(choice.trim(), state, ui) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if is_eof(&e) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Menu action failed: {:?}", e);
                    report(&e, ui);
                }
                Err(e) => return Err(e),
            }
        }

        ui.message(GOODBYE);
        Ok(())
    }

    fn main_menu(&self) -> Prompt {
        let mut options = vec![
            PromptOption::new("1", "1.  Set / Change Target"),
            PromptOption::new("2", "2.  Set / Unset Custom Ports (Optional)"),
        ];
        for (i, profile) in catalog::basic().enumerate() {
            let value = (i + 3).to_string();
            options.push(PromptOption::new(
                &value,
                &format!("{:<3} {}", format!("{}.", value), profile.label),
            ));
        }
        options.extend([
            PromptOption::new("8", "8.  Set / Create Scan Session"),
            PromptOption::new("9", "9.  Compare Two Scans (Diff)"),
            PromptOption::new("10", "10. Generate HTML Report"),
            PromptOption::new("11", "11. Advanced Scans Menu"),
            PromptOption::new("12", &format!("12. Custom {} Command", self.tools.scanner)),
            PromptOption::new("13", "13. Nmap Command Helper"),
            PromptOption::new("0", "0.  Exit"),
        ]);
        Prompt::select("menu", "Enter your choice", options)
    }

    fn handle(&self, choice: &str, state: &mut ShellState, ui: &mut dyn UserInterface) -> Result<Flow> {
        match choice {
            "1" => self.set_target(state, ui)?,
            "2" => self.set_ports(state, ui)?,
            "3" | "4" | "5" | "6" | "7" => {
                let number = choice.parse::<u8>().unwrap_or_default() - 2;
                if let Some(profile) = catalog::basic().find(|p| p.number == number) {
                    self.run_profile(profile, state, ui)?;
                }
            }
            "8" => self.set_session(state, ui)?,
            "9" => self.compare(state, ui)?,
            "10" => self.generate_report(state, ui)?,
            "11" => self.advanced_menu(state, ui)?,
            "12" => self.custom_command(state, ui)?,
            "13" => self.helper_menu(ui)?,
            "0" => {
                ui.message(GOODBYE);
                return Ok(Flow::Exit);
            }
            other => {
                return Err(RedeyeError::InvalidSelection {
                    input: other.to_string(),
                })
            }
        }
        Ok(Flow::Continue)
    }

    fn set_target(&self, state: &mut ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let target = ui.prompt(&Prompt::input("target", "Enter target IP or domain"))?;
        let target = target.trim();
        if target.is_empty() {
            return Err(RedeyeError::EmptyInput {
                field: "Target".to_string(),
            });
        }
        state.target = Some(target.to_string());
        ui.success(&format!("Target set to: {}", target));
        Ok(())
    }

    fn set_ports(&self, state: &mut ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let input = ui.prompt(&Prompt::input("ports", "Enter custom ports (or blank to clear)"))?;
        if input.trim().is_empty() {
            state.ports = None;
            ui.success("Custom ports cleared.");
            return Ok(());
        }
        let ports = PortSpec::parse(input.trim())?;
        ui.success(&format!("Ports set to: {}", ports));
        state.ports = Some(ports);
        Ok(())
    }

    fn set_session(&self, state: &mut ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let name = ui.prompt(&Prompt::input("session", "Enter session name (e.g., 'project_x')"))?;
        if name.trim().is_empty() {
            return Err(RedeyeError::EmptyInput {
                field: "Session name".to_string(),
            });
        }
        let session = self.store.create_or_select(&name)?;
        ui.success(&format!(
            "Session '{}' is active. Scans will be saved to '{}'.",
            session.name,
            session.dir.display()
        ));
        state.session = Some(session);
        Ok(())
    }

    fn run_profile(
        &self,
        profile: &'static ScanProfile,
        state: &ShellState,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let Some(target) = &state.target else {
            ui.warning(NO_TARGET);
            return Ok(());
        };

        let extra = match &profile.extra_input {
            Some(input) => Some(ui.prompt(&Prompt::input(input.key, input.prompt))?),
            None => None,
        };
        let line = self
            .builder
            .build(profile, target, state.ports.as_ref(), extra.as_deref())?;

        warn_profile(profile, ui);
        if !confirm_profile(profile, ui)? {
            ui.warning("Scan cancelled.");
            return Ok(());
        }

        let invocation = ScanInvocation::from_profile(profile, line).with_session(state.session.clone());
        self.scan_runner().execute(&invocation, ui)?;
        Ok(())
    }

    fn scan_runner(&self) -> ScanRunner<'_> {
        ScanRunner::new(self.runner, &self.store, self.builder.scanner())
    }

    fn report_tools(&self) -> ReportTools<'_> {
        ReportTools::new(self.runner, &self.store, &self.tools.diff, &self.tools.transform)
    }

    fn list_choices(files: &[String], ui: &mut dyn UserInterface) {
        for (i, file) in files.iter().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, file));
        }
    }

    fn compare(&self, state: &ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(session) = &state.session else {
            ui.warning(NO_SESSION);
            return Ok(());
        };

        let tools = self.report_tools();
        let files = tools.require_scans(session, 2)?;
        ui.message("Available XML scans:");
        Self::list_choices(&files, ui);

        let first = ui.prompt(&Prompt::input("compare_first", "Select the first file (number)"))?;
        let second = ui
            .prompt(&Prompt::input("compare_second", "Select the second file (number)"))?;
        tools.compare(session, &first, &second, ui)?;
        Ok(())
    }

    fn generate_report(&self, state: &ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(session) = &state.session else {
            ui.warning(NO_SESSION);
            return Ok(());
        };

        let tools = self.report_tools();
        let files = tools.scans(session)?;
        ui.message("Available XML scans:");
        Self::list_choices(&files, ui);

        let choice = ui
            .prompt(&Prompt::input(
                "report_file",
                "Select the XML file to generate a report from",
            ))?;
        match tools.render_html(session, &choice, ui) {
            Ok(_) => Ok(()),
            // Already shown with the tool's stderr
            Err(RedeyeError::CommandFailed { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn advanced_prompt() -> Prompt {
        let mut options: Vec<PromptOption> = catalog::advanced()
            .map(|p| {
                PromptOption::new(
                    &p.number.to_string(),
                    &format!("{:<3} {}", format!("{}.", p.number), p.label),
                )
            })
            .collect();
        options.push(PromptOption::new("0", "0.  Back to Main Menu"));
        Prompt::select("advanced", "Select an advanced scan", options)
    }

    fn show_groups(ui: &mut dyn UserInterface) {
        for group in [ProfileGroup::Evasion, ProfileGroup::Service, ProfileGroup::Deep] {
            let numbers: Vec<u8> = catalog::advanced()
                .filter(|p| p.group == group)
                .map(|p| p.number)
                .collect();
            if let (Some(first), Some(last)) = (numbers.first(), numbers.last()) {
                ui.message(&format!("{}: {}-{}", group.heading(), first, last));
            }
        }
    }

    fn advanced_menu(&self, state: &ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(target) = &state.target else {
            ui.warning(NO_TARGET);
            return Ok(());
        };

        loop {
            ui.show_header(&format!("Advanced Scans Menu (Target: {})", target));
            if let Some(ports) = &state.ports {
                ui.message(&format!("Using Custom Ports: {}", ports));
            }
            Self::show_groups(ui);

            let choice = match ui.prompt(&Self::advanced_prompt()) {
                Ok(choice) => choice,
                Err(e) if is_eof(&e) => return Ok(()),
                Err(e) => return Err(e),
            };
            if choice == "0" {
                return Ok(());
            }

            let profile = catalog::advanced()
                .find(|p| p.number.to_string() == choice)
                .ok_or(RedeyeError::InvalidSelection { input: choice });
            let result = profile.and_then(|p| self.run_profile(p, state, ui));
            match result {
                Ok(()) => {}
                Err(e) if is_eof(&e) => return Ok(()),
                Err(e) if e.is_recoverable() => report(&e, ui),
                Err(e) => return Err(e),
            }
        }
    }

    fn custom_command(&self, state: &ShellState, ui: &mut dyn UserInterface) -> Result<()> {
        let line = ui
            .prompt(&Prompt::input(
                "custom_command",
                &format!("Enter full {} command", self.builder.scanner()),
            ))?;
        let command = self.builder.custom(&line)?;
        let invocation = ScanInvocation::raw(command).with_session(state.session.clone());
        self.scan_runner().execute(&invocation, ui)?;
        Ok(())
    }

    fn helper_menu(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut options: Vec<PromptOption> = guide::TOPICS
            .iter()
            .enumerate()
            .map(|(i, t)| PromptOption::new(&(i + 1).to_string(), &format!("{}. {}", i + 1, t.title)))
            .collect();
        options.push(PromptOption::new("0", "0. Back to Main Menu"));
        let prompt = Prompt::select("guide", "Select a topic", options);

        loop {
            ui.show_header("Nmap Command Helper");
            let choice = match ui.prompt(&prompt) {
                Ok(choice) => choice,
                Err(e) if is_eof(&e) => return Ok(()),
                Err(e) => return Err(e),
            };
            if choice == "0" {
                return Ok(());
            }
            match guide::topic(&choice) {
                Ok(topic) => print_topic(topic, ui),
                Err(e) => report(&e, ui),
            }
        }
    }
}

impl Command for InteractiveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut state = ShellState::default();
        self.run_loop(&mut state, ui)?;
        Ok(CommandResult::success())
    }
}
