//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, RedeyeConfig};
use crate::error::Result;
use crate::requirements::InstallerContext;
use crate::scan::CommandBuilder;
use crate::session::SessionStore;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

/// Exit code when `--test-deps` finds tools still missing.
pub const TEST_DEPS_FAILURE: i32 = 2;

/// Exit code when startup dependency installation fails.
pub const STARTUP_DEPS_FAILURE: i32 = 1;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher that looks for project config in `cwd`.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Load layered config and apply command-line overrides.
    pub fn resolve_config(&self, cli: &Cli) -> Result<RedeyeConfig> {
        let mut config = load_config(&self.cwd, cli.config.as_deref())?;
        if let Some(dir) = &cli.sessions_dir {
            config.sessions_root = dir.clone();
        }
        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.resolve_config(cli)?;

        // Config output mode applies only when no CLI flag was given
        if !cli.verbose && !cli.quiet {
            if let Some(mode) = config.output {
                ui.set_output_mode(mode.into());
            }
        }

        let runner = SystemRunner;
        let store = SessionStore::new(config.sessions_root.clone());
        let required = config.tools.required();

        if cli.test_deps {
            let ctx = InstallerContext::system(&runner, &config.escalation, config.auto_install);
            return super::deps::DepsCommand::new(required, ctx, TEST_DEPS_FAILURE).execute(ui);
        }

        match &cli.command {
            Some(Commands::Scan(args)) => {
                let builder = CommandBuilder::for_host(&config.tools.scanner, &config.escalation);
                let cmd = super::scan::ScanCommand::new(&runner, store, builder, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Profiles(args)) => {
                super::profiles::ProfilesCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Sessions(args)) => {
                super::sessions::SessionsCommand::new(store, args.clone()).execute(ui)
            }
            Some(Commands::Guide(args)) => super::guide::GuideCommand::new(args.clone()).execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                if !ui.is_interactive() {
                    ui.error("The interactive menu needs a terminal.");
                    ui.show_hint("Use a subcommand such as 'redeye scan', see 'redeye --help'.");
                    return Ok(CommandResult::failure(2));
                }

                super::interactive::show_banner(ui);
                let ctx = InstallerContext::system(&runner, &config.escalation, config.auto_install);
                let deps = super::deps::DepsCommand::new(required, ctx, STARTUP_DEPS_FAILURE)
                    .execute(ui)?;
                if !deps.success {
                    return Ok(deps);
                }

                store.ensure_root()?;
                let builder = CommandBuilder::for_host(&config.tools.scanner, &config.escalation);
                let cmd =
                    super::interactive::InteractiveCommand::new(&runner, store, config.tools, builder);
                cmd.execute(ui)
            }
        }
    }
}
