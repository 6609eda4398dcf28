//! Scan command implementation.
//!
//! The `redeye scan <profile> <target>` command runs a single profile
//! without the interactive menu.

use crate::cli::args::ScanArgs;
use crate::error::Result;
use crate::scan::{catalog, CommandBuilder, PortSpec, ScanInvocation, ScanProfile, ScanRunner};
use crate::session::SessionStore;
use crate::shell::{display_command, ProcessRunner};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Ask the user to type `yes` before a dangerous profile runs.
pub(crate) fn confirm_profile(profile: &ScanProfile, ui: &mut dyn UserInterface) -> Result<bool> {
    if !profile.requires_confirmation {
        return Ok(true);
    }
    let answer = ui
        .prompt(&Prompt::input(
            "confirm",
            "Are you sure you want to continue? (yes/no)",
        ))?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Print a profile's warning line.
pub(crate) fn warn_profile(profile: &ScanProfile, ui: &mut dyn UserInterface) {
    if let Some(warning) = profile.warning {
        ui.warning(&format!("WARNING: {}", warning));
    }
}

/// The scan command implementation.
pub struct ScanCommand<'a> {
    runner: &'a dyn ProcessRunner,
    store: SessionStore,
    builder: CommandBuilder,
    args: ScanArgs,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command.
    pub fn new(
        runner: &'a dyn ProcessRunner,
        store: SessionStore,
        builder: CommandBuilder,
        args: ScanArgs,
    ) -> Self {
        Self {
            runner,
            store,
            builder,
            args,
        }
    }
}

impl Command for ScanCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let profile = catalog::find(&self.args.profile)?;
        let ports = self
            .args
            .ports
            .as_deref()
            .map(PortSpec::parse)
            .transpose()?;
        let line = self.builder.build(
            profile,
            &self.args.target,
            ports.as_ref(),
            self.args.extra.as_deref(),
        )?;

        if self.args.dry_run {
            let session = self
                .args
                .session
                .as_deref()
                .map(|name| self.store.session(name))
                .transpose()?;
            let invocation = ScanInvocation::from_profile(profile, line).with_session(session);
            let argv = invocation.argv(&self.store, self.builder.scanner());
            ui.message(&display_command(&argv));
            return Ok(CommandResult::success());
        }

        warn_profile(profile, ui);
        if !self.args.yes && !confirm_profile(profile, ui)? {
            ui.warning("Scan cancelled.");
            return Ok(CommandResult::failure(1));
        }

        let session = self
            .args
            .session
            .as_deref()
            .map(|name| self.store.create_or_select(name))
            .transpose()?;
        let invocation = ScanInvocation::from_profile(profile, line).with_session(session);

        let outcome =
            ScanRunner::new(self.runner, &self.store, self.builder.scanner()).execute(&invocation, ui)?;
        if outcome.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code.unwrap_or(1)))
        }
    }
}
