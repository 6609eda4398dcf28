//! Shell completions generation.
//!
//! `redeye completions <shell>` prints a completion script. Besides the
//! subcommands and flags, the script offers catalog profile ids for
//! `scan <PROFILE>` and topic ids for `guide [TOPIC]`. Parsing itself keeps
//! accepting free text so unknown ids still get RedEye's own error.

use std::io::Write;

use clap::builder::PossibleValuesParser;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::scan::{guide::TOPICS, PROFILES};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// The clap command tree with completion hints for profile and topic ids.
fn completion_command() -> clap::Command {
    let profile_ids: Vec<&'static str> = PROFILES.iter().map(|p| p.id).collect();
    let topic_ids: Vec<&'static str> = TOPICS.iter().map(|t| t.id).collect();

    Cli::command()
        .mut_subcommand("scan", |scan| {
            scan.mut_arg("profile", |arg| {
                arg.value_parser(PossibleValuesParser::new(profile_ids))
            })
        })
        .mut_subcommand("guide", |guide| {
            guide.mut_arg("topic", |arg| arg.value_parser(PossibleValuesParser::new(topic_ids)))
        })
}

pub(crate) fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = completion_command();
    clap_complete::generate(shell, &mut cmd, "redeye", out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        write_completions(self.args.shell, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
