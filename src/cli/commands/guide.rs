//! Guide command implementation.
//!
//! `redeye guide [topic]` prints the scanner flag reference.

use crate::cli::args::GuideArgs;
use crate::error::Result;
use crate::scan::guide::{self, GuideTopic, TOPICS};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The guide command implementation.
pub struct GuideCommand {
    args: GuideArgs,
}

impl GuideCommand {
    /// Create a new guide command.
    pub fn new(args: GuideArgs) -> Self {
        Self { args }
    }
}

pub(crate) fn print_topic(topic: &GuideTopic, ui: &mut dyn UserInterface) {
    for line in topic.render() {
        ui.message(&line);
    }
}

impl Command for GuideCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.topic {
            Some(key) => print_topic(guide::topic(key)?, ui),
            None => {
                for (i, topic) in TOPICS.iter().enumerate() {
                    if i > 0 {
                        ui.message("");
                    }
                    print_topic(topic, ui);
                }
            }
        }
        Ok(CommandResult::success())
    }
}
