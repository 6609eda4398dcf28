//! Dependency check command.
//!
//! Runs at interactive startup and on its own as `redeye --test-deps`.

use crate::error::Result;
use crate::requirements::{ensure, InstallerContext};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Makes sure the scanner tool chain is installed.
pub struct DepsCommand<'a> {
    tools: Vec<String>,
    ctx: InstallerContext<'a>,
    failure_code: i32,
}

impl<'a> DepsCommand<'a> {
    /// Check `tools`, exiting with `failure_code` if they cannot be provided.
    pub fn new(tools: Vec<String>, ctx: InstallerContext<'a>, failure_code: i32) -> Self {
        Self {
            tools,
            ctx,
            failure_code,
        }
    }
}

impl Command for DepsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match ensure(&self.tools, ui, &self.ctx) {
            Ok(()) => Ok(CommandResult::success()),
            Err(e) if !e.is_recoverable() => {
                tracing::debug!("Dependency setup failed: {}", e);
                if let Some(hint) = e.hint() {
                    ui.show_hint(hint);
                }
                Ok(CommandResult::failure(self.failure_code))
            }
            Err(e) => Err(e),
        }
    }
}
