//! Profiles command implementation.
//!
//! The `redeye profiles` command prints the scan catalog.

use crate::cli::args::ProfilesArgs;
use crate::error::Result;
use crate::scan::{ScanProfile, PROFILES};
use crate::ui::table::Table;
use crate::ui::theme::RedeyeTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The profiles command implementation.
pub struct ProfilesCommand {
    args: ProfilesArgs,
}

impl ProfilesCommand {
    /// Create a new profiles command.
    pub fn new(args: ProfilesArgs) -> Self {
        Self { args }
    }

    fn selected(&self, profile: &ScanProfile) -> bool {
        match (self.args.basic, self.args.advanced) {
            (true, false) => profile.is_basic(),
            (false, true) => !profile.is_basic(),
            _ => true,
        }
    }
}

fn notes(profile: &ScanProfile) -> String {
    let mut notes = Vec::new();
    if profile.requires_privilege {
        notes.push("root".to_string());
    }
    if profile.requires_confirmation {
        notes.push("confirm".to_string());
    }
    if let Some(input) = &profile.extra_input {
        notes.push(format!("needs {}", input.key));
    }
    match profile.default_ports {
        Some(ports) if !profile.allows_port_override => notes.push(format!("ports {}", ports)),
        Some(ports) => notes.push(format!("default ports {}", ports)),
        None if !profile.allows_port_override => notes.push("no ports".to_string()),
        None => {}
    }
    notes.join(", ")
}

impl Command for ProfilesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let theme = RedeyeTheme::new();
        let mut current = None;
        let mut table: Option<Table> = None;

        for profile in PROFILES.iter().filter(|p| self.selected(p)) {
            if current != Some(profile.group) {
                if let Some(table) = table.take() {
                    ui.message(&table.render());
                }
                ui.message(&format!("{}", theme.key.apply_to(profile.group.heading())));
                current = Some(profile.group);
                table = Some(Table::new(vec!["#", "Id", "Scan", "Arguments", "Notes"]));
            }

            if let Some(table) = table.as_mut() {
                let number = profile.number.to_string();
                let args = profile.base_args.join(" ");
                let notes = notes(profile);
                table.add_row(vec![&number, profile.id, profile.label, &args, &notes]);
            }
        }

        if let Some(table) = table {
            ui.message(&table.render());
        }
        Ok(CommandResult::success())
    }
}
