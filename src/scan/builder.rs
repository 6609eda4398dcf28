//! Scanner argument vectors.

use std::path::Path;

use crate::error::{RedeyeError, Result};
use crate::shell::display_command;

use super::catalog::{ScanProfile, ALL_PORTS};
use super::ports::PortSpec;

/// A scanner command ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Privilege escalation command placed before the program, if any.
    pub escalation: Option<String>,
    /// The program to run.
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Full argument vector, escalation first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        if let Some(esc) = &self.escalation {
            argv.push(esc.clone());
        }
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Whether any argument equals `flag`.
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Whether the program is `scanner`, by name or by path.
    pub fn runs(&self, scanner: &str) -> bool {
        self.program == scanner
            || Path::new(&self.program)
                .file_name()
                .is_some_and(|name| name == scanner)
    }

    /// The command as a user would type it.
    pub fn display(&self) -> String {
        display_command(&self.argv())
    }
}

/// Builds scanner commands from profiles.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    scanner: String,
    escalation: Option<String>,
}

impl CommandBuilder {
    /// Builder for `scanner` that never escalates.
    pub fn new(scanner: impl Into<String>) -> Self {
        Self {
            scanner: scanner.into(),
            escalation: None,
        }
    }

    /// Prefix privileged profiles with `command` (e.g. `sudo`).
    pub fn with_escalation(mut self, command: impl Into<String>) -> Self {
        let command = command.into();
        self.escalation = (!command.is_empty()).then_some(command);
        self
    }

    /// Builder for this host: escalation is skipped when already root.
    pub fn for_host(scanner: &str, escalation: &str) -> Self {
        let builder = Self::new(scanner);
        if crate::shell::is_elevated() {
            tracing::debug!("Running elevated, privileged scans skip '{}'", escalation);
            builder
        } else {
            builder.with_escalation(escalation)
        }
    }

    /// The scanner program name.
    pub fn scanner(&self) -> &str {
        &self.scanner
    }

    /// Build the command for `profile` against `target`.
    ///
    /// Arguments are laid out as base arguments, then the extra input flag
    /// and value, then the port flag, with the target last. User ports win
    /// over the profile default when the profile allows it.
    pub fn build(
        &self,
        profile: &ScanProfile,
        target: &str,
        ports: Option<&PortSpec>,
        extra: Option<&str>,
    ) -> Result<CommandLine> {
        let target = target.trim();
        if target.is_empty() {
            return Err(RedeyeError::EmptyInput {
                field: "Target".to_string(),
            });
        }

        let mut args: Vec<String> = profile.base_args.iter().map(|a| a.to_string()).collect();

        if let Some(input) = &profile.extra_input {
            let value = extra.map(str::trim).unwrap_or_default();
            if value.is_empty() {
                return Err(RedeyeError::EmptyInput {
                    field: input.label.to_string(),
                });
            }
            args.push(input.flag.to_string());
            args.push(value.to_string());
        }

        let user_ports = ports
            .map(PortSpec::as_str)
            .filter(|p| !p.is_empty() && profile.allows_port_override);
        if let Some(ports) = user_ports.or(profile.default_ports) {
            push_ports(&mut args, ports);
        }

        args.push(target.to_string());

        let escalation = if profile.requires_privilege {
            self.escalation.clone()
        } else {
            None
        };

        Ok(CommandLine {
            escalation,
            program: self.scanner.clone(),
            args,
        })
    }

    /// Parse a raw command line typed by the user.
    ///
    /// The line must start with the scanner name and is split with shell
    /// word rules. Raw commands are never escalated.
    pub fn custom(&self, line: &str) -> Result<CommandLine> {
        let line = line.trim();
        if line.is_empty() {
            return Err(RedeyeError::EmptyInput {
                field: "Command".to_string(),
            });
        }

        let words = shell_words::split(line).map_err(|e| RedeyeError::InvalidCommand {
            message: e.to_string(),
        })?;
        let Some((program, args)) = words.split_first() else {
            return Err(RedeyeError::EmptyInput {
                field: "Command".to_string(),
            });
        };

        if program != &self.scanner || args.is_empty() {
            return Err(RedeyeError::InvalidCommand {
                message: format!("command must start with '{} '", self.scanner),
            });
        }

        Ok(CommandLine {
            escalation: None,
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

fn push_ports(args: &mut Vec<String>, ports: &str) {
    if ports == ALL_PORTS {
        args.push("-p-".to_string());
    } else {
        args.push("-p".to_string());
        args.push(ports.to_string());
    }
}
