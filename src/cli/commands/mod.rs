//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`redeye scan`, `redeye sessions`)
//! - The interactive menu when no subcommand is given

pub mod completions;
pub mod deps;
pub mod dispatcher;
pub mod guide;
pub mod interactive;
pub mod profiles;
pub mod scan;
pub mod sessions;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use interactive::{InteractiveCommand, ShellState};
