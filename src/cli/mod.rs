//! Command-line interface for RedEye.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations, including the interactive menu

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, GuideArgs, ProfilesArgs, ScanArgs, SessionsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
