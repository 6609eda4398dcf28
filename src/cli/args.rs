//! CLI argument definitions.
//!
//! Running `redeye` with no subcommand starts the interactive menu.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// RedEye - interactive, session-aware front end for nmap.
#[derive(Debug, Parser)]
#[command(name = "redeye")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Check and install the required tools, then exit (0 ok, 2 failed)
    #[arg(long)]
    pub test_deps: bool,

    /// Path to an extra config file, applied last
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding scan sessions
    #[arg(long, global = true, env = "REDEYE_SESSIONS_DIR", value_name = "DIR")]
    pub sessions_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one scan profile against a target
    Scan(ScanArgs),

    /// List the scan profiles
    Profiles(ProfilesArgs),

    /// List sessions, or the files in one session
    Sessions(SessionsArgs),

    /// Show the scanner flag reference
    Guide(GuideArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Profile id (see `redeye profiles`)
    pub profile: String,

    /// Target host, network or domain
    pub target: String,

    /// Ports to scan instead of the profile default
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Save output into this session
    #[arg(short, long)]
    pub session: Option<String>,

    /// Extra value the profile needs (idle scan zombie host)
    #[arg(long, value_name = "VALUE")]
    pub extra: Option<String>,

    /// Confirm dangerous profiles without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Print the command without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `profiles` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProfilesArgs {
    /// Only the main menu scans
    #[arg(long, conflicts_with = "advanced")]
    pub basic: bool,

    /// Only the advanced scans
    #[arg(long)]
    pub advanced: bool,
}

/// Arguments for the `sessions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SessionsArgs {
    /// Session to list files for
    pub name: Option<String>,

    /// File extension to list
    #[arg(long, default_value = ".xml")]
    pub ext: String,
}

/// Arguments for the `guide` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GuideArgs {
    /// Topic id or number; all topics when omitted
    pub topic: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
