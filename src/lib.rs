//! RedEye - an interactive, session-aware front end for the nmap scanner.
//!
//! RedEye wraps a catalog of pre-built scan profiles behind a numbered
//! menu, saves scan output into named sessions, and drives `ndiff` and
//! `xsltproc` to compare scans and render HTML reports. On start-up it
//! makes sure the three tools are installed, using the host's package
//! manager when they are not.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, subcommands and the interactive menu
//! - [`config`] - Layered YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`reports`] - Scan comparison and HTML rendering
//! - [`requirements`] - Platform resolution and dependency installation
//! - [`scan`] - Scan profiles, port specifications and execution
//! - [`session`] - Session directories and scan artifacts
//! - [`shell`] - External process execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use redeye::scan::{find, CommandBuilder, PortSpec};
//!
//! let builder = CommandBuilder::new("nmap");
//! let ports = PortSpec::parse("445").unwrap();
//! let cmd = builder
//!     .build(find("smb-vuln").unwrap(), "10.0.0.9", Some(&ports), None)
//!     .unwrap();
//! assert_eq!(cmd.display(), "nmap --script 'smb-vuln*' -sV -T4 -p 445 10.0.0.9");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod reports;
pub mod requirements;
pub mod scan;
pub mod session;
pub mod shell;
pub mod ui;

pub use error::{RedeyeError, Result};
