//! Scan profiles and their execution.
//!
//! - [`catalog`] holds the static profile table
//! - [`ports`] validates port specifications
//! - [`builder`] turns a profile into an argument vector
//! - [`runner`] executes it with session output capture
//! - [`guide`] is the built-in flag reference

pub mod builder;
pub mod catalog;
pub mod guide;
pub mod ports;
pub mod runner;

pub use builder::{CommandBuilder, CommandLine};
pub use catalog::{find, ExtraInput, ProfileGroup, ScanProfile, ALL_PORTS, PROFILES};
pub use guide::{GuideTopic, TOPICS};
pub use ports::PortSpec;
pub use runner::{ScanInvocation, ScanOutcome, ScanRunner};
