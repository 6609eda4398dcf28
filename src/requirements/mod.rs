//! Scanner tool chain detection and installation.
//!
//! # Modules
//!
//! - [`locator`] - Finds executables on `PATH`
//! - [`platform`] - Classifies the host and its package manager
//! - [`packages`] - Maps tool names to package names
//! - [`installer`] - Installs missing tools at startup

pub mod installer;
pub mod locator;
pub mod packages;
pub mod platform;

pub use installer::{attempt_tiers, ensure, manual_instructions, InstallerContext, PrivilegeTier};
pub use locator::{ToolLocator, ToolReport};
pub use packages::package_for;
pub use platform::{PackageManager, PlatformId, PlatformProfile};
