//! Configuration loading for RedEye.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use redeye::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".redeye.yml"), "escalation: doas").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.escalation, "doas");
//! assert_eq!(config.tools.scanner, "nmap");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_value, load_from_paths, ConfigPaths, PROJECT_CONFIG};
pub use merger::{merge_layers, overlay_onto};
pub use schema::{OutputMode, RedeyeConfig, ToolsConfig};
