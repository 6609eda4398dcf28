//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. User global config (`~/.redeye/config.yml`)
//! 2. Project config (`./.redeye.yml`)
//! 3. File passed with `--config`

use crate::config::merger::merge_layers;
use crate::config::schema::RedeyeConfig;
use crate::error::{RedeyeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG: &str = ".redeye.yml";

/// Config file locations in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.redeye/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: ./.redeye.yml
    pub project: Option<PathBuf>,

    /// Explicit `--config` file. Must exist when given.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for `cwd`.
    pub fn discover(cwd: &Path, explicit: Option<&Path>) -> Self {
        Self::discover_with_home(dirs::home_dir().as_deref(), cwd, explicit)
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(home: Option<&Path>, cwd: &Path, explicit: Option<&Path>) -> Self {
        Self {
            user_global: home
                .map(|h| h.join(".redeye").join("config.yml"))
                .filter(|p| p.is_file()),
            project: Some(cwd.join(PROJECT_CONFIG)).filter(|p| p.is_file()),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// All paths to load, in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load a config file as a raw YAML value for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RedeyeError::ConfigParseError {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            }
        } else {
            RedeyeError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| RedeyeError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered layer. No files means defaults.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<RedeyeConfig> {
    let mut layers = Vec::new();
    let mut last = None;
    for path in paths.all() {
        let value = load_config_value(path)?;
        tracing::debug!("Loaded config layer {:?}", path);
        last = Some(path.clone());
        // An empty file is no layer at all
        if !value.is_null() {
            layers.push(value);
        }
    }

    let merged = merge_layers(layers);
    serde_yaml::from_value(merged).map_err(|e| RedeyeError::ConfigParseError {
        path: last.unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG)),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Discover and load configuration for `cwd`.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<RedeyeConfig> {
    load_from_paths(&ConfigPaths::discover(cwd, explicit))
}
