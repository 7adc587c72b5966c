//! Configuration management for todo-helper

use crate::error::{Result, TodoError};
use crate::render::TableLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = ".todo-helper.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan settings
    pub scan: ScanConfig,
    /// Table settings
    pub table: TableLimits,
}

/// Scan-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extension of files to scan, without the dot
    pub extension: String,
    /// Directory names skipped while walking
    pub exclude_dirs: Vec<String>,
    /// Follow symbolic links
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: "js".to_string(),
            exclude_dirs: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "target".to_string(),
            ],
            follow_links: false,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.scan.extension = config.scan.extension.trim_start_matches('.').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TodoError::Io(e).with_context(format!("Failed to read {}", path.display())))?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Invalid config {}", path.display())))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Otherwise the project-local file in `cwd`
    /// is tried, then the user config file, then defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = [Some(cwd.join(LOCAL_CONFIG_FILE)), user_config_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Self::load(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.scan.extension.is_empty() {
            return Err(TodoError::Config("scan.extension cannot be empty".to_string()));
        }

        let columns = [
            ("user", self.table.user),
            ("date", self.table.date),
            ("text", self.table.text),
            ("file", self.table.file),
        ];
        for (name, limits) in columns {
            if limits.max < 4 {
                return Err(TodoError::Config(format!(
                    "table.{}.max must be at least 4",
                    name
                )));
            }
            if limits.min > limits.max {
                return Err(TodoError::Config(format!(
                    "table.{}.min ({}) exceeds max ({})",
                    name, limits.min, limits.max
                )));
            }
        }

        Ok(())
    }
}

/// Path of the per-user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "todo-helper", "todo-helper")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
