//! File-backed settings for hosts without a settings service.

use crate::config::Config;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub workspace_count: usize,
    pub dynamic_workspaces: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            workspace_count: 4,
            dynamic_workspaces: false,
        }
    }
}

impl FileConfig {
    /// Load `config.toml` from the XDG config directory, writing the
    /// defaults there first if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be placed, or if the
    /// file cannot be read, written, or parsed.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            let config = Self::default();
            fs::write(&path, toml::to_string(&config)?)?;
            return Ok(config);
        }
        Self::from_path(&path)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Config for FileConfig {
    fn workspace_count(&self) -> usize {
        self.workspace_count
    }
    fn dynamic_workspaces(&self) -> bool {
        self.dynamic_workspaces
    }
}

fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("simply-workspaces")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}
