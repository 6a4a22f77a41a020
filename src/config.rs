use crate::summary::client::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::summary::{Endpoint, MemoError};
use crate::utils::paths::{get_config_path, get_default_key_path};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Overrides the key file next to the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,

    /// Overrides the built-in summary instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,

    #[serde(default)]
    pub quit_after_copy: bool,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            model: default_model(),
            api_base: default_api_base(),
            key_file: None,
            instruction: None,
            quit_after_copy: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, MemoError> {
        let config_path = get_config_path().map_err(|e| MemoError::configuration(e.to_string()))?;
        Self::load_from(&config_path)
    }

    /// Missing file means defaults; an unreadable or malformed one is a configuration error.
    pub fn load_from(path: &Path) -> Result<Self, MemoError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            MemoError::configuration(format!("Failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            MemoError::configuration(format!("Invalid config {}: {e}", path.display()))
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.api_base, &self.model)
    }

    /// Flag, then config, then the file next to the executable.
    pub fn resolve_key_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.key_file {
            return Ok(path.clone());
        }
        get_default_key_path()
    }
}
