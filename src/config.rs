use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default effect asset shipped in the module data directory
pub const DEFAULT_EFFECT_FILE: &str = "ASCII_obs.effect";

/// Plugin configuration
///
/// Locates the module's data directory and the effect asset inside it. The
/// host resolves module files relative to this directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Module data directory
    pub data_dir: PathBuf,

    /// Effect file name, relative to `data_dir`
    pub effect_file: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            effect_file: DEFAULT_EFFECT_FILE.to_string(),
        }
    }
}

impl PluginConfig {
    /// Create a configuration rooted at the given data directory
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: PluginConfig = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.effect_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "effect_file".to_string(),
                value: self.effect_file.clone(),
            }.into());
        }

        if self.effect_file.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                key: "effect_file".to_string(),
                value: self.effect_file.clone(),
            }.into());
        }

        Ok(())
    }

    /// Resolve a file inside the module data directory
    pub fn module_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Full path of the effect asset
    pub fn effect_path(&self) -> PathBuf {
        self.module_file(&self.effect_file)
    }
}
