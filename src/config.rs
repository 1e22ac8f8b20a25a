use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::boot::{BootConfig, MAX_PROGRESS};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub boot: BootSettings,
    pub storage: StorageConfig,
    pub ui: UiSettings,
}

/// Boot splash timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootSettings {
    pub tick_ms: u64,
    pub step: u8,
    pub settle_ms: u64,
}

/// Where the selected skin is remembered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file in the user config directory
    #[default]
    File,
    /// Kept for the lifetime of the process only
    Memory,
    /// Nothing is stored
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Upper bound on how long the event loop waits for input between frames
    pub frame_ms: u64,
}

impl Default for BootSettings {
    fn default() -> Self {
        Self {
            tick_ms: 28,
            step: 1,
            settle_ms: 450,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { frame_ms: 16 }
    }
}

impl BootSettings {
    pub fn to_boot_config(&self) -> BootConfig {
        BootConfig::new(
            Duration::from_millis(self.tick_ms),
            self.step,
            Duration::from_millis(self.settle_ms),
        )
    }
}

impl UiSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when the file does not exist
    pub fn load() -> ConfigResult<Self> {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/crix/config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crix").join("config.toml"))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.boot.tick_ms == 0 {
            return Err(ConfigError::Invalid("boot.tick_ms must be greater than 0".into()));
        }
        if self.boot.step == 0 || self.boot.step > MAX_PROGRESS {
            return Err(ConfigError::Invalid(format!(
                "boot.step must be between 1 and {}",
                MAX_PROGRESS
            )));
        }
        if self.ui.frame_ms == 0 {
            return Err(ConfigError::Invalid("ui.frame_ms must be greater than 0".into()));
        }
        Ok(())
    }
}
