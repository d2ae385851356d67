use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{DomainError, WatchConfig};
use crate::ports::ConfigStore;

/// TOML-based configuration store with OS-specific paths.
pub struct TomlConfigStore {
    data_dir: PathBuf,
}

impl TomlConfigStore {
    /// Create a new TomlConfigStore rooted at the OS config directory.
    pub fn new() -> Result<Self, DomainError> {
        let data_dir = Self::default_data_dir()?;
        fs::create_dir_all(&data_dir)?;
        info!(data_dir = ?data_dir, "ConfigStore initialized");
        Ok(Self { data_dir })
    }

    /// Create a store rooted at an explicit directory.
    ///
    /// Intended for embedders that manage their own paths, and for tests.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// OS-specific application data directory.
    /// - macOS: ~/Library/Application Support/screenwatch/
    /// - Windows: %APPDATA%\screenwatch\
    /// - Linux: ~/.config/screenwatch/
    fn default_data_dir() -> Result<PathBuf, DomainError> {
        #[cfg(target_os = "macos")]
        let base = dirs::data_dir();

        #[cfg(not(target_os = "macos"))]
        let base = dirs::config_dir();

        base.map(|p| p.join("screenwatch")).ok_or_else(|| {
            DomainError::Config("Could not find application data directory".to_string())
        })
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<WatchConfig, DomainError> {
        let config_path = self.config_path();

        if config_path.exists() {
            debug!(path = ?config_path, "Loading configuration");
            let content = fs::read_to_string(&config_path)?;
            let config: WatchConfig = toml::from_str(&content)?;
            info!(path = ?config_path, "Configuration loaded");
            Ok(config)
        } else {
            info!(path = ?config_path, "Configuration file not found, creating default");
            let config = WatchConfig::new();
            self.save(&config)?;
            Ok(config)
        }
    }

    fn save(&self, config: &WatchConfig) -> Result<(), DomainError> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&config_path, content)?;

        info!(path = ?config_path, "Configuration saved");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
