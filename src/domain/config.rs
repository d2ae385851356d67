use serde::{Deserialize, Serialize};

use crate::domain::{BreakpointSet, Screen};

/// Detector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Named width thresholds driving category selection.
    pub breakpoints: BreakpointSet,
    /// Re-evaluate on every resize notification instead of on demand only.
    pub live_detection: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointSet::new()
                .with(Screen::Mobile, 0)
                .with(Screen::Tablet, 768)
                .with(Screen::Desktop, 1024),
            live_detection: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Enable file logging with rotation.
    pub file_logging: bool,
    /// Maximum number of rotated log files to keep.
    pub max_files: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: false,
            max_files: 7,
        }
    }
}

/// Top-level configuration persisted by the config store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub detector: DetectorConfig,
    pub logging: LoggingConfig,
}

impl WatchConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints() {
        let config = DetectorConfig::default();
        assert_eq!(config.breakpoints.get(Screen::Mobile), Some(0));
        assert_eq!(config.breakpoints.get(Screen::Tablet), Some(768));
        assert_eq!(config.breakpoints.get(Screen::Desktop), Some(1024));
        assert!(!config.live_detection);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = WatchConfig::new();
        config.detector.live_detection = true;
        config.detector.breakpoints.insert(Screen::Tablet, 600);
        config.logging.level = "debug".to_string();

        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: WatchConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: WatchConfig = toml::from_str("[logging]\nlevel = \"trace\"\n").unwrap();
        assert_eq!(parsed.logging.level, "trace");
        assert_eq!(parsed.detector, DetectorConfig::default());
    }
}
