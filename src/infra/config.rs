// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::QuestlogError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds; also the redraw cadence
    /// for the elapsed-time column.
    pub tick_rate_ms: u64,
    /// Show the ASCII banner above the stats line.
    pub banner: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            banner: true,
        }
    }
}

impl Config {
    /// Load config from the default path, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self, QuestlogError> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, QuestlogError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), QuestlogError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(QuestlogError::Config(
                "ui.tick_rate_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.ui.tick_rate_ms, 250);
        assert!(c.ui.banner);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[ui]
tick_rate_ms = 100
banner = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.ui.banner);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.ui.tick_rate_ms, config.ui.tick_rate_ms);
        assert_eq!(deserialized.ui.banner, config.ui.banner);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = Config {
            ui: UiConfig {
                tick_rate_ms: 0,
                banner: true,
            },
        };
        assert!(config.validate().is_err());
    }
}
