//! Configuration management for ats-match

use crate::error::{AtsMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Tokens shorter than this never become keywords.
    pub min_token_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    /// Cap on matched/missing keywords kept in a result for display.
    pub max_display_keywords: usize,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Overrides the platform data directory when set.
    pub session_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Text,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                min_token_length: 3,
            },
            display: DisplayConfig {
                format: OutputFormat::Console,
                max_display_keywords: 10,
                color_output: true,
                detailed: false,
            },
            session: SessionConfig { session_file: None },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AtsMatchError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-match")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.extraction.min_token_length, 3);
        assert_eq!(config.display.max_display_keywords, 10);
        assert_eq!(config.display.format, OutputFormat::Console);
        assert!(config.session.session_file.is_none());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.extraction.min_token_length, config.extraction.min_token_length);
        assert_eq!(parsed.display.max_display_keywords, config.display.max_display_keywords);
    }
}
