//! Configuration management for CyberShield.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub analyzer: AnalyzerConfig,
    pub quiz: QuizConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the active configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and a missing file falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cybershield")
            .join("config.toml")
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Security assistant configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Simulated "thinking" time before a reply is shown
    pub response_delay_ms: u64,
    /// Extra random delay added on top of `response_delay_ms`
    pub delay_jitter_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 1500,
            delay_jitter_ms: 0,
        }
    }
}

impl AssistantConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.delay_jitter_ms)
    }
}

/// Mock threat analyzer configuration.
///
/// The `extra_*` lists extend the built-in lists; they never replace them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub simulated_delay_ms: u64,
    /// URLs longer than this many characters are flagged
    pub url_length_threshold: usize,
    pub extra_keywords: Vec<String>,
    pub extra_patterns: Vec<String>,
    pub extra_shorteners: Vec<String>,
    pub extra_admin_prefixes: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 0,
            url_length_threshold: 100,
            extra_keywords: Vec::new(),
            extra_patterns: Vec::new(),
            extra_shorteners: Vec::new(),
            extra_admin_prefixes: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

/// Quiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Minimum percentage counted as a pass
    pub pass_threshold: u8,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self { pass_threshold: 60 }
    }
}
