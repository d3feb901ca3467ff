//! Configuration loading and defaults.

pub mod settings;

pub use settings::{AnalyzerConfig, AssistantConfig, Config, ConfigError, QuizConfig};
