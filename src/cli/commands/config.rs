//! Config command: initialize and display CyberShield configuration.

use anyhow::Context;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::args::ConfigAction;
use crate::config::Config;

/// Execute the `config` subcommand (init, show).
pub fn cmd_config(action: ConfigAction, explicit: Option<&Path>) -> anyhow::Result<ExitCode> {
    match action {
        ConfigAction::Init { path } => {
            let config_path = path
                .or_else(|| explicit.map(Path::to_path_buf))
                .unwrap_or_else(Config::default_config_path);

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }

            let toml = Config::default()
                .to_toml()
                .context("Failed to serialize default config")?;
            std::fs::write(&config_path, toml).with_context(|| {
                format!("Failed to write config file '{}'", config_path.display())
            })?;

            debug!(path = %config_path.display(), "Config file created");
            println!("Created config at: {}", config_path.display());
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Show => {
            let source = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::default_config_path);
            let config = Config::load(explicit).with_context(|| {
                format!("Failed to load config file '{}'", source.display())
            })?;

            if source.exists() {
                println!("# {}", source.display());
            } else {
                println!("# No config file at {} (showing defaults)", source.display());
                println!("# Run 'cybershield config init' to create one.");
            }
            println!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
