use clap::Parser;
use colored::*;
use cybershield::cli::args::{Cli, Commands, EXIT_ERROR};
use cybershield::cli::commands::{
    cmd_advisories, cmd_alerts, cmd_analyze, cmd_categories, cmd_chat, cmd_checklist,
    cmd_completions, cmd_config, cmd_password, cmd_quiz, cmd_report, cmd_resources,
    cmd_solutions,
};
use cybershield::config::Config;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.apply();

    // Initialize structured logging before any command runs.
    if let Err(e) = cybershield::logging::init(cli.log_level.into(), cli.log_format) {
        eprintln!("{}: Failed to initialize logging: {}", "Error".red().bold(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    match run(cli.command, cli.config.as_deref()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    // Config management and completions must work even with a broken config file.
    let load = || Config::load(config_path);

    match command {
        Commands::Analyze {
            text,
            file,
            format,
            quiet,
        } => cmd_analyze(&load()?, text, file.as_deref(), format, quiet),
        Commands::Chat {
            messages,
            delay_ms,
            format,
        } => cmd_chat(&load()?, messages, delay_ms, format),
        Commands::Quiz { action } => cmd_quiz(&load()?, action),
        Commands::Password { password, format } => cmd_password(password, format),
        Commands::Checklist { done, format } => cmd_checklist(&done, format),
        Commands::Report {
            kind,
            description,
            contact,
            urgency,
        } => cmd_report(kind, description, contact, urgency),
        Commands::Advisories { severity } => cmd_advisories(severity),
        Commands::Alerts => cmd_alerts(),
        Commands::Categories => cmd_categories(),
        Commands::Solutions => cmd_solutions(),
        Commands::Resources => cmd_resources(),
        Commands::Config { action } => cmd_config(action, config_path),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}
