//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::assessment::{IncidentKind, Urgency};
use crate::detection::RiskLevel;

/// CyberShield - security education and awareness toolkit
#[derive(Parser, Debug)]
#[command(name = "cybershield")]
#[command(author, version, long_about = None)]
#[command(
    about = "CyberShield - security quizzes, password checks, a rule-based security assistant and mock threat analysis"
)]
pub struct Cli {
    /// Logging verbosity level
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Logging output format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: crate::logging::LogFormat,

    /// Control color output (auto, always, never). Respects NO_COLOR env var.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Config file [default: <config dir>/cybershield/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the mock threat analysis on text, a file, or stdin
    Analyze {
        /// Text to analyze
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// File to analyze (reads from stdin if neither --text nor --file is given)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,

        /// Suppress all stdout output, only set exit code
        #[arg(short, long)]
        quiet: bool,
    },

    /// Ask the security assistant (one reply per message or stdin line)
    Chat {
        /// Message to send; repeat for several (reads stdin lines if omitted)
        #[arg(short, long = "message")]
        messages: Vec<String>,

        /// Override the simulated response delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format: text streams replies, json prints the transcript at the end
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,
    },

    /// List or take security quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizAction,
    },

    /// Score a password's strength
    Password {
        /// Password to check (read from stdin if omitted, which keeps it out of shell history)
        password: Option<String>,

        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the security checklist and score
    Checklist {
        /// Item ids to mark completed, comma separated
        #[arg(short, long, value_delimiter = ',')]
        done: Vec<String>,

        /// Output format: text, json
        #[arg(short = 'F', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Submit a security incident report
    Report {
        /// Incident type
        #[arg(short, long)]
        kind: Option<IncidentKind>,

        /// What happened
        #[arg(short, long, default_value = "")]
        description: String,

        /// How to reach you
        #[arg(short, long, default_value = "")]
        contact: String,

        /// Urgency level
        #[arg(short, long, default_value = "medium")]
        urgency: Urgency,
    },

    /// List security advisories
    Advisories {
        /// Only show advisories at or above this severity
        #[arg(short, long, default_value = "low")]
        severity: RiskLevel,
    },

    /// Show the recent threat alert feed
    Alerts,

    /// Describe the main threat categories
    Categories,

    /// Describe the security solution areas
    Solutions,

    /// List learning resources
    Resources,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuizAction {
    /// List available quizzes
    List,

    /// Take a quiz
    Take {
        /// Quiz id (phishing, passwords, malware)
        quiz: String,

        /// 1-based answers, comma separated (reads one per stdin line if omitted)
        #[arg(short, long, value_delimiter = ',')]
        answers: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default configuration
    Init {
        /// Path to create config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show the effective configuration
    Show,
}

/// Logging verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Apply to the `colored` crate. `Auto` leaves its own detection in place.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

/// Exit codes with distinct semantics.
/// 0 = success / clean, 1 = threat detected, 2 = error.
pub const EXIT_CLEAN: u8 = 0;
pub const EXIT_THREAT: u8 = 1;
pub const EXIT_ERROR: u8 = 2;
