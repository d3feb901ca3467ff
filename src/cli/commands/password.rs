//! Password command: score a password without storing or logging it.

use anyhow::Context;
use colored::*;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::debug;

use crate::assessment::{assess_password, PasswordStrength};
use crate::cli::args::OutputFormat;

pub fn cmd_password(password: Option<String>, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let password = match password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let assessment = assess_password(&password);
    debug!(score = assessment.score, "Password assessed");

    match format {
        OutputFormat::Text => {
            let label = assessment.strength.to_string();
            let label = match assessment.strength {
                PasswordStrength::Weak => label.red().bold(),
                PasswordStrength::Fair => label.yellow(),
                PasswordStrength::Good => label.cyan(),
                PasswordStrength::Strong => label.green().bold(),
            };
            println!("Password Strength: {} ({}/100)", label, assessment.score);
            if assessment.feedback.is_empty() {
                println!("{} Meets every criterion.", "✓".green());
            } else {
                println!("Suggestions:");
                for hint in &assessment.feedback {
                    println!("  - {}", hint);
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
    }

    Ok(ExitCode::SUCCESS)
}
