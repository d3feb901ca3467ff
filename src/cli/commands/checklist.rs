//! Checklist command: show the security checklist and aggregate score.

use colored::*;
use std::process::ExitCode;
use tracing::debug;

use crate::assessment::{Checklist, Priority, SecurityRating};
use crate::cli::args::OutputFormat;

pub fn cmd_checklist(done: &[String], format: OutputFormat) -> anyhow::Result<ExitCode> {
    let mut checklist = Checklist::default();
    for id in done {
        let completed = checklist.toggle(id.trim())?;
        debug!(item = %id, completed, "Checklist item toggled");
    }

    let score = checklist.security_score();
    let rating = checklist.rating();

    match format {
        OutputFormat::Text => {
            for item in checklist.items() {
                let mark = if item.completed { "[x]".green() } else { "[ ]".normal() };
                let priority = match item.priority {
                    Priority::High => item.priority.to_string().red(),
                    Priority::Medium => item.priority.to_string().yellow(),
                    Priority::Low => item.priority.to_string().green(),
                };
                println!("{} {}. {} ({})", mark, item.id, item.title.bold(), priority);
                println!("       {}", item.description.dimmed());
            }
            println!();
            let rating_str = match rating {
                SecurityRating::Excellent => rating.to_string().green().bold(),
                SecurityRating::Good => rating.to_string().cyan(),
                SecurityRating::Fair => rating.to_string().yellow(),
                SecurityRating::NeedsImprovement => rating.to_string().red(),
            };
            println!("Security Score: {}/100 ({})", score, rating_str);
            println!(
                "{} of {} items complete",
                checklist.completed_count(),
                checklist.items().len()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "items": checklist.items(),
                "score": score,
                "rating": rating,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
