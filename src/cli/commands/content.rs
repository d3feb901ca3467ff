//! Content commands: advisories, alerts, categories, solutions and resources.

use colored::*;
use std::process::ExitCode;

use crate::content::{
    advisories_at_least, Topic, RECENT_ALERTS, RESOURCES, SOLUTIONS, THREAT_CATEGORIES,
};
use crate::detection::RiskLevel;

fn severity_badge(level: RiskLevel) -> ColoredString {
    let label = format!("{:<8}", level.to_string());
    match level {
        RiskLevel::Critical => label.red().bold(),
        RiskLevel::High => label.truecolor(255, 165, 0),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.green(),
    }
}

pub fn cmd_advisories(min_severity: RiskLevel) -> anyhow::Result<ExitCode> {
    let mut shown = 0;
    for advisory in advisories_at_least(min_severity) {
        println!(
            "{:<14} {} {:<15} {}",
            advisory.id,
            severity_badge(advisory.severity),
            advisory.date,
            advisory.title
        );
        shown += 1;
    }
    if shown == 0 {
        println!("No advisories at or above {} severity.", min_severity);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_alerts() -> anyhow::Result<ExitCode> {
    println!("{}", "Recent Threat Alerts".bold());
    for alert in RECENT_ALERTS {
        println!(
            "{:<13} {} {} ({})",
            alert.id,
            severity_badge(alert.severity),
            alert.title,
            alert.reported.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn print_topics(topics: &[Topic]) {
    for topic in topics {
        println!("{}", topic.title.bold());
        println!("  {}", topic.description);
    }
}

pub fn cmd_categories() -> anyhow::Result<ExitCode> {
    print_topics(THREAT_CATEGORIES);
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_solutions() -> anyhow::Result<ExitCode> {
    print_topics(SOLUTIONS);
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_resources() -> anyhow::Result<ExitCode> {
    for resource in RESOURCES {
        println!("{}", resource.title.bold());
        println!("  {}", resource.description);
        if let Some(command) = resource.command {
            println!("  Try: {}", command.cyan());
        }
    }
    Ok(ExitCode::SUCCESS)
}
