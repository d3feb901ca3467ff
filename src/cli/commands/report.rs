//! Report command: validate and acknowledge a security incident report.

use colored::*;
use std::process::ExitCode;
use tracing::info;

use crate::assessment::{IncidentKind, IncidentReport, Urgency};

pub fn cmd_report(
    kind: Option<IncidentKind>,
    description: String,
    contact: String,
    urgency: Urgency,
) -> anyhow::Result<ExitCode> {
    let report = IncidentReport {
        kind,
        description,
        contact,
        urgency,
    };
    let submission = report.submit()?;

    // Contact details stay out of the logs.
    info!(kind = ?submission.kind, urgency = ?submission.urgency, "Incident report accepted");

    println!("{} Incident Report Submitted", "✓".green().bold());
    if let Some(kind) = submission.kind {
        println!("Type: {}", kind);
    }
    println!("Urgency: {}", submission.urgency);
    println!("{}", submission.message);
    Ok(ExitCode::SUCCESS)
}
