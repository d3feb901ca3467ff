//! Analyze command: run the mock threat analysis and report the verdict.

use anyhow::Context;
use colored::*;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, info_span};

use crate::assistant::{ResponseDelay, ResponseScheduler};
use crate::cli::args::{OutputFormat, EXIT_CLEAN, EXIT_THREAT};
use crate::config::Config;
use crate::detection::{RiskLevel, ThreatAnalysis, ThreatAnalyzer};

pub fn cmd_analyze(
    config: &Config,
    text: Option<String>,
    file: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<ExitCode> {
    let source = match (&text, file) {
        (Some(_), _) => "argument",
        (None, Some(_)) => "file",
        (None, None) => "stdin",
    };
    let _span = info_span!("analyze", input_source = source).entered();

    let content = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    debug!(content_bytes = content.len(), "Content read");

    let analyzer = ThreatAnalyzer::from_config(&config.analyzer);
    debug!(
        keywords = analyzer.scanner().keyword_count(),
        patterns = analyzer.scanner().pattern_count(),
        "Analyzer ready"
    );
    let delay = match config.analyzer.simulated_delay() {
        d if d.is_zero() => ResponseDelay::none(),
        d => ResponseDelay::Fixed(d),
    };
    let scheduler = ResponseScheduler::new(delay);

    let start = Instant::now();
    let token = scheduler.begin();
    let outcome = super::block_on(scheduler.deliver(token, || analyzer.analyze(&content)))?;
    let analysis = outcome??;
    info!(
        risk_level = %analysis.risk_level(),
        indicator_count = analysis.indicators().len(),
        confidence = analysis.confidence(),
        content_hash = %analysis.content_hash(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Analysis complete"
    );

    if !quiet {
        match format {
            OutputFormat::Text => print_text(&analysis),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        }
    }

    Ok(if analysis.is_threat() {
        ExitCode::from(EXIT_THREAT)
    } else {
        ExitCode::from(EXIT_CLEAN)
    })
}

fn print_text(analysis: &ThreatAnalysis) {
    let level = analysis.risk_level().to_string();
    let level = match analysis.risk_level() {
        RiskLevel::Low => level.green(),
        RiskLevel::Medium => level.yellow(),
        RiskLevel::High => level.truecolor(255, 165, 0),
        RiskLevel::Critical => level.red().bold(),
    };

    if analysis.is_threat() {
        println!("{} Threat detected. Risk level: {}", "!".red().bold(), level);
    } else {
        println!("{} No threats detected. Risk level: {}", "✓".green(), level);
    }
    println!("Confidence: {}%", analysis.confidence());
    println!("Scan time: {}", analysis.scan_time());

    if !analysis.indicators().is_empty() {
        println!();
        println!("Indicators:");
        for indicator in analysis.indicators() {
            let line = indicator.to_string();
            if indicator.is_text_match() {
                println!("  - {}", line.red());
            } else {
                println!("  - {}", line.yellow());
            }
        }
    }

    println!();
    println!("Recommendations:");
    for rec in analysis.recommendations() {
        println!("  - {}", rec);
    }
    println!();
    println!("Content Hash: {}", analysis.content_hash());
}
