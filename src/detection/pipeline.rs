//! Analysis pipeline: keyword scan, link/sender checks, verdict and scoring.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::detection::indicators::{extract_emails, extract_urls, LinkRules};
use crate::detection::scanner::KeywordScanner;
use crate::detection::threat::{Indicator, RiskLevel};

/// Errors from the analysis pipeline.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Input required: enter a URL, file hash, or text to analyze")]
    EmptyInput,
}

/// Orchestrates the analysis stages over immutable rule data.
#[derive(Debug, Clone, Default)]
pub struct ThreatAnalyzer {
    scanner: KeywordScanner,
    links: LinkRules,
}

impl ThreatAnalyzer {
    pub fn new(scanner: KeywordScanner, links: LinkRules) -> Self {
        Self { scanner, links }
    }

    /// Build an analyzer from the `[analyzer]` config section.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(
            KeywordScanner::from_config(config),
            LinkRules::from_config(config),
        )
    }

    pub fn scanner(&self) -> &KeywordScanner {
        &self.scanner
    }

    /// Analyze content for threats.
    pub fn analyze(&self, content: &str) -> Result<ThreatAnalysis, AnalysisError> {
        if content.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let start = Instant::now();
        let scan = self.scanner.scan(content);
        let urls = extract_urls(content);
        let emails = extract_emails(content);

        let suspicious_urls: Vec<&str> = urls
            .iter()
            .copied()
            .filter(|u| self.links.is_suspicious_url(u))
            .collect();
        let suspicious_emails: Vec<&str> = emails
            .iter()
            .copied()
            .filter(|e| self.links.is_suspicious_email(e))
            .collect();
        debug!(
            urls = urls.len(),
            emails = emails.len(),
            suspicious_urls = suspicious_urls.len(),
            suspicious_emails = suspicious_emails.len(),
            "Indicators extracted"
        );

        let findings = Findings {
            keywords: scan.keywords().len(),
            patterns: scan.patterns().len(),
            suspicious_urls: suspicious_urls.len(),
            suspicious_emails: suspicious_emails.len(),
            urls: urls.len(),
            emails: emails.len(),
        };

        let mut indicators = Vec::new();
        indicators.extend(scan.keywords().iter().cloned().map(Indicator::Keyword));
        indicators.extend(scan.patterns().iter().cloned().map(Indicator::Pattern));
        indicators.extend(suspicious_urls.iter().map(|u| Indicator::SuspiciousUrl(u.to_string())));
        indicators.extend(
            suspicious_emails
                .iter()
                .map(|e| Indicator::SuspiciousEmail(e.to_string())),
        );

        let risk_level = RiskLevel::from_findings(
            scan.match_count(),
            findings.suspicious_urls,
            findings.suspicious_emails,
        );

        Ok(ThreatAnalysis {
            is_threat: findings.is_threat(),
            risk_level,
            confidence: confidence_score(&findings),
            recommendations: recommendations(risk_level, &findings),
            indicators,
            urls_found: findings.urls,
            emails_found: findings.emails,
            scan_time: format!("{:.2}s", start.elapsed().as_secs_f64()),
            content_hash: compute_sha256(content),
        })
    }
}

/// Finding counts feeding the verdict and the confidence curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Findings {
    pub keywords: usize,
    pub patterns: usize,
    pub suspicious_urls: usize,
    pub suspicious_emails: usize,
    pub urls: usize,
    pub emails: usize,
}

impl Findings {
    pub fn is_threat(&self) -> bool {
        self.keywords + self.patterns + self.suspicious_urls + self.suspicious_emails > 0
    }
}

/// Placeholder confidence curve.
///
/// Threat: 60 plus per-finding increments, capped at 95.
/// Clean: 95 minus small decrements per extracted link/address, floored at 85.
pub fn confidence_score(findings: &Findings) -> u8 {
    if findings.is_threat() {
        let raw = 60
            + 10 * findings.keywords
            + 12 * findings.patterns
            + 8 * findings.suspicious_urls
            + 5 * findings.suspicious_emails;
        raw.min(95) as u8
    } else {
        let penalty = 3 * findings.urls + 2 * findings.emails;
        95usize.saturating_sub(penalty).max(85) as u8
    }
}

fn recommendations(level: RiskLevel, findings: &Findings) -> Vec<String> {
    let mut out: Vec<String> = level
        .base_recommendations()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if findings.keywords > 0 {
        out.push("Run a full system scan if any related file was opened".to_string());
    }
    if findings.patterns > 0 {
        out.push("Never download executables or confirm account details from unsolicited messages".to_string());
    }
    if findings.suspicious_urls > 0 {
        out.push("Expand shortened or unusually long links with a preview service before visiting".to_string());
    }
    if findings.suspicious_emails > 0 {
        out.push("Administrative-looking senders are commonly spoofed: check the full address and headers".to_string());
    }
    out
}

/// Result of analyzing one piece of content.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatAnalysis {
    is_threat: bool,
    risk_level: RiskLevel,
    confidence: u8,
    indicators: Vec<Indicator>,
    recommendations: Vec<String>,
    urls_found: usize,
    emails_found: usize,
    scan_time: String,
    content_hash: String,
}

impl ThreatAnalysis {
    /// Check if any threat indicator was found.
    pub fn is_threat(&self) -> bool {
        self.is_threat
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// Confidence percentage (0-100).
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn scan_time(&self) -> &str {
        &self.scan_time
    }

    /// Get the content hash (SHA-256).
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Generate a human-readable report.
    pub fn report(&self) -> String {
        let mut report = format!(
            "Risk Level: {}\nConfidence: {}%\nScan Time: {}\n",
            self.risk_level, self.confidence, self.scan_time
        );

        if self.indicators.is_empty() {
            report.push_str("\nNo threats detected.\n");
        } else {
            report.push_str(&format!("\nIndicators ({}):\n", self.indicators.len()));
            for indicator in &self.indicators {
                report.push_str(&format!("- {}\n", indicator));
            }
        }

        report.push_str("\nRecommendations:\n");
        for rec in &self.recommendations {
            report.push_str(&format!("- {}\n", rec));
        }

        report
    }
}

fn compute_sha256(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
