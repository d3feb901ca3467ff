//! Risk level classification and indicator types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level assigned to an analyzed piece of text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Nothing suspicious found
    Low,
    /// Only a suspicious sender address
    Medium,
    /// A single keyword/pattern hit or a suspicious link
    High,
    /// Two or more keyword/pattern hits
    Critical,
}

impl RiskLevel {
    /// Derive the level from finding counts.
    pub fn from_findings(
        keyword_or_pattern_matches: usize,
        suspicious_urls: usize,
        suspicious_emails: usize,
    ) -> Self {
        if keyword_or_pattern_matches >= 2 {
            RiskLevel::Critical
        } else if keyword_or_pattern_matches == 1 || suspicious_urls > 0 {
            RiskLevel::High
        } else if suspicious_emails > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Baseline recommendations shown for this level.
    pub fn base_recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Critical => &[
                "Do not interact with this content: no clicks, downloads or replies",
                "Report it to your security team immediately",
                "Isolate any device that already opened attachments or links from it",
            ],
            RiskLevel::High => &[
                "Do not click links or open attachments from this content",
                "Verify the sender through an independent, official channel",
                "Scan systems with updated antivirus definitions",
            ],
            RiskLevel::Medium => &[
                "Treat requests from this sender with caution",
                "Confirm the request through a known contact before acting",
            ],
            RiskLevel::Low => &[
                "No immediate threats detected",
                "Keep software updated and stay alert for unexpected requests",
            ],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// A single finding reported by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Indicator {
    Keyword(String),
    Pattern(String),
    SuspiciousUrl(String),
    SuspiciousEmail(String),
}

impl Indicator {
    /// Whether this is a keyword or pattern hit (as opposed to a link/sender).
    pub fn is_text_match(&self) -> bool {
        matches!(self, Indicator::Keyword(_) | Indicator::Pattern(_))
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Keyword(v) => write!(f, "threat keyword: {}", v),
            Indicator::Pattern(v) => write!(f, "suspicious pattern: {}", v),
            Indicator::SuspiciousUrl(v) => write!(f, "suspicious URL: {}", v),
            Indicator::SuspiciousEmail(v) => write!(f, "suspicious sender: {}", v),
        }
    }
}
