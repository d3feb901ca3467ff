//! Keyword and phrase scanner.

use crate::config::AnalyzerConfig;

/// Words that name a threat outright.
pub const DEFAULT_THREAT_KEYWORDS: &[&str] = &[
    "malware",
    "virus",
    "trojan",
    "ransomware",
    "phishing",
    "exploit",
    "backdoor",
    "keylogger",
    "spyware",
    "rootkit",
    "botnet",
    "attack",
    "vulnerability",
    "breach",
];

/// Phrases and fragments typical of lures and droppers.
pub const DEFAULT_SUSPICIOUS_PATTERNS: &[&str] = &[
    ".exe",
    ".scr",
    ".bat",
    "click here",
    "verify account",
    "verify your account",
    "urgent action",
    "account suspended",
    "password reset",
    "confirm your identity",
    "wire transfer",
    "gift card",
    "act now",
    "limited time",
    "you have won",
];

/// Immutable keyword and pattern lists, stored lower-cased.
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    keywords: Vec<String>,
    patterns: Vec<String>,
}

impl Default for KeywordScanner {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl KeywordScanner {
    /// Built-in lists extended with the configured extras.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            keywords: merge(DEFAULT_THREAT_KEYWORDS, &config.extra_keywords),
            patterns: merge(DEFAULT_SUSPICIOUS_PATTERNS, &config.extra_patterns),
        }
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Case-insensitive substring scan. Each list entry matches at most once.
    pub fn scan(&self, content: &str) -> ScanResult {
        let lowered = content.to_lowercase();
        let hits = |list: &[String]| -> Vec<String> {
            list.iter()
                .filter(|needle| lowered.contains(needle.as_str()))
                .cloned()
                .collect()
        };

        ScanResult {
            keywords: hits(&self.keywords),
            patterns: hits(&self.patterns),
        }
    }
}

/// Keyword and pattern hits, in list order.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    keywords: Vec<String>,
    patterns: Vec<String>,
}

impl ScanResult {
    pub fn has_matches(&self) -> bool {
        !self.keywords.is_empty() || !self.patterns.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Combined keyword + pattern hit count.
    pub fn match_count(&self) -> usize {
        self.keywords.len() + self.patterns.len()
    }
}

/// Lower-case, trim and de-duplicate `base` followed by `extra`.
pub(crate) fn merge(base: &[&str], extra: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(base.len() + extra.len());
    let candidates = base.iter().copied().chain(extra.iter().map(String::as_str));
    for item in candidates {
        let item = item.trim().to_lowercase();
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
