//! URL and e-mail extraction plus the link/sender heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::detection::scanner::merge;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bhttps?://[^\s<>"'()\[\]{}]+"#).unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+\-]+@[a-z0-9\-]+(?:\.[a-z0-9\-]+)*\.[a-z]{2,}\b").unwrap()
});

/// Link-shortening services whose targets cannot be seen before clicking.
pub const DEFAULT_SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "goo.gl",
    "t.co",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "rebrand.ly",
    "cutt.ly",
    "shorturl.at",
    "tiny.cc",
];

/// Sender local-part prefixes that impersonate staff or systems.
pub const DEFAULT_ADMIN_PREFIXES: &[&str] = &[
    "admin",
    "support",
    "security",
    "noreply",
    "no-reply",
    "billing",
    "helpdesk",
    "service",
    "account",
    "verify",
    "postmaster",
    "webmaster",
    "root",
];

/// Extract `http(s)://` URLs, trimming trailing sentence punctuation.
pub fn extract_urls(content: &str) -> Vec<&str> {
    URL_RE
        .find_iter(content)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']))
        .filter(|url| !url.is_empty())
        .collect()
}

/// Extract e-mail addresses.
pub fn extract_emails(content: &str) -> Vec<&str> {
    EMAIL_RE.find_iter(content).map(|m| m.as_str()).collect()
}

/// Host portion of a URL, lower-cased, without port or `www.`.
pub fn url_host(url: &str) -> Option<String> {
    let rest = url.split_once("://").map(|(_, rest)| rest)?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?.to_lowercase();
    let host = host.strip_prefix("www.").map(str::to_string).unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Shortener, prefix and length rules for links and senders.
#[derive(Debug, Clone)]
pub struct LinkRules {
    shorteners: Vec<String>,
    admin_prefixes: Vec<String>,
    url_length_threshold: usize,
}

impl Default for LinkRules {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl LinkRules {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            shorteners: merge(DEFAULT_SHORTENERS, &config.extra_shorteners),
            admin_prefixes: merge(DEFAULT_ADMIN_PREFIXES, &config.extra_admin_prefixes),
            url_length_threshold: config.url_length_threshold,
        }
    }

    /// A URL is suspicious when it goes through a shortener or is overly long.
    pub fn is_suspicious_url(&self, url: &str) -> bool {
        if url.chars().count() > self.url_length_threshold {
            return true;
        }
        match url_host(url) {
            Some(host) => self.shorteners.iter().any(|s| {
                host == *s
                    || host
                        .strip_suffix(s.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }),
            None => false,
        }
    }

    /// An address is suspicious when its local part starts with an admin-style prefix.
    pub fn is_suspicious_email(&self, email: &str) -> bool {
        let local = email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(email)
            .to_lowercase();
        self.admin_prefixes.iter().any(|p| local.starts_with(p.as_str()))
    }
}
