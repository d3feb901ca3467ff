//! Static site content: advisories, threat categories, the alert feed,
//! security solutions and learning resources.

use serde::Serialize;

use crate::detection::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: RiskLevel,
    pub date: &'static str,
}

/// A titled blurb: threat categories and security solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub title: &'static str,
    pub description: &'static str,
}

/// A learning resource, optionally backed by one of the CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub command: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreatAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: RiskLevel,
    pub reported: &'static str,
}

pub static ADVISORIES: &[Advisory] = &[
    Advisory {
        id: "CVE-2025-0452",
        title: "Critical Vulnerability in OpenSSH",
        severity: RiskLevel::Critical,
        date: "June 2, 2025",
    },
    Advisory {
        id: "CVE-2025-1187",
        title: "Remote Code Execution in Apache Web Server",
        severity: RiskLevel::High,
        date: "May 28, 2025",
    },
    Advisory {
        id: "CVE-2025-0971",
        title: "Authentication Bypass in Popular CMS",
        severity: RiskLevel::High,
        date: "May 15, 2025",
    },
    Advisory {
        id: "CVE-2025-0652",
        title: "SQL Injection Vulnerability in Database System",
        severity: RiskLevel::Medium,
        date: "April 30, 2025",
    },
    Advisory {
        id: "CVE-2025-0238",
        title: "Cross-Site Scripting in Web Framework",
        severity: RiskLevel::Medium,
        date: "April 22, 2025",
    },
];

pub static THREAT_CATEGORIES: &[Topic] = &[
    Topic {
        title: "Network Threats",
        description: "Vulnerabilities that target network infrastructure including denial-of-service attacks and man-in-the-middle exploits.",
    },
    Topic {
        title: "Endpoint Vulnerabilities",
        description: "Threats targeting end-user devices such as malware, ransomware, and zero-day exploits.",
    },
    Topic {
        title: "Identity Attacks",
        description: "Compromising authentication systems through credential theft, phishing, and social engineering.",
    },
    Topic {
        title: "Cloud Security",
        description: "Risks specific to cloud environments including misconfigurations, insecure APIs, and data breaches.",
    },
    Topic {
        title: "Advanced Persistent Threats",
        description: "Sophisticated, targeted attacks designed to maintain long-term access to systems while avoiding detection.",
    },
    Topic {
        title: "IoT Vulnerabilities",
        description: "Security weaknesses in connected devices that can be exploited to gain unauthorized access to networks.",
    },
];

pub static RECENT_ALERTS: &[ThreatAlert] = &[
    ThreatAlert {
        id: "RT-2025-0452",
        title: "New Ransomware Variant Targeting Healthcare",
        severity: RiskLevel::Critical,
        reported: "10 minutes ago",
    },
    ThreatAlert {
        id: "RT-2025-0451",
        title: "Critical Vulnerability in Popular CMS",
        severity: RiskLevel::High,
        reported: "35 minutes ago",
    },
    ThreatAlert {
        id: "RT-2025-0450",
        title: "DDoS Attack Campaign Against Financial Institutions",
        severity: RiskLevel::Medium,
        reported: "1 hour ago",
    },
    ThreatAlert {
        id: "RT-2025-0449",
        title: "Phishing Campaign Using Fake Banking Emails",
        severity: RiskLevel::Medium,
        reported: "5 hours ago",
    },
    ThreatAlert {
        id: "RT-2025-0448",
        title: "Non-critical Vulnerability in Popular Browser Extension",
        severity: RiskLevel::Low,
        reported: "1 day ago",
    },
];

pub static SOLUTIONS: &[Topic] = &[
    Topic {
        title: "Endpoint Protection",
        description: "Advanced security solutions to protect devices from malware, ransomware, and other threats.",
    },
    Topic {
        title: "Network Security",
        description: "Comprehensive solutions to secure your networks from unauthorized access and attacks.",
    },
    Topic {
        title: "Identity Management",
        description: "Secure identity and access management solutions to protect sensitive data and systems.",
    },
    Topic {
        title: "Cloud Security",
        description: "Solutions to secure cloud environments and protect data stored in the cloud.",
    },
];

pub static RESOURCES: &[Resource] = &[
    Resource {
        title: "Educational Guides",
        description: "Comprehensive cybersecurity guides and tutorials",
        command: None,
    },
    Resource {
        title: "Video Tutorials",
        description: "Visual demonstrations of security concepts",
        command: None,
    },
    Resource {
        title: "Whitepapers",
        description: "In-depth technical research and analysis",
        command: Some("cybershield advisories"),
    },
    Resource {
        title: "Security Tools",
        description: "Essential tools for security assessment",
        command: Some("cybershield analyze"),
    },
];

/// Advisories at or above `min`, newest first.
pub fn advisories_at_least(min: RiskLevel) -> impl Iterator<Item = &'static Advisory> {
    ADVISORIES.iter().filter(move |a| a.severity >= min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_minimum_severity() {
        let high: Vec<&str> = advisories_at_least(RiskLevel::High).map(|a| a.id).collect();
        assert_eq!(high, ["CVE-2025-0452", "CVE-2025-1187", "CVE-2025-0971"]);
        assert_eq!(advisories_at_least(RiskLevel::Low).count(), ADVISORIES.len());
    }

    #[test]
    fn alert_ids_are_unique() {
        let mut ids: Vec<&str> = RECENT_ALERTS.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RECENT_ALERTS.len());
    }

    #[test]
    fn solutions_and_resources_have_four_entries() {
        let solutions: Vec<&str> = SOLUTIONS.iter().map(|s| s.title).collect();
        assert_eq!(
            solutions,
            ["Endpoint Protection", "Network Security", "Identity Management", "Cloud Security"]
        );
        assert_eq!(RESOURCES.len(), 4);
        assert!(RESOURCES.iter().all(|r| !r.description.is_empty()));
    }
}
