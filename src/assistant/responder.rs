//! Rule-based security assistant.
//!
//! Input is lower-cased and checked against an ordered rule table; the first
//! rule with any keyword contained in the input wins.

/// Opening message of every conversation.
pub const GREETING: &str = "Hello! I'm your AI cybersecurity assistant. I can help you with security questions, threat analysis, best practices, and provide real-time security insights. How can I assist you today?";

/// Suggested starter questions.
pub const QUICK_QUESTIONS: &[&str] = &[
    "How do I create a strong password?",
    "What is phishing and how do I avoid it?",
    "How do I secure my WiFi network?",
    "What should I do if I think I have malware?",
    "How do I protect my social media accounts?",
];

/// Reply used when no rule matches.
pub const FALLBACK_RESPONSE: &str = "I understand your cybersecurity concern. Here are some general recommendations:\n\n• Keep all software updated and patched\n• Use strong, unique passwords with 2FA\n• Be cautious of suspicious emails and links\n• Regular security awareness training\n• Implement layered security defenses\n• Monitor for unusual activity\n• Have an incident response plan\n\nCould you provide more specific details about your security question? I can offer more targeted advice based on your particular situation or concerns.";

/// One keyword set and its canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub static DEFAULT_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: "passwords",
        keywords: &["password", "passwords"],
        response: "For strong passwords, follow these guidelines:\n\n• Use at least 12 characters\n• Include uppercase, lowercase, numbers, and symbols\n• Avoid personal information\n• Use unique passwords for each account\n• Consider using a password manager\n• Enable two-factor authentication wherever possible\n\nWould you like specific recommendations for password managers or 2FA setup?",
    },
    ResponseRule {
        topic: "phishing",
        keywords: &["phishing", "email"],
        response: "To protect against phishing attacks:\n\n• Verify sender addresses carefully\n• Look for urgent language or threats\n• Check for spelling/grammar errors\n• Hover over links before clicking\n• Never provide credentials via email\n• Use email filtering and anti-phishing tools\n• When in doubt, contact the organization directly\n\nI can help you analyze suspicious emails if you share the details (without sensitive info).",
    },
    ResponseRule {
        topic: "malware",
        keywords: &["malware", "virus"],
        response: "Malware protection strategies:\n\n• Keep your OS and software updated\n• Use reputable antivirus software\n• Avoid suspicious downloads and websites\n• Be cautious with email attachments\n• Regular system scans\n• Backup your important data\n• Use application whitelisting when possible\n\nIf you suspect infection, disconnect from the internet and run a full system scan immediately.",
    },
    ResponseRule {
        topic: "network",
        keywords: &["wifi", "network"],
        response: "Network security best practices:\n\n• Use WPA3 encryption (or WPA2 minimum)\n• Change default router passwords\n• Enable network firewalls\n• Disable WPS if not needed\n• Use VPN on public networks\n• Regularly update router firmware\n• Hide network SSID if desired\n• Monitor connected devices\n\nNeed help with specific router configuration or VPN recommendations?",
    },
    ResponseRule {
        topic: "backup",
        keywords: &["backup", "data"],
        response: "Data backup and protection:\n\n• Follow the 3-2-1 rule: 3 copies, 2 different media, 1 offsite\n• Automate regular backups\n• Test restore procedures regularly\n• Encrypt sensitive backups\n• Consider cloud and local storage\n• Document your backup strategy\n• Keep backups disconnected when not in use\n\nThis protects against ransomware, hardware failure, and data loss.",
    },
    ResponseRule {
        topic: "privacy",
        keywords: &["social media", "privacy"],
        response: "Social media security tips:\n\n• Review and adjust privacy settings regularly\n• Limit personal information sharing\n• Be selective with friend/connection requests\n• Think before posting location data\n• Use strong, unique passwords\n• Enable two-factor authentication\n• Be aware of social engineering attempts\n• Regular security checkups\n\nWould you like guidance on specific platform privacy settings?",
    },
    ResponseRule {
        topic: "business",
        keywords: &["business", "company"],
        response: "Business cybersecurity essentials:\n\n• Implement security awareness training\n• Use endpoint detection and response (EDR)\n• Establish incident response procedures\n• Regular security assessments and audits\n• Network segmentation and access controls\n• Backup and disaster recovery plans\n• Vendor risk management\n• Compliance with relevant regulations\n\nI can provide more specific guidance based on your business size and industry.",
    },
];

/// Ordered rule table plus fallback.
#[derive(Debug, Clone, Copy)]
pub struct KeywordResponder {
    rules: &'static [ResponseRule],
    fallback: &'static str,
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, FALLBACK_RESPONSE)
    }
}

impl KeywordResponder {
    pub fn new(rules: &'static [ResponseRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// First rule whose keywords appear in `input`.
    pub fn matching_rule(&self, input: &str) -> Option<&'static ResponseRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn respond(&self, input: &str) -> &'static str {
        self.matching_rule(input)
            .map(|rule| rule.response)
            .unwrap_or(self.fallback)
    }
}
