//! Incident report form validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const ACKNOWLEDGMENT: &str =
    "Your security incident has been logged. We'll respond within 24 hours.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IncidentError {
    #[error("Missing information: {0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentKind {
    Phishing,
    Malware,
    DataBreach,
    IdentityTheft,
    Other,
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IncidentKind::Phishing => "Phishing Email",
            IncidentKind::Malware => "Malware/Virus",
            IncidentKind::DataBreach => "Data Breach",
            IncidentKind::IdentityTheft => "Identity Theft",
            IncidentKind::Other => "Other",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::Low => "Low - General inquiry",
            Urgency::Medium => "Medium - Suspected incident",
            Urgency::High => "High - Active threat",
            Urgency::Critical => "Critical - Ongoing attack",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub kind: Option<IncidentKind>,
    pub description: String,
    pub contact: String,
    pub urgency: Urgency,
}

/// What the submitter gets back. Nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: Option<IncidentKind>,
    pub urgency: Urgency,
    pub message: &'static str,
}

impl IncidentReport {
    /// Description and contact must be non-blank.
    pub fn validate(&self) -> Result<(), IncidentError> {
        if self.description.trim().is_empty() {
            return Err(IncidentError::MissingField("description"));
        }
        if self.contact.trim().is_empty() {
            return Err(IncidentError::MissingField("contact"));
        }
        Ok(())
    }

    pub fn submit(&self) -> Result<Submission, IncidentError> {
        self.validate()?;
        Ok(Submission {
            kind: self.kind,
            urgency: self.urgency,
            message: ACKNOWLEDGMENT,
        })
    }
}
