//! Self-assessment tools: password check, checklist, incident reporting.

pub mod checklist;
pub mod incident;
pub mod password;

pub use checklist::{Checklist, ChecklistError, ChecklistItem, Priority, SecurityRating};
pub use incident::{IncidentError, IncidentKind, IncidentReport, Submission, Urgency};
pub use password::{assess_password, PasswordAssessment, PasswordStrength};
