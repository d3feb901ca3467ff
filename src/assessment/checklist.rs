//! Personal security checklist and its aggregate score.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("No checklist item with id '{0}'")]
    UnknownItem(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Points awarded when an item of this priority is completed.
    pub fn weight(&self) -> u32 {
        match self {
            Priority::High => 40,
            Priority::Medium => 20,
            Priority::Low => 10,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
}

impl ChecklistItem {
    pub fn new(id: &str, title: &str, description: &str, priority: Priority) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl SecurityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => SecurityRating::Excellent,
            60..=79 => SecurityRating::Good,
            40..=59 => SecurityRating::Fair,
            _ => SecurityRating::NeedsImprovement,
        }
    }
}

impl fmt::Display for SecurityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SecurityRating::Excellent => "Excellent",
            SecurityRating::Good => "Good",
            SecurityRating::Fair => "Fair",
            SecurityRating::NeedsImprovement => "Needs Improvement",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(vec![
            ChecklistItem::new(
                "1",
                "Enable Two-Factor Authentication",
                "Add an extra layer of security to your important accounts",
                Priority::High,
            ),
            ChecklistItem::new(
                "2",
                "Update All Software",
                "Ensure your operating system and applications are up to date",
                Priority::High,
            ),
            ChecklistItem::new(
                "3",
                "Use Strong, Unique Passwords",
                "Create complex passwords for each account using a password manager",
                Priority::High,
            ),
            ChecklistItem::new(
                "4",
                "Secure Your Wi-Fi Network",
                "Use WPA3 encryption and change default router passwords",
                Priority::Medium,
            ),
            ChecklistItem::new(
                "5",
                "Regular Data Backups",
                "Implement the 3-2-1 backup rule for important data",
                Priority::Medium,
            ),
            ChecklistItem::new(
                "6",
                "Review Privacy Settings",
                "Check and adjust privacy settings on social media and online accounts",
                Priority::Medium,
            ),
            ChecklistItem::new(
                "7",
                "Install Antivirus Software",
                "Use reputable antivirus software with real-time protection",
                Priority::Low,
            ),
            ChecklistItem::new(
                "8",
                "Email Security Training",
                "Learn to identify phishing emails and suspicious attachments",
                Priority::Low,
            ),
        ])
    }
}

impl Checklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Flip an item's completion. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ChecklistError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ChecklistError::UnknownItem(id.to_string()))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// 40 per completed high, 20 per medium, 10 per low item; capped at 100.
    pub fn security_score(&self) -> u8 {
        let raw: u32 = self
            .items
            .iter()
            .filter(|i| i.completed)
            .map(|i| i.priority.weight())
            .sum();
        raw.min(100) as u8
    }

    pub fn rating(&self) -> SecurityRating {
        SecurityRating::from_score(self.security_score())
    }
}
