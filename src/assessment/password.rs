//! Password strength heuristic.

use serde::Serialize;
use std::fmt;

pub const FEEDBACK_LENGTH: &str = "Use at least 12 characters";
pub const FEEDBACK_LOWERCASE: &str = "Include lowercase letters";
pub const FEEDBACK_UPPERCASE: &str = "Include uppercase letters";
pub const FEEDBACK_DIGIT: &str = "Include numbers";
pub const FEEDBACK_SYMBOL: &str = "Include special characters";

/// Outcome of [`assess_password`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordAssessment {
    pub score: u8,
    pub strength: PasswordStrength,
    /// Suggestions for unmet criteria, in check order.
    pub feedback: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => PasswordStrength::Weak,
            40..=69 => PasswordStrength::Fair,
            70..=89 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Fair => "fair",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
        })
    }
}

/// Score a password from 0 to 100.
///
/// Points: 12+ chars 20, 16+ chars another 15, lowercase 15, uppercase 15,
/// digit 15, symbol 20. The 16-char bonus has no feedback line of its own.
pub fn assess_password(password: &str) -> PasswordAssessment {
    let length = password.chars().count();
    let mut score: u32 = 0;
    let mut feedback = Vec::new();

    let mut check = |met: bool, points: u32, hint: &'static str| {
        if met {
            score += points;
        } else {
            feedback.push(hint);
        }
    };

    check(length >= 12, 20, FEEDBACK_LENGTH);
    check(password.chars().any(|c| c.is_ascii_lowercase()), 15, FEEDBACK_LOWERCASE);
    check(password.chars().any(|c| c.is_ascii_uppercase()), 15, FEEDBACK_UPPERCASE);
    check(password.chars().any(|c| c.is_ascii_digit()), 15, FEEDBACK_DIGIT);
    check(password.chars().any(|c| !c.is_ascii_alphanumeric()), 20, FEEDBACK_SYMBOL);

    if length >= 16 {
        score += 15;
    }

    let score = score.min(100) as u8;
    PasswordAssessment {
        score,
        strength: PasswordStrength::from_score(score),
        feedback,
    }
}
