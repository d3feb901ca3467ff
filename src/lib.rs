//! CyberShield: security education and awareness toolkit.
//!
//! Provides knowledge-check quizzes, a keyword-driven security assistant
//! with cancellable delayed replies, a password strength heuristic, a
//! security checklist, incident report validation and a mock threat
//! analyzer for pasted text.

pub mod assessment;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod content;
pub mod detection;
pub mod education;
pub mod logging;
