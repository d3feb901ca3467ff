pub mod indicators;
pub mod pipeline;
pub mod scanner;
pub mod threat;

// Re-export common types for convenience
pub use pipeline::{AnalysisError, ThreatAnalysis, ThreatAnalyzer};
pub use threat::{Indicator, RiskLevel};
