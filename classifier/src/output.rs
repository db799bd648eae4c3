use crate::analyze::AnalysisMode;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Priority label assigned to a ticket.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Order in which the heuristic scans priorities. Among equal scores
    /// the earliest entry wins, so ties resolve toward higher severity.
    pub const SCAN_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Selection code used by the ticket record's `ai_priority` field.
    pub fn selection_code(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Raw output of a classifier, before the review gate is applied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Analysis {
    pub priority: Priority,
    pub confidence: f64,
    pub summary: String,
    pub suggested_reply: String,
}

/// Final outcome of a classification request.
///
/// A non-empty `error` always comes with the safe default shape: `Low`
/// priority, zero confidence, empty texts, and `needs_review` set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub priority: Priority,
    pub confidence: f64,
    pub summary: String,
    pub suggested_reply: String,
    pub needs_review: bool,
    pub error: String,
}

impl ClassificationResult {
    /// The degraded result returned whenever analysis cannot complete.
    pub fn safe_default(error: impl Into<String>) -> Self {
        Self {
            priority: Priority::Low,
            confidence: 0.0,
            summary: String::new(),
            suggested_reply: String::new(),
            needs_review: true,
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Metadata about how a result was produced.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisMetadata {
    pub mode: AnalysisMode,
    pub model: String,
    pub prompt_hash: String,
    pub confidence_threshold: f64,
}

/// Output format written by the binary.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisOutput {
    pub result: String, // "classified" or "error"
    pub classification: ClassificationResult,
    pub metadata: AnalysisMetadata,
}

impl AnalysisOutput {
    pub fn new(classification: ClassificationResult, metadata: AnalysisMetadata) -> Self {
        let result = if classification.is_error() {
            "error"
        } else {
            "classified"
        };
        Self {
            result: result.to_string(),
            classification,
            metadata,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
