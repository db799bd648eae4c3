use crate::output::{Analysis, ClassificationResult};

/// Confidence ceiling for tickets with no description.
pub const LOW_INFORMATION_CAP: f64 = 0.40;

/// Derive `needs_review` from confidence against the auto-apply threshold.
pub fn add_needs_review(analysis: &Analysis, threshold: f64) -> ClassificationResult {
    ClassificationResult {
        priority: analysis.priority,
        confidence: analysis.confidence,
        summary: analysis.summary.clone(),
        suggested_reply: analysis.suggested_reply.clone(),
        needs_review: analysis.confidence < threshold,
        error: String::new(),
    }
}

/// Lower confidence when the description carries no text.
pub fn cap_low_information(mut analysis: Analysis, description: &str) -> Analysis {
    if description.trim().is_empty() {
        analysis.confidence = analysis.confidence.min(LOW_INFORMATION_CAP);
    }
    analysis
}
