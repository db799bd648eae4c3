use crate::error::ValidationError;
use crate::output::{Analysis, Priority};
use serde_json::Value;
use std::collections::BTreeSet;
use std::str::FromStr;

pub const REQUIRED_KEYS: [&str; 4] = ["priority", "confidence", "summary", "suggested_reply"];

/// Check model output against the response contract and convert it.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate_output(data: &Value) -> Result<Analysis, ValidationError> {
    let object = data.as_object().ok_or(ValidationError::NotAnObject)?;

    let got: BTreeSet<String> = object.keys().cloned().collect();
    let expected: BTreeSet<String> = REQUIRED_KEYS.iter().map(|k| k.to_string()).collect();
    if got != expected {
        return Err(ValidationError::KeysMismatch { got, expected });
    }

    let priority = object["priority"]
        .as_str()
        .and_then(|p| Priority::from_str(p).ok())
        .ok_or(ValidationError::InvalidPriority)?;

    let confidence = object["confidence"]
        .as_f64()
        .filter(|c| (0.0..=1.0).contains(c))
        .ok_or(ValidationError::InvalidConfidence)?;

    let summary = object["summary"]
        .as_str()
        .ok_or(ValidationError::SummaryNotString)?;

    let suggested_reply = object["suggested_reply"]
        .as_str()
        .ok_or(ValidationError::SuggestedReplyNotString)?;

    Ok(Analysis {
        priority,
        confidence,
        summary: summary.to_string(),
        suggested_reply: suggested_reply.to_string(),
    })
}
