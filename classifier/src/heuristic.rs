use crate::error::NoSignalError;
use crate::output::{Analysis, Priority};
use std::collections::HashSet;
use tracing::debug;

const HIGH_KEYWORDS: &[&str] = &[
    "down",
    "blocked",
    "error",
    "urgent",
    "crash",
    "users",
    "production",
];
const MEDIUM_KEYWORDS: &[&str] = &["slow", "issue", "bug", "problem", "delay"];
const LOW_KEYWORDS: &[&str] = &["question", "request", "info", "feature", "enhancement"];

const MAX_CONFIDENCE: f64 = 0.95;

const HIGH_REPLY: &str =
    "Thanks for reporting this. We\u{2019}re prioritizing it and will update you shortly.";
const DEFAULT_REPLY: &str = "Thanks for the details. We\u{2019}ll look into this and get back to you.";

fn keywords(priority: Priority) -> &'static [&'static str] {
    match priority {
        Priority::High => HIGH_KEYWORDS,
        Priority::Medium => MEDIUM_KEYWORDS,
        Priority::Low => LOW_KEYWORDS,
    }
}

/// Lower-cased whitespace tokens of title and description, plus tags.
fn token_set(title: &str, description: &str, tags: &[String]) -> HashSet<String> {
    let text = format!("{} {}", title, description).to_lowercase();
    text.split_whitespace()
        .map(str::to_string)
        .chain(tags.iter().map(|t| t.to_lowercase()))
        .collect()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Deterministic keyword scorer used when no remote model is involved.
///
/// Each priority scores the number of its keywords present in the ticket.
/// The highest score wins; ties go to the earlier entry of
/// [`Priority::SCAN_ORDER`]. Confidence is the winner's share of all hits,
/// capped at 0.95.
pub fn mock_analyze(
    title: &str,
    description: &str,
    tags: &[String],
) -> Result<Analysis, NoSignalError> {
    let tokens = token_set(title, description, tags);

    let scores: Vec<(Priority, usize)> = Priority::SCAN_ORDER
        .iter()
        .map(|&priority| {
            let hits = keywords(priority)
                .iter()
                .filter(|word| tokens.contains(**word))
                .count();
            (priority, hits)
        })
        .collect();

    debug!("Keyword scores: {:?}", scores);

    let total_hits: usize = scores.iter().map(|(_, hits)| hits).sum();
    if total_hits == 0 {
        return Err(NoSignalError(
            "Mock classification failed: no keywords found in title, description, or tags."
                .to_string(),
        ));
    }

    let (best_priority, best_score) = scores
        .iter()
        .copied()
        .fold((Priority::High, 0), |best, current| {
            if current.1 > best.1 { current } else { best }
        });

    let confidence = MAX_CONFIDENCE.min(best_score as f64 / total_hits as f64);

    Ok(Analysis {
        priority: best_priority,
        confidence: round_to_hundredths(confidence),
        summary: format!(
            "Classified as {} priority based on detected signals.",
            best_priority
        ),
        suggested_reply: match best_priority {
            Priority::High => HIGH_REPLY.to_string(),
            _ => DEFAULT_REPLY.to_string(),
        },
    })
}
