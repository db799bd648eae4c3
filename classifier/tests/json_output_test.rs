use ticket_ai_classifier::error::{ClassifierErrorType, RemoteError, RemoteErrorKind};
use ticket_ai_classifier::output::{AnalysisMetadata, AnalysisOutput};
use ticket_ai_classifier::{AnalysisMode, ClassificationResult, Priority};

fn metadata(mode: AnalysisMode) -> AnalysisMetadata {
    AnalysisMetadata {
        mode,
        model: "gpt-4o-mini".to_string(),
        prompt_hash: "sha256:abcd1234".to_string(),
        confidence_threshold: 0.6,
    }
}

#[test]
fn test_classified_output_serialization() {
    let output = AnalysisOutput::new(
        ClassificationResult {
            priority: Priority::High,
            confidence: 0.4,
            summary: "Classified as High priority based on detected signals.".to_string(),
            suggested_reply: "Thanks for reporting this.".to_string(),
            needs_review: true,
            error: String::new(),
        },
        metadata(AnalysisMode::Heuristic),
    );

    let json = output.to_json().expect("Failed to serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(parsed["result"], "classified");
    assert_eq!(parsed["classification"]["priority"], "High");
    assert_eq!(parsed["classification"]["confidence"], 0.4);
    assert_eq!(parsed["classification"]["needs_review"], true);
    assert_eq!(parsed["classification"]["error"], "");
    assert_eq!(parsed["metadata"]["mode"], "heuristic");
    assert_eq!(parsed["metadata"]["model"], "gpt-4o-mini");
    assert_eq!(parsed["metadata"]["prompt_hash"], "sha256:abcd1234");
    assert_eq!(parsed["metadata"]["confidence_threshold"], 0.6);
}

#[test]
fn test_error_output_serialization() {
    let output = AnalysisOutput::new(
        ClassificationResult::safe_default("AI failure: TimeoutError: operation timed out"),
        metadata(AnalysisMode::Remote),
    );

    let json = output.to_json().expect("Failed to serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

    assert_eq!(parsed["result"], "error");
    assert_eq!(parsed["classification"]["priority"], "Low");
    assert_eq!(parsed["classification"]["confidence"], 0.0);
    assert_eq!(parsed["classification"]["summary"], "");
    assert_eq!(parsed["classification"]["suggested_reply"], "");
    assert_eq!(parsed["classification"]["needs_review"], true);
    assert_eq!(
        parsed["classification"]["error"],
        "AI failure: TimeoutError: operation timed out"
    );
    assert_eq!(parsed["metadata"]["mode"], "remote");
}

#[test]
fn test_output_deserialization() {
    let json = r#"{
        "result": "classified",
        "classification": {
            "priority": "Medium",
            "confidence": 0.67,
            "summary": "Slow reports.",
            "suggested_reply": "Thanks for the details.",
            "needs_review": false,
            "error": ""
        },
        "metadata": {
            "mode": "remote",
            "model": "gpt-4o-mini",
            "prompt_hash": "sha256:test123",
            "confidence_threshold": 0.6
        }
    }"#;

    let output: AnalysisOutput = serde_json::from_str(json).expect("Failed to deserialize");

    assert_eq!(output.result, "classified");
    assert_eq!(output.classification.priority, Priority::Medium);
    assert!((output.classification.confidence - 0.67).abs() < 0.001);
    assert!(!output.classification.is_error());
    assert_eq!(output.metadata.mode, AnalysisMode::Remote);
}

#[test]
fn test_priority_names_and_selection_codes() {
    for (priority, name, code) in [
        (Priority::Low, "Low", "low"),
        (Priority::Medium, "Medium", "medium"),
        (Priority::High, "High", "high"),
    ] {
        assert_eq!(serde_json::to_string(&priority).unwrap(), format!("\"{}\"", name));
        assert_eq!(priority.to_string(), name);
        assert_eq!(priority.selection_code(), code);
        assert_eq!(name.parse::<Priority>().unwrap(), priority);
    }
    assert!("Urgent".parse::<Priority>().is_err());
}

#[test]
fn test_remote_error_display() {
    let err = RemoteError::new(RemoteErrorKind::ValidationError, "Invalid priority value");
    assert_eq!(err.to_string(), "ValidationError: Invalid priority value");
}

#[test]
fn test_all_error_types_serialize() {
    let error_types = vec![
        ClassifierErrorType::MissingInputError,
        ClassifierErrorType::NoSignalError,
        ClassifierErrorType::MissingCredentialError,
        ClassifierErrorType::CapabilityUnavailableError,
        ClassifierErrorType::RemoteError,
        ClassifierErrorType::PromptFileReadError,
        ClassifierErrorType::CredentialFileReadError,
        ClassifierErrorType::SchemaParseError,
    ];

    for error_type in error_types {
        let json = serde_json::to_string(&error_type).expect("Failed to serialize");
        assert_eq!(json, format!("\"{}\"", error_type));
        let parsed: ClassifierErrorType = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(parsed, error_type);
    }
}
