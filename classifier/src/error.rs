use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumString};
use thiserror::Error;

/// Semantic error types that describe where a classification degraded
#[derive(Debug, EnumString, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub enum ClassifierErrorType {
    MissingInputError,
    NoSignalError,
    MissingCredentialError,
    CapabilityUnavailableError,
    RemoteError,
    PromptFileReadError,
    CredentialFileReadError,
    SchemaParseError,
}

/// The heuristic found no keyword from any priority level.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct NoSignalError(pub String);

/// Model output that breaks the response contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Output is not a JSON object")]
    NotAnObject,

    #[error("Output keys mismatch. Got {got:?}, expected {expected:?}")]
    KeysMismatch {
        got: BTreeSet<String>,
        expected: BTreeSet<String>,
    },

    #[error("Invalid priority value")]
    InvalidPriority,

    #[error("Invalid confidence value")]
    InvalidConfidence,

    #[error("Summary must be a string")]
    SummaryNotString,

    #[error("Suggested reply must be a string")]
    SuggestedReplyNotString,
}

/// Category of a remote failure, rendered into the result error text.
#[derive(Debug, EnumString, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    TimeoutError,
    ConnectionError,
    ApiStatusError,
    HttpError,
    ResponseParseError,
    EmptyOutputError,
    OutputDecodeError,
    ValidationError,
}

/// Any failure on the remote path, flattened to a category and message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: {message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The model returned text that is not JSON.
    pub fn output_decode(e: serde_json::Error) -> Self {
        Self::new(RemoteErrorKind::OutputDecodeError, e.to_string())
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            RemoteErrorKind::TimeoutError
        } else if e.is_connect() {
            RemoteErrorKind::ConnectionError
        } else if e.is_status() {
            RemoteErrorKind::ApiStatusError
        } else if e.is_decode() {
            RemoteErrorKind::ResponseParseError
        } else {
            RemoteErrorKind::HttpError
        };
        Self::new(kind, e.to_string())
    }
}

impl From<ValidationError> for RemoteError {
    fn from(e: ValidationError) -> Self {
        Self::new(RemoteErrorKind::ValidationError, e.to_string())
    }
}

/// Internal error type with detailed context
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Missing title and description; analysis not run.")]
    MissingInput,

    #[error(transparent)]
    NoSignal(#[from] NoSignalError),

    #[error("Missing credential; configure it before remote classification is enabled.")]
    MissingCredential,

    #[error("remote classification capability unavailable")]
    CapabilityUnavailable,

    #[error("AI failure: {0}")]
    Remote(#[from] RemoteError),

    #[error("Prompt file read error: {0}")]
    PromptFileReadError(#[from] std::io::Error),

    #[error("Credential file read error: {0}")]
    CredentialFileReadError(std::io::Error),

    #[error("Output schema parse error: {0}")]
    SchemaParseError(#[from] serde_json::Error),
}

impl ClassifierError {
    /// Convert internal error to semantic error type
    pub fn to_error_type(&self) -> ClassifierErrorType {
        match self {
            ClassifierError::MissingInput => ClassifierErrorType::MissingInputError,
            ClassifierError::NoSignal(_) => ClassifierErrorType::NoSignalError,
            ClassifierError::MissingCredential => {
                ClassifierErrorType::MissingCredentialError
            }
            ClassifierError::CapabilityUnavailable => {
                ClassifierErrorType::CapabilityUnavailableError
            }
            ClassifierError::Remote(_) => ClassifierErrorType::RemoteError,
            ClassifierError::PromptFileReadError(_) => {
                ClassifierErrorType::PromptFileReadError
            }
            ClassifierError::CredentialFileReadError(_) => {
                ClassifierErrorType::CredentialFileReadError
            }
            ClassifierError::SchemaParseError(_) => ClassifierErrorType::SchemaParseError,
        }
    }
}
