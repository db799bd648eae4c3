use crate::error::{RemoteError, RemoteErrorKind};
use crate::output::Analysis;
use crate::prompt::{build_user_input, PromptSpec, SCHEMA_NAME};
use crate::validate::validate_output;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

/// Longest slice of an error response body kept in the error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Serialize, Debug, Clone)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    pub name: String,
    pub schema: Value,
    pub strict: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct TextOptions {
    pub format: ResponseFormat,
}

#[derive(Serialize, Debug, Clone)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
    pub text: TextOptions,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ContentPart {
    #[serde(rename = "type", default)]
    pub part_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutputItem {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

impl ResponsesResponse {
    /// The model's text, from `output_text` or the message content parts.
    pub fn text(&self) -> Option<String> {
        if let Some(text) = self.output_text.as_ref().filter(|t| !t.is_empty()) {
            return Some(text.clone());
        }
        let text: String = self
            .output
            .iter()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.part_type == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

fn truncate_body(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

/// Client for a Responses-style model endpoint with structured output.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    /// Build a client whose every request is bounded by `timeout_sec`.
    pub fn new(base_url: &str, timeout_sec: u64) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .gzip(true)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the model to classify a ticket and validate what comes back.
    ///
    /// A single attempt is made. Transport, status, decoding and contract
    /// failures all come back as [`RemoteError`].
    pub async fn remote_analyze(
        &self,
        title: &str,
        description: &str,
        credential: &str,
        model: &str,
        prompt: &PromptSpec,
    ) -> Result<Analysis, RemoteError> {
        info!("Classifying ticket with remote model {}", model);

        let request = ResponsesRequest {
            model: model.to_string(),
            input: vec![
                InputMessage {
                    role: "system".to_string(),
                    content: prompt.system_prompt().to_string(),
                },
                InputMessage {
                    role: "user".to_string(),
                    content: build_user_input(title, description),
                },
            ],
            text: TextOptions {
                format: ResponseFormat {
                    format_type: "json_schema".to_string(),
                    name: SCHEMA_NAME.to_string(),
                    schema: prompt.output_schema().clone(),
                    strict: true,
                },
            },
        };

        debug!("Remote request for model {} with {} messages", model, request.input.len());

        let response = self
            .http
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Model API timeout");
                } else if e.is_connect() {
                    error!("Failed to connect to model API");
                }
                RemoteError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Model API returned error: {}", status);
            return Err(RemoteError::new(
                RemoteErrorKind::ApiStatusError,
                format!("{}: {}", status, truncate_body(&body, MAX_ERROR_BODY_CHARS)),
            ));
        }

        let body: ResponsesResponse = response.json().await.map_err(|e| {
            error!("Failed to parse model API response");
            RemoteError::new(RemoteErrorKind::ResponseParseError, e.to_string())
        })?;

        let raw = body.text().ok_or_else(|| {
            error!("Model API response carried no output text");
            RemoteError::new(
                RemoteErrorKind::EmptyOutputError,
                "response contained no output text",
            )
        })?;

        debug!("Model output: {}", raw);

        let data: Value = serde_json::from_str(&raw).map_err(|e| {
            error!("Failed to parse classification from model output");
            RemoteError::output_decode(e)
        })?;

        Ok(validate_output(&data)?)
    }
}
