use crate::config::{Settings, DEFAULT_MODEL};
use crate::error::ClassifierError;
use crate::heuristic::mock_analyze;
use crate::output::{Analysis, ClassificationResult};
use crate::prompt::PromptSpec;
use crate::remote::RemoteClient;
use crate::review::{add_needs_review, cap_low_information};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{info, warn};

/// Which classifier handles a request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalysisMode {
    /// Local keyword scoring, no network.
    Heuristic,
    /// Schema-constrained call to a remote model.
    Remote,
}

impl AnalysisMode {
    pub fn from_mock_flag(mock_mode: bool) -> Self {
        if mock_mode {
            AnalysisMode::Heuristic
        } else {
            AnalysisMode::Remote
        }
    }
}

/// One ticket to classify, built fresh from stored field values.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRequest {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub credential: Option<String>,
    pub model: Option<String>,
    pub confidence_threshold: f64,
    pub mode: AnalysisMode,
}

impl ClassificationRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        settings: &Settings,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags,
            credential: settings.credential.clone(),
            model: Some(settings.model.clone()),
            confidence_threshold: settings.auto_apply_threshold,
            mode: AnalysisMode::from_mock_flag(settings.mock_mode),
        }
    }

    fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

/// Runs classification requests and always produces a result.
#[derive(Debug, Clone)]
pub struct Analyzer {
    prompt: PromptSpec,
    remote: Option<RemoteClient>,
}

impl Analyzer {
    /// Analyzer with remote capability configured from `settings`.
    ///
    /// If the HTTP client cannot be built the analyzer still works, but
    /// remote requests degrade to an error result.
    pub fn new(prompt: PromptSpec, settings: &Settings) -> Self {
        let remote = RemoteClient::new(&settings.api_base_url, settings.request_timeout_sec)
            .map_err(|e| warn!("Remote classification disabled: {}", e))
            .ok();
        Self { prompt, remote }
    }

    /// Analyzer without any remote capability.
    pub fn heuristic_only(prompt: PromptSpec) -> Self {
        Self {
            prompt,
            remote: None,
        }
    }

    pub fn prompt(&self) -> &PromptSpec {
        &self.prompt
    }

    /// Classify a ticket. Every failure becomes a safe default result.
    pub async fn analyze_text(&self, request: &ClassificationRequest) -> ClassificationResult {
        match self.classify(request).await {
            Ok(result) => {
                info!(
                    "Classified as {} (confidence {:.2}, needs_review={})",
                    result.priority, result.confidence, result.needs_review
                );
                result
            }
            Err(e) => degrade(e),
        }
    }

    /// Classify with the heuristic only, whatever mode the request asks for.
    ///
    /// Summary and suggested reply are left empty.
    pub fn analyze_priority_only(&self, request: &ClassificationRequest) -> ClassificationResult {
        let outcome = check_input(request)
            .and_then(|_| {
                mock_analyze(&request.title, &request.description, &request.tags)
                    .map_err(ClassifierError::from)
            })
            .map(|analysis| finish(analysis, request));

        match outcome {
            Ok(mut result) => {
                result.summary.clear();
                result.suggested_reply.clear();
                info!(
                    "Priority set to {} (confidence {:.2}, needs_review={})",
                    result.priority, result.confidence, result.needs_review
                );
                result
            }
            Err(e) => degrade(e),
        }
    }

    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, ClassifierError> {
        check_input(request)?;

        let analysis = match request.mode {
            AnalysisMode::Heuristic => {
                mock_analyze(&request.title, &request.description, &request.tags)?
            }
            AnalysisMode::Remote => self.classify_remote(request).await?,
        };

        Ok(finish(analysis, request))
    }

    async fn classify_remote(
        &self,
        request: &ClassificationRequest,
    ) -> Result<Analysis, ClassifierError> {
        let client = self
            .remote
            .as_ref()
            .ok_or(ClassifierError::CapabilityUnavailable)?;
        let credential = request
            .credential
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(ClassifierError::MissingCredential)?;

        Ok(client
            .remote_analyze(
                &request.title,
                &request.description,
                credential,
                request.model(),
                &self.prompt,
            )
            .await?)
    }
}

fn check_input(request: &ClassificationRequest) -> Result<(), ClassifierError> {
    if request.is_blank() {
        return Err(ClassifierError::MissingInput);
    }
    Ok(())
}

fn finish(analysis: Analysis, request: &ClassificationRequest) -> ClassificationResult {
    let analysis = cap_low_information(analysis, &request.description);
    add_needs_review(&analysis, request.confidence_threshold)
}

fn degrade(e: ClassifierError) -> ClassificationResult {
    warn!(
        error_type = %e.to_error_type(),
        "Classification degraded to safe default: {}",
        e
    );
    ClassificationResult::safe_default(e.to_string())
}
