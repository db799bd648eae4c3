use crate::config::{parse_threshold, resolve_credential, Settings};
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "ticket-ai-classifier",
  version,
  about = "Suggests a priority, summary and first reply for a support ticket"
)]
pub struct CliArgs {
  /// Ticket title.
  #[arg(long, env = "TICKET_TITLE", default_value = "")]
  pub title: String,

  /// Ticket description.
  #[arg(long, env = "TICKET_DESCRIPTION", default_value = "")]
  pub description: String,

  /// Ticket tag. Repeat the flag, or comma separate in the env var.
  #[arg(long = "tag", env = "TICKET_TAGS", value_delimiter = ',')]
  pub tags: Vec<String>,

  /// Use the local keyword heuristic instead of the remote model.
  #[arg(long, env = "TICKET_AI_MOCK", value_parser = BoolishValueParser::new())]
  pub mock: bool,

  /// Remote model to use.
  #[arg(long, env = "TICKET_AI_MODEL", default_value = "gpt-4o-mini")]
  pub model: String,

  /// API key for the remote model.
  #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
  pub api_key: Option<String>,

  /// Path to file containing the API key.
  #[arg(long, env = "OPENAI_API_KEY_FILE")]
  pub api_key_file: Option<PathBuf>,

  /// Minimum confidence to auto-apply without review (0.0 to 1.0).
  #[arg(long, env = "TICKET_AI_CONFIDENCE_THRESHOLD", default_value = "0.60")]
  pub confidence_threshold: String,

  /// Base URL of the Responses API.
  #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
  pub api_base_url: String,

  /// Remote request timeout in seconds.
  #[arg(
    long,
    env = "TICKET_AI_TIMEOUT_SEC",
    default_value = "30",
    value_parser = clap::value_parser!(u64).range(1..)
  )]
  pub request_timeout_sec: u64,

  /// Path to a system prompt replacing the bundled one.
  #[arg(long, env = "TICKET_AI_PROMPT_FILE")]
  pub prompt_file: Option<PathBuf>,

  /// Only decide the priority, using the heuristic.
  #[arg(long)]
  pub priority_only: bool,

  /// Output format (json or human-readable).
  #[arg(long, env = "OUTPUT", default_value = "human")]
  pub output: String,
}

impl CliArgs {
  /// Tags with surrounding whitespace removed and blanks dropped.
  pub fn tags(&self) -> Vec<String> {
    self
      .tags
      .iter()
      .map(|t| t.trim().to_string())
      .filter(|t| !t.is_empty())
      .collect()
  }

  pub fn to_settings(&self) -> Result<Settings, std::io::Error> {
    Ok(Settings {
      mock_mode: self.mock,
      model: self.model.clone(),
      auto_apply_threshold: parse_threshold(&self.confidence_threshold),
      credential: resolve_credential(
        self.api_key.as_deref(),
        self.api_key_file.as_deref(),
      )?,
      api_base_url: self.api_base_url.clone(),
      request_timeout_sec: self.request_timeout_sec,
    })
  }
}
