use std::fs;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AUTO_APPLY_THRESHOLD: f64 = 0.60;
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SEC: u64 = 30;

/// Everything the analyzer needs from its environment, passed explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub mock_mode: bool,
  pub model: String,
  pub auto_apply_threshold: f64,
  pub credential: Option<String>,
  pub api_base_url: String,
  pub request_timeout_sec: u64,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      mock_mode: false,
      model: DEFAULT_MODEL.to_string(),
      auto_apply_threshold: DEFAULT_AUTO_APPLY_THRESHOLD,
      credential: None,
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SEC,
    }
  }
}

/// Parse a configured threshold, falling back to 0.60 when it is unusable.
pub fn parse_threshold(value: &str) -> f64 {
  match value.trim().parse::<f64>() {
    Ok(threshold) if (0.0..=1.0).contains(&threshold) => threshold,
    Ok(threshold) => {
      warn!(
        "Confidence threshold {} outside [0, 1], using {}",
        threshold, DEFAULT_AUTO_APPLY_THRESHOLD
      );
      DEFAULT_AUTO_APPLY_THRESHOLD
    }
    Err(e) => {
      warn!(
        "Unparsable confidence threshold {:?} ({}), using {}",
        value, e, DEFAULT_AUTO_APPLY_THRESHOLD
      );
      DEFAULT_AUTO_APPLY_THRESHOLD
    }
  }
}

/// Pick the credential from a file if given, else the direct value.
///
/// Blank credentials are treated as absent.
pub fn resolve_credential(
  value: Option<&str>,
  credential_file: Option<&Path>,
) -> Result<Option<String>, std::io::Error> {
  let credential = match credential_file {
    Some(path) => Some(fs::read_to_string(path)?),
    None => value.map(str::to_string),
  };
  Ok(
    credential
      .map(|c| c.trim().to_string())
      .filter(|c| !c.is_empty()),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::NamedTempFile;

  #[test]
  fn test_parse_threshold() {
    assert_eq!(parse_threshold("0.75"), 0.75);
    assert_eq!(parse_threshold(" 0.5 "), 0.5);
    assert_eq!(parse_threshold("1"), 1.0);
    assert_eq!(parse_threshold("0"), 0.0);
  }

  #[test]
  fn test_parse_threshold_fallbacks() {
    assert_eq!(parse_threshold(""), DEFAULT_AUTO_APPLY_THRESHOLD);
    assert_eq!(parse_threshold("high"), DEFAULT_AUTO_APPLY_THRESHOLD);
    assert_eq!(parse_threshold("1.5"), DEFAULT_AUTO_APPLY_THRESHOLD);
    assert_eq!(parse_threshold("-0.1"), DEFAULT_AUTO_APPLY_THRESHOLD);
    assert_eq!(parse_threshold("NaN"), DEFAULT_AUTO_APPLY_THRESHOLD);
  }

  #[test]
  fn test_resolve_credential_direct() {
    assert_eq!(
      resolve_credential(Some("sk-test"), None).unwrap(),
      Some("sk-test".to_string())
    );
    assert_eq!(resolve_credential(Some("   "), None).unwrap(), None);
    assert_eq!(resolve_credential(None, None).unwrap(), None);
  }

  #[test]
  fn test_resolve_credential_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "sk-from-file").unwrap();

    let credential =
      resolve_credential(Some("sk-direct"), Some(temp_file.path())).unwrap();
    assert_eq!(credential, Some("sk-from-file".to_string()));
  }

  #[test]
  fn test_resolve_credential_missing_file() {
    let result =
      resolve_credential(None, Some(Path::new("/nonexistent/credential")));
    assert!(result.is_err());
  }

  #[test]
  fn test_default_settings() {
    let settings = Settings::default();
    assert!(!settings.mock_mode);
    assert_eq!(settings.model, "gpt-4o-mini");
    assert_eq!(settings.auto_apply_threshold, 0.60);
    assert_eq!(settings.credential, None);
  }
}
