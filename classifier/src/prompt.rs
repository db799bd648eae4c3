use crate::error::ClassifierError;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

const SYSTEM_PROMPT_V1: &str = include_str!("../prompts/priority_prompt.txt");
const OUTPUT_SCHEMA_V1: &str = include_str!("../prompts/ai_output_schema.json");

/// Name under which the output schema is registered with the model.
pub const SCHEMA_NAME: &str = "analysis_result";

/// System prompt and output schema shared by every remote request.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    system_prompt: String,
    output_schema: Value,
}

impl PromptSpec {
    /// The prompt and schema bundled with the crate.
    pub fn builtin() -> Result<Self, ClassifierError> {
        Ok(Self {
            system_prompt: SYSTEM_PROMPT_V1.to_string(),
            output_schema: serde_json::from_str(OUTPUT_SCHEMA_V1)?,
        })
    }

    /// The bundled schema with a system prompt read from `path`.
    pub fn from_prompt_file(path: &Path) -> Result<Self, ClassifierError> {
        info!("Loading system prompt from {:?}", path);
        let system_prompt = std::fs::read_to_string(path)?;
        Ok(Self {
            system_prompt,
            ..Self::builtin()?
        })
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn output_schema(&self) -> &Value {
        &self.output_schema
    }

    /// Digest identifying this prompt and schema pair.
    pub fn hash(&self) -> String {
        compute_prompt_hash(&format!("{}\n{}", self.system_prompt, self.output_schema))
    }
}

/// Compute SHA256 hash of prompt content
pub fn compute_prompt_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

pub fn build_user_input(title: &str, description: &str) -> String {
    format!("Title: {}\n\nDescription:\n{}", title, description)
}
