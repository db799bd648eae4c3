pub mod analyze;
pub mod cli_args;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod output;
pub mod prompt;
pub mod remote;
pub mod review;
pub mod validate;

pub use analyze::{AnalysisMode, Analyzer, ClassificationRequest};
pub use config::Settings;
pub use output::{Analysis, ClassificationResult, Priority};
pub use prompt::{compute_prompt_hash, PromptSpec};
