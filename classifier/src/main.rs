use clap::Parser;
use ticket_ai_classifier::{
    cli_args::CliArgs,
    error::ClassifierError,
    output::{AnalysisMetadata, AnalysisOutput},
    AnalysisMode, Analyzer, ClassificationRequest, PromptSpec,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Always initialize tracing to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = CliArgs::parse();

    info!("Starting Ticket AI Classifier");
    info!("Model: {}", args.model);
    info!("Mock mode: {}", args.mock);
    info!("Output format: {}", args.output);

    let output = match run_classification(&args).await {
        Ok(output) => output,
        Err(e) => {
            error!(error_type = %e.to_error_type(), "Unusable configuration: {}", e);
            eprintln!("Configuration Error:");
            eprintln!("  Error Type: {}", e.to_error_type());
            eprintln!("  Message: {}", e);
            std::process::exit(1);
        }
    };

    match args.output.as_str() {
        "json" => {
            let json = output.to_json().unwrap_or_else(|e| {
                error!("Failed to serialize output: {}", e);
                r#"{"result": "error", "error": "Failed to serialize output"}"#.to_string()
            });
            println!("{}", json);
        }
        _ => {
            let classification = &output.classification;
            println!("Classification Result:");
            println!("  Result: {}", output.result);
            println!("  Priority: {}", classification.priority);
            println!("  Confidence: {:.2}", classification.confidence);
            println!("  Needs Review: {}", classification.needs_review);
            if !classification.summary.is_empty() {
                println!("  Summary: {}", classification.summary);
            }
            if !classification.suggested_reply.is_empty() {
                println!("  Suggested Reply: {}", classification.suggested_reply);
            }
            if classification.is_error() {
                println!("  Error: {}", classification.error);
            }
            println!("  Mode: {}", output.metadata.mode);
            println!("  Model: {}", output.metadata.model);
            println!("  Prompt Hash: {}", output.metadata.prompt_hash);
        }
    }
}

async fn run_classification(args: &CliArgs) -> Result<AnalysisOutput, ClassifierError> {
    let prompt = match &args.prompt_file {
        Some(path) => PromptSpec::from_prompt_file(path)?,
        None => PromptSpec::builtin()?,
    };
    let settings = args
        .to_settings()
        .map_err(ClassifierError::CredentialFileReadError)?;
    info!("Confidence threshold: {}", settings.auto_apply_threshold);

    let analyzer = Analyzer::new(prompt, &settings);
    let prompt_hash = analyzer.prompt().hash();
    info!("Prompt hash: {}", prompt_hash);
    let request =
        ClassificationRequest::new(&args.title, &args.description, args.tags(), &settings);

    let (classification, mode) = if args.priority_only {
        (
            analyzer.analyze_priority_only(&request),
            AnalysisMode::Heuristic,
        )
    } else {
        (analyzer.analyze_text(&request).await, request.mode)
    };

    Ok(AnalysisOutput::new(
        classification,
        AnalysisMetadata {
            mode,
            model: request.model().to_string(),
            prompt_hash,
            confidence_threshold: request.confidence_threshold,
        },
    ))
}
