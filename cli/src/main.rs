//! CLI entrypoint for storyloom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use loom_application::{
    ConversationLogger, GenerateStoryInput, GenerateStoryUseCase, NoProgress,
};
use loom_domain::{Model, Transcript};
use loom_infrastructure::{
    ConfigLoader, Credential, GeminiGateway, JsonlConversationLogger,
};
use loom_presentation::{ChatRepl, Cli, ConsoleFormatter, ProgressReporter, prompt_secret};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting storyloom");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    // Resolve the model: CLI flag wins over config
    let model: Model = match &cli.model {
        Some(name) => name.parse()?,
        None => config.resolve_model()?,
    };

    // Resolve the credential: environment first, masked prompt otherwise.
    // Entry loops until a non-empty secret is provided.
    let credential = match Credential::from_env() {
        Some(c) => c,
        None => Credential::new(
            prompt_secret("Enter your Google Gemini API key: ")
                .context("No API key provided")?,
        ),
    };

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(credential));

    let mut use_case = GenerateStoryUseCase::new(gateway.clone())
        .with_pacing(Duration::from_millis(config.pacing_ms));

    let log_path = cli.log_conversation.clone().or(config.conversation_log.clone());
    if let Some(path) = log_path
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Conversation log: {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        use_case = use_case.with_conversation_logger(logger);
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(gateway, model)
            .with_use_case(use_case)
            .with_progress(!cli.quiet)
            .with_history_display(config.history_display);

        repl.run().await?;
        return Ok(());
    }

    // Single-shot mode - prompt is required
    let prompt = match cli.prompt {
        Some(p) => p,
        None => bail!("A prompt is required. Use --chat for interactive mode."),
    };

    let mut transcript = Transcript::new();
    let input = GenerateStoryInput::new(prompt, model);

    let story = if cli.quiet {
        use_case.execute(input, &mut transcript, &NoProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute(input, &mut transcript, &progress).await?
    };

    if cli.quiet {
        // Quiet mode suppressed incremental output; print the finished story
        println!("{}", ConsoleFormatter::format_story(&story));
    }

    Ok(())
}
