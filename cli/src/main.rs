//! CLI entrypoint for search-battle
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use battle_application::{
    ChatProvider, ConversationLogger, CredentialStore, DualChatController,
    NoConversationLogger, Notifier, SubmitOutcome,
};
use battle_domain::{OutputFormat, Question, Severity};
use battle_infrastructure::{
    ConfigLoader, EnvKeyNames, FileConfig, FileCredentialStore, JsonlConversationLogger,
    OpenAiProvider, PerplexityProvider, build_http_client,
};
use battle_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleNotifier, CredentialForm, FormOutcome, OutputConfig,
    OutputFormatter, ReplConfig, progress_for_stderr,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging based on verbosity level
///
/// Diagnostics go to stderr so they never mix with rendered columns. The
/// returned guard must live until exit for the optional file writer to flush.
fn init_logging(verbose: u8, log_file: Option<&str>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file.map(Path::new) {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path.file_name().unwrap_or_else(|| "search-battle.log".as_ref());
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        eprintln!("Warning: {}", issue.message);
    }
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("Error: {}", issue.message);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    info!("Starting search-battle");

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::default_location()?);
    let form = CredentialForm::new(store.clone(), notifier.clone());

    if cli.set_keys {
        return match form.prompt()? {
            FormOutcome::Saved(_) => Ok(()),
            FormOutcome::Rejected => bail!("Both API keys are required"),
            FormOutcome::Failed => bail!("Could not save API keys"),
        };
    }

    let env_keys = EnvKeyNames {
        openai: config.providers.openai.api_key_env.clone(),
        perplexity: config.providers.perplexity.api_key_env.clone(),
    }
    .read();
    let credentials = form.stored().overlay(&env_keys);

    let http = build_http_client(config.http.timeout());
    let openai: Arc<dyn ChatProvider> = Arc::new(
        OpenAiProvider::new(http.clone())
            .with_base_url(&config.providers.openai.base_url)
            .with_profile(config.providers.openai.to_profile()),
    );
    let perplexity: Arc<dyn ChatProvider> = Arc::new(
        PerplexityProvider::new(http)
            .with_base_url(&config.providers.perplexity.base_url)
            .with_profile(config.providers.perplexity.to_profile())
            .with_recency(config.providers.perplexity.recency()),
    );

    let logger: Arc<dyn ConversationLogger> = match cli
        .log_conversation
        .clone()
        .or_else(|| config.logging.conversation_log.clone().map(Into::into))
    {
        Some(path) => match JsonlConversationLogger::open(&path) {
            Ok(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            Err(e) => {
                warn!("Conversation log disabled, cannot open {}: {}", path.display(), e);
                Arc::new(NoConversationLogger)
            }
        },
        None => Arc::new(NoConversationLogger),
    };

    let mut controller = DualChatController::new(openai, perplexity, credentials)
        .with_notifier(notifier)
        .with_logger(logger);

    let output = OutputConfig {
        format: cli.output.or(config.output.format).unwrap_or_default(),
        color: config.output.color,
        width: OutputConfig::terminal_width(),
    };
    let formatter = ConsoleFormatter::new(output);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig::new(
            config.repl.show_progress && !cli.quiet,
            config.repl.history_file.as_deref(),
        );
        let mut repl = ChatRepl::new(controller, form, formatter)
            .with_config(repl_config)
            .with_env_keys(env_keys);
        repl.run().await;
        return Ok(());
    }

    // Single question mode - a blank question fails before any key prompt
    let question = validate_question(cli.question)?;

    if !controller.has_credentials() {
        if !std::io::stdin().is_terminal() {
            bail!(
                "API keys missing for {}. Run `search-battle --set-keys` or set {} / {}.",
                controller
                    .credentials()
                    .missing()
                    .iter()
                    .map(|p| p.display_name())
                    .collect::<Vec<_>>()
                    .join(", "),
                config.providers.openai.api_key_env,
                config.providers.perplexity.api_key_env
            );
        }
        match form.prompt()? {
            FormOutcome::Saved(saved) => controller.set_credentials(saved.overlay(&env_keys)),
            _ => bail!("Both API keys are required"),
        }
    }

    let show_progress = !cli.quiet && output.format != OutputFormat::Json;
    let outcome = if show_progress {
        let progress = progress_for_stderr();
        controller
            .submit_with_progress(&question, progress.as_ref())
            .await
    } else {
        controller.submit(&question).await
    };

    match outcome {
        SubmitOutcome::Ignored => bail!("Question is empty"),
        SubmitOutcome::CredentialsRequired => bail!("Both API keys are required"),
        SubmitOutcome::Completed(report) => {
            let snapshot = controller.snapshot();
            if output.format == OutputFormat::Json {
                println!("{}", formatter.format_json(&snapshot));
            } else {
                println!();
                print!("{}", formatter.format(&snapshot));
            }
            if !report.all_succeeded() {
                info!("{} provider(s) failed", report.failures().count());
            }
        }
    }

    Ok(())
}

/// The one-shot question, rejected when missing or blank
fn validate_question(question: Option<String>) -> Result<String> {
    let Some(question) = question else {
        bail!("Question is required. Use --chat for interactive mode.");
    };
    if Question::try_new(&question).is_none() {
        bail!("Question is empty");
    }
    Ok(question)
}
