//! CLI entrypoint for Ollama Toolcall
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use toolcall_application::{
    ApiService, ChatOutput, ChatSession, PromptError, RunPromptUseCase, SessionConfig,
    ToolExecutorPort,
};
use toolcall_domain::{Model, ResponseMode};
use toolcall_infrastructure::{
    ConfigLoader, FileConfig, HttpApiService, MockApiService, OllamaGateway, default_registry,
};
use toolcall_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleOutput, ProgressReporter, ReplConfig, init_color,
};
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

    // stderr keeps logs out of streamed model output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Ollama Toolcall");

    if cli.show_config {
        print_config_sources(&cli);
        return Ok(());
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    init_color(config.output.color);

    let model = cli
        .model
        .as_deref()
        .map(Model::from)
        .unwrap_or_else(|| config.model.model());

    // === Dependency Injection ===
    let api: Arc<dyn ApiService> = if cli.mock {
        info!("Using canned API responses");
        Arc::new(MockApiService::new())
    } else {
        Arc::new(HttpApiService::new(config.api.endpoints())?)
    };
    let tools = Arc::new(default_registry(api));

    if cli.list_tools {
        print!("{}", ConsoleFormatter::format_tool_list(&tools.descriptors()));
        return Ok(());
    }

    let gateway = Arc::new(OllamaGateway::new(
        config.model.host.clone(),
        config.model.timeout(),
    )?);
    let use_case = RunPromptUseCase::new(gateway, tools);

    let mode = if cli.chat {
        ResponseMode::Conversational
    } else {
        ResponseMode::Direct
    };
    info!("Model {} in {} mode", model, mode);

    match mode {
        ResponseMode::Conversational => run_chat(&cli, &config, model, use_case).await,
        ResponseMode::Direct => {
            let Some(prompt) = cli.prompt.as_deref() else {
                bail!("A prompt is required. Use --chat for interactive mode.");
            };
            run_direct(&model, prompt, &use_case).await
        }
    }
}

/// One direct-mode round. Only an unreachable model is an error exit.
async fn run_direct(model: &Model, prompt: &str, use_case: &RunPromptUseCase) -> Result<()> {
    let progress = ProgressReporter::new(Arc::new(ConsoleOutput::new()));
    progress.start(model);

    match use_case.execute_direct(model, prompt, &progress).await {
        Ok(_) => {}
        Err(e) if e.is_fatal() => {
            progress.finish();
            return Err(e.into());
        }
        // Already reported through the output
        Err(PromptError::Tool { .. }) => {}
        Err(e) => progress.on_error(&e.to_string()),
    }

    Ok(())
}

async fn run_chat(
    cli: &Cli,
    config: &FileConfig,
    model: Model,
    use_case: RunPromptUseCase,
) -> Result<()> {
    let session_config = SessionConfig {
        model,
        tool_results: config.session.tool_results,
        keep_system_turn: config.session.keep_system_turn,
        embedded_strategy: config.session.embedded_strategy(),
    };
    let mut session = ChatSession::new(use_case, session_config, Arc::new(ConsoleOutput::new()));

    // A prompt given with --chat opens the conversation
    if let Some(prompt) = cli.prompt.as_deref() {
        session.handle_line(prompt).await?;
        if session.is_ended() {
            return Ok(());
        }
    }

    let repl_config = ReplConfig {
        history_file: config.repl.history_file.as_ref().map(PathBuf::from),
    };

    ChatRepl::new(session)
        .with_config(repl_config)
        .with_host(config.model.host.clone())
        .run()
        .await?;

    Ok(())
}

fn print_config_sources(cli: &Cli) {
    println!("Configuration sources (highest priority first):");
    for source in ConfigLoader::sources(cli.config.as_deref()) {
        let mark = if source.found { "x" } else { " " };
        println!("  [{}] {:<9} {}", mark, source.label, source.location);
    }
    if cli.no_config {
        println!("(--no-config: only built-in defaults are used)");
    }
}
