//! Open Inquiry CLI - ask questions and read evidence-labeled answers.

use clap::Parser;
use inquiry_cli::commands;
use inquiry_cli::repl;
use inquiry_cli::{ChatSession, Cli, Command, Config, Formatter};
use inquiry_llm::{MessagesTransport, SYSTEM_PROMPT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> inquiry_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(&PathBuf::from(path))?,
        None => Config::load()?,
    };

    // Command-line overrides
    if let Some(model) = cli.model {
        config.transport.model = model;
    }
    if let Some(endpoint) = cli.endpoint {
        config.transport.endpoint = endpoint;
    }
    if let Some(api_key) = cli.api_key {
        config.transport.api_key = Some(api_key);
    }
    let theme = cli.theme.map(Into::into).unwrap_or(config.settings.theme);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled, theme);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Render(args) => commands::execute_render(args, &formatter).await?,
        Command::Legend => commands::execute_legend(&formatter).await?,
        Command::Suggestions => commands::execute_suggestions(&formatter).await?,
        Command::Ask(args) => {
            let mut session = build_session(&config)?;
            commands::execute_ask(args, &mut session, &formatter).await?;
        }
        Command::Chat => {
            let mut session = build_session(&config)?;
            repl::run_repl(&mut session, &formatter, config.settings.history_size).await?;
        }
    }

    Ok(())
}

fn build_session(config: &Config) -> inquiry_cli::Result<ChatSession<MessagesTransport>> {
    let transport = MessagesTransport::new(config.transport_config())?;
    Ok(ChatSession::new(
        transport,
        SYSTEM_PROMPT.as_str(),
        config.transport.max_tokens,
    ))
}
