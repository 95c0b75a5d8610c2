//! Strictly Jeopardy - Unified CLI
//!
//! Trivia board with an interactive terminal mode and a one-shot board dump.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use std::sync::Arc;
use strictly_jeopardy::{
    CategoryRepository, ChannelPresentation, GameConfig, GameSession, JeopardyApiClient,
    Presentation, StartOutcome, TextPresentation,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play);

    match command {
        Command::Play => tui::init_logging()?,
        Command::Board { .. } => init_stderr_logging(),
    }

    let config = load_config(&cli.board)?;

    match command {
        Command::Play => run_play(config).await,
        Command::Board { reveal, json } => run_board(config, reveal, json).await,
    }
}

/// Logs to stderr, keeping stdout for the board.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Layers file, environment and command-line settings.
#[instrument(skip(args), fields(config_path = %args.config.display()))]
fn load_config(args: &BoardArgs) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&args.config)?.apply_env();

    if let Some(url) = &args.api_url {
        config = config.with_api_url(url.clone());
    }
    if let Some(categories) = args.categories {
        config = config.with_categories_per_board(categories);
    }
    if let Some(clues) = args.clues {
        config = config.with_clues_per_category(clues);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    config.validate()?;
    Ok(config)
}

/// Builds a session for `config` that reports to `presentation`.
fn build_session<P: Presentation>(
    config: &GameConfig,
    presentation: P,
) -> Result<GameSession<JeopardyApiClient, P>> {
    let api = JeopardyApiClient::new(config.api_url())?;
    let repository = match config.seed() {
        Some(seed) => CategoryRepository::with_seed(api, config.shape(), *seed),
        None => CategoryRepository::new(api, config.shape()),
    };
    Ok(GameSession::new(repository, presentation))
}

/// Run the interactive terminal board
async fn run_play(config: GameConfig) -> Result<()> {
    let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
    let session = build_session(&config, ChannelPresentation::new(event_tx))?;
    tui::run_tui(Arc::new(session), event_rx).await
}

/// Fetch one board and print it to stdout
///
/// With `json`, the whole board is serialized, answers included.
#[instrument(skip(config))]
async fn run_board(config: GameConfig, reveal: bool, json: bool) -> Result<()> {
    info!(api_url = %config.api_url(), "Fetching board");

    if json {
        let session = build_session(&config, ())?;
        session.start().await;
        let board = session.board().context("Session finished loading without a board")?;
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    let presentation = TextPresentation::new(std::io::stdout()).with_answers(reveal);
    let session = build_session(&config, presentation)?;
    if let StartOutcome::Started(summary) = session.start().await {
        info!(?summary, "Board printed");
    }
    Ok(())
}
