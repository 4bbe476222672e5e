//! Tic-tac-toe bot - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictactoe_bot::{BotConfig, Gateway, console, webhook};
use tictactoe_engine::{RandomOpponent, SessionStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tictactoe_bot=debug,tictactoe_engine=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = BotConfig::load_or_default(&cli.config)?;
    if let Some(seed) = cli.seed {
        config = config.with_opponent_seed(Some(seed));
    }

    initialize_tracing(&config);
    info!(config = ?config, "Starting tictactoe_bot");

    let opponent = Arc::new(RandomOpponent::from_seed(*config.opponent_seed()));
    let gateway = Arc::new(Gateway::new(SessionStore::new(), opponent));

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(port) = port {
                config = config.with_port(port);
            }
            webhook::serve(gateway, config.host(), *config.port()).await
        }
        Command::Console { user_id } => console::run(gateway, user_id).await,
    }
}

/// Logs go to stderr so the console transport keeps stdout to itself.
fn initialize_tracing(config: &BotConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter().as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
