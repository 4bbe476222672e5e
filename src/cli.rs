//! Command-line interface for tictactoe_bot.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe chat bot
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bot")]
#[command(about = "Single-player tic-tac-toe over a chat-style gateway", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe_bot.toml")]
    pub config: PathBuf,

    /// Opponent RNG seed (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the JSON webhook
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Play in the terminal
    Console {
        /// User id the console plays as
        #[arg(long, default_value = "console")]
        user_id: String,
    },
}
