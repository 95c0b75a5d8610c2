//! Command-line interface for strictly_jeopardy.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Jeopardy - a trivia board in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_jeopardy")]
#[command(about = "Single-player trivia board backed by a remote clue service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Options shared by every command
    #[command(flatten)]
    pub board: BoardArgs,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Board options that override the config file.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "jeopardy.toml")]
    pub config: PathBuf,

    /// Base URL of the clue service
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Number of category columns
    #[arg(long, global = true)]
    pub categories: Option<usize>,

    /// Number of clues per category
    #[arg(long, global = true)]
    pub clues: Option<usize>,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Fetch one board and print it with every clue hidden
    Board {
        /// Print every question with its answer
        #[arg(long)]
        reveal: bool,

        /// Dump the full board as JSON, answers included
        #[arg(long, conflicts_with = "reveal")]
        json: bool,
    },
}
