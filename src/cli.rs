//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Show the move list newest first
        #[arg(long)]
        descending: bool,

        /// File receiving log output
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves headlessly and print the resulting view as JSON
    Replay {
        /// Cell indices (0-8) to select, in order
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History entry to jump to after the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}
