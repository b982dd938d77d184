//! Strictly Timeline - Unified CLI
//!
//! Terminal UI by default, headless JSON replay on request.

use anyhow::Result;
use clap::Parser;
use strictly_timeline::{
    Cli, Command, SortOrder, TimelineConfig, init_file_logging, replay, run_tui,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimelineConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        descending: false,
        log_file: None,
    }) {
        Command::Play {
            descending,
            log_file,
        } => run_play(config, descending, log_file),
        Command::Replay {
            moves,
            jump,
            descending,
            pretty,
        } => run_replay(config, moves, jump, descending, pretty),
    }
}

/// Run the terminal UI
fn run_play(
    mut config: TimelineConfig,
    descending: bool,
    log_file: Option<std::path::PathBuf>,
) -> Result<()> {
    if let Some(log_file) = log_file {
        config = config.with_log_file(log_file);
    }
    if descending {
        config = config.with_sort_order(SortOrder::Descending);
    }

    init_file_logging(&config)?;
    run_tui(&config)
}

/// Apply moves headlessly and print the view as JSON
fn run_replay(
    config: TimelineConfig,
    moves: Vec<usize>,
    jump: Option<usize>,
    descending: bool,
    pretty: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let sort_order = if descending {
        SortOrder::Descending
    } else {
        *config.sort_order()
    };
    info!(moves = ?moves, ?jump, %sort_order, "Replaying moves");

    let view = replay(&moves, jump, sort_order);
    let json = if pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{}", json);
    Ok(())
}
