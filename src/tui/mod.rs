//! Terminal UI for Strictly Timeline.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use ui::draw;

use crate::config::TimelineConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the configured log file so it does not
/// interfere with the TUI.
pub fn init_file_logging(config: &TimelineConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the terminal UI until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &TimelineConfig) -> Result<()> {
    info!(sort_order = %config.sort_order(), "Starting Strictly Timeline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.sort_order());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!(
        moves = app.timeline().history().len() - 1,
        "Strictly Timeline TUI exited"
    );
    res
}

/// Draw-then-read loop: every key press is one synchronous state transition.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !*app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}
