//! Strictly Timeline library - tic-tac-toe with move history and time-travel
//!
//! The game is modelled as a pure, synchronous state machine. Front-ends
//! feed [`Input`] events into a [`Timeline`] and draw the [`GameView`]
//! derived from it.
//!
//! # Architecture
//!
//! - **Rules**: win and draw evaluation over immutable [`Board`] snapshots
//! - **Timeline**: snapshot history, pointer and move-list order
//! - **View**: render tree (grid, status line, sort control, move list)
//! - **TUI**: ratatui front-end driving the timeline from key presses
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameView, Timeline};
//!
//! let mut timeline = Timeline::new();
//! for cell in [0, 3, 4, 5, 8] {
//!     timeline.select_cell(cell)?;
//! }
//!
//! let view = GameView::render(&timeline);
//! assert_eq!(view.status().text(), "Winner: X");
//! assert_eq!(view.highlighted(), vec![0, 4, 8]);
//! # Ok::<(), strictly_timeline::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, TimelineConfig};

// Crate-level exports - Headless replay
pub use replay::replay;

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, draw, init_file_logging, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellView, GameStatus, GameView, Input, Line, Move, MoveEntry, MoveError, Player,
    Position, SortIndicator, SortOrder, Square, StatusView, Timeline, check_winner,
    describe_move, winning_line,
};

// Crate-level exports - Rules, contracts and invariants
pub use games::tictactoe::{contracts, invariants, rules};
