//! Tic-tac-toe with move history and time-travel.
//!
//! - [`rules`]: pure win and draw evaluation over a [`Board`] snapshot
//! - [`Timeline`]: snapshots, pointer and sort order
//! - [`GameView`]: render tree derived from a timeline

mod action;
pub mod contracts;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod timeline;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{Line, check_winner, winning_line};
pub use status::GameStatus;
pub use timeline::{Input, SortOrder, Timeline};
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry, SortIndicator, StatusView, describe_move};
