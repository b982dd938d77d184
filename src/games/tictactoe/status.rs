//! Status line derivation.
//!
//! The status is never stored. It is recomputed from the displayed
//! snapshot and the pointer every time the view is rendered.

use super::rules::{is_full, winning_line};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete; carries the mark that completed it.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board is full and no line is complete.
    #[display("No winner")]
    Draw,
    /// Play continues; carries the player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Derives the status of `board` when `to_move` is the player whose turn it is.
    #[instrument(skip(board))]
    pub fn derive(board: &Board, to_move: Player) -> Self {
        if let Some(line) = winning_line(board) {
            if let Some(player) = board.get(line.positions()[0]).player() {
                return GameStatus::Winner(player);
            }
        }

        if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(to_move)
        }
    }

    /// Returns true once no further moves are accepted on this snapshot.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}
