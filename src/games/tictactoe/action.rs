//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A [`Move`] records which
//! player marked which cell; a [`MoveError`] records why an input was
//! ignored.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason an input was ignored.
///
/// The front-end treats every variant as a silent no-op; the state is
/// never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    CellOutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The requested history entry does not exist.
    #[display("Move {} is out of range (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// Requested move index.
        requested: usize,
        /// Current history length.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
