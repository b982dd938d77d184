//! Move history with time-travel.
//!
//! A [`Timeline`] owns every snapshot played so far, the pointer selecting
//! the displayed snapshot, and the order in which the move list is shown.
//! Playing a move from an older snapshot discards the snapshots after it
//! and starts a new branch.

use super::action::{Move, MoveError};
use super::contracts::{CellInBounds, Contract, SelectionContract};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::status::GameStatus;
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Arrow shown on the sort control.
    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// Discrete input events accepted by a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// A board cell (0-8) was activated.
    CellActivated(usize),
    /// A move-list entry was activated.
    HistoryActivated(usize),
    /// The sort control was activated.
    ToggleOrder,
}

/// Game session state: snapshots, pointer and sort order.
///
/// Deserialized timelines are checked against [`TimelineInvariants`], so a
/// timeline with no snapshots or a pointer past the end is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct Timeline {
    pub(super) history: Vec<Board>,
    pub(super) current_move: usize,
    pub(super) sort_order: SortOrder,
}

/// Unchecked wire form of a [`Timeline`].
#[derive(Deserialize)]
struct RawTimeline {
    history: Vec<Board>,
    current_move: usize,
    sort_order: SortOrder,
}

impl TryFrom<RawTimeline> for Timeline {
    type Error = MoveError;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let timeline = Self {
            history: raw.history,
            current_move: raw.current_move,
            sort_order: raw.sort_order,
        };
        TimelineInvariants::check_all(&timeline).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            MoveError::InvariantViolation(descriptions.join("; "))
        })?;
        Ok(timeline)
    }
}

impl Timeline {
    /// Starts a session with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Starts a session whose move list is shown in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// All snapshots, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Display order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Player whose mark the next selection places.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Returns true when the pointer is on the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::derive(self.current_board(), self.to_move())
    }

    /// The move that produced snapshot `move_index`, if it exists and is not the start.
    pub fn move_at(&self, move_index: usize) -> Option<Move> {
        if move_index == 0 {
            return None;
        }
        let before = self.history.get(move_index - 1)?;
        let after = self.history.get(move_index)?;
        let position = before.diff(after).into_iter().next()?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// Marks cell `index` for the player to move.
    ///
    /// Snapshots after the pointer are dropped before the new one is
    /// appended. The state is left untouched when an error is returned.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn select_cell(&mut self, index: usize) -> Result<Move, MoveError> {
        SelectionContract::pre(self, &index)?;

        let position = CellInBounds::check(index)?;
        let action = Move::new(self.to_move(), position);
        let next = self.current_board().with_mark(position, action.player);

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = SelectionContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(
            player = %action.player,
            position = %action.position,
            current_move = self.current_move,
            "Move applied"
        );
        Ok(action)
    }

    /// Moves the pointer to snapshot `move_index` without touching history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        if move_index >= self.history.len() {
            return Err(MoveError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        debug!(current_move = move_index, "Jumped to move");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Applies an input event, ignoring invalid ones.
    ///
    /// Returns true if the state changed.
    #[instrument(skip(self))]
    pub fn apply(&mut self, input: Input) -> bool {
        let result = match input {
            Input::CellActivated(index) => self.select_cell(index).map(|_| ()),
            Input::HistoryActivated(move_index) => self.jump_to(move_index),
            Input::ToggleOrder => {
                self.toggle_sort_order();
                Ok(())
            }
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Input ignored");
                false
            }
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
