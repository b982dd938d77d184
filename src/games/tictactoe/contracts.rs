//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::check_winner;
use super::timeline::Timeline;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Selection Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The index names a cell on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves `index` to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::CellOutOfBounds(index))
    }
}

/// Precondition: The displayed snapshot has no winning line.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with the winner's mark if a line is complete.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), MoveError> {
        match check_winner(timeline.current_board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if `pos` already carries a mark on the displayed snapshot.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), MoveError> {
        if timeline.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a selection is legal if the cell exists, the game
/// is not decided and the square is free.
pub struct LegalSelection;

impl LegalSelection {
    /// Validates all preconditions for a selection.
    #[instrument(skip(timeline))]
    pub fn check(index: usize, timeline: &Timeline) -> Result<(), MoveError> {
        let pos = CellInBounds::check(index)?;
        GameNotOver::check(timeline)?;
        SquareIsEmpty::check(pos, timeline)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Selection Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for cell selections.
///
/// Preconditions:
/// - Cell index is on the board
/// - Displayed snapshot has no winner
/// - Square is empty
///
/// Postconditions:
/// - All [`TimelineInvariants`] hold
/// - History grew to exactly `before.current_move + 2` entries
pub struct SelectionContract;

impl Contract<Timeline, usize> for SelectionContract {
    fn pre(timeline: &Timeline, index: &usize) -> Result<(), MoveError> {
        LegalSelection::check(*index, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected = before.current_move() + 2;
        if after.history().len() != expected || !after.is_latest() {
            warn!(
                expected,
                actual = after.history().len(),
                "History not truncated at pointer"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Expected {} snapshots after selection, found {}",
                expected,
                after.history().len()
            )));
        }

        Ok(())
    }
}
