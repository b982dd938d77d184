//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Timeline};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark added by snapshot `i` belongs to X when `i` is odd and to O
/// when `i` is even, i.e. X plays from even pointers.
pub struct AlternatingTurnInvariant;

impl Invariant<Timeline> for AlternatingTurnInvariant {
    fn holds(timeline: &Timeline) -> bool {
        (1..timeline.history().len()).all(|i| {
            timeline
                .move_at(i)
                .is_some_and(|m| m.player == Player::for_move(i - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position, SortOrder};

    #[test]
    fn test_empty_timeline_holds() {
        assert!(AlternatingTurnInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_played_moves_hold() {
        let mut timeline = Timeline::new();
        for index in [0, 1, 2, 3] {
            timeline.select_cell(index).expect("legal move");
        }
        assert!(AlternatingTurnInvariant::holds(&timeline));
    }

    #[test]
    fn test_o_opening_violates() {
        let timeline = Timeline {
            history: vec![Board::new(), Board::new().with_mark(Position::Center, Player::O)],
            current_move: 1,
            sort_order: SortOrder::Ascending,
        };
        assert!(!AlternatingTurnInvariant::holds(&timeline));
    }
}
