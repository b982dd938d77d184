//! History consistency invariant: snapshot index matches occupied squares.

use super::super::Timeline;
use super::Invariant;

/// Invariant: snapshot `i` carries exactly `i` marks, and the pointer
/// selects an existing snapshot.
pub struct HistoryConsistentInvariant;

impl Invariant<Timeline> for HistoryConsistentInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();
        timeline.current_move() < history.len()
            && history
                .iter()
                .enumerate()
                .all(|(i, board)| board.occupied_count() == i)
    }

    fn description() -> &'static str {
        "Snapshot index matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position, SortOrder};

    #[test]
    fn test_empty_timeline_holds() {
        assert!(HistoryConsistentInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut timeline = Timeline::new();
        // X O X / X O O / O X X ends in a draw.
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            timeline.select_cell(index).expect("legal move");
        }
        assert_eq!(timeline.history().len(), 10);
        assert!(HistoryConsistentInvariant::holds(&timeline));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let timeline = Timeline {
            history: vec![Board::new()],
            current_move: 1,
            sort_order: SortOrder::Ascending,
        };
        assert!(!HistoryConsistentInvariant::holds(&timeline));
    }

    #[test]
    fn test_extra_mark_violates() {
        let timeline = Timeline {
            history: vec![Board::new().with_mark(Position::Center, Player::X)],
            current_move: 0,
            sort_order: SortOrder::Ascending,
        };
        assert!(!HistoryConsistentInvariant::holds(&timeline));
    }
}
