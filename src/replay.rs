//! Headless front-end: feed inputs into a timeline and return its view.

use crate::games::tictactoe::{GameView, Input, SortOrder, Timeline};
use tracing::{debug, info, instrument};

/// Applies `moves` as cell activations, then an optional jump, and renders.
///
/// Invalid inputs are skipped exactly as the terminal UI skips them.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, sort_order: SortOrder) -> GameView {
    let mut timeline = Timeline::with_sort_order(sort_order);
    let inputs = moves
        .iter()
        .map(|&index| Input::CellActivated(index))
        .chain(jump.map(Input::HistoryActivated));

    let applied = inputs
        .filter(|input| {
            let changed = timeline.apply(*input);
            debug!(?input, changed, "Replayed input");
            changed
        })
        .count();

    info!(
        applied,
        history_len = timeline.history().len(),
        current_move = timeline.current_move(),
        "Replay finished"
    );
    GameView::render(&timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_invalid_moves() {
        let view = replay(&[4, 4, 12, 0], None, SortOrder::Ascending);
        assert_eq!(view.moves().len(), 3);
        assert_eq!(view.status().text(), "Next player: X");
    }

    #[test]
    fn test_replay_with_jump() {
        let view = replay(&[0, 4, 1], Some(1), SortOrder::Descending);
        assert_eq!(view.moves().len(), 4);
        assert_eq!(view.status().text(), "Next player: O");
        assert_eq!(*view.moves()[0].move_index(), 3);
    }
}
