//! Render tree derived from a [`Timeline`].
//!
//! [`GameView::render`] is a pure function of the timeline: the same
//! state always yields the same view. Front-ends draw the view and feed
//! [`Input`](super::Input) events back into the timeline.

use super::rules::winning_line;
use super::status::GameStatus;
use super::timeline::{SortOrder, Timeline};
use super::{Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One cell of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct CellView {
    /// Where the cell sits on the board.
    position: Position,
    /// Mark shown in the cell.
    square: Square,
    /// True when the cell belongs to the winning line.
    highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    move_index: usize,
    /// Label such as `Go to move #3 (0,1)X`.
    description: String,
    /// False for the newest entry, which is shown as plain text.
    interactive: bool,
    /// True when this entry's snapshot is the one displayed.
    current: bool,
}

/// Status line of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StatusView {
    /// Structured status.
    status: GameStatus,
    /// Display text, e.g. `Next player: O`.
    text: String,
}

/// Sort control of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SortIndicator {
    /// Current order.
    order: SortOrder,
    /// Arrow shown on the control.
    symbol: String,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Cells in row-major order.
    cells: [CellView; 9],
    /// Status line.
    status: StatusView,
    /// Sort control.
    sort_indicator: SortIndicator,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Derives the view of `timeline`.
    #[instrument(skip(timeline), fields(current_move = timeline.current_move()))]
    pub fn render(timeline: &Timeline) -> Self {
        let board = timeline.current_board();
        let line = winning_line(board);
        let cells = Position::ALL.map(|pos| {
            CellView::new(pos, board.get(pos), line.is_some_and(|l| l.contains(pos)))
        });

        let status = timeline.status();
        let status = StatusView {
            status,
            text: status.to_string(),
        };

        let sort_order = timeline.sort_order();
        let sort_indicator = SortIndicator {
            order: sort_order,
            symbol: sort_order.indicator().to_string(),
        };

        let last = timeline.history().len() - 1;
        let mut moves: Vec<MoveEntry> = (0..=last)
            .map(|move_index| {
                MoveEntry::new(
                    move_index,
                    describe_move(timeline, move_index),
                    move_index != last,
                    move_index == timeline.current_move(),
                )
            })
            .collect();
        if sort_order == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            cells,
            status,
            sort_indicator,
            moves,
        }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }

    /// Indices of highlighted cells, in board order.
    pub fn highlighted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.position.to_index())
            .collect()
    }
}

/// Label of history entry `move_index`.
///
/// Move 0 is the game start; any other move is described by the cell it
/// marked, as `(row,column)` followed by the mark.
#[instrument(skip(timeline))]
pub fn describe_move(timeline: &Timeline, move_index: usize) -> String {
    match timeline.move_at(move_index) {
        Some(action) => format!(
            "Go to move #{} ({},{}){}",
            move_index,
            action.position.row(),
            action.position.column(),
            action.player
        ),
        None => "Go to game start".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn play(moves: &[usize]) -> Timeline {
        let mut timeline = Timeline::new();
        for &index in moves {
            timeline.select_cell(index).expect("legal move");
        }
        timeline
    }

    #[test]
    fn test_start_entry_is_plain_text_on_fresh_game() {
        let view = GameView::render(&Timeline::new());
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].description(), "Go to game start");
        assert!(!view.moves()[0].interactive());
        assert!(view.moves()[0].current());
        assert_eq!(view.status().text(), "Next player: X");
        assert_eq!(view.sort_indicator().symbol(), "↑");
    }

    #[test]
    fn test_descriptions_use_row_and_column() {
        let timeline = play(&[0, 5, 7]);
        assert_eq!(describe_move(&timeline, 1), "Go to move #1 (0,0)X");
        assert_eq!(describe_move(&timeline, 2), "Go to move #2 (1,2)O");
        assert_eq!(describe_move(&timeline, 3), "Go to move #3 (2,1)X");
    }

    #[test]
    fn test_only_latest_entry_is_not_interactive() {
        let mut timeline = play(&[0, 5, 7]);
        timeline.jump_to(1).expect("in range");
        let view = GameView::render(&timeline);
        let interactive: Vec<bool> = view.moves().iter().map(|m| *m.interactive()).collect();
        assert_eq!(interactive, vec![true, true, true, false]);
        let current: Vec<usize> = view
            .moves()
            .iter()
            .filter(|m| *m.current())
            .map(|m| *m.move_index())
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_descending_order_reverses_entries() {
        let mut timeline = play(&[0, 5]);
        timeline.toggle_sort_order();
        let view = GameView::render(&timeline);
        let order: Vec<usize> = view.moves().iter().map(|m| *m.move_index()).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(view.sort_indicator().symbol(), "↓");
        assert!(!view.moves()[0].interactive());
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let timeline = play(&[2, 0, 4, 1, 6]);
        let view = GameView::render(&timeline);
        assert_eq!(view.highlighted(), vec![2, 4, 6]);
        assert_eq!(*view.status().status(), GameStatus::Winner(Player::X));
        assert!(*view.cell(Position::Center).highlighted());
        assert!(!*view.cell(Position::TopLeft).highlighted());
    }

    #[test]
    fn test_render_is_repeatable() {
        let timeline = play(&[4, 0]);
        assert_eq!(GameView::render(&timeline), GameView::render(&timeline));
    }
}
