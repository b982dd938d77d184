//! Application state and key handling.

use crate::games::tictactoe::{GameView, Input, MoveEntry, Position, SortOrder, Timeline};
use crossterm::event::KeyCode;
use derive_getters::Getters;
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Everything except the cursor, focus and list selection lives in the
/// [`Timeline`]; the view is re-derived from it on every frame.
#[derive(Debug, Getters)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected_entry: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application whose move list starts in `sort_order`.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            timeline: Timeline::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_entry: 0,
            should_quit: false,
        }
    }

    /// Derives the render tree for the current state.
    pub fn view(&self) -> GameView {
        GameView::render(&self.timeline)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(position) = digit_cell(key).and_then(Position::from_index) {
            self.cursor = position;
            self.dispatch(Input::CellActivated(position.to_index()));
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_order(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Input::CellActivated(self.cursor.to_index()));
            }
            key => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.timeline.history().len() - 1;
        match key {
            KeyCode::Up => self.selected_entry = self.selected_entry.saturating_sub(1),
            KeyCode::Down => self.selected_entry = (self.selected_entry + 1).min(last),
            KeyCode::Home => self.selected_entry = 0,
            KeyCode::End => self.selected_entry = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.selected() {
                    // The newest entry is plain text.
                    if *entry.interactive() {
                        self.dispatch(Input::HistoryActivated(*entry.move_index()));
                    }
                }
            }
            _ => {}
        }
    }

    /// The move-list entry under the selection.
    pub fn selected(&self) -> Option<MoveEntry> {
        self.view().moves().get(self.selected_entry).cloned()
    }

    fn toggle_order(&mut self) {
        self.dispatch(Input::ToggleOrder);
        // Keep the selection on the same move after the list flips.
        let last = self.timeline.history().len() - 1;
        self.selected_entry = last - self.selected_entry.min(last);
    }

    fn dispatch(&mut self, input: Input) {
        if self.timeline.apply(input) {
            let last = self.timeline.history().len() - 1;
            self.selected_entry = self.selected_entry.min(last);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
