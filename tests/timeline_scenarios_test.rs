//! Scenario tests for the move history and time-travel.

use strictly_timeline::{
    Board, GameStatus, GameView, MoveError, Player, Position, SortOrder, Square, Timeline,
};

fn play(moves: &[usize]) -> Timeline {
    let mut timeline = Timeline::new();
    for &index in moves {
        timeline.select_cell(index).expect("legal move");
    }
    timeline
}

#[test]
fn test_opening_sequence() {
    let mut timeline = Timeline::new();

    timeline.select_cell(0).expect("legal move");
    assert_eq!(timeline.current_board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(timeline.current_move(), 1);
    assert_eq!(timeline.status().to_string(), "Next player: O");

    timeline.select_cell(4).expect("legal move");
    assert_eq!(timeline.current_board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(timeline.current_move(), 2);

    timeline.select_cell(1).expect("legal move");
    assert_eq!(timeline.current_board().get(Position::TopCenter), Square::Occupied(Player::X));
    assert_eq!(timeline.current_move(), 3);

    timeline.select_cell(3).expect("legal move");
    assert_eq!(timeline.current_board().get(Position::MiddleLeft), Square::Occupied(Player::O));
    assert_eq!(timeline.current_move(), 4);

    timeline.select_cell(8).expect("legal move");
    assert_eq!(timeline.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(timeline.current_move(), 5);
    assert_eq!(timeline.history().len(), 6);
    // The centre belongs to O, so the diagonal is not complete.
    assert_eq!(timeline.status(), GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_diagonal_win() {
    let timeline = play(&[0, 3, 4, 5, 8]);
    assert_eq!(timeline.status(), GameStatus::Winner(Player::X));
    assert_eq!(timeline.status().to_string(), "Winner: X");
    assert_eq!(timeline.current_move(), 5);
    assert_eq!(timeline.history().len(), 6);
    assert_eq!(GameView::render(&timeline).highlighted(), vec![0, 4, 8]);
}

#[test]
fn test_selecting_after_win_is_ignored() {
    let mut timeline = play(&[0, 3, 4, 5, 8]);
    for index in [1, 2, 6, 7] {
        assert_eq!(timeline.select_cell(index), Err(MoveError::GameOver(Player::X)));
    }
    assert_eq!(timeline.history().len(), 6);
}

#[test]
fn test_jump_keeps_history() {
    let mut timeline = play(&[0, 4, 1, 3, 8]);
    timeline.jump_to(2).expect("in range");

    assert_eq!(timeline.current_move(), 2);
    assert_eq!(timeline.history().len(), 6);
    let board = timeline.current_board();
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(timeline.status(), GameStatus::NextPlayer(Player::X));
}

#[test]
fn test_selecting_after_jump_branches() {
    let mut timeline = play(&[0, 4, 1, 3, 8]);
    let prefix: Vec<Board> = timeline.history()[..3].to_vec();
    timeline.jump_to(2).expect("in range");

    timeline.select_cell(1).expect("legal move");

    assert_eq!(timeline.history().len(), 4);
    assert_eq!(timeline.current_move(), 3);
    assert_eq!(&timeline.history()[..3], prefix.as_slice());
    assert_eq!(
        timeline.current_board().get(Position::TopCenter),
        Square::Occupied(Player::X)
    );
    assert!(timeline.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_jump_to_winning_position_then_back() {
    let mut timeline = play(&[0, 3, 4, 5, 8]);
    timeline.jump_to(4).expect("in range");
    assert_eq!(timeline.status(), GameStatus::NextPlayer(Player::X));
    // Replaying a different move from the earlier position is allowed.
    timeline.select_cell(2).expect("legal move");
    assert_eq!(timeline.history().len(), 6);
    assert_eq!(timeline.status(), GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_draw_is_distinct_from_in_progress() {
    let mut timeline = play(&[0, 1, 2, 4, 3, 5, 7, 6]);
    assert_eq!(timeline.status(), GameStatus::NextPlayer(Player::X));
    timeline.select_cell(8).expect("legal move");
    assert_eq!(timeline.status(), GameStatus::Draw);
    assert_eq!(timeline.status().to_string(), "No winner");
}

#[test]
fn test_sort_toggle_leaves_game_untouched() {
    let mut timeline = play(&[0, 4]);
    timeline.jump_to(1).expect("in range");
    let before = (timeline.history().to_vec(), timeline.current_move());

    timeline.toggle_sort_order();

    assert_eq!(timeline.sort_order(), SortOrder::Descending);
    assert_eq!((timeline.history().to_vec(), timeline.current_move()), before);
}
