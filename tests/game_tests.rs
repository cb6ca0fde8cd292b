use tictactoe::{Board, Cell, GameEngine, GameStatus, Mark, MoveError, BOARD_SIZE};

/// Apply a move the way a front end does: place, evaluate, then advance if
/// the game goes on.
fn play(engine: &mut GameEngine, row: usize, col: usize) -> GameStatus {
    engine.apply_move(row, col).unwrap();
    let status = engine.evaluate_status();
    if status == GameStatus::InProgress {
        engine.advance_turn().unwrap();
    }
    status
}

#[test]
fn test_new_engine_is_empty() {
    let engine = GameEngine::new();
    assert!(engine.is_in_progress());
    assert_eq!(engine.current_turn(), Mark::X);
    assert_eq!(engine.winning_line(), None);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(engine.cell_at(r, c), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_each_cell_accepts_exactly_one_move() {
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let mut engine = GameEngine::new();
            engine.apply_move(r, c).unwrap();
            assert_eq!(engine.cell_at(r, c), Some(Cell::Marked(Mark::X)));

            let before = engine.state();
            assert_eq!(
                engine.apply_move(r, c).unwrap_err(),
                MoveError::CellOccupied { row: r, col: c }
            );
            assert_eq!(engine.state(), before);
        }
    }
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    let before = engine.state();
    for (r, c) in [(3, 0), (0, 3), (3, 3), (usize::MAX, 0), (0, usize::MAX)] {
        assert_eq!(
            engine.apply_move(r, c).unwrap_err(),
            MoveError::InvalidCoordinate { row: r, col: c }
        );
        assert_eq!(engine.cell_at(r, c), None);
    }
    assert_eq!(engine.state(), before);
}

#[test]
fn test_apply_move_does_not_advance_turn() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, 0).unwrap();
    assert_eq!(engine.current_turn(), Mark::X);
    assert_eq!(engine.advance_turn().unwrap(), Mark::O);
    engine.apply_move(1, 1).unwrap();
    assert_eq!(engine.cell_at(1, 1), Some(Cell::Marked(Mark::O)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut engine = GameEngine::new();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    for (i, &(r, c)) in moves.iter().enumerate() {
        let status = play(&mut engine, r, c);
        if i + 1 < moves.len() {
            assert_eq!(status, GameStatus::InProgress, "move {}", i);
        } else {
            assert_eq!(status, GameStatus::Draw);
        }
    }
    assert!(!engine.is_in_progress());
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine.moves_made(), 9);
}

#[test]
fn test_completing_top_row_wins() {
    let mut engine = GameEngine::new();
    play(&mut engine, 0, 0);
    play(&mut engine, 1, 0);
    play(&mut engine, 0, 1);
    play(&mut engine, 1, 1);
    assert_eq!(engine.cell_at(0, 2), Some(Cell::Empty));

    let status = play(&mut engine, 0, 2);
    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(engine.winning_line(), Some([(0, 0), (0, 1), (0, 2)]));
    assert_eq!(engine.winner(), Some((Mark::X, [(0, 0), (0, 1), (0, 2)])));
}

#[test]
fn test_scenario_x_wins_top_row_against_center_and_corner() {
    let mut engine = GameEngine::new();
    for (r, c) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
        assert_eq!(play(&mut engine, r, c), GameStatus::InProgress);
    }
    assert_eq!(play(&mut engine, 0, 2), GameStatus::Won(Mark::X));
    assert_eq!(engine.winning_line(), Some([(0, 0), (0, 1), (0, 2)]));
    // Winner keeps the turn: it is never handed over after a win.
    assert_eq!(engine.current_turn(), Mark::X);
}

#[test]
fn test_finished_game_rejects_moves_and_turn_changes() {
    let mut engine = GameEngine::new();
    for (r, c) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        play(&mut engine, r, c);
    }
    let before = engine.state();
    assert_eq!(
        engine.apply_move(2, 0).unwrap_err(),
        MoveError::GameAlreadyFinished
    );
    assert_eq!(
        engine.advance_turn().unwrap_err(),
        MoveError::GameAlreadyFinished
    );
    assert_eq!(engine.evaluate_status(), GameStatus::Won(Mark::X));
    assert_eq!(engine.evaluate_status(), GameStatus::Won(Mark::X));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_reads_are_idempotent() {
    let mut engine = GameEngine::new();
    play(&mut engine, 1, 1);
    play(&mut engine, 0, 2);
    let first = (
        engine.cell_at(1, 1),
        engine.cell_at(0, 2),
        engine.current_turn(),
        engine.is_in_progress(),
    );
    for _ in 0..5 {
        let again = (
            engine.cell_at(1, 1),
            engine.cell_at(0, 2),
            engine.current_turn(),
            engine.is_in_progress(),
        );
        assert_eq!(again, first);
    }
}

#[test]
fn test_reset_after_win_and_draw() {
    let mut engine = GameEngine::new();
    for (r, c) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        play(&mut engine, r, c);
    }
    engine.reset();
    assert_eq!(engine.state(), GameEngine::new().state());
    assert_eq!(engine.winning_line(), None);

    for (r, c) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        play(&mut engine, r, c);
    }
    assert_eq!(engine.status(), GameStatus::Draw);
    engine.reset();
    assert!(engine.is_in_progress());
    assert_eq!(engine.current_turn(), Mark::X);
    assert_eq!(engine.moves_made(), 0);
}

#[test]
fn test_line_scan_prefers_rows_then_columns_then_diagonals() {
    // Row 0 and column 0 both complete.
    let mut board = Board::new();
    for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
        board.place(r, c, Mark::X).unwrap();
    }
    assert_eq!(
        board.find_winning_line(),
        Some((Mark::X, [(0, 0), (0, 1), (0, 2)]))
    );

    // Column 2 and the anti-diagonal both complete.
    let mut board = Board::new();
    for (r, c) in [(0, 2), (1, 2), (2, 2), (1, 1), (2, 0)] {
        board.place(r, c, Mark::O).unwrap();
    }
    assert_eq!(
        board.find_winning_line(),
        Some((Mark::O, [(0, 2), (1, 2), (2, 2)]))
    );

    // Both diagonals complete.
    let mut board = Board::new();
    for (r, c) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)] {
        board.place(r, c, Mark::X).unwrap();
    }
    assert_eq!(
        board.find_winning_line(),
        Some((Mark::X, [(0, 0), (1, 1), (2, 2)]))
    );
}

#[test]
fn test_board_place_never_overwrites() {
    let mut board = Board::new();
    board.place(2, 1, Mark::O).unwrap();
    assert_eq!(
        board.place(2, 1, Mark::X).unwrap_err(),
        MoveError::CellOccupied { row: 2, col: 1 }
    );
    assert_eq!(board.get(2, 1), Some(Cell::Marked(Mark::O)));
    assert_eq!(board.count(Mark::O), 1);
    assert_eq!(board.count(Mark::X), 0);
    assert_eq!(board.empty_cells().count(), 8);
}
