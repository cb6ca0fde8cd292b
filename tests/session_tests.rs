use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    GameStatus, Mark, MoveError, MoveOutcome, PlayMode, ScorePolicy, ScoreTally, Session,
    SessionError,
};

fn x_wins_top_row(session: &mut Session) -> MoveOutcome {
    let mut last = None;
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        last = Some(session.play(r, c).unwrap());
    }
    last.unwrap()
}

#[test]
fn test_two_player_alternates_and_scores_win() {
    let mut session = Session::new(PlayMode::TwoPlayer, Mark::X, ScorePolicy::default());
    assert_eq!(session.status_text(), "X's turn");
    assert_eq!(session.play(1, 1).unwrap(), MoveOutcome::Continue { next: Mark::O });
    assert_eq!(session.status_text(), "O's turn");
    session.restart();

    let outcome = x_wins_top_row(&mut session);
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Mark::X,
            line: [(0, 0), (0, 1), (0, 2)]
        }
    );
    assert_eq!(session.scores(), ScoreTally { x: 1, o: 0 });
    assert_eq!(session.status_text(), "X wins!");

    // Further moves are rejected and do not score again.
    assert_eq!(
        session.play(2, 2).unwrap_err(),
        SessionError::Move(MoveError::GameAlreadyFinished)
    );
    assert_eq!(session.scores().wins(Mark::X), 1);
}

#[test]
fn test_draw_outcome() {
    let mut session = Session::default();
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
    let mut last = None;
    for (r, c) in moves {
        last = Some(session.play(r, c).unwrap());
    }
    assert_eq!(last, Some(MoveOutcome::Draw));
    assert_eq!(session.status_text(), "It's a draw!");
    assert_eq!(session.scores(), ScoreTally::default());
}

#[test]
fn test_restart_keeps_scores() {
    let mut session = Session::default();
    x_wins_top_row(&mut session);
    session.restart();
    assert!(session.engine().is_in_progress());
    assert_eq!(session.engine().moves_made(), 0);
    assert_eq!(session.scores().x, 1);
}

#[test]
fn test_config_change_resets_scores_by_default() {
    let mut session = Session::default();
    assert_eq!(session.policy(), ScorePolicy::ResetOnChange);
    x_wins_top_row(&mut session);
    session.set_mode(PlayMode::VsComputer);
    assert_eq!(session.scores(), ScoreTally::default());
    assert_eq!(session.engine().moves_made(), 0);

    session.set_mode(PlayMode::TwoPlayer);
    x_wins_top_row(&mut session);
    session.set_human_mark(Mark::X);
    assert_eq!(session.scores(), ScoreTally::default());
    assert!(session.engine().is_in_progress());
}

#[test]
fn test_keep_policy_preserves_scores() {
    let mut session = Session::new(PlayMode::TwoPlayer, Mark::X, ScorePolicy::Keep);
    x_wins_top_row(&mut session);
    session.set_mode(PlayMode::VsComputer);
    session.set_human_mark(Mark::O);
    assert_eq!(session.scores().x, 1);
    assert_eq!(session.engine().moves_made(), 0);
}

#[test]
fn test_computer_mark_depends_on_mode() {
    let mut session = Session::new(PlayMode::VsComputer, Mark::X, ScorePolicy::default());
    assert_eq!(session.computer_mark(), Some(Mark::O));
    session.set_human_mark(Mark::O);
    assert_eq!(session.computer_mark(), Some(Mark::X));
    session.set_mode(PlayMode::TwoPlayer);
    assert_eq!(session.computer_mark(), None);
    assert!(!session.is_computer_turn());
}

#[test]
fn test_human_cannot_move_on_computer_turn() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut session = Session::new(PlayMode::VsComputer, Mark::X, ScorePolicy::default());
    assert!(!session.is_computer_turn());
    assert_eq!(
        session.play_computer(&mut rng).unwrap_err(),
        SessionError::NotComputerTurn
    );

    session.play(0, 0).unwrap();
    assert!(session.is_computer_turn());
    assert_eq!(session.play(1, 1).unwrap_err(), SessionError::NotYourTurn);

    let (coord, outcome) = session.play_computer(&mut rng).unwrap();
    assert_eq!(coord, (1, 1));
    assert_eq!(outcome, MoveOutcome::Continue { next: Mark::X });
}

#[test]
fn test_computer_opens_when_human_plays_o() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = Session::new(PlayMode::VsComputer, Mark::O, ScorePolicy::default());
    assert!(session.is_computer_turn());
    assert_eq!(session.play(0, 0).unwrap_err(), SessionError::NotYourTurn);
    let (coord, _) = session.play_computer(&mut rng).unwrap();
    assert_eq!(coord, (1, 1));
    assert!(!session.is_computer_turn());
}

#[test]
fn test_computer_blocks_then_wins() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut session = Session::new(PlayMode::VsComputer, Mark::X, ScorePolicy::default());

    session.play(0, 0).unwrap();
    assert_eq!(session.play_computer(&mut rng).unwrap().0, (1, 1));

    session.play(0, 1).unwrap();
    assert_eq!(session.play_computer(&mut rng).unwrap().0, (0, 2));

    session.play(2, 0).unwrap();
    assert_eq!(session.play_computer(&mut rng).unwrap().0, (1, 0));

    session.play(2, 1).unwrap();
    let (coord, outcome) = session.play_computer(&mut rng).unwrap();
    assert_eq!(coord, (1, 2));
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Mark::O,
            line: [(1, 0), (1, 1), (1, 2)]
        }
    );
    assert_eq!(session.engine().status(), GameStatus::Won(Mark::O));
    assert_eq!(session.scores(), ScoreTally { x: 0, o: 1 });
    assert!(!session.is_computer_turn());
}

#[test]
fn test_rejected_human_move_keeps_turn() {
    let mut session = Session::default();
    session.play(1, 1).unwrap();
    assert_eq!(
        session.play(1, 1).unwrap_err(),
        SessionError::Move(MoveError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(
        session.play(5, 0).unwrap_err(),
        SessionError::Move(MoveError::InvalidCoordinate { row: 5, col: 0 })
    );
    assert_eq!(session.engine().current_turn(), Mark::O);
}
