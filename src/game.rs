use log::debug;

use crate::{
    board::{Board, BoardState},
    common::{Cell, GameStatus, Line, Mark, MoveError},
};

/// Serializable overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub turn: Mark,
    pub status: GameStatus,
}

/// Game state machine: the board, whose turn it is, and whether the game
/// has finished.
///
/// A move is split into three calls so the caller can attribute a win to
/// the mark that just moved: [`apply_move`](Self::apply_move) writes the
/// mark, [`evaluate_status`](Self::evaluate_status) detects a win or draw,
/// and [`advance_turn`](Self::advance_turn) hands the turn over while the
/// game is still in progress.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl GameEngine {
    /// Create an engine with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Replace the board with a fresh one and return to `InProgress`.
    pub fn reset(&mut self) {
        debug!("resetting board");
        *self = Self::new();
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place the current turn's mark at (row, col). The turn is not advanced.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyFinished);
        }
        self.board.place(row, col, self.turn)?;
        debug!("{} placed at ({}, {})", self.turn, row, col);
        Ok(())
    }

    /// Hand the turn to the other mark. Rejected once the game has ended.
    pub fn advance_turn(&mut self) -> Result<Mark, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyFinished);
        }
        self.turn = self.turn.opponent();
        Ok(self.turn)
    }

    /// Scan for a completed line or a full board and update the status.
    ///
    /// A terminal status is sticky: later calls return it unchanged.
    pub fn evaluate_status(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        if let Some((mark, line)) = self.board.find_winning_line() {
            debug!("{} completed line {:?}", mark, line);
            self.status = GameStatus::Won(mark);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            debug!("board full, game drawn");
            self.status = GameStatus::Draw;
        }
        self.status
    }

    /// Current status without re-evaluating the board.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line that won the game, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(_) => self.winning_line,
            _ => None,
        }
    }

    /// Winning mark together with its line.
    pub fn winner(&self) -> Option<(Mark, Line)> {
        match self.status {
            GameStatus::Won(mark) => self.winning_line.map(|line| (mark, line)),
            _ => None,
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Number of marks on the board.
    pub fn moves_made(&self) -> usize {
        self.board.count(Mark::X) + self.board.count(Mark::O)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            turn: self.turn,
            status: self.status,
        }
    }

    /// Restore an engine from a previously saved state. Status and winning
    /// line are derived from the board; the saved status is not trusted.
    pub fn from_state(state: GameState) -> Self {
        let board = Board::from(state.board);
        let (status, winning_line) = match board.find_winning_line() {
            Some((mark, line)) => (GameStatus::Won(mark), Some(line)),
            None if board.is_full() => (GameStatus::Draw, None),
            None => (GameStatus::InProgress, None),
        };
        if status != state.status {
            debug!("snapshot status {:?} replaced by {:?}", state.status, status);
        }
        Self {
            board,
            turn: state.turn,
            status,
            winning_line,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
