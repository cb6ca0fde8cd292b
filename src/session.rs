//! Session configuration around a single game: play mode, the human's
//! symbol, the running score and the board itself.

use alloc::{format, string::String};
use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    ai,
    common::{Coord, GameStatus, Line, Mark, MoveError},
    game::GameEngine,
};

/// Who sits across the board from the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Two humans share the board.
    TwoPlayer,
    /// The human plays against the heuristic opponent.
    VsComputer,
}

/// What happens to the score tally when the mode or the human's symbol
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    #[default]
    ResetOnChange,
    Keep,
}

/// Wins per mark. Survives board restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreTally {
    pub x: u32,
    pub o: u32,
}

impl ScoreTally {
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on with `next` to move.
    Continue { next: Mark },
    Won { winner: Mark, line: Line },
    Draw,
}

/// Errors raised by session-level move handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The engine rejected the move.
    Move(MoveError),
    /// A human tried to move while the computer is to play.
    NotYourTurn,
    /// The computer was asked to move out of turn.
    NotComputerTurn,
    /// No empty cell is left for the computer.
    NoMoveAvailable,
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Move(e) => write!(f, "Move rejected: {}", e),
            SessionError::NotYourTurn => write!(f, "It is the computer's turn"),
            SessionError::NotComputerTurn => write!(f, "It is not the computer's turn"),
            SessionError::NoMoveAvailable => write!(f, "No empty cell is left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// One sitting at the board: configuration, scores and the current game.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    mode: PlayMode,
    human: Mark,
    scores: ScoreTally,
    policy: ScorePolicy,
}

impl Session {
    pub fn new(mode: PlayMode, human: Mark, policy: ScorePolicy) -> Self {
        Self {
            engine: GameEngine::new(),
            mode,
            human,
            scores: ScoreTally::default(),
            policy,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// The human's mark. Only meaningful against the computer.
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    pub fn computer_mark(&self) -> Option<Mark> {
        match self.mode {
            PlayMode::VsComputer => Some(self.human.opponent()),
            PlayMode::TwoPlayer => None,
        }
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    /// Start a new game on a fresh board, keeping the scores.
    pub fn restart(&mut self) {
        self.engine.reset();
    }

    /// Switch between two-player and vs-computer play and restart.
    pub fn set_mode(&mut self, mode: PlayMode) {
        info!("play mode set to {:?}", mode);
        self.mode = mode;
        self.apply_config_change();
    }

    /// Choose the human's symbol and restart.
    pub fn set_human_mark(&mut self, mark: Mark) {
        info!("human plays {}", mark);
        self.human = mark;
        self.apply_config_change();
    }

    fn apply_config_change(&mut self) {
        if self.policy == ScorePolicy::ResetOnChange {
            debug!("clearing scores");
            self.scores.clear();
        }
        self.restart();
    }

    /// Returns `true` when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.engine.is_in_progress() && self.computer_mark() == Some(self.engine.current_turn())
    }

    /// Play a human move at (row, col).
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, SessionError> {
        if self.is_computer_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.commit(row, col)
    }

    /// Let the heuristic opponent choose and play the computer's move.
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coord, MoveOutcome), SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let own = self.engine.current_turn();
        let (row, col) = ai::select_move(self.engine.board(), own, own.opponent(), rng)
            .ok_or(SessionError::NoMoveAvailable)?;
        let outcome = self.commit(row, col)?;
        Ok(((row, col), outcome))
    }

    /// Apply, evaluate, then advance the turn if the game goes on. A win is
    /// credited exactly once, here.
    fn commit(&mut self, row: usize, col: usize) -> Result<MoveOutcome, SessionError> {
        self.engine.apply_move(row, col)?;
        let status = self.engine.evaluate_status();
        let outcome = if let Some((winner, line)) = self.engine.winner() {
            self.scores.record_win(winner);
            info!("{} wins (X {} - O {})", winner, self.scores.x, self.scores.o);
            MoveOutcome::Won { winner, line }
        } else if status == GameStatus::Draw {
            info!("game drawn");
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue {
                next: self.engine.advance_turn()?,
            }
        };
        Ok(outcome)
    }

    /// Short status line for display, e.g. "X's turn".
    pub fn status_text(&self) -> String {
        match self.engine.status() {
            GameStatus::InProgress => format!("{}'s turn", self.engine.current_turn()),
            GameStatus::Won(mark) => format!("{} wins!", mark),
            GameStatus::Draw => String::from("It's a draw!"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlayMode::TwoPlayer, Mark::X, ScorePolicy::default())
    }
}
