use crate::{
    common::{Coord, Mark},
    game::GameEngine,
    session::MoveOutcome,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose a cell for `mark` on the current board. `None` means the
    /// player has no move to offer (full board, or a human quitting).
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        engine: &GameEngine,
        mark: Mark,
    ) -> Option<Coord>;

    /// Inform the player of the outcome of its own move.
    fn handle_move_result(&mut self, _coord: Coord, _outcome: MoveOutcome) {}

    /// Inform the player of a move made by the other side.
    fn handle_opponent_move(&mut self, _coord: Coord, _outcome: MoveOutcome) {}
}
