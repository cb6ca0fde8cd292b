use crate::{
    ai,
    common::{Coord, Mark},
    game::GameEngine,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player driven by the fixed-priority heuristic.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        engine: &GameEngine,
        mark: Mark,
    ) -> Option<Coord> {
        if !engine.is_in_progress() {
            return None;
        }
        ai::select_move(engine.board(), mark, mark.opponent(), rng)
    }
}
