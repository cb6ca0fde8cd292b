use log::debug;
use rand::rngs::SmallRng;

use crate::{
    common::{Coord, GameStatus, Mark},
    player::Player,
    session::{MoveOutcome, Session, SessionError},
};

/// Drive one game to completion with `x` and `o` choosing every move.
///
/// Moves go through [`Session::play`], so the session should be in
/// two-player mode. `observer` sees every committed move. Returns the final
/// status, or the first error raised by a rejected or missing move.
pub fn play_out(
    session: &mut Session,
    x: &mut dyn Player,
    o: &mut dyn Player,
    rng: &mut SmallRng,
    observer: &mut dyn FnMut(&Session, Mark, Coord, MoveOutcome),
) -> Result<GameStatus, SessionError> {
    while session.engine().is_in_progress() {
        let mark = session.engine().current_turn();
        let (mover, other): (&mut dyn Player, &mut dyn Player) = match mark {
            Mark::X => (&mut *x, &mut *o),
            Mark::O => (&mut *o, &mut *x),
        };
        let coord = mover
            .select_move(rng, session.engine(), mark)
            .ok_or(SessionError::NoMoveAvailable)?;
        let outcome = session.play(coord.0, coord.1)?;
        debug!("{} played {:?} -> {:?}", mark, coord, outcome);
        mover.handle_move_result(coord, outcome);
        other.handle_opponent_move(coord, outcome);
        observer(session, mark, coord, outcome);
    }
    Ok(session.engine().status())
}
