// Fixed-priority move selection for the computer opponent.
// Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{Cell, Coord, Mark},
    config::{CENTER, CORNERS, LINES},
};
use log::debug;
use rand::Rng;

/// Which rule of the cascade produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Completes a line for the moving mark.
    Win,
    /// Fills the gap in the opponent's two-in-a-row.
    Block,
    /// Takes the center.
    Center,
    /// Random free corner.
    Corner,
    /// Random free cell.
    Any,
}

/// Find the empty cell that would complete a line holding two `mark`s.
/// Lines are scanned in `LINES` order and the first hit is returned.
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<Coord> {
    for line in LINES.iter() {
        let cells = board.line_cells(line);
        let own = cells.iter().filter(|c| **c == Cell::Marked(mark)).count();
        let empty = cells.iter().position(|c| c.is_empty());
        if let (2, Some(idx)) = (own, empty) {
            return Some(line[idx]);
        }
    }
    None
}

/// Pick uniformly among the coordinates yielded by `candidates`.
fn choose<R: Rng + ?Sized, I>(rng: &mut R, candidates: I) -> Option<Coord>
where
    I: Iterator<Item = Coord> + Clone,
{
    let n = candidates.clone().count();
    if n == 0 {
        return None;
    }
    let k = rng.random_range(0..n);
    candidates.into_iter().nth(k)
}

/// Select a move for `own` and report which rule chose it.
///
/// Returns `None` only when the board has no empty cell.
pub fn select_move_with_reason<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<(Coord, MoveReason)> {
    let choice = if let Some(c) = find_completing_cell(board, own) {
        Some((c, MoveReason::Win))
    } else if let Some(c) = find_completing_cell(board, opponent) {
        Some((c, MoveReason::Block))
    } else if board.is_empty_at(CENTER.0, CENTER.1) {
        Some((CENTER, MoveReason::Center))
    } else if let Some(c) = choose(
        rng,
        CORNERS.iter().copied().filter(|&(r, c)| board.is_empty_at(r, c)),
    ) {
        Some((c, MoveReason::Corner))
    } else {
        choose(rng, board.empty_cells()).map(|c| (c, MoveReason::Any))
    };
    if let Some((coord, reason)) = choice {
        debug!("{} chooses {:?} ({:?})", own, coord, reason);
    }
    choice
}

/// Select a move for `own` against `opponent`.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<Coord> {
    select_move_with_reason(board, own, opponent, rng).map(|(coord, _)| coord)
}
