use crate::common::{Coord, Line};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const CENTER: Coord = (1, 1);
pub const CORNERS: [Coord; 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// All eight lines, scanned in this order everywhere a line search happens:
/// rows top to bottom, columns left to right, then the main diagonal and the
/// anti-diagonal.
pub const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Pause before the computer answers a human move, in milliseconds.
pub const DEFAULT_THINK_MS: u64 = 500;
