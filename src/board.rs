//! The 3×3 grid: cell storage, placement and line scanning.

use crate::common::{Cell, Coord, Line, Mark, MoveError};
use crate::config::{BOARD_SIZE, LINES};
use core::fmt;

/// Serializable board contents for snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Grid of cells. A cell, once marked, is never cleared; only a fresh
/// `Board` starts empty again.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at (row, col), or `None` when the coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Write `mark` into an empty cell.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MoveError::InvalidCoordinate { row, col })?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + Clone + '_ {
        (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c].is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// The three cells of `line`.
    pub fn line_cells(&self, line: &Line) -> [Cell; 3] {
        (*line).map(|(r, c)| self.cells[r][c])
    }

    /// First line (in `LINES` order) filled with a single mark.
    pub fn find_winning_line(&self) -> Option<(Mark, Line)> {
        LINES.iter().find_map(|line| match self.line_cells(line) {
            [Cell::Marked(a), Cell::Marked(b), Cell::Marked(c)] if a == b && b == c => {
                Some((a, *line))
            }
            _ => None,
        })
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = cell.mark().map_or('.', Mark::symbol);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { cells: b.cells }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board { cells: state.cells }
    }
}
