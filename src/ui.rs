#![cfg(feature = "std")]

use std::string::String;

use crate::{
    common::{Coord, Mark},
    config::BOARD_SIZE,
    game::GameEngine,
    session::{PlayMode, Session},
};

/// Format a coordinate as column letter plus 1-based row, e.g. `B2`.
/// Columns past `Z` print as `?`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = u8::try_from(c)
        .ok()
        .filter(|&c| c < 26)
        .map_or('?', |c| (b'A' + c) as char);
    std::format!("{}{}", col, r.saturating_add(1))
}

/// Draw the grid with column letters and row numbers. Cells of the winning
/// line are wrapped in brackets.
pub fn render_board(engine: &GameEngine) -> String {
    let winning = engine.winning_line();
    let mut out = String::from("  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        out.push_str(&std::format!("  {} ", ch));
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        out.push_str(&std::format!("{:2} ", r + 1));
        for c in 0..BOARD_SIZE {
            let ch = engine
                .cell_at(r, c)
                .and_then(|cell| cell.mark())
                .map_or('.', |m| m.symbol());
            let highlighted = winning.is_some_and(|line| line.contains(&(r, c)));
            if highlighted {
                out.push_str(&std::format!("[{}]", ch));
            } else {
                out.push_str(&std::format!(" {} ", ch));
            }
            if c + 1 < BOARD_SIZE {
                out.push('|');
            }
        }
        out.push('\n');
        if r + 1 < BOARD_SIZE {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// Scoreboard line, naming who plays which mark against the computer.
pub fn render_scores(session: &Session) -> String {
    let scores = session.scores();
    match session.mode() {
        PlayMode::TwoPlayer => std::format!("X {}  -  {} O", scores.x, scores.o),
        PlayMode::VsComputer => {
            let human = session.human_mark();
            let computer = human.opponent();
            std::format!(
                "You ({}) {}  -  {} Computer ({})",
                human,
                scores.wins(human),
                scores.wins(computer),
                computer
            )
        }
    }
}

/// Print board, scores and status line.
pub fn print_session(session: &Session) {
    std::println!();
    std::print!("{}", render_board(session.engine()));
    std::println!("{}", render_scores(session));
    std::println!("{}", session.status_text());
}

/// Human-readable label for a move, e.g. `O -> B2`.
pub fn describe_move(mark: Mark, coord: Coord) -> String {
    std::format!("{} -> {}", mark, coord_to_string(coord.0, coord.1))
}
