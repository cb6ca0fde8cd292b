#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai,
    common::{Coord, Mark},
    game::GameEngine,
    session::{MoveOutcome, PlayMode},
    ui::coord_to_string,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// A line of input typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Coord),
    Quit,
}

/// Parse `B2`-style (column letter, 1-based row) or `2 2` / `2,2`-style
/// (1-based row and column) coordinates. Range checking is left to the
/// engine, so `D1` parses to `(0, 3)`.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty());
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let row: usize = a.parse().ok()?;
        let col: usize = b.parse().ok()?;
        if row == 0 || col == 0 {
            return None;
        }
        return Some((row - 1, col - 1));
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Parse one prompt line. Returns `None` for unrecognised input.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Input::Quit);
    }
    parse_coord(line).map(Input::Move)
}

/// Choice offered between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Again,
    Mode(PlayMode),
    Symbol(Mark),
    Quit,
}

/// Parse the between-games prompt: empty or `y` to play again, `m pvp` /
/// `m pvc` to switch mode, `s x` / `s o` to pick a symbol, `q` to quit.
pub fn parse_menu(line: &str) -> Option<MenuChoice> {
    let line = line.trim().to_ascii_lowercase();
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (None, _, _) | (Some("y"), None, _) => Some(MenuChoice::Again),
        (Some("q" | "quit"), None, _) => Some(MenuChoice::Quit),
        (Some("m" | "mode"), Some("pvp"), None) => Some(MenuChoice::Mode(PlayMode::TwoPlayer)),
        (Some("m" | "mode"), Some("pvc"), None) => Some(MenuChoice::Mode(PlayMode::VsComputer)),
        (Some("s" | "symbol"), Some("x"), None) => Some(MenuChoice::Symbol(Mark::X)),
        (Some("s" | "symbol"), Some("o"), None) => Some(MenuChoice::Symbol(Mark::O)),
        _ => None,
    }
}

/// Interactive player reading moves from a line-oriented source.
pub struct CliPlayer<R = io::StdinLock<'static>> {
    input: R,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> CliPlayer<R> {
    /// Read moves from `input` instead of stdin.
    pub fn with_input(input: R) -> Self {
        Self { input }
    }

    /// Read one raw line; `None` at end of input.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        engine: &GameEngine,
        mark: Mark,
    ) -> Option<Coord> {
        // Hints draw from a copy so the shared stream is left as it was.
        let mut hint_rng = rng.clone();
        let suggestion = ai::select_move(engine.board(), mark, mark.opponent(), &mut hint_rng);
        loop {
            match suggestion {
                Some((sr, sc)) => std::print!(
                    "{} to move (e.g. B2, q to quit) [{}]: ",
                    mark,
                    coord_to_string(sr, sc)
                ),
                None => std::print!("{} to move (e.g. B2, q to quit): ", mark),
            }
            let _ = io::stdout().flush();
            let line = self.read_line()?;
            if line.trim().is_empty() {
                if suggestion.is_some() {
                    return suggestion;
                }
                continue;
            }
            match parse_input(&line) {
                Some(Input::Move(coord)) => return Some(coord),
                Some(Input::Quit) => return None,
                None => std::println!("Invalid coordinate"),
            }
        }
    }

    fn handle_opponent_move(&mut self, coord: Coord, _outcome: MoveOutcome) {
        std::println!("Opponent played {}", coord_to_string(coord.0, coord.1));
    }
}
