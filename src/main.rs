#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, parse_menu, play_out, ui, AiPlayer, CliPlayer, Coord, GameStatus, Mark,
    MenuChoice, MoveOutcome, PlayMode, Player, ScorePolicy, Session, DEFAULT_THINK_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ModeArg {
    /// Two people share the keyboard.
    Pvp,
    /// Play against the computer.
    Pvc,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum SymbolArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<ModeArg> for PlayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => PlayMode::TwoPlayer,
            ModeArg::Pvc => PlayMode::VsComputer,
        }
    }
}

#[cfg(feature = "std")]
impl From<SymbolArg> for Mark {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::X => Mark::X,
            SymbolArg::O => Mark::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = ModeArg::Pvc)]
        mode: ModeArg,
        #[arg(long, value_enum, default_value_t = SymbolArg::X, help = "Your symbol against the computer")]
        symbol: SymbolArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_THINK_MS, help = "Computer thinking pause in milliseconds")]
        think_ms: u64,
        #[arg(long, help = "Keep scores when switching mode or symbol")]
        keep_scores: bool,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_THINK_MS)]
        think_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            symbol,
            seed,
            think_ms,
            keep_scores,
        } => {
            let policy = if keep_scores {
                ScorePolicy::Keep
            } else {
                ScorePolicy::ResetOnChange
            };
            let mut session = Session::new(mode.into(), symbol.into(), policy);
            let mut rng = make_rng(seed);
            let mut human = CliPlayer::new();
            let think = Duration::from_millis(think_ms);
            loop {
                if !run_game(&mut session, &mut human, &mut rng, think)? {
                    break;
                }
                println!("[Enter] play again, m pvp|pvc switch mode, s x|o pick symbol, q quit");
                let Some(line) = human.read_line() else { break };
                match parse_menu(&line) {
                    Some(MenuChoice::Again) => session.restart(),
                    Some(MenuChoice::Mode(m)) => session.set_mode(m),
                    Some(MenuChoice::Symbol(s)) => session.set_human_mark(s),
                    Some(MenuChoice::Quit) => break,
                    None => {
                        println!("Unrecognised choice, starting a new game");
                        session.restart();
                    }
                }
            }
            println!("Final score: {}", ui::render_scores(&session));
        }
        Commands::Watch {
            games,
            seed,
            think_ms,
        } => {
            let mut rng = make_rng(seed);
            let mut session = Session::new(PlayMode::TwoPlayer, Mark::X, ScorePolicy::Keep);
            let mut x = AiPlayer::new();
            let mut o = AiPlayer::new();
            let think = Duration::from_millis(think_ms);
            let mut draws = 0u32;
            for game in 1..=games {
                println!("\nGame {}", game);
                session.restart();
                let status = play_out(
                    &mut session,
                    &mut x,
                    &mut o,
                    &mut rng,
                    &mut |s: &Session, mark: Mark, coord: Coord, _: MoveOutcome| {
                        std::thread::sleep(think);
                        println!("{}", ui::describe_move(mark, coord));
                        print!("{}", ui::render_board(s.engine()));
                    },
                )
                .map_err(|e| anyhow::anyhow!(e))?;
                if status == GameStatus::Draw {
                    draws += 1;
                }
                println!("{}", session.status_text());
            }
            println!(
                "\nAfter {} game(s): {}, draws {}",
                games,
                ui::render_scores(&session),
                draws
            );
        }
    }
    Ok(())
}

/// Play one game in the terminal. Returns `Ok(false)` when the human quits.
#[cfg(feature = "std")]
fn run_game(
    session: &mut Session,
    human: &mut CliPlayer,
    rng: &mut SmallRng,
    think: Duration,
) -> anyhow::Result<bool> {
    ui::print_session(session);
    while session.engine().is_in_progress() {
        if session.is_computer_turn() {
            std::thread::sleep(think);
            let (coord, outcome) = session
                .play_computer(rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            human.handle_opponent_move(coord, outcome);
        } else {
            let mark = session.engine().current_turn();
            let Some(coord) = human.select_move(rng, session.engine(), mark) else {
                return Ok(false);
            };
            match session.play(coord.0, coord.1) {
                Ok(outcome) => human.handle_move_result(coord, outcome),
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            }
        }
        ui::print_session(session);
    }
    Ok(true)
}
