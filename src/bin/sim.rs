use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{
    init_logging, play_out, AiPlayer, Coord, GameStatus, Mark, MoveOutcome, PlayMode, ScorePolicy,
    Session,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(PlayMode::TwoPlayer, Mark::X, ScorePolicy::Keep);
    let mut x = AiPlayer::new();
    let mut o = AiPlayer::new();

    let mut results = Vec::new();
    let mut draws = 0u32;
    for _ in 0..games {
        session.restart();
        let mut moves = 0usize;
        let status = play_out(
            &mut session,
            &mut x,
            &mut o,
            &mut rng,
            &mut |_: &Session, _: Mark, _: Coord, _: MoveOutcome| moves += 1,
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        let result = match status {
            GameStatus::Won(mark) => mark.to_string(),
            GameStatus::Draw => {
                draws += 1;
                "draw".to_string()
            }
            GameStatus::InProgress => return Err(anyhow::anyhow!("game stopped early")),
        };
        results.push(json!({ "result": result, "moves": moves }));
    }

    let scores = session.scores();
    let winner = if scores.x > scores.o {
        "X"
    } else if scores.o > scores.x {
        "O"
    } else {
        "draw"
    };

    let summary = json!({
        "games": results,
        "x_wins": scores.x,
        "o_wins": scores.o,
        "draws": draws,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
