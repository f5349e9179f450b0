use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{simulate, Difficulty};

fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [games] [difficulty]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };
    let difficulty: Difficulty = match args.get(3) {
        Some(d) => d.parse().map_err(|e| anyhow::anyhow!("{}: {}", d, e))?,
        None => Difficulty::Unbeatable,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let tally = simulate(games, difficulty, difficulty, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "games": tally.games,
        "x_wins": tally.x_wins,
        "o_wins": tally.o_wins,
        "draws": tally.draws,
        "difficulty": difficulty.to_string(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
