#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    best_move, evaluate_moves, init_logging_with, print_board, simulate, verbosity_level, Board,
    CliPlayer, Difficulty, GameStatus, Mark, Player, Session,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides TICTACTOE_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the engine in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Mark::X, help = "Your mark; X moves first")]
        mark: Mark,
        #[arg(long, value_enum, default_value_t = Difficulty::Unbeatable)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause before each engine move, in milliseconds")]
        think_ms: u64,
        #[arg(long, help = "Hide the suggested move in the prompt")]
        no_hints: bool,
    },
    /// Score every legal move on a board and show the engine's choice.
    Suggest {
        #[arg(long, help = "Nine cells using X, O and '.', e.g. \"XX.OO....\"")]
        board: String,
        #[arg(long, value_enum, help = "Side to move; inferred from the mark counts if omitted")]
        mark: Option<Mark>,
        #[arg(long, value_enum, default_value_t = Difficulty::Unbeatable)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run engine-versus-engine games and print a JSON summary.
    Sim {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, value_enum, default_value_t = Difficulty::Unbeatable)]
        difficulty_x: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Unbeatable)]
        difficulty_o: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
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
    let cli = Cli::parse();
    init_logging_with(verbosity_level(cli.verbose));

    match cli.command {
        Commands::Play {
            mark,
            difficulty,
            seed,
            think_ms,
            no_hints,
        } => {
            let rng = make_rng(seed);
            let human = if no_hints {
                CliPlayer::without_hints()
            } else {
                CliPlayer::new()
            };
            run_session(Session::new(mark, difficulty), human, rng, think_ms)?;
        }
        Commands::Suggest {
            board,
            mark,
            difficulty,
            seed,
        } => {
            let board = board.parse::<Board>().map_err(|e| anyhow::anyhow!(e))?;
            let mark = mark.unwrap_or_else(|| board.next_to_move());
            print_board(&board, board.winning_line());
            if let Some(winner) = board.winner() {
                println!("{} has already won.", winner);
                return Ok(());
            }
            for (index, score) in evaluate_moves(&board, mark, mark.opponent()) {
                println!("  cell {} -> {:>3}", index + 1, score);
            }
            let mut rng = make_rng(seed);
            match best_move(&board, mark, mark.opponent(), difficulty, &mut rng) {
                Some(index) => println!("{} ({}) plays cell {}", mark, difficulty, index + 1),
                None => println!("No move available: the board is full."),
            }
        }
        Commands::Sim {
            games,
            difficulty_x,
            difficulty_o,
            seed,
        } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let tally = simulate(games, difficulty_x, difficulty_o, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", serde_json::to_string(&tally)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_ascii_lowercase()))
}

#[cfg(feature = "std")]
fn run_session(
    mut session: Session,
    mut human: CliPlayer,
    mut rng: SmallRng,
    think_ms: u64,
) -> anyhow::Result<()> {
    println!(
        "You are {}; the engine plays {} on {}.",
        session.human(),
        session.ai(),
        session.difficulty()
    );
    loop {
        while !session.game().is_over() {
            if session.is_human_turn() {
                let board = *session.game().board();
                print_board(&board, None);
                let Some(index) = human.select_move(&mut rng, &board, session.human()) else {
                    println!("Goodbye!");
                    return Ok(());
                };
                if let Err(e) = session.human_move(index) {
                    println!("Error: {}", e);
                }
            } else {
                println!("Engine is thinking...");
                if think_ms > 0 {
                    std::thread::sleep(Duration::from_millis(think_ms));
                }
                let played = session.ai_move(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
                match played {
                    Some(index) => human.handle_move(index, session.ai()),
                    None => break,
                }
            }
        }

        let game = session.game();
        print_board(game.board(), game.winning_line());
        match game.status() {
            GameStatus::Won(m) if m == session.human() => println!("You won!"),
            GameStatus::Won(_) => println!("The engine wins. Better luck next time!"),
            GameStatus::Draw => println!("It's a draw!"),
            GameStatus::InProgress => {}
        }
        let score = session.score();
        println!(
            "Score: you {} - engine {} - draws {}",
            score.player_wins, score.ai_wins, score.draws
        );

        match prompt("Play again? [Y/n, r to reset score]: ")?.as_deref() {
            None | Some("n") | Some("q") => return Ok(()),
            Some("r") => session.full_reset(),
            _ => session.restart(),
        }
    }
}
