use clap::Parser;
use regua_solver::engine::Board;
use regua_solver::heuristics::Heuristic;
use regua_solver::solver::{solve_with_timeout, Algorithm, DEFAULT_TIMEOUT};
use regua_solver::utils::{board_from_str, render_comparison};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Run every search strategy on one board", long_about = None)]
struct Args {
    /// Heuristic for the informed strategies: 1=Manhattan 2=Misplaced 3=Inversions 4=Combined
    #[clap(short = 'e', long, default_value_t = 3)]
    heuristic: u32,

    /// Timeout in seconds for the depth-bounded strategies
    #[clap(long)]
    timeout: Option<f64>,

    /// Number of tokens per color when generating a random board
    #[clap(short, long, default_value_t = 3)]
    tokens: usize,

    /// Seed for reproducible random board generation
    #[clap(short, long)]
    seed: Option<u64>,

    /// Board as a compact string, e.g. "BB_RR" (random board if omitted)
    board: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let board = match &args.board {
        Some(s) => match board_from_str(s) {
            Ok(board) => board,
            Err(message) => {
                eprintln!("Error: {}", message);
                return ExitCode::FAILURE;
            }
        },
        None => match args.seed {
            Some(seed) => Board::scrambled_with_seed(args.tokens, seed),
            None => Board::random(args.tokens),
        },
    };

    let heuristic = Heuristic::from_id(args.heuristic);
    let timeout = args
        .timeout
        .map(Duration::from_secs_f64)
        .unwrap_or(DEFAULT_TIMEOUT);

    println!("Board under comparison:");
    println!("{}\n", board);
    println!("Heuristic for informed strategies: {}\n", heuristic.name());

    let rows: Vec<(&str, _)> = Algorithm::all()
        .into_iter()
        .map(|algorithm| {
            (
                algorithm.name(),
                solve_with_timeout(&board, algorithm, heuristic, timeout),
            )
        })
        .collect();

    println!("{}", render_comparison(&rows));
    ExitCode::SUCCESS
}
