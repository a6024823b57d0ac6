use clap::Parser;
use regua_solver::engine::Board;
use regua_solver::heuristics::Heuristic;
use regua_solver::solver::{solve_with_timeout, Algorithm, DEFAULT_TIMEOUT};
use regua_solver::utils::{board_from_str, render_solution};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a regua puzzle board", long_about = None)]
struct Args {
    /// Search strategy: 1=BFS 2=Backtracking 3=DFS 4=UCS 5=Greedy 6=A* 7=IDA*
    #[clap(short, long, default_value_t = 1)]
    algorithm: u32,

    /// Heuristic (informed strategies only): 1=Manhattan 2=Misplaced 3=Inversions 4=Combined
    #[clap(short = 'e', long, default_value_t = 1)]
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

fn build_board(args: &Args) -> Result<Board, String> {
    match (&args.board, args.seed) {
        (Some(s), _) => board_from_str(s),
        (None, Some(seed)) => Ok(Board::scrambled_with_seed(args.tokens, seed)),
        (None, None) => Ok(Board::random(args.tokens)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let board = match build_board(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let algorithm = Algorithm::from_id(args.algorithm);
    let heuristic = Heuristic::from_id(args.heuristic);
    let timeout = args
        .timeout
        .map(Duration::from_secs_f64)
        .unwrap_or(DEFAULT_TIMEOUT);

    if algorithm.is_informed() {
        println!("Solving with {} ({})...\n", algorithm.name(), heuristic.name());
    } else {
        println!("Solving with {}...\n", algorithm.name());
    }

    let stats = solve_with_timeout(&board, algorithm, heuristic, timeout);
    println!("{}", render_solution(&board, &stats));

    if stats.solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
