use clap::Parser;
use regua_solver::engine::{Board, Game};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the regua puzzle interactively", long_about = None)]
struct Args {
    /// Number of tokens per color (board has 2*tokens+1 slots)
    #[clap(short, long, default_value_t = 3)]
    tokens: usize,

    /// Seed for reproducible board generation (random if omitted)
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let board = match args.seed {
        Some(seed) => Board::random_with_seed(args.tokens, seed),
        None => Board::random(args.tokens),
    };
    let mut game = Game::new_with_board(board);

    println!("Welcome to the regua puzzle!");
    println!("Line up all red tokens before all blue tokens to win.");

    loop {
        println!("---------------------");
        println!("Moves: {}", game.moves());
        println!("{}", game.board());
        let movable = game.board().legal_moves();
        println!(
            "Movable slots: {}",
            movable
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );

        if game.is_won() {
            println!();
            println!("---------------------");
            println!("🎉 YOU WIN! 🎉");
            println!("Total moves: {}", game.moves());
            println!("---------------------");
            break;
        }

        print!("Enter a slot number, 'r' to restart, or 'q' to quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed = input.trim();

        if trimmed == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed == "r" {
            game.reset();
            println!("Board restored to its starting configuration.");
            continue;
        }

        match trimmed.parse::<usize>() {
            Ok(slot) => {
                if game.process_move(slot) {
                    println!("Move processed.");
                } else {
                    println!(
                        "Invalid move: slot {} cannot reach the empty slot.",
                        slot
                    );
                }
            }
            Err(_) => {
                println!("Invalid input: enter a slot number, 'r', or 'q'.");
            }
        }
    }
}
