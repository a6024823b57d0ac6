//! # Regua Puzzle Solver Library
//!
//! This library provides the core logic for the regua puzzle — a linear
//! board of `2n+1` slots holding `n` red tokens, `n` blue tokens and one
//! empty slot, where tokens slide into or jump over into the empty slot —
//! together with seven search strategies that solve it.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `ai_solver`: Takes a board configuration, a search strategy and a
//!   heuristic, then outputs the sequence of moves reaching a goal.
//! - `compare_algorithms`: Runs every strategy on one board and prints a
//!   side-by-side statistics table.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), token types (`Token`),
//!   interactive game state (`Game`), and all move mechanics (legal-move
//!   enumeration, move application, goal test, fingerprinting).
//! - `solver`: The seven search strategies (BFS, backtracking, DFS, UCS,
//!   greedy, A*, IDA*) behind one `solve` entry point, plus the uniform
//!   `SolverStats` record they all return.
//! - `heuristics`: The four board evaluators used by the informed strategies.
//! - `utils`: Board parsing from compact strings and report rendering.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
