use crate::engine::{Board, Token};
use crate::solver::SolverStats;
use std::fmt::Write;

/// Parses a compact board string into a `Board`.
///
/// Each character is one slot: `R` for a red token, `B` for a blue token and
/// `_` for the empty slot. The string must contain exactly one `_`; any other
/// character is an error. Token counts are not checked beyond that — the
/// engine treats composition as the caller's responsibility.
///
/// # Examples
/// ```
/// use regua_solver::utils::board_from_str;
/// use regua_solver::engine::Token;
///
/// let board = board_from_str("BB_RR").unwrap();
/// assert_eq!(board.len(), 5);
/// assert_eq!(board.get(0), Token::Blue);
/// assert_eq!(board.empty_slot(), Some(2));
///
/// assert!(board_from_str("BBXRR").is_err());
/// assert!(board_from_str("BBRR").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, String> {
    let mut slots = Vec::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        match Token::from_char(c) {
            Some(token) => slots.push(token),
            None => {
                return Err(format!(
                    "Unrecognized character '{}' at slot {} (expected 'R', 'B' or '_')",
                    c, i
                ))
            }
        }
    }
    let empties = slots.iter().filter(|&&t| t == Token::Empty).count();
    if empties != 1 {
        return Err(format!(
            "Board must contain exactly one empty slot '_', found {}",
            empties
        ));
    }
    Ok(Board::from_slots(slots))
}

/// Renders a found solution as a replay: the initial board, every
/// intermediate configuration with the move that produced it, and a closing
/// statistics block. Unsolved records render as a short failure notice with
/// the statistics still included.
pub fn render_solution(initial: &Board, stats: &SolverStats) -> String {
    let mut out = String::new();
    if !stats.solved() {
        let _ = writeln!(out, "No solution found.");
        let _ = write!(out, "{}", render_stats(stats));
        return out;
    }

    let _ = writeln!(out, "Initial board:");
    let _ = writeln!(out, "{}\n", initial);
    let mut board = initial.clone();
    for (step, &slot) in stats.path.iter().enumerate() {
        board = board.apply_move(slot);
        let _ = writeln!(out, "Step {}: move slot {}", step + 1, slot);
        let _ = writeln!(out, "{}\n", board);
    }
    let _ = writeln!(out, "Solved in {} moves.", stats.path.len());
    let _ = write!(out, "{}", render_stats(stats));
    out
}

/// Renders the statistics block shared by the solver front-ends.
pub fn render_stats(stats: &SolverStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Statistics:");
    let _ = writeln!(out, "  depth:          {}", stats.depth);
    let _ = writeln!(out, "  cost:           {}", stats.cost);
    let _ = writeln!(out, "  nodes expanded: {}", stats.nodes_expanded);
    let _ = writeln!(out, "  nodes visited:  {}", stats.nodes_visited);
    let _ = writeln!(out, "  avg branching:  {:.2}", stats.avg_branching);
    let _ = writeln!(out, "  elapsed:        {:.3}s", stats.elapsed.as_secs_f64());
    out
}

/// Renders a fixed-width comparison table, one row per algorithm. Unsolved
/// rows show `N/A` in the depth and cost columns.
pub fn render_comparison(rows: &[(&str, SolverStats)]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<22} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10}",
        "Algorithm", "Depth", "Cost", "Expanded", "Visited", "Branching", "Time (s)"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));
    for (name, stats) in rows {
        let (depth, cost) = if stats.solved() {
            (stats.depth.to_string(), stats.cost.to_string())
        } else {
            ("N/A".to_string(), "N/A".to_string())
        };
        let _ = writeln!(
            out,
            "{:<22} {:>6} {:>6} {:>10} {:>10} {:>10.2} {:>10.3}",
            name,
            depth,
            cost,
            stats.nodes_expanded,
            stats.nodes_visited,
            stats.avg_branching,
            stats.elapsed.as_secs_f64()
        );
    }
    out
}
