//! Static evaluators estimating moves-to-goal for a board.
//!
//! Four heuristics are provided. `inversions` is the only admissible one:
//! an adjacent slide never reorders tokens and a jump reorders exactly one
//! pair, so every move removes at most one blue-before-red inversion, and a
//! board is a goal exactly when the count is zero. `manhattan`, `misplaced`
//! and `combined` can overestimate (the goal family does not pin the Empty
//! slot, and a jump covers two positions at once), so they are estimate-only:
//! fine for Greedy, not optimality-safe for A*/IDA*.
use crate::engine::{Board, Token};

/// Selector for the heuristic used by the informed search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Sum of token displacements from rank-ideal slots. Not admissible.
    Manhattan,
    /// Slots differing from the canonical goal board. Not admissible.
    Misplaced,
    /// Blue-before-red pair count. Admissible.
    Inversions,
    /// Truncated mean of Manhattan and Misplaced. Not admissible.
    Combined,
}

impl Heuristic {
    /// Maps a numeric menu id to a heuristic; any unrecognized id falls back
    /// to Manhattan.
    pub fn from_id(id: u32) -> Heuristic {
        match id {
            2 => Heuristic::Misplaced,
            3 => Heuristic::Inversions,
            4 => Heuristic::Combined,
            _ => Heuristic::Manhattan,
        }
    }

    /// Human-readable name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Misplaced => "Misplaced",
            Heuristic::Inversions => "Inversions",
            Heuristic::Combined => "Combined",
        }
    }

    /// `true` when the heuristic never overestimates the true remaining cost,
    /// which is what A*/IDA* need for optimality guarantees.
    pub fn is_admissible(&self) -> bool {
        matches!(self, Heuristic::Inversions)
    }

    /// Evaluates the heuristic on `board`.
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(board),
            Heuristic::Misplaced => misplaced(board),
            Heuristic::Inversions => inversions(board),
            Heuristic::Combined => combined(board),
        }
    }
}

/// Manhattan-style displacement sum.
///
/// Each Red token's ideal index is its 0-based rank among Reds scanning left
/// to right; each Blue token's ideal index is counted symmetrically from the
/// right edge. The estimate is the sum of `|actual - ideal|` over all tokens,
/// Empty excluded.
pub fn manhattan(board: &Board) -> u32 {
    let last = board.len().saturating_sub(1);
    let mut cost = 0usize;

    let mut red_rank = 0usize;
    for (i, &token) in board.tokens().iter().enumerate() {
        if token == Token::Red {
            cost += i.abs_diff(red_rank);
            red_rank += 1;
        }
    }

    let mut blue_rank = 0usize;
    for (i, &token) in board.tokens().iter().enumerate().rev() {
        if token == Token::Blue {
            cost += i.abs_diff(last - blue_rank);
            blue_rank += 1;
        }
    }

    cost as u32
}

/// Number of slots whose occupant differs from the canonical goal board
/// `R^n _ B^n` of the same size, the Empty slot's ideal position included.
pub fn misplaced(board: &Board) -> u32 {
    let n = board.token_count();
    let mut count = 0u32;
    for (i, &token) in board.tokens().iter().enumerate() {
        let expected = if i < n {
            Token::Red
        } else if i == n {
            Token::Empty
        } else {
            Token::Blue
        };
        if token != expected {
            count += 1;
        }
    }
    count
}

/// Number of (i, j) pairs with i < j, Blue at i and Red at j.
pub fn inversions(board: &Board) -> u32 {
    let tokens = board.tokens();
    let mut count = 0u32;
    for (i, &a) in tokens.iter().enumerate() {
        if a != Token::Blue {
            continue;
        }
        for &b in &tokens[i + 1..] {
            if b == Token::Red {
                count += 1;
            }
        }
    }
    count
}

/// Arithmetic mean of [`manhattan`] and [`misplaced`], rounded toward zero.
pub fn combined(board: &Board) -> u32 {
    (manhattan(board) + misplaced(board)) / 2
}
