//! Core board model for the regua puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Token`: The three possible occupants of a slot (Red, Blue, Empty).
//! - `Board`: An immutable row of `2n+1` slots with methods for legal-move
//!   enumeration, move application, the goal test and fingerprinting.
//! - `Game`: Interactive session state (board, move counter, win detection)
//!   used by the `human_player` binary.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Occupant of a single board slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A red piece; belongs on the left side of the goal board.
    Red,
    /// A blue piece; belongs on the right side of the goal board.
    Blue,
    /// The single empty slot tokens move into.
    Empty,
}

impl Token {
    /// Converts the token to its character representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use regua_solver::engine::Token;
    /// assert_eq!(Token::Red.to_char(), 'R');
    /// assert_eq!(Token::Empty.to_char(), '_');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Token::Red => 'R',
            Token::Blue => 'B',
            Token::Empty => '_',
        }
    }

    /// Parses a token from its character representation.
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            'R' => Some(Token::Red),
            'B' => Some(Token::Blue),
            '_' => Some(Token::Empty),
            _ => None,
        }
    }
}

/// A puzzle configuration: an ordered row of `2n+1` slots holding `n` Red
/// tokens, `n` Blue tokens and one Empty slot.
///
/// Boards are values: every transition produces a new `Board`. The composition
/// invariant is the caller's responsibility; the engine does not validate it
/// and searches over malformed boards are best-effort.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    slots: Vec<Token>,
}

impl Board {
    /// Creates the canonical goal board `R^n _ B^n` for `token_count` tokens
    /// of each color.
    pub fn new_goal(token_count: usize) -> Self {
        let mut slots = Vec::with_capacity(2 * token_count + 1);
        slots.extend(std::iter::repeat(Token::Red).take(token_count));
        slots.push(Token::Empty);
        slots.extend(std::iter::repeat(Token::Blue).take(token_count));
        Board { slots }
    }

    /// Creates a board from an explicit slot sequence.
    ///
    /// Useful for tests and for callers that build configurations manually.
    /// No composition check is performed.
    pub fn from_slots(slots: Vec<Token>) -> Self {
        Board { slots }
    }

    /// Creates a board with a pseudo-random color assignment per slot and the
    /// Empty slot fixed at index `token_count`.
    ///
    /// Each non-empty slot is filled by a coin flip between Red and Blue while
    /// supplies of each color last, so the composition invariant always holds.
    /// Seeded from entropy; use [`Board::random_with_seed`] for reproducible
    /// boards.
    pub fn random(token_count: usize) -> Self {
        Self::assign_random(token_count, &mut SmallRng::from_entropy())
    }

    /// Creates a pseudo-random board from an explicit seed.
    ///
    /// The same seed always produces the same board.
    pub fn random_with_seed(token_count: usize, seed: u64) -> Self {
        Self::assign_random(token_count, &mut SmallRng::seed_from_u64(seed))
    }

    fn assign_random(token_count: usize, rng: &mut impl Rng) -> Self {
        let size = 2 * token_count + 1;
        let mut reds = token_count;
        let mut blues = token_count;
        let mut slots = Vec::with_capacity(size);
        for i in 0..size {
            if i == token_count {
                slots.push(Token::Empty);
                continue;
            }
            let pick_red = rng.gen_bool(0.5);
            if pick_red && reds > 0 {
                slots.push(Token::Red);
                reds -= 1;
            } else if blues > 0 {
                slots.push(Token::Blue);
                blues -= 1;
            } else {
                slots.push(Token::Red);
                reds -= 1;
            }
        }
        Board { slots }
    }

    /// Creates a guaranteed-solvable board by walking 50 random legal moves
    /// away from the goal board.
    ///
    /// Retries (up to 100 times) while the walk lands back on a goal
    /// configuration, so the result is almost always a live puzzle.
    pub fn scrambled_with_seed(token_count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut attempts = 0;
        loop {
            let mut board = Board::new_goal(token_count);
            for _ in 0..50 {
                let moves = board.legal_moves();
                let slot = moves[rng.gen_range(0..moves.len())];
                board = board.apply_move(slot);
            }
            attempts += 1;
            if !board.is_goal() || attempts >= 100 {
                return board;
            }
        }
    }

    /// Total number of slots (`2n+1`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` for a zero-slot board; only possible through `from_slots`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tokens of each color (`n`).
    pub fn token_count(&self) -> usize {
        self.slots.len().saturating_sub(1) / 2
    }

    /// The ordered slot sequence, for renderers and other consumers.
    pub fn tokens(&self) -> &[Token] {
        &self.slots
    }

    /// Returns the token at `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn get(&self, slot: usize) -> Token {
        self.slots[slot]
    }

    /// Index of the Empty slot.
    ///
    /// Relies on the single-Empty invariant; on a malformed board the first
    /// Empty wins. Returns `None` when no slot is empty.
    pub fn empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|&t| t == Token::Empty)
    }

    /// Enumerates the slots whose token may legally move into the Empty slot.
    ///
    /// Candidates, in this fixed order: left neighbor, right neighbor,
    /// two-left jump (over an occupied slot), two-right jump. The order is
    /// part of the contract: BFS/DFS/backtracking traversal, and therefore the
    /// exact paths they report, depend on it.
    pub fn legal_moves(&self) -> Vec<usize> {
        let mut moves = Vec::with_capacity(4);
        let empty = match self.empty_slot() {
            Some(e) => e,
            None => return moves,
        };
        let size = self.slots.len();
        if empty > 0 {
            moves.push(empty - 1);
        }
        if empty < size - 1 {
            moves.push(empty + 1);
        }
        if empty > 1 && self.slots[empty - 1] != Token::Empty {
            moves.push(empty - 2);
        }
        if empty + 2 < size && self.slots[empty + 1] != Token::Empty {
            moves.push(empty + 2);
        }
        moves
    }

    /// Returns a new board with the token at `slot` and the Empty slot
    /// exchanged.
    ///
    /// Returns the input unchanged when `slot` is out of range, already empty,
    /// or not adjacent/jump-reachable from the Empty slot. This is a silent
    /// no-op, not validation: callers should only pass indices obtained from
    /// [`Board::legal_moves`].
    pub fn apply_move(&self, slot: usize) -> Board {
        let mut next = self.clone();
        let empty = match self.empty_slot() {
            Some(e) => e,
            None => return next,
        };
        if slot >= self.slots.len() || self.slots[slot] == Token::Empty {
            return next;
        }
        let reachable = match slot.abs_diff(empty) {
            1 => true,
            // Jumps require the intervening slot to be occupied.
            2 => self.slots[(slot + empty) / 2] != Token::Empty,
            _ => false,
        };
        if !reachable {
            return next;
        }
        next.slots.swap(slot, empty);
        next
    }

    /// Goal test under the canonical block policy: ignoring the Empty slot,
    /// the token sequence reads `Red x n` followed by `Blue x n` —
    /// equivalently, no Red token occurs after any Blue token.
    pub fn is_goal(&self) -> bool {
        let mut seen_blue = false;
        for &token in &self.slots {
            match token {
                Token::Blue => seen_blue = true,
                Token::Red if seen_blue => return false,
                _ => {}
            }
        }
        true
    }

    /// Deterministic, injective packed-integer encoding of the board, used as
    /// the visited-set key during search.
    ///
    /// Two bits per slot, so boards up to 64 slots (n <= 31) are supported —
    /// far beyond what exhaustive search can handle anyway.
    pub fn fingerprint(&self) -> u128 {
        let mut key: u128 = 0;
        for &token in &self.slots {
            let bits = match token {
                Token::Empty => 0b00,
                Token::Red => 0b01,
                Token::Blue => 0b10,
            };
            key = (key << 2) | bits;
        }
        key
    }
}

impl fmt::Display for Board {
    /// Renders the board as a framed row with an index ruler:
    ///
    /// ```text
    /// +-+-+-+-+-+
    /// |B|B|_|R|R|
    /// +-+-+-+-+-+
    ///  0 1 2 3 4
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame: String = std::iter::once('+')
            .chain(self.slots.iter().flat_map(|_| ['-', '+']))
            .collect();
        writeln!(f, "{}", frame)?;
        write!(f, "|")?;
        for token in &self.slots {
            write!(f, "{}|", token.to_char())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", frame)?;
        write!(f, " ")?;
        for i in 0..self.slots.len() {
            write!(f, "{:<2}", i)?;
        }
        Ok(())
    }
}

/// Interactive session state for human play.
///
/// Wraps a board with a move counter and win detection. Only legal moves are
/// accepted; `reset` restores the starting configuration.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    initial_board: Board,
    moves: u32,
}

impl Game {
    /// Starts a game on a fresh random board with `token_count` tokens per
    /// color.
    pub fn new(token_count: usize) -> Self {
        Self::new_with_board(Board::random(token_count))
    }

    /// Starts a game on a specific board.
    pub fn new_with_board(board: Board) -> Self {
        Game {
            initial_board: board.clone(),
            board,
            moves: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves performed so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// `true` when `slot` holds a token that may move into the Empty slot.
    pub fn can_move(&self, slot: usize) -> bool {
        self.board.legal_moves().contains(&slot)
    }

    /// Attempts to move the token at `slot` into the Empty slot.
    ///
    /// Returns `false` (leaving the board untouched) when the move is not
    /// legal.
    pub fn process_move(&mut self, slot: usize) -> bool {
        if !self.can_move(slot) {
            return false;
        }
        self.board = self.board.apply_move(slot);
        self.moves += 1;
        true
    }

    /// Live win check, same goal policy as the solver.
    pub fn is_won(&self) -> bool {
        self.board.is_goal()
    }

    /// Restores the starting board and zeroes the move counter.
    pub fn reset(&mut self) {
        self.board = self.initial_board.clone();
        self.moves = 0;
    }
}
