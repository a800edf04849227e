//! Core game engine for the ring sorting puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Ring`: The color of a single ring. Only equality between colors matters to the rules.
//! - `Board`: A fixed row of pegs, each an ordered stack of rings (bottom first). Includes
//!   the goal test, legal move generation and the transition that applies a move.
//! - `Move`: A (source peg, destination peg) pair.
//! - `Game`: Wraps a board for interactive play, validating each move with the same
//!   rules the solver uses.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;

/// Represents the color of a ring on a peg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Represents a red ring.
    Red,
    /// Represents a blue ring.
    Blue,
    /// Represents a green ring.
    Green,
    /// Represents a yellow ring.
    Yellow,
    /// Represents a purple ring.
    Purple,
    /// Represents a brown ring.
    Brown,
}

/// Every ring color, in the order used when dealing random boards.
pub const ALL_RINGS: [Ring; 6] = [
    Ring::Red,
    Ring::Blue,
    Ring::Green,
    Ring::Yellow,
    Ring::Purple,
    Ring::Brown,
];

impl Ring {
    /// Converts the ring to its character representation.
    ///
    /// This is used for board files and text-based display.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_sort_solver::engine::Ring;
    /// assert_eq!(Ring::Red.to_char(), 'R');
    /// assert_eq!(Ring::Brown.to_char(), 'N');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Ring::Red => 'R',
            Ring::Blue => 'B',
            Ring::Green => 'G',
            Ring::Yellow => 'Y',
            Ring::Purple => 'P',
            Ring::Brown => 'N',
        }
    }

    /// Parses a ring from its character code. Returns `None` for unknown characters.
    pub fn from_char(c: char) -> Option<Ring> {
        ALL_RINGS.iter().copied().find(|ring| ring.to_char() == c)
    }

    /// Lowercase color name, as shown to players.
    pub fn name(&self) -> &'static str {
        match self {
            Ring::Red => "red",
            Ring::Blue => "blue",
            Ring::Green => "green",
            Ring::Yellow => "yellow",
            Ring::Purple => "purple",
            Ring::Brown => "brown",
        }
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Ring::Red => "41",
            Ring::Green => "42",
            Ring::Yellow => "43",
            Ring::Blue => "44",
            Ring::Purple => "45",
            Ring::Brown => "48;5;94",
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A move of the top run of rings from one peg to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Index of the peg rings are taken from.
    pub from: usize,
    /// Index of the peg rings are placed onto.
    pub to: usize,
}

impl Move {
    /// Creates a move from peg `from` to peg `to`. Legality is checked when it is applied.
    pub fn new(from: usize, to: usize) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Reasons a move cannot be applied to a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Peg {peg} is out of range, the board has {pegs} pegs")]
    PegOutOfRange { peg: usize, pegs: usize },
    #[error("Source and destination are both peg {0}")]
    SamePeg(usize),
    #[error("Peg {0} is empty, there is no ring to move")]
    EmptySource(usize),
    #[error("Cannot move {moving} rings from peg {from} onto a {top} ring on peg {to}")]
    ColorMismatch {
        from: usize,
        to: usize,
        moving: Ring,
        top: Ring,
    },
}

/// Shape of a randomly dealt board, see [`Board::new_random_with_seed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomLayout {
    /// Total number of pegs on the board.
    pub pegs: usize,
    /// Number of distinct colors dealt. Each color is dealt `height` times.
    pub colors: usize,
    /// Number of rings of each color, which is also the height of every filled peg.
    pub height: usize,
}

impl Default for RandomLayout {
    fn default() -> Self {
        RandomLayout {
            pegs: 6,
            colors: 4,
            height: 4,
        }
    }
}

/// Represents the game board as a fixed row of pegs.
///
/// Each peg is a stack of rings stored bottom first, so the last element is the top ring,
/// the only one that can be moved. The number of pegs never changes once a board is built,
/// and every move conserves the rings on the board.
///
/// Equality and hashing are structural and order-sensitive both within a peg and across
/// peg indices, which makes a `Board` usable directly as a visited-set key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pegs: Vec<Vec<Ring>>,
}

impl Board {
    /// Creates a board from its pegs, each listed bottom to top.
    pub fn new(pegs: Vec<Vec<Ring>>) -> Self {
        Board { pegs }
    }

    /// Creates a board of `peg_count` empty pegs.
    ///
    /// # Examples
    /// ```
    /// use ring_sort_solver::engine::Board;
    /// let board = Board::new_empty(3);
    /// assert_eq!(board.peg_count(), 3);
    /// assert!(board.is_goal());
    /// ```
    pub fn new_empty(peg_count: usize) -> Self {
        Board {
            pegs: vec![Vec::new(); peg_count],
        }
    }

    /// The starting layout of the classic game: four mixed pegs of four colors and two
    /// empty pegs.
    pub fn classic() -> Self {
        use Ring::*;
        Board::new(vec![
            vec![Red, Blue, Green, Yellow],
            vec![Yellow, Green, Blue, Red],
            vec![Blue, Yellow, Red, Green],
            vec![Green, Red, Yellow, Blue],
            Vec::new(),
            Vec::new(),
        ])
    }

    /// Creates a shuffled board using a provided seed.
    ///
    /// `layout.colors * layout.height` rings are shuffled with a seeded `SmallRng` and dealt
    /// `layout.height` at a time onto the first `layout.colors` pegs. The remaining pegs start
    /// empty. The same seed and layout always produce the same board.
    ///
    /// # Panics
    /// Panics if `layout.colors` exceeds the number of ring colors or the number of pegs.
    pub fn new_random_with_seed(layout: RandomLayout, seed: u64) -> Self {
        assert!(
            layout.colors <= ALL_RINGS.len() && layout.colors <= layout.pegs,
            "cannot deal {} colors onto {} pegs",
            layout.colors,
            layout.pegs
        );
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut rings: Vec<Ring> = ALL_RINGS[..layout.colors]
            .iter()
            .flat_map(|&ring| std::iter::repeat(ring).take(layout.height))
            .collect();
        rings.shuffle(&mut rng);

        let mut pegs = vec![Vec::new(); layout.pegs];
        if layout.height > 0 {
            for (peg, chunk) in pegs.iter_mut().zip(rings.chunks(layout.height)) {
                peg.extend_from_slice(chunk);
            }
        }
        Board { pegs }
    }

    /// Number of pegs on the board.
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Returns the rings on peg `i`, bottom first.
    ///
    /// # Panics
    /// Panics if `i` is not a valid peg index.
    pub fn peg(&self, i: usize) -> &[Ring] {
        &self.pegs[i]
    }

    /// Returns all pegs, in index order.
    pub fn pegs(&self) -> &[Vec<Ring>] {
        &self.pegs
    }

    /// The top ring of peg `i`, or `None` if the peg is empty or out of range.
    pub fn top(&self, i: usize) -> Option<Ring> {
        self.pegs.get(i).and_then(|peg| peg.last().copied())
    }

    /// Total number of rings across all pegs.
    pub fn ring_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Checks whether every non-empty peg holds rings of a single color.
    ///
    /// Empty pegs trivially satisfy the condition.
    ///
    /// # Examples
    /// ```
    /// use ring_sort_solver::engine::{Board, Ring};
    /// let solved = Board::new(vec![vec![Ring::Red, Ring::Red], vec![]]);
    /// assert!(solved.is_goal());
    /// let mixed = Board::new(vec![vec![Ring::Red, Ring::Blue], vec![]]);
    /// assert!(!mixed.is_goal());
    /// ```
    pub fn is_goal(&self) -> bool {
        self.pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] == pair[1]))
    }

    /// Checks that `mv` is legal on this board without applying it.
    ///
    /// A move is legal when both pegs exist and differ, the source peg has a ring, and the
    /// destination is either empty or topped by a ring of the same color as the source's top.
    pub fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        let pegs = self.peg_count();
        for peg in [mv.from, mv.to] {
            if peg >= pegs {
                return Err(MoveError::PegOutOfRange { peg, pegs });
            }
        }
        if mv.from == mv.to {
            return Err(MoveError::SamePeg(mv.from));
        }
        let moving = self.top(mv.from).ok_or(MoveError::EmptySource(mv.from))?;
        match self.top(mv.to) {
            Some(top) if top != moving => Err(MoveError::ColorMismatch {
                from: mv.from,
                to: mv.to,
                moving,
                top,
            }),
            _ => Ok(()),
        }
    }

    /// Lists every legal move on this board.
    ///
    /// Moves are ordered by source peg, then destination peg, both ascending, so repeated
    /// calls on the same board return the same sequence.
    ///
    /// # Returns
    /// A `Vec<Move>`, empty if no move is legal.
    pub fn valid_moves(&self) -> Vec<Move> {
        let pegs = self.peg_count();
        let mut moves = Vec::new();
        for from in 0..pegs {
            if self.pegs[from].is_empty() {
                continue;
            }
            for to in 0..pegs {
                let mv = Move::new(from, to);
                if self.check_move(mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Returns the board that results from applying `mv`, leaving `self` untouched.
    ///
    /// Every contiguous ring at the top of the source peg that shares the top ring's color
    /// is moved, one at a time, onto the destination peg.
    ///
    /// # Errors
    /// Returns a [`MoveError`] if the move is illegal on this board.
    ///
    /// # Examples
    /// ```
    /// use ring_sort_solver::engine::{Board, Move, Ring};
    /// let board = Board::new(vec![vec![Ring::Blue, Ring::Red, Ring::Red], vec![]]);
    /// let next = board.apply_move(Move::new(0, 1)).unwrap();
    /// assert_eq!(next.peg(0), &[Ring::Blue]);
    /// assert_eq!(next.peg(1), &[Ring::Red, Ring::Red]);
    /// assert_eq!(board.peg(0).len(), 3);
    /// ```
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        self.check_move(mv)?;
        let color = self.top(mv.from).ok_or(MoveError::EmptySource(mv.from))?;
        let mut next = self.clone();
        while next.pegs[mv.from].last() == Some(&color) {
            if let Some(ring) = next.pegs[mv.from].pop() {
                next.pegs[mv.to].push(ring);
            }
        }
        Ok(next)
    }

    /// Generates a string representation of the board with an optional highlighted peg.
    ///
    /// Each peg is printed on its own line, bottom ring first, using ANSI escape codes for
    /// ring colors. If `peg` is `Some(i)`, peg `i` is marked with `>` in the margin.
    pub fn to_string_with_highlight(&self, peg: Option<usize>) -> String {
        let mut output = String::new();

        for (i, rings) in self.pegs.iter().enumerate() {
            let marker = if peg == Some(i) { '>' } else { ' ' };
            output.push_str(&format!("{}{:<2}|", marker, i));
            for ring in rings {
                output.push_str(&format!(
                    "\x1b[1;{}m {} \x1b[m",
                    ring.to_ansi_color_code(),
                    ring.to_char()
                ));
            }
            if i + 1 < self.pegs.len() {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

/// Manages an interactive game: the current board and the number of moves played.
///
/// Moves are checked with [`Board::check_move`], the same rule the solver expands with,
/// so the game and the solver never disagree on legality.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    steps: u32,
}

impl Game {
    /// Starts a game on the classic layout.
    pub fn new() -> Self {
        Game::new_with_board(Board::classic())
    }

    /// Starts a game on the given board.
    pub fn new_with_board(initial_board: Board) -> Self {
        Game {
            board: initial_board,
            steps: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves successfully played.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Plays `mv`. On error the game is left unchanged.
    pub fn process_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board = self.board.apply_move(mv)?;
        self.steps += 1;
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_goal()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
