//! # Ring Sort Solver Library
//!
//! This library provides the core game logic for the ring sorting puzzle,
//! where colored rings stacked on a row of pegs must be moved until every
//! peg holds a single color, and an A* solver that finds a move sequence
//! for a given layout.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive gameplay via the command line, with solver hints.
//! - `ai_solver`: Takes a board file (or the built-in puzzle) and prints a solution.
//! - `solver_benchmark`: Runs the solver over seeded random boards and reports averages.
//!
//! ## Modules
//! - `engine`: Contains the ring colors (`Ring`), the board representation (`Board`),
//!   moves (`Move`), legality and transition rules, and the interactive `Game`.
//! - `heuristics`: The disorder estimate used to order the search, plus board statistics.
//! - `solver`: Provides the `solve` function, its `SolverConfig`, and the `Solution` and
//!   `SolveError` results.
//! - `utils`: Parsing boards and moves from text, and replaying move paths.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules should be accessed via their full path,
// e.g., `ring_sort_solver::solver::solve()`.
