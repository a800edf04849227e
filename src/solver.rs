//! A* search for a sequence of moves that sorts a board.
//!
//! The frontier is a binary heap ordered by estimated total cost (moves so far plus
//! [`misplaced_rings`]), with ties broken by insertion order. Boards are marked visited
//! when first expanded and are never expanded again.
use crate::engine::{Board, Move};
use crate::heuristics::misplaced_rings;
use log::{debug, trace};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Limits applied to a single search. The default is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of boards to expand before giving up.
    pub max_expansions: Option<u64>,
    /// Maximum wall-clock time to search before giving up.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Sequence of moves from the start board to a sorted board.
    /// Empty if the start was already sorted.
    pub moves: Vec<Move>,
    /// Number of boards expanded during the search.
    pub expanded: u64,
    /// Number of successor boards pushed onto the frontier.
    pub generated: u64,
    /// Largest frontier size seen during the search.
    pub frontier_high_water: usize,
    /// The sorted board reached by `moves`.
    pub final_board: Board,
}

/// Reasons a search ends without a solution.
///
/// `NoSolution` means the start board cannot be sorted. The budget variants only mean the
/// search stopped early.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("No solution exists, all {expanded} reachable boards were expanded")]
    NoSolution { expanded: u64 },
    #[error("Expansion budget of {limit} boards exceeded")]
    ExpansionBudgetExceeded { limit: u64 },
    #[error("Time limit of {limit:?} exceeded")]
    TimeLimitExceeded { limit: Duration },
}

/// Frontier ordering: lowest estimated cost first, then earliest pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    cost: usize,
    sequence: u64,
}

struct SearchNode {
    board: Board,
    path: Vec<Move>,
}

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    high_water: usize,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    fn push(&mut self, cost: usize, board: Board, path: Vec<Move>) {
        let key = FrontierKey {
            cost,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node: SearchNode { board, path },
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }
}

/// Solves `start` with no expansion or time limit.
///
/// # Examples
/// ```
/// use ring_sort_solver::engine::Board;
/// use ring_sort_solver::engine::Ring::{Blue, Red};
/// use ring_sort_solver::solver::solve;
/// let board = Board::new(vec![vec![Red, Blue], vec![Blue, Red], vec![]]);
/// let solution = solve(&board).unwrap();
/// assert!(solution.final_board.is_goal());
/// ```
pub fn solve(start: &Board) -> Result<Solution, SolveError> {
    solve_with_config(start, &SolverConfig::default())
}

/// Searches for a move sequence that sorts `start`, within the limits of `config`.
///
/// # Errors
/// - [`SolveError::NoSolution`] if every reachable board was expanded without finding a goal.
/// - [`SolveError::ExpansionBudgetExceeded`] or [`SolveError::TimeLimitExceeded`] if a limit
///   stopped the search first. Neither says anything about whether a solution exists.
pub fn solve_with_config(start: &Board, config: &SolverConfig) -> Result<Solution, SolveError> {
    let started = Instant::now();
    debug!(
        "Starting search on {} pegs with {} rings, {} misplaced",
        start.peg_count(),
        start.ring_count(),
        misplaced_rings(start)
    );

    let mut frontier = Frontier::new();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded: u64 = 0;
    let mut generated: u64 = 0;

    frontier.push(0, start.clone(), Vec::new());

    while let Some(node) = frontier.pop() {
        if visited.contains(&node.board) {
            continue;
        }

        if node.board.is_goal() {
            debug!(
                "Found solution of {} moves after expanding {} boards in {:?}",
                node.path.len(),
                expanded,
                started.elapsed()
            );
            return Ok(Solution {
                moves: node.path,
                expanded,
                generated,
                frontier_high_water: frontier.high_water,
                final_board: node.board,
            });
        }

        if let Some(limit) = config.max_expansions {
            if expanded >= limit {
                debug!("Expansion budget of {} reached", limit);
                return Err(SolveError::ExpansionBudgetExceeded { limit });
            }
        }
        if let Some(limit) = config.time_limit {
            if started.elapsed() >= limit {
                debug!("Time limit of {:?} reached after {} expansions", limit, expanded);
                return Err(SolveError::TimeLimitExceeded { limit });
            }
        }

        expanded += 1;
        let depth = node.path.len() + 1;
        let moves = node.board.valid_moves();
        trace!(
            "Expanding board at depth {} with {} moves, frontier size {}",
            depth - 1,
            moves.len(),
            frontier.heap.len()
        );

        for mv in moves {
            // Generated moves are legal on this board by construction.
            let Ok(next) = node.board.apply_move(mv) else {
                continue;
            };
            if visited.contains(&next) {
                continue;
            }
            let cost = depth + misplaced_rings(&next);
            let mut path = node.path.clone();
            path.push(mv);
            frontier.push(cost, next, path);
            generated += 1;
        }

        visited.insert(node.board);
    }

    debug!("Frontier exhausted after expanding {} boards", expanded);
    Err(SolveError::NoSolution { expanded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RandomLayout, Ring::*};
    use crate::utils::{board_from_str_array, replay};

    #[test]
    fn test_solve_already_sorted() {
        let board = board_from_str_array(&["RR", "BB"]).unwrap();
        let solution = solve(&board).unwrap();
        assert!(solution.moves.is_empty());
        assert_eq!(solution.expanded, 0);
        assert_eq!(solution.final_board, board);
    }

    #[test]
    fn test_solve_two_swapped_pegs() {
        let board = board_from_str_array(&["RB", "BR", ""]).unwrap();
        let solution = solve(&board).unwrap();

        assert_eq!(solution.moves, vec![Move::new(0, 2), Move::new(1, 0)]);
        let end = replay(&board, &solution.moves).unwrap();
        assert!(end.is_goal());
        assert_eq!(end, solution.final_board);
    }

    #[test]
    fn test_solve_no_legal_moves() {
        let board = board_from_str_array(&["RB", "BR"]).unwrap();
        assert!(board.valid_moves().is_empty());
        assert_eq!(solve(&board).unwrap_err(), SolveError::NoSolution { expanded: 1 });
    }

    #[test]
    fn test_solve_empty_path_differs_from_no_solution() {
        let sorted = Board::new(vec![vec![Red], vec![Blue]]);
        assert!(solve(&sorted).is_ok());
        let stuck = Board::new(vec![vec![Red, Blue], vec![Red]]);
        assert!(matches!(solve(&stuck), Err(SolveError::NoSolution { .. })));
    }

    #[test]
    fn test_solve_expansion_budget() {
        let config = SolverConfig::default().with_max_expansions(1);
        assert_eq!(
            solve_with_config(&Board::classic(), &config).unwrap_err(),
            SolveError::ExpansionBudgetExceeded { limit: 1 }
        );
    }

    #[test]
    fn test_solve_budget_does_not_block_sorted_start() {
        let config = SolverConfig::default().with_max_expansions(0);
        let board = Board::new(vec![vec![Green, Green], vec![]]);
        assert!(solve_with_config(&board, &config).unwrap().moves.is_empty());
    }

    #[test]
    fn test_solve_time_limit() {
        let config = SolverConfig::default().with_time_limit(Duration::ZERO);
        assert_eq!(
            solve_with_config(&Board::classic(), &config).unwrap_err(),
            SolveError::TimeLimitExceeded {
                limit: Duration::ZERO
            }
        );
    }

    #[test]
    fn test_solve_random_boards_deterministic_and_valid() {
        let layout = RandomLayout {
            pegs: 4,
            colors: 2,
            height: 2,
        };
        for seed in 0..10 {
            let board = Board::new_random_with_seed(layout, seed);
            let first = solve(&board).unwrap();
            let second = solve(&board).unwrap();
            assert_eq!(first.moves, second.moves, "Seed {} was not deterministic", seed);
            assert_eq!(first.expanded, second.expanded);

            let end = replay(&board, &first.moves).unwrap();
            assert!(end.is_goal(), "Seed {} replay did not sort the board", seed);
            assert_eq!(end.ring_count(), board.ring_count());
        }
    }

    #[test]
    fn test_solve_statistics() {
        let board = board_from_str_array(&["RB", "BR", ""]).unwrap();
        let solution = solve(&board).unwrap();
        assert_eq!(solution.expanded, 3);
        assert!(solution.generated >= solution.expanded);
        assert!(solution.frontier_high_water >= 2);
    }

    #[test]
    fn test_frontier_pops_lowest_cost_then_oldest() {
        let mut frontier = Frontier::new();
        let board = Board::new_empty(1);
        frontier.push(3, board.clone(), vec![Move::new(0, 1)]);
        frontier.push(1, board.clone(), vec![Move::new(0, 2)]);
        frontier.push(1, board.clone(), vec![Move::new(0, 3)]);
        let order: Vec<Move> = std::iter::from_fn(|| frontier.pop())
            .map(|node| node.path[0])
            .collect();
        assert_eq!(order, vec![Move::new(0, 2), Move::new(0, 3), Move::new(0, 1)]);
        assert_eq!(frontier.high_water, 3);
    }
}
