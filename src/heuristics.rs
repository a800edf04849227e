use crate::engine::{Board, Ring};
use std::collections::HashSet;

/// Estimates how far a board is from sorted by counting misplaced rings.
///
/// For each non-empty peg the color of its bottom ring is taken as the peg's base color,
/// and every ring on that peg with a different color counts as misplaced. Empty pegs
/// contribute nothing.
///
/// The value is zero exactly when the board is a goal. It is not a proven lower bound on
/// the number of moves still needed, so the search it guides is not guaranteed to return
/// a shortest path.
///
/// # Examples
/// ```
/// use ring_sort_solver::engine::{Board, Ring};
/// use ring_sort_solver::heuristics::misplaced_rings;
/// let board = Board::new(vec![vec![Ring::Red, Ring::Blue, Ring::Red], vec![]]);
/// assert_eq!(misplaced_rings(&board), 1);
/// ```
pub fn misplaced_rings(board: &Board) -> usize {
    board
        .pegs()
        .iter()
        .filter_map(|peg| {
            let base = peg.first()?;
            Some(peg.iter().filter(|ring| *ring != base).count())
        })
        .sum()
}

/// Calculates the number of unique ring colors currently on the board.
pub fn count_unique_colors(board: &Board) -> usize {
    board
        .pegs()
        .iter()
        .flatten()
        .copied()
        .collect::<HashSet<Ring>>()
        .len()
}

/// Counts the pegs that hold more than one color.
pub fn count_mixed_pegs(board: &Board) -> usize {
    board
        .pegs()
        .iter()
        .filter(|peg| peg.windows(2).any(|pair| pair[0] != pair[1]))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Ring::*;
    use crate::engine::{Move, RandomLayout};

    #[test]
    fn test_misplaced_rings_uses_bottom_ring_as_base() {
        let board = Board::new(vec![
            vec![Red, Blue, Blue, Red],
            vec![Green],
            vec![],
            vec![Yellow, Yellow, Purple],
        ]);
        assert_eq!(misplaced_rings(&board), 3);
    }

    #[test]
    fn test_misplaced_rings_empty_board() {
        assert_eq!(misplaced_rings(&Board::new_empty(6)), 0);
    }

    #[test]
    fn test_misplaced_rings_classic() {
        assert_eq!(misplaced_rings(&Board::classic()), 12);
    }

    #[test]
    fn test_heuristic_zero_iff_goal() {
        let layout = RandomLayout {
            pegs: 5,
            colors: 3,
            height: 3,
        };
        for seed in 0..20 {
            let mut board = Board::new_random_with_seed(layout, seed);
            // Walk a few moves so the check also covers non-dealt shapes.
            for _ in 0..4 {
                assert_eq!(misplaced_rings(&board) == 0, board.is_goal(), "{:?}", board);
                match board.valid_moves().first() {
                    Some(&mv) => board = board.apply_move(mv).unwrap(),
                    None => break,
                }
            }
        }
        let solved = Board::new(vec![vec![Red, Red], vec![Blue], vec![]]);
        assert_eq!(misplaced_rings(&solved), 0);
        assert!(solved.is_goal());
    }

    #[test]
    fn test_board_statistics() {
        let board = Board::new(vec![vec![Red, Blue], vec![Blue, Blue], vec![]]);
        assert_eq!(count_unique_colors(&board), 2);
        assert_eq!(count_mixed_pegs(&board), 1);

        let next = board.apply_move(Move::new(0, 1)).unwrap();
        assert_eq!(count_mixed_pegs(&next), 0);
        assert_eq!(count_unique_colors(&Board::new_empty(2)), 0);
    }
}
