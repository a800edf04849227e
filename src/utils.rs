use crate::engine::{Board, Move, MoveError, Ring};
use thiserror::Error;

/// Errors from parsing boards and moves out of text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized character '{ch}' on peg {peg} at position {pos}")]
    UnrecognizedRing { ch: char, peg: usize, pos: usize },
    #[error("A board needs at least one peg")]
    NoPegs,
    #[error("Invalid move '{0}', expected 'from to' or 'from->to'")]
    InvalidMove(String),
}

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one peg, starting from peg 0, listing its rings from the bottom
/// up. An empty string or a lone `-` is an empty peg.
///
/// Valid characters for rings are:
/// - 'R': `Ring::Red`
/// - 'B': `Ring::Blue`
/// - 'G': `Ring::Green`
/// - 'Y': `Ring::Yellow`
/// - 'P': `Ring::Purple`
/// - 'N': `Ring::Brown`
///
/// # Examples
/// ```
/// use ring_sort_solver::utils::board_from_str_array;
/// use ring_sort_solver::engine::Ring;
///
/// let board = board_from_str_array(&["RGY", "-", "BB"]).unwrap();
/// assert_eq!(board.peg_count(), 3);
/// assert_eq!(board.top(0), Some(Ring::Yellow));
/// assert!(board.peg(1).is_empty());
/// assert_eq!(board.peg(2), &[Ring::Blue, Ring::Blue]);
///
/// assert!(board_from_str_array(&["RXB"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, ParseError> {
    if s.is_empty() {
        return Err(ParseError::NoPegs);
    }

    let mut pegs = Vec::with_capacity(s.len());
    for (peg, peg_str) in s.iter().enumerate() {
        if *peg_str == "-" {
            pegs.push(Vec::new());
            continue;
        }
        let rings = peg_str
            .chars()
            .enumerate()
            .map(|(pos, ch)| {
                Ring::from_char(ch).ok_or(ParseError::UnrecognizedRing { ch, peg, pos })
            })
            .collect::<Result<Vec<Ring>, ParseError>>()?;
        pegs.push(rings);
    }
    Ok(Board::new(pegs))
}

/// Parses a board from multi-line text, one peg per line.
///
/// Lines are trimmed. Blank lines and lines starting with `#` are skipped, so an empty
/// peg must be written as `-`.
pub fn board_from_text(text: &str) -> Result<Board, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    board_from_str_array(&lines)
}

/// Parses a move written as `"from to"` or `"from->to"`.
///
/// Both indices must be non-negative integers and nothing else may follow them.
///
/// # Examples
/// ```
/// use ring_sort_solver::engine::Move;
/// use ring_sort_solver::utils::parse_move;
/// assert_eq!(parse_move("0 3").unwrap(), Move::new(0, 3));
/// assert_eq!(parse_move("2->1").unwrap(), Move::new(2, 1));
/// assert!(parse_move("left").is_err());
/// ```
pub fn parse_move(input: &str) -> Result<Move, ParseError> {
    let trimmed = input.trim();
    let invalid = || ParseError::InvalidMove(trimmed.to_string());
    let parts: Vec<&str> = if trimmed.contains("->") {
        trimmed.split("->").map(str::trim).collect()
    } else {
        trimmed.split_whitespace().collect()
    };
    match parts.as_slice() {
        [from, to] => {
            let from = from.parse::<usize>().map_err(|_| invalid())?;
            let to = to.parse::<usize>().map_err(|_| invalid())?;
            Ok(Move::new(from, to))
        }
        _ => Err(invalid()),
    }
}

/// Applies `moves` to `start` in order and returns the resulting board.
///
/// # Errors
/// Returns the first [`MoveError`] encountered; `start` is never modified.
pub fn replay(start: &Board, moves: &[Move]) -> Result<Board, MoveError> {
    moves
        .iter()
        .try_fold(start.clone(), |board, &mv| board.apply_move(mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Ring::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["RBGY", "YGBR", "NP", "", "-"]).unwrap();
        assert_eq!(board.peg_count(), 5);
        assert_eq!(board.peg(0), &[Red, Blue, Green, Yellow]);
        assert_eq!(board.peg(2), &[Brown, Purple]);
        assert!(board.peg(3).is_empty());
        assert!(board.peg(4).is_empty());
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["RB", "RGX"]);
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnrecognizedRing {
                ch: 'X',
                peg: 1,
                pos: 2
            }
        );
    }

    #[test]
    fn test_board_from_str_array_with_spaces() {
        let result = board_from_str_array(&["R G"]);
        assert!(result.unwrap_err().to_string().contains("Unrecognized character ' '"));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let board_str: [&str; 0] = [];
        assert_eq!(board_from_str_array(&board_str).unwrap_err(), ParseError::NoPegs);
    }

    #[test]
    fn test_board_from_text_skips_comments() {
        let text = "# classic layout\n RBGY \nYGBR\n\nBYRG\nGRYB\n-\n-\n";
        let board = board_from_text(text).unwrap();
        assert_eq!(board, Board::classic());
    }

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_move("  4   5 ").unwrap(), Move::new(4, 5));
        assert_eq!(parse_move("0 -> 1").unwrap(), Move::new(0, 1));
        assert!(parse_move("1").is_err());
        assert!(parse_move("1 2 3").is_err());
        assert!(parse_move("").is_err());
        assert_eq!(
            parse_move("-1 2").unwrap_err(),
            ParseError::InvalidMove("-1 2".to_string())
        );
        assert_eq!(
            parse_move("1->->2").unwrap_err(),
            ParseError::InvalidMove("1->->2".to_string())
        );
        assert_eq!(
            parse_move("1>2").unwrap_err(),
            ParseError::InvalidMove("1>2".to_string())
        );
        assert!(parse_move("0 ->").is_err());
        assert_eq!(
            parse_move("a b").unwrap_err(),
            ParseError::InvalidMove("a b".to_string())
        );
    }

    #[test]
    fn test_replay_applies_moves_in_order() {
        let board = board_from_str_array(&["RB", "BR", ""]).unwrap();
        let end = replay(&board, &[Move::new(0, 2), Move::new(1, 0)]).unwrap();
        assert!(end.is_goal());
        assert_eq!(replay(&board, &[]).unwrap(), board);
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let board = board_from_str_array(&["RB", "BR", ""]).unwrap();
        let result = replay(&board, &[Move::new(0, 2), Move::new(2, 0)]);
        assert_eq!(
            result.unwrap_err(),
            MoveError::ColorMismatch {
                from: 2,
                to: 0,
                moving: Blue,
                top: Red
            }
        );
    }
}
