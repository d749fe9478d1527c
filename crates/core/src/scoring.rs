//! Line-clear engine and score table
//!
//! Scoring is a flat lookup, not a formula:
//!
//! | Lines | Points |
//! |-------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |

use crate::board::Board;
use crate::types::LINE_SCORES;

/// Outcome of one line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub lines: u32,
    pub score_delta: u32,
}

/// Points for clearing `lines` rows at once.
///
/// Zero lines, or more than a single piece can ever complete, score nothing.
pub fn line_clear_score(lines: usize) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines],
        _ => 0,
    }
}

/// Remove all full rows from `board` and score them.
pub fn clear_lines(board: &mut Board) -> ClearResult {
    let lines = board.clear_lines();
    ClearResult {
        lines: lines as u32,
        score_delta: line_clear_score(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn test_clear_nothing() {
        let mut board = Board::standard();
        board.set(0, 19, Some(PieceKind::I));
        assert_eq!(clear_lines(&mut board), ClearResult::default());
        assert!(board.is_occupied(0, 19));
    }

    #[test]
    fn test_clear_four_is_a_table_lookup() {
        let mut board = Board::standard();
        for y in 16..20 {
            board.fill_row(y, PieceKind::I);
        }
        let result = clear_lines(&mut board);
        assert_eq!(result.lines, 4);
        assert_eq!(result.score_delta, 800);
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::standard();
        board.fill_row(19, PieceKind::L);
        board.set(3, 18, Some(PieceKind::T));
        board.fill_row(17, PieceKind::J);
        board.set(7, 16, Some(PieceKind::S));

        let result = clear_lines(&mut board);
        assert_eq!(result.lines, 2);
        assert_eq!(result.score_delta, 300);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(7, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }
}
