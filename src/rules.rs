//! Win and draw rules for the 3x3 grid.
//!
//! Pure functions over [`Board`], separated from storage so the match
//! controller composes them without the board knowing any rules.

use crate::board::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals, as
/// row-major square indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if any line holds three equal occupied squares,
/// `None` otherwise. At most one player can have a completed line at a
/// time, since moves are placed one at a time.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();

    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place_mark(Mark::X, 0, 0);
        board.place_mark(Mark::X, 0, 1);
        board.place_mark(Mark::X, 0, 2);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.place_mark(Mark::O, 0, 1);
        board.place_mark(Mark::O, 1, 1);
        board.place_mark(Mark::O, 2, 1);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place_mark(Mark::O, 0, 2);
        board.place_mark(Mark::O, 1, 1);
        board.place_mark(Mark::O, 2, 0);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.place_mark(Mark::X, 0, 0);
        board.place_mark(Mark::X, 0, 1);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place_mark(Mark::X, 1, 1);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X - full, no three-in-a-row
        let mut board = Board::new();
        let layout = [
            (Mark::X, 0, 0),
            (Mark::O, 0, 1),
            (Mark::X, 0, 2),
            (Mark::X, 1, 0),
            (Mark::O, 1, 1),
            (Mark::O, 1, 2),
            (Mark::O, 2, 0),
            (Mark::X, 2, 1),
            (Mark::X, 2, 2),
        ];
        for (mark, row, col) in layout {
            assert!(board.place_mark(mark, row, col));
        }
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
