//! Core domain types: marks, squares, and the 3x3 board.

use serde::{Deserialize, Serialize};

/// A player's mark on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed yet.
    Empty,
    /// Square claimed by a player.
    Occupied(Mark),
}

/// 3x3 board, row-major, 0-indexed.
///
/// The board owns grid storage and occupancy, nothing else: it has no
/// notion of turns or game-ending rules. Callers are responsible for
/// keeping `row` and `col` in `[0, 2]`; the board only refuses to
/// overwrite an occupied square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Square {
        self.squares[row * 3 + col]
    }

    /// Places `mark` at (`row`, `col`) if that square is empty.
    ///
    /// Returns `true` and mutates the square on success; returns `false`
    /// and leaves the grid unchanged if the square is already occupied.
    pub fn place_mark(&mut self, mark: Mark, row: usize, col: usize) -> bool {
        let idx = row * 3 + col;
        if self.squares[idx] != Square::Empty {
            return false;
        }
        self.squares[idx] = Square::Occupied(mark);
        true
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Overwrites every square with `Empty`. Idempotent.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the three rows for display, without indices or rules.
    ///
    /// Pure projection; the console layer adds headers and separators.
    pub fn render(&self) -> [String; 3] {
        std::array::from_fn(|row| {
            let cells: Vec<String> = (0..3)
                .map(|col| match self.get(row, col) {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            cells.join(" | ")
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
