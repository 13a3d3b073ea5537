//! Match controller: turn order, game-ending rules, and the
//! InProgress / Won / Drawn state machine.

use crate::board::{Board, Mark};
use crate::error::MoveError;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board filled with no winner.
    Drawn,
}

/// One playthrough of tic-tac-toe, from empty grid to a terminal state.
///
/// The controller is the only place `to_move` and `status` change. It
/// owns the [`Board`] it governs; board and turn state are constructed
/// and reset together. There is no shared or static state, so any
/// number of independent matches can coexist in-process.
///
/// Single-threaded by design: a concurrent host must serialize calls
/// to one `Match` instance itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    to_move: Mark,
    status: Status,
}

impl Match {
    /// Creates a fresh match: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: Status::InProgress,
        }
    }

    /// Attempts to place the active player's mark at (`row`, `col`).
    ///
    /// On success the move is applied, end conditions are evaluated,
    /// and the turn passes to the opponent unless the game ended.
    /// `Ok(())` means the move was accepted, whether or not it ended
    /// the game; query [`Match::is_over`] and [`Match::winner`] after.
    ///
    /// # Errors
    ///
    /// - [`MoveError::MatchOver`] if the match already ended.
    /// - [`MoveError::InvalidCoordinate`] if `row` or `col` is outside
    ///   `[0, 2]`.
    /// - [`MoveError::CellOccupied`] if the square is taken.
    ///
    /// Every error leaves the match exactly as it was before the call.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn attempt_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        if self.status != Status::InProgress {
            return Err(MoveError::MatchOver);
        }

        if !(0..=2).contains(&row) || !(0..=2).contains(&col) {
            return Err(MoveError::InvalidCoordinate { row, col });
        }

        // Coordinates are validated above; the board only checks occupancy.
        if !self.board.place_mark(self.to_move, row as usize, col as usize) {
            return Err(MoveError::CellOccupied { row, col });
        }

        if let Some(winner) = rules::check_winner(&self.board) {
            debug!(winner = %winner, "match won");
            self.status = Status::Won(winner);
        } else if rules::is_full(&self.board) {
            debug!("match drawn");
            self.status = Status::Drawn;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(())
    }

    /// Resets to the initial state: empty board, X to move, in progress.
    ///
    /// Safe to call at any time; a game in progress is abandoned. The
    /// grid is overwritten in place, not reallocated.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Mark::X;
        self.status = Status::InProgress;
        debug!("match reset");
    }

    /// The player whose turn it is. After an ending move this stays on
    /// the player who made it.
    pub fn current_player(&self) -> Mark {
        self.to_move
    }

    /// Whether the match has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// The winner, if the match was won. `None` while in progress or
    /// after a draw.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            Status::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// The match status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The governed board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
