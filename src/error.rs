//! Error taxonomy for rejected moves.

/// Why a move was rejected.
///
/// Every variant is recoverable: the match is left exactly as it was
/// before the call, and the caller can re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column is outside `[0, 2]`.
    #[display("coordinates ({row},{col}) are outside the board")]
    InvalidCoordinate {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target square already holds a mark.
    #[display("square ({row},{col}) is already taken")]
    CellOccupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The match has already ended; reset to play again.
    #[display("the match is already over")]
    MatchOver,
}
