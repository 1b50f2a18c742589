//! Errors raised at the boundary of the rules engine.
//!
//! Rule outcomes themselves (illegal move, no move, game over) are plain
//! values; these variants cover malformed input coming from a host.

/// Errors produced while parsing host input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Coordinate text that does not name one of the 64 squares
    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    /// Malformed Forsyth-Edwards Notation
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Move text that is not `<from><to>[promotion]`
    #[error("invalid move text `{0}`")]
    InvalidMoveText(String),
}

/// Result type alias for rules-engine boundary operations
pub type Result<T> = std::result::Result<T, ChessError>;
