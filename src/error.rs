//! Error types for the game core.

use thiserror::Error;

/// Errors raised by board operations, strategy lookup, and the game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("illegal move: ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("illegal move: ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("unsupported strategy '{0}' (expected DFS, BFS or UCS)")]
    UnsupportedStrategy(String),

    #[error("unknown policy '{0}' (expected random, DFS, BFS or UCS)")]
    UnknownPolicy(String),

    #[error("invalid player '{0}' (expected X or O)")]
    InvalidPlayer(String),

    #[error("board string must have 9 cells, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid cell character '{character}' in '{context}'")]
    InvalidCell { character: char, context: String },

    #[error("game already over")]
    GameOver,
}

/// Convenience Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
