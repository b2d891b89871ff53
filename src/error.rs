//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Mark;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is the automated side's turn ({automated:?} to move)")]
    NotHumanTurn { automated: Mark },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("player '{player}' chose illegal position {position}: {reason}")]
    IllegalMove {
        player: String,
        position: usize,
        reason: String,
    },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    InvalidMark { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
