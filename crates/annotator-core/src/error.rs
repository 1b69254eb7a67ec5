//! Core error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotatorError {
    #[error("Invalid PGN: {0}")]
    Pgn(String),

    #[error("Illegal move '{san}' at ply {ply}")]
    IllegalMove { ply: usize, san: String },

    #[error("Move '{san}' at ply {ply} does not go from {from} to {to}")]
    SquareMismatch {
        ply: usize,
        san: String,
        from: String,
        to: String,
    },

    #[error("Invalid square: {0}")]
    InvalidSquare(String),
}

/// Failure to turn a share token back into a game.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("No share data supplied")]
    Missing,

    #[error("Game could not be encoded: {0}")]
    Encode(serde_json::Error),

    #[error("Share data could not be decompressed")]
    Decompress,

    #[error("Share data is not a valid game: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Game(#[from] AnnotatorError),
}
