//! Error types for chess engine
//!
//! Provides the error type for engine operations: move application, notation
//! parsing, and snapshot decoding.

use std::fmt;

use thiserror::Error;

use crate::types::Move;

/// Why a move was refused
///
/// Every reason is the same failure as far as callers are concerned (the
/// move is invalid and the game is untouched); the reason is for logs and
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Start or end square is off the board
    OutOfBounds,
    /// No piece on the start square
    NoPieceAtStart,
    /// The piece on the start square belongs to the side not on move
    WrongTurn,
    /// Not among the legal moves of that piece (includes bad promotion choices)
    IllegalMove,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfBounds => "square is off the board",
            InvalidMoveReason::NoPieceAtStart => "no piece at start square",
            InvalidMoveReason::WrongTurn => "piece does not belong to the side to move",
            InvalidMoveReason::IllegalMove => "not a legal move for that piece",
        };
        f.write_str(text)
    }
}

/// Errors that can occur in the chess engine
#[derive(Error, Debug)]
pub enum ChessEngineError {
    /// Invalid move attempted; the game state is unchanged
    #[error("Invalid move {mv}: {reason}")]
    InvalidMove {
        mv: Move,
        reason: InvalidMoveReason,
    },

    /// Text that is not a square or move in coordinate notation
    #[error("Invalid notation: {input:?}")]
    InvalidNotation { input: String },

    /// Malformed snapshot text
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Well-formed snapshot describing a game that cannot exist
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },
}

impl ChessEngineError {
    pub(crate) fn invalid_move(mv: Move, reason: InvalidMoveReason) -> Self {
        ChessEngineError::InvalidMove { mv, reason }
    }

    pub(crate) fn invalid_snapshot(message: impl Into<String>) -> Self {
        ChessEngineError::InvalidSnapshot {
            message: message.into(),
        }
    }
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
