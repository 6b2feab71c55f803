//! Error types for the replay tool
//!
//! Wraps file and encoding failures plus the engine's own errors, keeping the
//! ply number and move text of a failed replay step.

use chess_engine::{ChessEngineError, Move};
use thiserror::Error;

/// Errors that can occur while replaying a game
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Snapshot file I/O error
    #[error("Replay I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be written
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot could not be read into a game
    #[error("Snapshot error: {0}")]
    Engine(#[from] ChessEngineError),

    /// Move text is not coordinate notation
    #[error("Ply {ply}: cannot parse {input:?}")]
    Notation {
        ply: usize,
        input: String,
        #[source]
        source: ChessEngineError,
    },

    /// The engine refused the move
    #[error("Ply {ply}: {source}")]
    Rejected {
        ply: usize,
        mv: Move,
        #[source]
        source: ChessEngineError,
    },
}

/// Result type alias for replay operations
pub type ReplayResult<T> = Result<T, ReplayError>;
