//! Replay tooling on top of the `chess_engine` crate

pub mod cli;
pub mod error;
pub mod replay;

pub use error::{ReplayError, ReplayResult};
pub use replay::{load_game, replay, write_game, ReplaySummary};
