//! Game replay
//!
//! Loads a game from a snapshot file (or starts a fresh one), feeds it a list
//! of coordinate-notation moves through the engine, and writes the result
//! back out as a snapshot.
//!
//! # Error Handling
//!
//! Replay stops at the first move that does not parse or that the engine
//! rejects. The game keeps every ply applied before it, so a caller can still
//! inspect or save the position reached.

use std::fs;
use std::io::Write;
use std::path::Path;

use chess_engine::{Game, GameState, Move};
use tracing::{info, warn};

use crate::error::{ReplayError, ReplayResult};

/// Outcome of a completed replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Moves applied
    pub plies: usize,
    /// Status of the side now on move
    pub status: GameState,
}

/// Load a game from a JSON snapshot, or the opening position when `path` is `None`
pub fn load_game(path: Option<&Path>) -> ReplayResult<Game> {
    let Some(path) = path else {
        return Ok(Game::new());
    };

    let text = fs::read_to_string(path)?;
    let game = Game::from_json(&text)?;
    info!(path = %path.display(), side_to_move = ?game.side_to_move(), "loaded game");
    Ok(game)
}

/// Apply `moves` in order
///
/// # Errors
///
/// [`ReplayError::Notation`] or [`ReplayError::Rejected`] for the first move
/// that cannot be applied. Plies are counted from 1.
pub fn replay<I, S>(game: &mut Game, moves: I) -> ReplayResult<ReplaySummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut plies = 0;

    for input in moves {
        let input = input.as_ref();
        let ply = plies + 1;

        let mv: Move = input.parse().map_err(|source| {
            warn!(ply, input, "unreadable move");
            ReplayError::Notation {
                ply,
                input: input.to_string(),
                source,
            }
        })?;

        let side = game.side_to_move();
        game.make_move(mv).map_err(|source| {
            warn!(ply, %mv, error = %source, "move rejected");
            ReplayError::Rejected { ply, mv, source }
        })?;

        plies = ply;
        info!(ply, side = ?side, %mv, state = ?game.game_state(game.side_to_move()), "applied");
    }

    let status = game.game_state(game.side_to_move());
    info!(plies, side_to_move = ?game.side_to_move(), ?status, "replay finished");
    Ok(ReplaySummary { plies, status })
}

/// Serialize `game` as a snapshot into `writer`
pub fn write_game<W: Write>(game: &Game, mut writer: W, pretty: bool) -> ReplayResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, game)?;
    } else {
        serde_json::to_writer(&mut writer, game)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
