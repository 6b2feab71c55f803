//! Game snapshots and their JSON form
//!
//! A [`GameSnapshot`] is everything needed to continue a game elsewhere: the
//! 64 squares, the side to move, castling eligibility and the en passant
//! opportunity. [`Game`] serializes through it, so `serde_json::to_string(&game)`
//! and [`Game::to_json`] produce the same text.
//!
//! ## Format
//!
//! ```json
//! {
//!   "board": [[{"piece_type": "ROOK", "color": "WHITE"}, null, ...], ...],
//!   "side_to_move": "WHITE",
//!   "castling": { "white_king_has_moved": false, ... },
//!   "en_passant": null
//! }
//! ```
//!
//! `board[0]` is rank 1 and `board[r][0]` is the a-file. Empty squares are
//! explicit `null`s. Enum values use upper-case names.
//!
//! When reading, `castling` and `en_passant` may be omitted. Missing castling
//! rights are derived from the home squares the way
//! [`Game::set_board`] does; a missing en passant field means none is open.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{CastlingRights, Game};
use crate::board::Board;
use crate::constants::pawn_home_rank;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Color, Piece, PieceType, Position};

/// Serializable picture of a game at one moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    #[serde(default)]
    pub castling: Option<CastlingRights>,
    #[serde(default)]
    pub en_passant: Option<Position>,
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        GameSnapshot {
            board: game.board,
            side_to_move: game.side_to_move,
            castling: Some(game.castling),
            en_passant: game.en_passant,
        }
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = ChessEngineError;

    /// Rebuild a game, rejecting positions no game could reach by these rules
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidSnapshot`] if a side has more than one king,
    /// the side that just moved is left in check, or the en passant square
    /// does not hold a pawn of the side that just moved standing where a
    /// double step lands.
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        for color in [Color::White, Color::Black] {
            let king = Piece::new(color, PieceType::King);
            let kings = snapshot.board.pieces().filter(|&(_, p)| p == king).count();
            if kings > 1 {
                return Err(ChessEngineError::invalid_snapshot(format!(
                    "{color:?} has {kings} kings"
                )));
            }
        }

        if let Some(square) = snapshot.en_passant {
            let mover = snapshot.side_to_move.opponent();
            let landing_rank = pawn_home_rank(mover) + 2 * mover.forward();
            let holds_pawn =
                snapshot.board.get_piece(square) == Some(Piece::new(mover, PieceType::Pawn));
            if !square.is_valid() || square.row != landing_rank || !holds_pawn {
                return Err(ChessEngineError::invalid_snapshot(format!(
                    "en passant square {square} does not hold a {mover:?} pawn that just double-stepped"
                )));
            }
        }

        let mut game = Game::with_board(snapshot.board);
        game.side_to_move = snapshot.side_to_move;
        if let Some(castling) = snapshot.castling {
            game.castling = castling;
        }
        game.en_passant = snapshot.en_passant;

        let waiting = game.side_to_move.opponent();
        if game.is_in_check(waiting) {
            return Err(ChessEngineError::invalid_snapshot(format!(
                "{waiting:?} is in check but it is not their move"
            )));
        }
        Ok(game)
    }
}

impl Game {
    /// Snapshot of the current state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self.clone())
    }

    /// Rebuild a game from a snapshot, validating it first
    pub fn from_snapshot(snapshot: GameSnapshot) -> ChessEngineResult<Self> {
        Game::try_from(snapshot)
    }

    /// Compact JSON text of the current state
    pub fn to_json(&self) -> ChessEngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON text of the current state
    pub fn to_json_pretty(&self) -> ChessEngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a game from JSON text
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::Serialization`] for text that is not a snapshot,
    /// [`ChessEngineError::InvalidSnapshot`] for a snapshot that fails
    /// validation.
    pub fn from_json(text: &str) -> ChessEngineResult<Self> {
        let snapshot: GameSnapshot = serde_json::from_str(text)?;
        let game = Game::from_snapshot(snapshot)?;
        debug!(side_to_move = ?game.side_to_move, "game restored from snapshot");
        Ok(game)
    }
}
