//! Game status queries
//!
//! Check, checkmate and stalemate, each for an explicitly named side. The
//! queries never change the game.

use serde::{Deserialize, Serialize};

use crate::move_gen::is_square_attacked;
use crate::types::Color;

use super::Game;

/// Status of one side, as a client would show it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameState {
    /// Not in check, has a legal move
    Playing,
    /// In check, has a legal move
    Check,
    /// In check, no legal move
    Checkmate,
    /// Not in check, no legal move
    Stalemate,
}

impl GameState {
    /// Whether the game is over for this side
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

impl Game {
    /// Whether the king of `color` is attacked by any enemy piece
    ///
    /// A side without a king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_position(color)
            .is_some_and(|king| is_square_attacked(&self.board, king, color.opponent()))
    }

    /// In check and no legal move
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Not in check and no legal move
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Combined status of `color`
    pub fn game_state(&self, color: Color) -> GameState {
        match (self.is_in_check(color), self.has_any_valid_move(color)) {
            (false, true) => GameState::Playing,
            (true, true) => GameState::Check,
            (true, false) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
        }
    }
}
