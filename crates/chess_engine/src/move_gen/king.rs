//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally).
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares
//! - Cannot move to squares attacked by opponent pieces (handled during validation)
//!
//! ## Note on Castling
//!
//! Castling is not generated here because it depends on:
//! - King and rook not having moved
//! - No pieces between king and rook
//! - King not passing through an attacked square
//!
//! [`Game::valid_moves`](crate::api::Game::valid_moves) adds it after legality filtering.

use super::can_land_on;
use crate::board::Board;
use crate::constants::KING_DIRS;
use crate::types::{Color, Move, Position};

/// Generate king moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_king_moves(&board, Position::new(1, 5), Color::White, &mut moves);
/// // Moves now contains all valid king moves from e1 (excluding castling)
/// ```
pub fn generate_king_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    for (d_row, d_col) in KING_DIRS {
        let to = from.offset(d_row, d_col);
        if can_land_on(board, to, color) {
            moves.push(Move::new(from, to));
        }
    }
}
