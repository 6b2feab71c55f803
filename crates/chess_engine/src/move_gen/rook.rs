//! Rook move generation
//!
//! Handles rook-specific move generation. Rooks are sliding pieces that move
//! horizontally and vertically until blocked by another piece or the board edge.
//!
//! ## Rook Movement Rules
//!
//! - Rooks move along ranks and files (any number of squares)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares
//!
//! Castling moves the rook too, but that relocation is done by
//! [`Game::make_move`](crate::api::Game::make_move), not generated here.

use super::sliding;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::{Color, Move, Position};

/// Generate rook moves from a given square
///
/// Delegates to the common sliding piece logic with the four orthogonals.
pub fn generate_rook_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}
