//! Queen move generation
//!
//! Handles queen-specific move generation. Queens combine the movement patterns
//! of bishops and rooks, making them the most powerful piece on the board.
//!
//! ## Queen Movement Rules
//!
//! - Queens move like bishops (diagonally) OR rooks (horizontally/vertically)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::sliding;
use crate::board::Board;
use crate::constants::QUEEN_DIRS;
use crate::types::{Color, Move, Position};

/// Generate queen moves from a given square
///
/// A single sliding pass over all eight directions, which is the union of
/// the bishop and rook patterns.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_queen_moves(&board, Position::new(1, 4), Color::White, &mut moves);
/// // Moves now contains all valid queen moves from d1
/// ```
pub fn generate_queen_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &QUEEN_DIRS, moves);
}
