//! Bishop move generation
//!
//! Handles bishop-specific move generation. Bishops are sliding pieces that
//! move diagonally until blocked by another piece or the board edge.
//!
//! ## Bishop Movement Rules
//!
//! - Bishops move diagonally (any number of squares)
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::{Color, Move, Position};

/// Generate bishop moves from a given square
///
/// Delegates to the common sliding piece logic with the four diagonals.
pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}
