//! Knight move generation
//!
//! Handles knight-specific move generation. Knights move in an L-shape pattern:
//! 2 squares in one direction, then 1 square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::can_land_on;
use crate::board::Board;
use crate::constants::KNIGHT_DIRS;
use crate::types::{Color, Move, Position};

/// Generate knight moves from a given square
///
/// Each jump in [`KNIGHT_DIRS`] is tried once; jumps off the board or onto a
/// friendly piece are dropped.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&board, Position::new(1, 2), Color::White, &mut moves);
/// // Moves now contains all valid knight moves from b1
/// ```
pub fn generate_knight_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_DIRS {
        let to = from.offset(d_row, d_col);
        if can_land_on(board, to, color) {
            moves.push(Move::new(from, to));
        }
    }
}
