//! Attack detection and square checking
//!
//! Provides the check test the legality filter is built on: is a square hit
//! by any piece of a given color?
//!
//! ## Algorithm
//!
//! Iterate over every piece of the attacking color and ask whether one of its
//! pseudo-legal moves ends on the target square. Castling and en passant are
//! irrelevant here (neither can capture a king), so the plain generators are
//! enough.
//!
//! Pawns are the one piece whose moves and attacks differ: a pawn push onto
//! an empty square is a move but not an attack. They are tested by geometry
//! (one row forward, one column aside) so the answer is also right for empty
//! target squares.

use super::generate_piece_moves;
use crate::board::Board;
use crate::constants::PAWN_CAPTURE_COLS;
use crate::types::{Color, PieceType, Position};

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `board` - The current board
/// * `square` - Target square to check
/// * `by_color` - Color of pieces that might attack
///
/// # Returns
///
/// `true` if the square is attacked by any piece of `by_color`
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by Black?
/// let attacked = is_square_attacked(&board, Position::new(4, 5), Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Position, by_color: Color) -> bool {
    let mut moves = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.color != by_color {
            continue;
        }

        let hits = match piece.piece_type {
            PieceType::Pawn => can_pawn_attack(from, square, by_color),
            _ => {
                moves.clear();
                generate_piece_moves(board, from, piece, &mut moves);
                moves.iter().any(|mv| mv.end == square)
            }
        };

        if hits {
            return true;
        }
    }

    false
}

/// Pawns attack the two squares diagonally in front of them
fn can_pawn_attack(from: Position, to: Position, color: Color) -> bool {
    PAWN_CAPTURE_COLS
        .into_iter()
        .any(|d_col| from.offset(color.forward(), d_col) == to)
}
