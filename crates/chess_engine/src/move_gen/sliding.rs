//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector:
//! 1. Step one square further along the ray
//! 2. Stop at the board edge
//! 3. Empty square: emit a move and keep going
//! 4. Opponent piece: emit the capture, then stop
//! 5. Own piece: stop without emitting

use crate::board::Board;
use crate::types::{Color, Move, Position};

/// Generate moves for a sliding piece along each of `dirs`
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Square the piece stands on
/// * `color` - Color of the moving piece
/// * `dirs` - `(row, col)` unit vectors to slide along
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(&board, Position::new(1, 1), Color::White, &ROOK_DIRS, &mut moves);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in dirs {
        let mut to = from.offset(d_row, d_col);

        while to.is_valid() {
            match board.get_piece(to) {
                None => moves.push(Move::new(from, to)),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            to = to.offset(d_row, d_col);
        }
    }
}
