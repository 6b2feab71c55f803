//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion (one move per promotion choice)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: Pawns move one square forward onto an empty square
//!   (toward rank 8 for White, toward rank 1 for Black)
//! - **Double push**: From the home rank (rank 2 for White, rank 7 for Black),
//!   pawns can move two squares forward if both squares are empty
//! - **Captures**: Pawns capture diagonally forward, and only onto an enemy piece
//! - **Promotion**: A push or capture onto the far rank is emitted four times,
//!   once for each of queen, rook, bishop and knight
//!
//! En passant is not generated here; it needs the opponent's previous move,
//! which only [`Game`](crate::api::Game) knows.

use crate::board::Board;
use crate::constants::{pawn_home_rank, promotion_rank, PAWN_CAPTURE_COLS, PROMOTION_CHOICES};
use crate::types::{Color, Move, Position};

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The current board
/// * `from` - Square the pawn stands on
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&Board::standard(), Position::new(2, 5), Color::White, &mut moves);
/// // Moves now contains e2-e3 and e2-e4
/// ```
pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();

    // Single push, then double push through the same (empty) square
    let one_step = from.offset(forward, 0);
    if board.is_empty(one_step) {
        push_pawn_move(from, one_step, color, moves);

        let two_step = from.offset(2 * forward, 0);
        if from.row == pawn_home_rank(color) && board.is_empty(two_step) {
            moves.push(Move::new(from, two_step));
        }
    }

    // Diagonal captures only onto an enemy piece
    for d_col in PAWN_CAPTURE_COLS {
        let target = from.offset(forward, d_col);
        let is_capture = board
            .get_piece(target)
            .is_some_and(|occupant| occupant.color != color);
        if is_capture {
            push_pawn_move(from, target, color, moves);
        }
    }
}

/// Push a pawn move, fanning out into the four promotion choices when it
/// lands on the far rank
fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.row == promotion_rank(color) {
        moves.extend(
            PROMOTION_CHOICES
                .into_iter()
                .map(|choice| Move::with_promotion(from, to, choice)),
        );
    } else {
        moves.push(Move::new(from, to));
    }
}
