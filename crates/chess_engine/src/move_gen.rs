//! Pseudo-legal move generation
//!
//! This module produces, for the piece on a given square, every move its
//! movement pattern allows on the current board. It does **not** check
//! whether the mover's own king is left in check, and it never produces
//! castling or en passant: both depend on history the board alone does not
//! carry, so [`Game`](crate::api::Game) layers them on top.
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double steps from the home rank, diagonal captures, promotion fan-out
//! - `knight` / `king` - single hops along a fixed vector table
//! - `sliding` - shared ray walk for `bishop`, `rook` and `queen`
//! - `attack` - "is this square hit by that side" built on the generators above

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

#[cfg(test)]
mod tests;

use crate::board::Board;
use crate::types::{Color, Move, Piece, PieceType, Position};

pub use attack::is_square_attacked;

/// Generate all pseudo-legal moves for the piece on `position`
///
/// Returns an empty list for an empty (or off-board) square. The list never
/// contains duplicates.
///
/// # Examples
///
/// ```rust,ignore
/// let board = Board::standard();
/// let moves = piece_moves(&board, Position::new(1, 2));
/// // b1 knight: a3 and c3
/// assert_eq!(moves.len(), 2);
/// ```
pub fn piece_moves(board: &Board, position: Position) -> Vec<Move> {
    let mut moves = Vec::new();
    if let Some(piece) = board.get_piece(position) {
        generate_piece_moves(board, position, piece, &mut moves);
    }
    moves
}

/// Append the pseudo-legal moves of `piece` standing on `from` to `moves`
pub fn generate_piece_moves(board: &Board, from: Position, piece: Piece, moves: &mut Vec<Move>) {
    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(board, from, piece.color, moves),
        PieceType::Knight => knight::generate_knight_moves(board, from, piece.color, moves),
        PieceType::Bishop => bishop::generate_bishop_moves(board, from, piece.color, moves),
        PieceType::Rook => rook::generate_rook_moves(board, from, piece.color, moves),
        PieceType::Queen => queen::generate_queen_moves(board, from, piece.color, moves),
        PieceType::King => king::generate_king_moves(board, from, piece.color, moves),
    }
}

/// Generate all pseudo-legal moves for every piece of `color`
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    for (from, piece) in board.pieces() {
        if piece.color == color {
            generate_piece_moves(board, from, piece, &mut moves);
        }
    }

    moves
}

/// Check whether `to` may be entered by a piece of `color`: on the board and
/// either empty or held by the opponent
#[inline]
pub(crate) fn can_land_on(board: &Board, to: Position, color: Color) -> bool {
    to.is_valid()
        && board
            .get_piece(to)
            .map_or(true, |occupant| occupant.color != color)
}
