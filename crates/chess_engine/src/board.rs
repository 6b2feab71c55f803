//! Board storage and helper functions
//!
//! Provides the 8×8 grid the game is played on:
//! - Square validation
//! - Piece placement, removal and lookup
//! - The standard opening layout
//!
//! The board knows nothing about turns or legality. It is owned by
//! [`Game`](crate::api::Game), which is the only thing that mutates it during play.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{back_rank, pawn_home_rank, BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::types::{Color, Piece, PieceType, Position};

/// 8×8 grid of optional pieces
///
/// `squares[row - 1][col - 1]` holds the piece on `(row, col)`, so the first
/// inner array is rank 1. Empty squares are `None` and serialize as an
/// explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board with no pieces on it
    pub fn empty() -> Self {
        Self::default()
    }

    /// Board in the standard opening position
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset_to_standard_layout();
        board
    }

    /// Check if a position lies on the board
    #[inline]
    pub fn is_valid_position(position: Position) -> bool {
        position.is_valid()
    }

    /// Put `piece` on `position`, replacing whatever was there
    ///
    /// Off-board positions are ignored.
    pub fn add_piece(&mut self, position: Position, piece: Piece) {
        if let Some(square) = self.square_mut(position) {
            *square = Some(piece);
        }
    }

    /// Clear `position`, returning the piece that stood there
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.square_mut(position).and_then(Option::take)
    }

    /// Piece on `position`
    ///
    /// Returns `None` both for empty squares and for off-board positions;
    /// callers that care about the difference validate first.
    #[inline]
    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        if !position.is_valid() {
            return None;
        }
        self.squares[(position.row - 1) as usize][(position.col - 1) as usize]
    }

    /// Check if `position` is on the board and empty
    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        position.is_valid() && self.get_piece(position).is_none()
    }

    /// Clear the board and set up the standard opening position
    pub fn reset_to_standard_layout(&mut self) {
        *self = Self::empty();
        for color in [Color::White, Color::Black] {
            let rank = back_rank(color);
            for (col, piece_type) in (1..=BOARD_SIZE).zip(BACK_RANK_LAYOUT) {
                self.add_piece(Position::new(rank, col), Piece::new(color, piece_type));
            }
            let pawn_rank = pawn_home_rank(color);
            for col in 1..=BOARD_SIZE {
                self.add_piece(
                    Position::new(pawn_rank, col),
                    Piece::new(color, PieceType::Pawn),
                );
            }
        }
    }

    /// All occupied squares with their pieces, rank 1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }

    /// First square holding `piece`, scanning rank 1 to rank 8
    pub fn find(&self, piece: Piece) -> Option<Position> {
        self.pieces()
            .find(|&(_, candidate)| candidate == piece)
            .map(|(pos, _)| pos)
    }

    fn square_mut(&mut self, position: Position) -> Option<&mut Option<Piece>> {
        if !position.is_valid() {
            return None;
        }
        Some(&mut self.squares[(position.row - 1) as usize][(position.col - 1) as usize])
    }
}

/// Text diagram, rank 8 on top
///
/// ```text
/// 8 r n b q k b n r
/// 7 p p p p p p p p
/// 6 . . . . . . . .
/// ...
///   a b c d e f g h
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "{row}")?;
            for col in 1..=BOARD_SIZE {
                let symbol = self
                    .get_piece(Position::new(row, col))
                    .map_or('.', Piece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();

        assert_eq!(
            board.get_piece(Position::new(1, 5)),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(
            board.get_piece(Position::new(8, 4)),
            Some(Piece::new(Color::Black, PieceType::Queen))
        );
        assert_eq!(
            board.get_piece(Position::new(7, 1)),
            Some(Piece::new(Color::Black, PieceType::Pawn))
        );
        assert_eq!(board.pieces().count(), 32);
        assert!(board.is_empty(Position::new(4, 4)));
    }

    #[test]
    fn test_invalid_positions_are_ignored() {
        let mut board = Board::empty();
        let off_board = Position::new(9, 1);

        board.add_piece(off_board, Piece::new(Color::White, PieceType::Rook));
        assert_eq!(board.get_piece(off_board), None);
        assert_eq!(board.remove_piece(Position::new(0, 0)), None);
        assert!(!Board::is_valid_position(Position::new(1, 9)));
        assert!(Board::is_valid_position(Position::new(8, 8)));
        assert!(!board.is_empty(off_board), "off-board squares are not empty squares");
    }

    #[test]
    fn test_add_and_remove() {
        let mut board = Board::empty();
        let pos = Position::new(4, 4);
        let knight = Piece::new(Color::Black, PieceType::Knight);

        board.add_piece(pos, knight);
        assert_eq!(board.find(knight), Some(pos));
        assert_eq!(board.remove_piece(pos), Some(knight));
        assert!(board.is_empty(pos));
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
