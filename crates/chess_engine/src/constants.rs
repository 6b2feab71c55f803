//! # Chess Rules Constants - Geometry, Direction Vectors & Home Squares
//!
//! ## Overview
//!
//! This module centralizes the fixed facts of the game the rest of the engine
//! consults: board size, per-piece movement vectors, the home ranks pawns
//! start from, the promotion choices, the opening back-rank layout, and the
//! squares castling reads and writes.
//!
//! ## Direction Vectors
//!
//! Movement is encoded as `(row_delta, col_delta)` pairs. Sliding pieces
//! (bishop, rook, queen) repeat a vector until they leave the board or hit a
//! piece; knights and kings apply each vector exactly once.
//!
//! - **Rook**: the four orthogonal unit steps
//! - **Bishop**: the four diagonal unit steps
//! - **Queen / King**: all eight unit steps
//! - **Knight**: the eight `(±2, ±1)` / `(±1, ±2)` jumps
//!
//! ## Castling Geometry
//!
//! Both sides castle on their back rank. The king starts on the e-file, the
//! rooks in the corners. A king-side castle moves the king two files toward
//! h and the rook from h to f; a queen-side castle moves the king two files
//! toward a and the rook from a to d.

use crate::types::{Color, PieceType, Position};

/// Squares per board axis
pub const BOARD_SIZE: i8 = 8;

pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
#[rustfmt::skip]
pub const KING_DIRS: [(i8, i8); 8] = [
    (0, 1), (0, -1), (1, 0), (1, 1),
    (1, -1), (-1, 0), (-1, 1), (-1, -1),
];
pub const QUEEN_DIRS: [(i8, i8); 8] = KING_DIRS;
#[rustfmt::skip]
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Pawn capture columns relative to the pawn
pub const PAWN_CAPTURE_COLS: [i8; 2] = [1, -1];

/// Choices offered when a pawn reaches the far rank, in generation order
pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Opening back rank, file a to file h
pub const BACK_RANK_LAYOUT: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const KING_HOME_COL: i8 = 5;
pub const KING_SIDE_ROOK_COL: i8 = 8;
pub const QUEEN_SIDE_ROOK_COL: i8 = 1;

/// Rank holding a side's king and rooks at the start
#[inline]
pub fn back_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}

/// Rank a side's pawns start on (double steps are allowed only from here)
#[inline]
pub fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

/// Rank on which a side's pawns promote
#[inline]
pub fn promotion_rank(color: Color) -> i8 {
    back_rank(color.opponent())
}

/// King's starting square
#[inline]
pub fn king_home(color: Color) -> Position {
    Position::new(back_rank(color), KING_HOME_COL)
}

/// Which rook a castle uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    /// Toward the h-file
    KingSide,
    /// Toward the a-file
    QueenSide,
}

impl Wing {
    pub const BOTH: [Wing; 2] = [Wing::KingSide, Wing::QueenSide];

    /// Column step the king takes toward this wing's rook
    #[inline]
    pub fn direction(self) -> i8 {
        match self {
            Wing::KingSide => 1,
            Wing::QueenSide => -1,
        }
    }

    /// Corner the rook starts on
    #[inline]
    pub fn rook_home(self, color: Color) -> Position {
        let col = match self {
            Wing::KingSide => KING_SIDE_ROOK_COL,
            Wing::QueenSide => QUEEN_SIDE_ROOK_COL,
        };
        Position::new(back_rank(color), col)
    }

    /// Square the king lands on after castling
    #[inline]
    pub fn king_target(self, color: Color) -> Position {
        king_home(color).offset(0, 2 * self.direction())
    }

    /// Square the rook lands on after castling (the one the king crosses)
    #[inline]
    pub fn rook_target(self, color: Color) -> Position {
        king_home(color).offset(0, self.direction())
    }

    /// Wing whose rook starts on `position`, if it is a rook corner of `color`
    pub fn from_rook_home(position: Position, color: Color) -> Option<Wing> {
        Wing::BOTH
            .into_iter()
            .find(|wing| wing.rook_home(color) == position)
    }
}
