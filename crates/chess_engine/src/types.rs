//! # Chess Engine Core Types - Value Types Shared by Every Module
//!
//! ## Overview
//!
//! This module defines the small immutable values the rest of the engine is
//! built from:
//!
//! - [`Color`] - the two sides, `White` moving up the board and `Black` down
//! - [`PieceType`] - the six kinds of chessmen
//! - [`Piece`] - a `(piece_type, color)` pair with no identity of its own
//! - [`Position`] - a `(row, col)` coordinate, both axes `1..=8`
//! - [`Move`] - start, end, and an optional promotion choice
//!
//! All of them are `Copy`, compare and hash by value, and serialize with the
//! upper-case names used on the wire (`"WHITE"`, `"KING"`).
//!
//! ## Coordinates
//!
//! Rows are ranks and columns are files, both counted from 1. `(1, 1)` is a1
//! (White's queen-side rook corner) and `(8, 8)` is h8. Coordinates are
//! stored as `i8` so direction deltas can be added without casting, which
//! also means a `Position` can hold an off-board value. The engine never
//! produces one itself; callers feeding external input must go through
//! [`Position::is_valid`] (or [`Board::is_valid_position`](crate::board::Board::is_valid_position)).
//!
//! ## Move Equality
//!
//! Two moves with the same start and end but different promotion choices are
//! different moves. A pawn reaching the back rank therefore shows up as four
//! distinct entries in a legal-move list.

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// Side of a chessman or player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step (+1 for White, -1 for Black)
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Kind of chessman
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Lower-case letter used in coordinate notation and board diagrams
    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    /// Inverse of [`PieceType::letter`], case-insensitive
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'r' => Some(PieceType::Rook),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

/// A chessman: type plus color, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(color: Color, piece_type: PieceType) -> Self {
        Piece { piece_type, color }
    }

    /// Diagram symbol: upper case for White, lower case for Black
    pub fn symbol(self) -> char {
        let letter = self.piece_type.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    /// Same color, different type (used for promotion)
    pub fn promoted_to(self, piece_type: PieceType) -> Self {
        Piece::new(self.color, piece_type)
    }
}

/// Board coordinate: `row` is the rank, `col` the file, both `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// True if both coordinates lie on the 8×8 board
    #[inline]
    pub fn is_valid(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }

    /// Position shifted by a `(row, col)` delta; may land off the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// Iterate all 64 squares, rank 1 first, file a first within a rank
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

/// A move from `start` to `end`, carrying the promotion choice when a pawn
/// reaches the far rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    #[serde(default)]
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    pub fn with_promotion(start: Position, end: Position, promotion: PieceType) -> Self {
        Move {
            start,
            end,
            promotion: Some(promotion),
        }
    }
}
