//! Game lifecycle management
//!
//! Construction, wholesale board replacement, and the cached state that has
//! to be rebuilt whenever the board is swapped out: king squares and castling
//! rights.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::constants::{king_home, Wing};
use crate::snapshot::GameSnapshot;
use crate::types::{Color, Piece, PieceType, Position};

/// Castling eligibility: one king flag per side, one rook flag per side and wing
///
/// A flag set to `true` means that piece has moved (or was never on its home
/// square, or was captured there), which permanently removes the matching
/// castling option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_has_moved: bool,
    pub black_king_has_moved: bool,
    pub white_king_rook_has_moved: bool,
    pub white_queen_rook_has_moved: bool,
    pub black_king_rook_has_moved: bool,
    pub black_queen_rook_has_moved: bool,
}

impl CastlingRights {
    /// Rights as they would be in a fresh game: nothing has moved
    pub fn all() -> Self {
        Self::default()
    }

    /// Derive rights from piece placement alone
    ///
    /// A king or rook that is not on its home square, or a wrong piece
    /// standing there, counts as "already moved".
    pub fn from_board(board: &Board) -> Self {
        let mut rights = Self::default();
        for color in [Color::White, Color::Black] {
            if board.get_piece(king_home(color)) != Some(Piece::new(color, PieceType::King)) {
                rights.mark_king_moved(color);
            }
            for wing in Wing::BOTH {
                if board.get_piece(wing.rook_home(color)) != Some(Piece::new(color, PieceType::Rook)) {
                    rights.mark_rook_moved(color, wing);
                }
            }
        }
        rights
    }

    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_has_moved,
            Color::Black => self.black_king_has_moved,
        }
    }

    pub fn rook_moved(&self, color: Color, wing: Wing) -> bool {
        match (color, wing) {
            (Color::White, Wing::KingSide) => self.white_king_rook_has_moved,
            (Color::White, Wing::QueenSide) => self.white_queen_rook_has_moved,
            (Color::Black, Wing::KingSide) => self.black_king_rook_has_moved,
            (Color::Black, Wing::QueenSide) => self.black_queen_rook_has_moved,
        }
    }

    /// Whether `color` may still castle toward `wing`, as far as history goes
    pub fn can_castle(&self, color: Color, wing: Wing) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, wing)
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_has_moved = true,
            Color::Black => self.black_king_has_moved = true,
        }
    }

    pub fn mark_rook_moved(&mut self, color: Color, wing: Wing) {
        match (color, wing) {
            (Color::White, Wing::KingSide) => self.white_king_rook_has_moved = true,
            (Color::White, Wing::QueenSide) => self.white_queen_rook_has_moved = true,
            (Color::Black, Wing::KingSide) => self.black_king_rook_has_moved = true,
            (Color::Black, Wing::QueenSide) => self.black_queen_rook_has_moved = true,
        }
    }
}

/// Central game state
///
/// Owns the board and everything derived from history that the board alone
/// cannot tell: whose turn it is, which castling options survive, and
/// whether an en passant capture is available on this ply. King squares are
/// cached so check detection does not have to search for them.
///
/// A `Game` is not internally synchronized. Callers that share one between
/// tasks must serialize access to it (one writer per game).
///
/// Serializes as a [`GameSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameSnapshot", try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Option<Position>,
    pub(crate) black_king: Option<Position>,
    pub(crate) castling: CastlingRights,
    /// Square of the pawn that double-stepped on the previous ply
    pub(crate) en_passant: Option<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a new game in the standard opening position, White to move
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    /// Create a game with an empty board, White to move
    ///
    /// The caller populates it through [`Game::set_board`].
    pub fn empty() -> Self {
        Game {
            board: Board::empty(),
            side_to_move: Color::White,
            white_king: None,
            black_king: None,
            castling: CastlingRights::from_board(&Board::empty()),
            en_passant: None,
        }
    }

    /// Create a game from an arbitrary board, White to move
    pub fn with_board(board: Board) -> Self {
        let mut game = Self::empty();
        game.set_board(board);
        game
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hand the move to `color`
    ///
    /// Any pending en passant opportunity belonged to the previous turn order
    /// and is dropped.
    pub fn set_side_to_move(&mut self, color: Color) {
        if color != self.side_to_move {
            self.en_passant = None;
        }
        self.side_to_move = color;
    }

    /// Cached king square of `color`, `None` if that side has no king
    pub fn king_position(&self, color: Color) -> Option<Position> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Current castling eligibility flags
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square of the pawn that may be captured en passant on this ply
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    /// Replace the whole board
    ///
    /// Rescans all 64 squares for the kings, derives castling rights from the
    /// home squares (see [`CastlingRights::from_board`]) and clears any en
    /// passant opportunity. The side to move is kept.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.white_king = board.find(Piece::new(Color::White, PieceType::King));
        self.black_king = board.find(Piece::new(Color::Black, PieceType::King));
        self.castling = CastlingRights::from_board(&board);
        self.en_passant = None;

        debug!(
            white_king = ?self.white_king,
            black_king = ?self.black_king,
            castling = ?self.castling,
            "board replaced"
        );
    }

    pub(crate) fn set_king_position(&mut self, color: Color, position: Option<Position>) {
        match color {
            Color::White => self.white_king = position,
            Color::Black => self.black_king = position,
        }
    }
}
