//! Move planning, making and unmaking
//!
//! A move is first turned into a [`MovePlan`]: every square it touches, the
//! piece it captures (which for en passant is not on the destination), the
//! rook it drags along when castling, and the piece that ends up on the
//! destination after promotion. Planning reads the board and changes nothing.
//!
//! [`make`] applies the board side of a plan (pieces and king cache) and
//! returns an [`UndoInfo`]; [`unmake`] restores exactly what `make` changed.
//! The legality filter uses the pair to try a move, look for check, and put
//! everything back. Committing a real move is the same `make` followed by
//! the bookkeeping only a committed move does (castling flags, en passant,
//! turn).

use crate::api::Game;
use crate::board::Board;
use crate::constants::Wing;
use crate::types::{Move, Piece, PieceType, Position};

/// What sort of move a plan is, beyond "piece goes from start to end"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveKind {
    Normal,
    /// Pawn advancing two squares from its home rank
    PawnDoubleStep,
    /// King hopping two squares, with the rook of that wing
    Castle(Wing),
    /// Pawn capturing the pawn beside it by moving behind it
    EnPassant,
}

/// All effects of one move, computed before any of them is applied
#[derive(Debug, Clone, Copy)]
pub(crate) struct MovePlan {
    pub mv: Move,
    pub mover: Piece,
    /// Piece standing on `mv.end` afterwards (differs from `mover` on promotion)
    pub placed: Piece,
    pub kind: MoveKind,
    /// Square whose occupant is captured, if any
    pub capture_square: Option<Position>,
    /// Rook relocation `(from, to)` for castling
    pub rook_shift: Option<(Position, Position)>,
}

impl MovePlan {
    /// Plan `mv` on `board`
    ///
    /// `en_passant` is the square of the pawn that double-stepped on the
    /// previous ply. Returns `None` if there is no piece on the start square.
    /// The move is not checked for legality here.
    pub fn new(board: &Board, mv: Move, en_passant: Option<Position>) -> Option<Self> {
        let mover = board.get_piece(mv.start)?;
        let d_row = mv.end.row - mv.start.row;
        let d_col = mv.end.col - mv.start.col;

        let kind = match mover.piece_type {
            PieceType::King if d_row == 0 && d_col.abs() == 2 => {
                let wing = if d_col > 0 { Wing::KingSide } else { Wing::QueenSide };
                MoveKind::Castle(wing)
            }
            PieceType::Pawn
                if d_col != 0
                    && board.get_piece(mv.end).is_none()
                    && en_passant == Some(mv.start.offset(0, d_col)) =>
            {
                MoveKind::EnPassant
            }
            PieceType::Pawn if d_row.abs() == 2 => MoveKind::PawnDoubleStep,
            _ => MoveKind::Normal,
        };

        let capture_square = match kind {
            MoveKind::EnPassant => Some(mv.start.offset(0, d_col)),
            _ => board.get_piece(mv.end).map(|_| mv.end),
        };

        let rook_shift = match kind {
            MoveKind::Castle(wing) => Some((
                wing.rook_home(mover.color),
                wing.rook_target(mover.color),
            )),
            _ => None,
        };

        let placed = match mv.promotion {
            Some(piece_type) => mover.promoted_to(piece_type),
            None => mover,
        };

        Some(MovePlan {
            mv,
            mover,
            placed,
            kind,
            capture_square,
            rook_shift,
        })
    }
}

/// Information needed to undo a [`make`]
#[derive(Debug, Clone, Copy)]
pub(crate) struct UndoInfo {
    pub plan: MovePlan,
    /// Captured piece and the square it was taken from
    pub captured: Option<(Position, Piece)>,
    /// King cache of the mover before the move
    pub prev_king: Option<Position>,
}

/// Apply a plan's board changes and king-cache update
pub(crate) fn make(game: &mut Game, plan: &MovePlan) -> UndoInfo {
    let color = plan.mover.color;
    let prev_king = game.king_position(color);

    let captured = plan
        .capture_square
        .and_then(|square| game.board.remove_piece(square).map(|piece| (square, piece)));

    game.board.remove_piece(plan.mv.start);
    game.board.add_piece(plan.mv.end, plan.placed);

    if let Some((rook_from, rook_to)) = plan.rook_shift {
        if let Some(rook) = game.board.remove_piece(rook_from) {
            game.board.add_piece(rook_to, rook);
        }
    }

    if plan.mover.piece_type == PieceType::King {
        game.set_king_position(color, Some(plan.mv.end));
    }

    UndoInfo {
        plan: *plan,
        captured,
        prev_king,
    }
}

/// Restore the board and king cache to their state before `make`
pub(crate) fn unmake(game: &mut Game, undo: UndoInfo) {
    let plan = undo.plan;

    if let Some((rook_from, rook_to)) = plan.rook_shift {
        if let Some(rook) = game.board.remove_piece(rook_to) {
            game.board.add_piece(rook_from, rook);
        }
    }

    game.board.remove_piece(plan.mv.end);
    game.board.add_piece(plan.mv.start, plan.mover);

    if let Some((square, piece)) = undo.captured {
        game.board.add_piece(square, piece);
    }

    game.set_king_position(plan.mover.color, undo.prev_king);
}
