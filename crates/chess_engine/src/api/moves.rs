//! Move validation and execution
//!
//! Legal-move computation and move application.
//!
//! ## Legality Filter
//!
//! Candidates come from the pseudo-legal generators. Each one is tried on a
//! scratch copy of the game with [`make`], the mover's king is tested for
//! check, and [`unmake`] puts the scratch copy back before the next
//! candidate. The live game is never touched, so computing legal moves only
//! needs `&self`.
//!
//! Castling and en passant are appended after filtering; both go through the
//! same trial before they are accepted.
//!
//! ## Castling Safety
//!
//! Castling toward a wing requires:
//! - king on its home square, king and that rook never moved, rook present
//! - every square between king and rook empty
//! - the king not currently in check
//! - the king's one-square step toward the rook already among the legal
//!   moves (the square it crosses is neither occupied nor attacked)
//! - the two-square destination passing the trial check test

use tracing::{debug, trace};

use crate::constants::{king_home, Wing};
use crate::error::{ChessEngineError, ChessEngineResult, InvalidMoveReason};
use crate::make_unmake::{make, unmake, MoveKind, MovePlan};
use crate::move_gen::piece_moves;
use crate::types::{Color, Move, Piece, PieceType, Position};

use super::Game;

impl Game {
    /// Legal moves for the piece on `position`
    ///
    /// Returns `None` if the square is empty (or off the board). The piece
    /// does not need to belong to the side to move; its legal moves are
    /// computed as if it did.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let game = Game::new();
    /// let moves = game.valid_moves(Position::new(2, 5)).unwrap();
    /// // e2-e3 and e2-e4
    /// assert_eq!(moves.len(), 2);
    /// ```
    pub fn valid_moves(&self, position: Position) -> Option<Vec<Move>> {
        let piece = self.board.get_piece(position)?;
        let mut scratch = self.clone();

        // Kings are never captured, even from a position where one is left hanging
        let mut legal: Vec<Move> = piece_moves(&self.board, position)
            .into_iter()
            .filter(|mv| !self.holds_king(mv.end))
            .filter(|&mv| scratch.leaves_king_safe(mv))
            .collect();

        match piece.piece_type {
            PieceType::King => {
                let castles = scratch.castling_moves(position, piece.color, &legal);
                legal.extend(castles);
            }
            PieceType::Pawn => {
                if let Some(capture) = scratch.en_passant_move(position, piece.color) {
                    legal.push(capture);
                }
            }
            _ => {}
        }

        Some(legal)
    }

    /// Legal moves for every piece of `color`
    pub fn all_valid_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|&(_, piece)| piece.color == color)
            .filter_map(|(position, _)| self.valid_moves(position))
            .flatten()
            .collect()
    }

    /// Whether any piece of `color` has at least one legal move
    pub fn has_any_valid_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|&(_, piece)| piece.color == color)
            .any(|(position, _)| {
                self.valid_moves(position)
                    .is_some_and(|moves| !moves.is_empty())
            })
    }

    /// Make a move
    ///
    /// The move must start on a piece of the side to move and be one of that
    /// piece's [`valid_moves`](Game::valid_moves), promotion choice included.
    /// On success the board is updated (rook relocated when castling, the
    /// passed pawn removed for en passant, the pawn replaced on promotion),
    /// castling rights and the en passant opportunity are recomputed, and the
    /// turn passes to the other side.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidMove`] if the move is off the board, starts
    /// on an empty square or an opponent's piece, or is not legal. The game
    /// is unchanged in every error case.
    pub fn make_move(&mut self, mv: Move) -> ChessEngineResult<()> {
        let plan = self.validate(mv).inspect_err(|err| {
            debug!(%mv, %err, "move rejected");
        })?;

        let undo = make(self, &plan);
        let captured = undo.captured.map(|(_, piece)| piece);
        self.update_castling_rights(&plan, captured);
        self.en_passant = match plan.kind {
            MoveKind::PawnDoubleStep => Some(mv.end),
            _ => None,
        };
        self.side_to_move = self.side_to_move.opponent();

        debug!(
            %mv,
            kind = ?plan.kind,
            captured = ?captured,
            next = ?self.side_to_move,
            "move made"
        );
        Ok(())
    }

    /// Resolve every reason `mv` could be refused, without mutating anything
    fn validate(&self, mv: Move) -> ChessEngineResult<MovePlan> {
        let reject = |reason| Err(ChessEngineError::invalid_move(mv, reason));

        if !mv.start.is_valid() || !mv.end.is_valid() {
            return reject(InvalidMoveReason::OutOfBounds);
        }
        let Some(piece) = self.board.get_piece(mv.start) else {
            return reject(InvalidMoveReason::NoPieceAtStart);
        };
        if piece.color != self.side_to_move {
            return reject(InvalidMoveReason::WrongTurn);
        }
        let is_legal = self
            .valid_moves(mv.start)
            .is_some_and(|moves| moves.contains(&mv));
        if !is_legal {
            return reject(InvalidMoveReason::IllegalMove);
        }

        match MovePlan::new(&self.board, mv, self.en_passant) {
            Some(plan) => Ok(plan),
            None => reject(InvalidMoveReason::NoPieceAtStart),
        }
    }

    /// Clear castling flags touched by a committed move
    fn update_castling_rights(&mut self, plan: &MovePlan, captured: Option<Piece>) {
        let color = plan.mover.color;
        match plan.mover.piece_type {
            PieceType::King => self.castling.mark_king_moved(color),
            PieceType::Rook => {
                if let Some(wing) = Wing::from_rook_home(plan.mv.start, color) {
                    self.castling.mark_rook_moved(color, wing);
                }
            }
            _ => {}
        }

        // A rook taken on its corner can no longer castle
        if let (Some(square), Some(piece)) = (plan.capture_square, captured) {
            if piece.piece_type == PieceType::Rook {
                if let Some(wing) = Wing::from_rook_home(square, piece.color) {
                    self.castling.mark_rook_moved(piece.color, wing);
                }
            }
        }
    }

    fn holds_king(&self, square: Position) -> bool {
        self.board
            .get_piece(square)
            .is_some_and(|piece| piece.piece_type == PieceType::King)
    }

    /// Try `mv` and report whether the mover's king is safe afterwards
    ///
    /// Leaves `self` exactly as it found it.
    fn leaves_king_safe(&mut self, mv: Move) -> bool {
        let Some(plan) = MovePlan::new(&self.board, mv, self.en_passant) else {
            return false;
        };
        let undo = make(self, &plan);
        let safe = !self.is_in_check(plan.mover.color);
        unmake(self, undo);

        trace!(%mv, safe, "legality trial");
        safe
    }

    /// Castling moves available to the king of `color` on `from`
    ///
    /// `legal` is the already-filtered list of ordinary king moves.
    fn castling_moves(&mut self, from: Position, color: Color, legal: &[Move]) -> Vec<Move> {
        let mut castles = Vec::new();
        if from != king_home(color) || self.castling.king_moved(color) || self.is_in_check(color) {
            return castles;
        }

        for wing in Wing::BOTH {
            if self.castling.rook_moved(color, wing) {
                continue;
            }
            let rook_home = wing.rook_home(color);
            if self.board.get_piece(rook_home) != Some(Piece::new(color, PieceType::Rook)) {
                continue;
            }

            let path_clear = (1..)
                .map(|step| from.offset(0, step * wing.direction()))
                .take_while(|&square| square != rook_home)
                .all(|square| self.board.is_empty(square));
            if !path_clear {
                continue;
            }

            let crossing = Move::new(from, from.offset(0, wing.direction()));
            if !legal.contains(&crossing) {
                continue;
            }

            let castle = Move::new(from, wing.king_target(color));
            if self.leaves_king_safe(castle) {
                castles.push(castle);
            }
        }

        castles
    }

    /// En passant capture for the pawn of `color` on `from`, if one is open
    fn en_passant_move(&mut self, from: Position, color: Color) -> Option<Move> {
        let victim = self.en_passant?;
        if victim.row != from.row || (victim.col - from.col).abs() != 1 {
            return None;
        }
        if self.board.get_piece(victim) != Some(Piece::new(color.opponent(), PieceType::Pawn)) {
            return None;
        }

        let target = Position::new(from.row + color.forward(), victim.col);
        if !self.board.is_empty(target) {
            return None;
        }

        let capture = Move::new(from, target);
        self.leaves_king_safe(capture).then_some(capture)
    }
}
