//! Test suite for pseudo-legal move generation
//!
//! Covers the movement pattern of every piece type on hand-built boards.
//! Nothing here knows about check; that lives in the `api` tests.
//!
//! # Test Organization
//!
//! - `test_pawn_*` - pushes, double steps, captures, promotion fan-out
//! - `test_knight_*` - jumps over pieces, board edges
//! - `test_sliding_*` - bishop/rook/queen rays and blocking
//! - `test_king_*` - single steps
//! - `test_attack_*` - square attack detection

use super::*;
use crate::constants::PROMOTION_CHOICES;

/// Build a board from `(piece_type, color, (row, col))` entries
fn board_with(pieces: &[(PieceType, Color, (i8, i8))]) -> Board {
    let mut board = Board::empty();
    for &(piece_type, color, (row, col)) in pieces {
        board.add_piece(Position::new(row, col), Piece::new(color, piece_type));
    }
    board
}

fn targets(moves: &[Move]) -> Vec<Position> {
    let mut ends: Vec<Position> = moves.iter().map(|mv| mv.end).collect();
    ends.sort();
    ends.dedup();
    ends
}

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

// ============================================================================
// Pawn Tests
// ============================================================================

#[test]
fn test_pawn_single_and_double_push_from_home() {
    //! A pawn on its home rank may step one or two squares forward
    let board = board_with(&[
        (PieceType::Pawn, Color::White, (2, 4)),
        (PieceType::Pawn, Color::Black, (7, 4)),
    ]);

    assert_eq!(targets(&piece_moves(&board, pos(2, 4))), vec![pos(3, 4), pos(4, 4)]);
    assert_eq!(targets(&piece_moves(&board, pos(7, 4))), vec![pos(5, 4), pos(6, 4)]);
}

#[test]
fn test_pawn_double_push_needs_clear_path() {
    //! Blocking the first square removes both pushes; blocking the second
    //! square removes only the double step
    let blocked_near = board_with(&[
        (PieceType::Pawn, Color::White, (2, 1)),
        (PieceType::Knight, Color::Black, (3, 1)),
    ]);
    assert!(piece_moves(&blocked_near, pos(2, 1)).is_empty());

    let blocked_far = board_with(&[
        (PieceType::Pawn, Color::White, (2, 1)),
        (PieceType::Knight, Color::White, (4, 1)),
    ]);
    assert_eq!(targets(&piece_moves(&blocked_far, pos(2, 1))), vec![pos(3, 1)]);
}

#[test]
fn test_pawn_no_double_push_off_home_rank() {
    let board = board_with(&[(PieceType::Pawn, Color::White, (3, 3))]);
    assert_eq!(targets(&piece_moves(&board, pos(3, 3))), vec![pos(4, 3)]);
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    //! Diagonal squares need an enemy; a piece straight ahead blocks and is
    //! never captured
    let board = board_with(&[
        (PieceType::Pawn, Color::White, (4, 4)),
        (PieceType::Rook, Color::Black, (5, 5)),
        (PieceType::Rook, Color::White, (5, 3)),
        (PieceType::Rook, Color::Black, (5, 4)),
    ]);

    assert_eq!(targets(&piece_moves(&board, pos(4, 4))), vec![pos(5, 5)]);
}

#[test]
fn test_pawn_promotion_fans_out() {
    //! Reaching the far rank yields one move per promotion choice, for pushes
    //! and captures alike
    let board = board_with(&[
        (PieceType::Pawn, Color::White, (7, 2)),
        (PieceType::Bishop, Color::Black, (8, 3)),
    ]);

    let moves = piece_moves(&board, pos(7, 2));
    assert_eq!(moves.len(), 8);
    for end in [pos(8, 2), pos(8, 3)] {
        for choice in PROMOTION_CHOICES {
            assert!(
                moves.contains(&Move::with_promotion(pos(7, 2), end, choice)),
                "missing promotion to {choice:?} on {end}"
            );
        }
    }
    assert!(moves.iter().all(|mv| mv.promotion.is_some()));
}

#[test]
fn test_pawn_black_promotes_on_rank_one() {
    let board = board_with(&[(PieceType::Pawn, Color::Black, (2, 8))]);
    let moves = piece_moves(&board, pos(2, 8));

    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|mv| mv.end == pos(1, 8)));
}

// ============================================================================
// Knight Tests
// ============================================================================

#[test]
fn test_knight_center_has_eight_jumps() {
    let board = board_with(&[(PieceType::Knight, Color::White, (4, 4))]);
    assert_eq!(piece_moves(&board, pos(4, 4)).len(), 8);
}

#[test]
fn test_knight_corner_and_jumping() {
    //! From a1 only b3 and c2 exist, and surrounding pieces do not block
    let board = board_with(&[
        (PieceType::Knight, Color::White, (1, 1)),
        (PieceType::Pawn, Color::White, (2, 1)),
        (PieceType::Pawn, Color::White, (2, 2)),
        (PieceType::Pawn, Color::White, (1, 2)),
        (PieceType::Pawn, Color::White, (3, 2)),
        (PieceType::Pawn, Color::Black, (2, 3)),
    ]);

    assert_eq!(targets(&piece_moves(&board, pos(1, 1))), vec![pos(2, 3)]);
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_sliding_rook_stops_at_blockers() {
    //! A ray stops before a friendly piece and on an enemy piece
    let board = board_with(&[
        (PieceType::Rook, Color::White, (1, 1)),
        (PieceType::Pawn, Color::White, (4, 1)),
        (PieceType::Knight, Color::Black, (1, 3)),
    ]);

    assert_eq!(
        targets(&piece_moves(&board, pos(1, 1))),
        vec![pos(1, 2), pos(1, 3), pos(2, 1), pos(3, 1)]
    );
}

#[test]
fn test_sliding_bishop_open_board() {
    let board = board_with(&[(PieceType::Bishop, Color::Black, (4, 4))]);
    assert_eq!(piece_moves(&board, pos(4, 4)).len(), 13);
}

#[test]
fn test_sliding_queen_is_rook_plus_bishop() {
    let board = board_with(&[(PieceType::Queen, Color::White, (4, 4))]);
    assert_eq!(piece_moves(&board, pos(4, 4)).len(), 27);
}

#[test]
fn test_sliding_no_duplicates_in_standard_position() {
    let board = Board::standard();
    let moves = generate_pseudo_legal_moves(&board, Color::White);
    let mut deduped = moves.clone();
    deduped.sort_by_key(|mv| (mv.start, mv.end));
    deduped.dedup();

    assert_eq!(moves.len(), 20, "16 pawn moves and 4 knight moves");
    assert_eq!(deduped.len(), moves.len());
}

// ============================================================================
// King Tests
// ============================================================================

#[test]
fn test_king_single_steps_without_castling() {
    //! The generator never produces castling; that is layered on by `Game`
    let board = board_with(&[
        (PieceType::King, Color::White, (1, 5)),
        (PieceType::Rook, Color::White, (1, 8)),
        (PieceType::Rook, Color::White, (1, 1)),
    ]);

    let moves = piece_moves(&board, pos(1, 5));
    assert_eq!(targets(&moves), vec![pos(1, 4), pos(1, 6), pos(2, 4), pos(2, 5), pos(2, 6)]);
}

#[test]
fn test_empty_square_has_no_moves() {
    assert!(piece_moves(&Board::empty(), pos(4, 4)).is_empty());
    assert!(piece_moves(&Board::standard(), pos(9, 9)).is_empty());
}

// ============================================================================
// Attack Tests
// ============================================================================

#[test]
fn test_attack_pawn_attacks_diagonals_not_push() {
    let board = board_with(&[(PieceType::Pawn, Color::White, (2, 5))]);

    assert!(is_square_attacked(&board, pos(3, 4), Color::White));
    assert!(is_square_attacked(&board, pos(3, 6), Color::White));
    assert!(!is_square_attacked(&board, pos(3, 5), Color::White));
    assert!(!is_square_attacked(&board, pos(3, 4), Color::Black));
}

#[test]
fn test_attack_blocked_ray() {
    let board = board_with(&[
        (PieceType::Rook, Color::Black, (8, 5)),
        (PieceType::Pawn, Color::White, (4, 5)),
        (PieceType::King, Color::White, (1, 5)),
    ]);

    assert!(is_square_attacked(&board, pos(4, 5), Color::Black));
    assert!(!is_square_attacked(&board, pos(1, 5), Color::Black));
}
