//! # Chess Engine - Rules, Legality and Game State
//!
//! ## Overview
//!
//! A standard chess rules engine for two local or remote players. It keeps an
//! 8×8 board, knows how every piece moves, filters out moves that would leave
//! the mover's king in check, applies moves (castling, en passant and
//! promotion included), and reports check, checkmate and stalemate.
//!
//! There is no search or evaluation here. Clients (console, GUI, network
//! backend) drive a [`Game`] and render what it reports.
//!
//! ## Module Organization
//!
//! - `types` - colors, piece types, pieces, positions, moves
//! - `constants` - direction vectors, home ranks, castling squares
//! - `board` - the 8×8 grid
//! - `move_gen` - pseudo-legal move generation and attack detection
//! - `make_unmake` - reversible move application used by the legality filter
//! - `api` - [`Game`]: legal moves, move execution, status queries
//! - `notation` - `"e2e4"` style parsing and printing
//! - `snapshot` - JSON save/restore
//! - `error` - [`ChessEngineError`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_engine::{Color, Game, GameState};
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.make_move(mv.parse()?)?;
//! }
//! assert_eq!(game.game_state(Color::White), GameState::Checkmate);
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod notation;
pub mod snapshot;
pub mod types;

mod make_unmake;

pub use api::{CastlingRights, Game, GameState};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult, InvalidMoveReason};
pub use snapshot::GameSnapshot;
pub use types::{Color, Move, Piece, PieceType, Position};
