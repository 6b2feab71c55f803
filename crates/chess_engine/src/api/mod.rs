//! Public API for the chess engine
//!
//! [`Game`] is the state machine collaborators talk to. Everything it does is
//! split across three files by concern, each adding an `impl Game` block.
//!
//! ## Module Organization
//!
//! - `game` - Game struct, construction, board replacement, castling rights
//! - `moves` - legal-move computation and move application
//! - `state` - check, checkmate and stalemate queries

mod game;
mod moves;
mod state;


pub use game::{CastlingRights, Game};
pub use state::GameState;
