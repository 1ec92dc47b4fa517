//! Rendering module - Text projection of the session
//!
//! Rendering is stateless: every frame is drawn from the session's board
//! snapshot, selected square and candidate moves.
//!
//! # Architecture
//!
//! - `board` - Per-square view data ([`SquareView`]) and the text grid
//!   ([`BoardRenderer`])
//! - `pieces` - Piece glyph tables

pub mod board;
pub mod pieces;

pub use board::{square_views, BoardRenderer, SquareView};
