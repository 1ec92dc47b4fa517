//! Chess rules for the session controller
//!
//! The session controller never reasons about chess legality itself. It talks
//! to a [`RulesEngine`], which answers board queries, generates legal moves,
//! applies and undoes moves, and reports check and game-end conditions.
//!
//! # Module Structure
//!
//! - `types` - Squares, colors, pieces, move descriptors and board snapshots
//! - `engine` - The [`RulesEngine`] contract
//! - `shakmaty_engine` - [`ShakmatyEngine`], the contract backed by `shakmaty`
//! - `error` - [`RulesError`] and the [`RulesResult`] alias

pub mod engine;
pub mod error;
pub mod shakmaty_engine;
pub mod types;

pub use engine::RulesEngine;
pub use error::{RulesError, RulesResult};
pub use shakmaty_engine::ShakmatyEngine;
pub use types::{
    BoardSnapshot, Color, File, MoveDescriptor, MoveFlags, Piece, PieceKind, Rank, Square,
};
