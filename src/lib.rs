//! Interactive two-player chess session
//!
//! Click-to-select, click-to-move play on top of a [`chess_rules::RulesEngine`],
//! with a status line, undo and new game.
//!
//! - `core` - Errors, logging setup and persisted display settings
//! - `game` - [`game::GameSession`] and status derivation
//! - `input` - Parsing typed commands
//! - `rendering` - Per-square views and the text board
//! - `ui` - Terminal front end

pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
pub mod ui;
