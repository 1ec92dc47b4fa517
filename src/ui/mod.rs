//! UI module - Terminal front end
//!
//! - **terminal**: [`TerminalUi`], a line-based loop that draws the board,
//!   reads commands and forwards them to a [`crate::game::GameSession`]

pub mod terminal;

pub use terminal::TerminalUi;
